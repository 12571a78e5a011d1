//! redis-timeseries - typed query builders for RedisTimeSeries
//!
//! # Example
//!
//! ```
//! use redis_timeseries::{range_args, Aggregation, RangeOptions};
//!
//! let options = RangeOptions::new()
//!     .aggregation(Aggregation::Avg, 60_000)
//!     .count(10);
//! let args = range_args("temp:1", 0, 3_600_000, &options);
//! assert_eq!(
//!     args,
//!     vec!["temp:1", "0", "3600000", "AGGREGATION", "avg", "60000", "COUNT", "10"]
//! );
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod query;
pub mod types;

pub use command::{TsCommand, TsCommands};
pub use config::load_options;
pub use error::{Result, TsError};
pub use query::{
    get_args, mget_args, mrange_args, range_args, GetOptions, MultiGetOptions, MultiRangeOptions,
    RangeOptions,
};
pub use types::{Aggregation, BucketAggregation, BucketTimestamp, GroupBy, Reducer, ValueRange};
