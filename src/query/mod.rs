//! Option types and argument builders for the TS query commands.
//!
//! Each builder is a pure function from an options value to the ordered
//! argument list that follows the command name on the wire. Keyword order
//! mirrors the server grammar and must not change.

pub mod get;
pub mod mget;
pub mod mrange;
pub mod range;

pub use get::{get_args, GetOptions};
pub use mget::{mget_args, MultiGetOptions};
pub use mrange::{mrange_args, MultiRangeOptions};
pub use range::{range_args, RangeOptions};

pub(crate) fn push_timestamp(args: &mut Vec<String>, ts: i64) {
    args.push(ts.to_string());
}

/// Fixed-point with six decimals, e.g. `1.000000`
pub(crate) fn push_value(args: &mut Vec<String>, value: f64) {
    args.push(format!("{:.6}", value));
}

pub(crate) fn push_filters<S: AsRef<str>>(args: &mut Vec<String>, filters: &[S]) {
    args.push("FILTER".to_string());
    args.extend(filters.iter().map(|f| f.as_ref().to_string()));
}
