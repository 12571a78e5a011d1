use serde::{Deserialize, Serialize};

use super::{push_timestamp, push_value};
use crate::types::{Aggregation, BucketAggregation, BucketTimestamp, ValueRange};

/// Options for `TS.RANGE` / `TS.REVRANGE`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOptions {
    pub latest: bool,
    pub aggregation: Option<BucketAggregation>,
    pub count: Option<i64>,
    /// Reference timestamp buckets are aligned to
    pub align: Option<i64>,
    pub filter_by_ts: Vec<i64>,
    pub filter_by_value: Option<ValueRange>,
    pub bucket_timestamp: Option<BucketTimestamp>,
    /// Report empty buckets as well
    pub empty: bool,
}

impl RangeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    pub fn aggregation(mut self, aggregation: Aggregation, bucket_duration: u64) -> Self {
        self.aggregation = Some(BucketAggregation {
            aggregation,
            bucket_duration,
        });
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn align(mut self, timestamp: i64) -> Self {
        self.align = Some(timestamp);
        self
    }

    pub fn filter_by_ts(mut self, timestamps: impl IntoIterator<Item = i64>) -> Self {
        self.filter_by_ts = timestamps.into_iter().collect();
        self
    }

    /// Keep samples with `min <= value <= max`
    pub fn filter_by_value(mut self, min: f64, max: f64) -> Self {
        self.filter_by_value = Some(ValueRange { min, max });
        self
    }

    pub fn bucket_timestamp(mut self, mode: BucketTimestamp) -> Self {
        self.bucket_timestamp = Some(mode);
        self
    }

    pub fn empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }

    /// `LATEST` through `COUNT`
    pub(crate) fn push_head(&self, args: &mut Vec<String>) {
        if self.latest {
            args.push("LATEST".to_string());
        }
        if let Some(range) = self.filter_by_value {
            args.push("FILTER_BY_VALUE".to_string());
            push_value(args, range.min);
            push_value(args, range.max);
        }
        if !self.filter_by_ts.is_empty() {
            args.push("FILTER_BY_TS".to_string());
            for &ts in &self.filter_by_ts {
                push_timestamp(args, ts);
            }
        }
        if let Some(agg) = self.aggregation {
            args.push("AGGREGATION".to_string());
            args.push(agg.aggregation.as_str().to_string());
            args.push(agg.bucket_duration.to_string());
        }
        if let Some(count) = self.count {
            args.push("COUNT".to_string());
            args.push(count.to_string());
        }
    }

    /// `ALIGN` through `EMPTY`
    pub(crate) fn push_tail(&self, args: &mut Vec<String>) {
        if let Some(align) = self.align {
            args.push("ALIGN".to_string());
            push_timestamp(args, align);
        }
        if let Some(mode) = self.bucket_timestamp {
            args.push("BUCKETTIMESTAMP".to_string());
            args.push(mode.as_str().to_string());
        }
        if self.empty {
            args.push("EMPTY".to_string());
        }
    }
}

/// `key from to [LATEST] [FILTER_BY_VALUE min max] [FILTER_BY_TS ts...]
/// [AGGREGATION type bucket] [COUNT n] [ALIGN ts] [BUCKETTIMESTAMP mode] [EMPTY]`
pub fn range_args(key: &str, from: i64, to: i64, options: &RangeOptions) -> Vec<String> {
    let mut args = vec![key.to_string()];
    push_timestamp(&mut args, from);
    push_timestamp(&mut args, to);
    options.push_head(&mut args);
    options.push_tail(&mut args);
    args
}
