use serde::{Deserialize, Serialize};

use super::range::RangeOptions;
use super::{push_filters, push_timestamp};
use crate::types::{Aggregation, BucketTimestamp, GroupBy, Reducer};

/// Options for `TS.MRANGE` / `TS.MREVRANGE`
///
/// Shares every single-series option with [`RangeOptions`] and adds label
/// selection and cross-series grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiRangeOptions {
    #[serde(flatten)]
    pub range: RangeOptions,
    /// Takes precedence over `selected_labels`
    pub with_labels: bool,
    pub selected_labels: Vec<String>,
    pub group_by: Option<GroupBy>,
}

impl MultiRangeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(mut self, latest: bool) -> Self {
        self.range.latest = latest;
        self
    }

    pub fn aggregation(mut self, aggregation: Aggregation, bucket_duration: u64) -> Self {
        self.range = self.range.aggregation(aggregation, bucket_duration);
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.range.count = Some(count);
        self
    }

    pub fn align(mut self, timestamp: i64) -> Self {
        self.range.align = Some(timestamp);
        self
    }

    pub fn filter_by_ts(mut self, timestamps: impl IntoIterator<Item = i64>) -> Self {
        self.range = self.range.filter_by_ts(timestamps);
        self
    }

    pub fn filter_by_value(mut self, min: f64, max: f64) -> Self {
        self.range = self.range.filter_by_value(min, max);
        self
    }

    pub fn bucket_timestamp(mut self, mode: BucketTimestamp) -> Self {
        self.range.bucket_timestamp = Some(mode);
        self
    }

    pub fn empty(mut self, empty: bool) -> Self {
        self.range.empty = empty;
        self
    }

    pub fn with_labels(mut self, with_labels: bool) -> Self {
        self.with_labels = with_labels;
        self
    }

    /// Restrict reply labels to these names. Ignored when `with_labels` is set.
    pub fn selected_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Group series by `label` and merge each group with `reducer`
    pub fn group_by(mut self, label: impl Into<String>, reducer: Reducer) -> Self {
        self.group_by = Some(GroupBy {
            label: label.into(),
            reducer,
        });
        self
    }
}

impl From<RangeOptions> for MultiRangeOptions {
    fn from(range: RangeOptions) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }
}

/// `from to [LATEST] [FILTER_BY_VALUE min max] [FILTER_BY_TS ts...]
/// [AGGREGATION type bucket] [COUNT n] [WITHLABELS | SELECTED_LABELS label...]
/// [ALIGN ts] [BUCKETTIMESTAMP mode] [EMPTY] FILTER filter... [GROUPBY label REDUCE reducer]`
pub fn mrange_args<S: AsRef<str>>(
    from: i64,
    to: i64,
    options: &MultiRangeOptions,
    filters: &[S],
) -> Vec<String> {
    let mut args = Vec::new();
    push_timestamp(&mut args, from);
    push_timestamp(&mut args, to);
    options.range.push_head(&mut args);
    if options.with_labels {
        args.push("WITHLABELS".to_string());
    } else if !options.selected_labels.is_empty() {
        args.push("SELECTED_LABELS".to_string());
        args.extend(options.selected_labels.iter().cloned());
    }
    options.range.push_tail(&mut args);
    push_filters(&mut args, filters);
    if let Some(group) = &options.group_by {
        args.push("GROUPBY".to_string());
        args.push(group.label.clone());
        args.push("REDUCE".to_string());
        args.push(group.reducer.as_str().to_string());
    }
    args
}
