use serde::{Deserialize, Serialize};

use super::push_filters;

/// Options for `TS.MGET`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiGetOptions {
    pub latest: bool,
    /// Include every label of each matched series in the reply
    pub with_labels: bool,
}

impl MultiGetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    pub fn with_labels(mut self, with_labels: bool) -> Self {
        self.with_labels = with_labels;
        self
    }
}

/// `[LATEST] [WITHLABELS] FILTER filter...`
///
/// Filters are passed through untouched; an empty list yields a bare
/// `FILTER` and is left for the server to reject.
pub fn mget_args<S: AsRef<str>>(options: &MultiGetOptions, filters: &[S]) -> Vec<String> {
    let mut args = Vec::with_capacity(filters.len() + 3);
    if options.latest {
        args.push("LATEST".to_string());
    }
    if options.with_labels {
        args.push("WITHLABELS".to_string());
    }
    push_filters(&mut args, filters);
    args
}
