use serde::{Deserialize, Serialize};

/// Options for `TS.GET`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOptions {
    /// Report the possibly partial latest bucket of a compaction
    pub latest: bool,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }
}

/// `key [LATEST]`
pub fn get_args(key: &str, options: &GetOptions) -> Vec<String> {
    let mut args = vec![key.to_string()];
    if options.latest {
        args.push("LATEST".to_string());
    }
    args
}
