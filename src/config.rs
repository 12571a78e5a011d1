use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Load query options (any of the `*Options` types) from a JSON file.
/// Missing fields keep their defaults.
pub fn load_options<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let options = serde_json::from_str(&raw)?;
    tracing::debug!("Loaded query options from {}", path.display());
    Ok(options)
}
