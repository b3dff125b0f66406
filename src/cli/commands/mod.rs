pub mod nav;
pub mod pages;
pub mod probe;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read a JSON or YAML document, selected by file extension.
pub fn load_document(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    } else {
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}
