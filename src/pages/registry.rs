use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::record::{PageRecord, RecordError};
use crate::traverse::collect_paths;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid descriptor: {0}")]
    InvalidShape(&'static str),

    #[error("Invalid page record: {0}")]
    Record(#[from] RecordError),

    #[error("Page {0} is missing a string 'path' field")]
    PageMissingPath(usize),
}

/// Startup-loaded store of page descriptors and the menu tree.
///
/// Constructed once in `main` and injected into the router as shared state;
/// there is no process-wide registry singleton. The contents are immutable
/// for the lifetime of the process.
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<PageRecord>,
    menu: Value,
}

impl PageRegistry {
    pub fn empty() -> Self {
        Self {
            pages: vec![],
            menu: Value::Array(vec![]),
        }
    }

    /// Load a descriptor file, JSON or YAML by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let document: Value = if is_yaml {
            serde_yaml::from_str(&raw).map_err(|e| RegistryError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&raw).map_err(|e| RegistryError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };

        Self::from_document(document)
    }

    /// Build a registry from an already-parsed descriptor document:
    /// `{ pages: [...], menu: [...] }`, both keys optional.
    pub fn from_document(document: Value) -> Result<Self, RegistryError> {
        let Value::Object(mut document) = document else {
            return Err(RegistryError::InvalidShape("top level must be a mapping"));
        };

        let pages = match document.remove("pages") {
            Some(value) => PageRecord::from_json_array(value)?,
            None => vec![],
        };

        // Every registered page must be routable.
        for (index, record) in pages.iter().enumerate() {
            if record.path().is_none() {
                return Err(RegistryError::PageMissingPath(index));
            }
        }

        let menu = document.remove("menu").unwrap_or_else(|| Value::Array(vec![]));
        if !menu.is_array() {
            return Err(RegistryError::InvalidShape("menu must be a sequence"));
        }

        Ok(Self { pages, menu })
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn menu(&self) -> &Value {
        &self.menu
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Flatten the configured menu tree into its route paths.
    pub fn menu_paths(&self) -> Vec<String> {
        collect_paths(&self.menu)
    }
}
