//! Writing and reading document collections as JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::documents::Collection;
use crate::error::{DataError, Result};

/// Serializes a document collection to a JSON file.
///
/// Keys are written in sorted order, so identical inputs produce identical
/// files. An existing file is replaced, never merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentEmitter {
    pretty: bool,
}

impl DocumentEmitter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn emit<D: Serialize>(&self, path: &Path, documents: &Collection<D>) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(documents)?
        } else {
            serde_json::to_string(documents)?
        };

        // Write to temp file, then rename over the previous output
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;

        tracing::info!("Wrote {} documents to {}", documents.len(), path.display());
        Ok(())
    }
}

/// Read a collection previously written by [`DocumentEmitter`].
pub fn read_documents<D: DeserializeOwned>(path: &Path) -> Result<Collection<D>> {
    let json = fs::read_to_string(path).map_err(|source| DataError::ReadDocuments {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| DataError::ParseDocuments {
        path: path.to_path_buf(),
        source,
    })
}
