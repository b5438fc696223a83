//! Model catalog file.
//!
//! A JSON array listing the models offered for selection:
//!
//! ```json
//! [
//!   { "label": "llama3.2", "description": "General chat, 3B" },
//!   { "label": "qwen2.5-coder:7b", "description": "Code assistant" }
//! ]
//! ```
//!
//! The first entry is used when no model is configured anywhere else.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use switchboard_domain::ModelId;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read model catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model catalog {path} entry {index} has an empty label")]
    EmptyLabel { path: PathBuf, index: usize },
}

/// One selectable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub model: ModelId,
    pub description: String,
}

#[derive(Deserialize)]
struct RawEntry {
    label: String,
    #[serde(default)]
    description: String,
}

/// Models listed in a catalog file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
}

impl ModelCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, path)?;
        debug!(
            "Loaded {} models from {}",
            catalog.entries.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let raw: Vec<RawEntry> =
            serde_json::from_str(content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let model = ModelId::new(entry.label).map_err(|_| CatalogError::EmptyLabel {
                    path: path.to_path_buf(),
                    index,
                })?;
                Ok(CatalogEntry {
                    model,
                    description: entry.description,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_model(&self) -> Option<&ModelId> {
        self.entries.first().map(|e| &e.model)
    }

    pub fn contains(&self, model: &ModelId) -> bool {
        self.entries.iter().any(|e| &e.model == model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_entries_in_order() {
        let file = write_catalog(
            r#"[
                {"label": "llama3.2", "description": "General chat"},
                {"label": "qwen2.5-coder:7b"}
            ]"#,
        );

        let catalog = ModelCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.default_model().unwrap().as_str(), "llama3.2");
        assert_eq!(catalog.entries()[0].description, "General chat");
        assert_eq!(catalog.entries()[1].description, "");
        assert!(catalog.contains(&ModelId::new("qwen2.5-coder:7b").unwrap()));
        assert!(!catalog.contains(&ModelId::new("mistral").unwrap()));
    }

    #[test]
    fn test_empty_catalog_has_no_default() {
        let file = write_catalog("[]");
        let catalog = ModelCatalog::load(file.path()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.default_model().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelCatalog::load(dir.path().join("models.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_catalog(r#"{"label": "not an array"}"#);
        let err = ModelCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let file = write_catalog(r#"[{"label": "llama3.2"}, {"label": " "}]"#);
        let err = ModelCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyLabel { index: 1, .. }));
    }
}
