// Schema document sources for the jsonshape schema system
//
// A schema source resolves a collection name to its schema document. The
// stock implementation reads `<collection>.json` files from a directory
// configured explicitly or through the JSONSHAPE_SCHEMA_DIR environment
// variable. The validator memoizes whatever a source returns.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::internal::error::{Error, Result};

/// Environment variable naming the schema directory.
pub const SCHEMA_DIR_ENV: &str = "JSONSHAPE_SCHEMA_DIR";

/// Resolves a collection name to its schema document.
pub trait SchemaSource {
    /// Loads the schema document for a collection. Implementations report
    /// every failure as [`Error::SchemaLoadFailure`] wrapping the cause.
    fn load(&self, collection: &str) -> Result<Value>;
}

/// Schema source backed by a directory of `<collection>.json` files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a source rooted at the directory named by
    /// [`SCHEMA_DIR_ENV`].
    pub fn from_env() -> Result<Self> {
        let dir = std::env::var(SCHEMA_DIR_ENV).map_err(|_| {
            Error::InvalidInput(format!("environment variable {} is not set", SCHEMA_DIR_ENV))
        })?;
        Ok(Self::new(dir))
    }

    /// The configured schema directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists every collection that has a schema file in the directory,
    /// sorted by name. Used by batch declaration generation.
    pub fn collections(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| Error::SchemaLoadFailure {
            collection: self.root.display().to_string(),
            source: Box::new(e),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::SchemaLoadFailure {
                collection: self.root.display().to_string(),
                source: Box::new(e),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl SchemaSource for DirectorySource {
    fn load(&self, collection: &str) -> Result<Value> {
        let path = self.root.join(format!("{}.json", collection));
        debug!(collection, path = %path.display(), "loading schema document");

        let text = fs::read_to_string(&path).map_err(|e| Error::SchemaLoadFailure {
            collection: collection.to_string(),
            source: Box::new(e),
        })?;

        let document: Value =
            serde_json::from_str(&text).map_err(|e| Error::SchemaLoadFailure {
                collection: collection.to_string(),
                source: Box::new(e),
            })?;

        if !document.is_object() {
            return Err(Error::SchemaLoadFailure {
                collection: collection.to_string(),
                source: "schema document must be a JSON object".into(),
            });
        }

        Ok(document)
    }
}
