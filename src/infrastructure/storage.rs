//! JSON document storage

use crate::error::{AssistError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single JSON document on disk, rewritten in full on every save
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        JsonStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, materializing `default` first if the file is absent.
    ///
    /// Malformed content is returned as `MalformedStore`.
    pub fn load<T>(&self, default: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store missing, writing default");
            self.save(&default)?;
            return Ok(default);
        }

        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|source| AssistError::MalformedStore {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `document` as pretty-printed JSON
    pub fn save<T>(&self, document: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(document)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), "store saved");
        Ok(())
    }
}
