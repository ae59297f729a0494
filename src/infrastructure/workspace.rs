//! Workspace discovery and layout
//!
//! A workspace is a directory holding `.assistant/config.toml`. The config
//! decides where the JSON stores and the CSV exports live, relative to the
//! workspace root.

use crate::domain::{EntityKind, Record};
use crate::error::{AssistError, Result};
use crate::infrastructure::{Config, JsonStore, Repository};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marker directory holding `config.toml`
pub const MARKER_DIR: &str = ".assistant";

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "ASSISTANT_ROOT";

fn config_file(root: &Path) -> PathBuf {
    root.join(MARKER_DIR).join("config.toml")
}

fn is_workspace_root(path: &Path) -> bool {
    config_file(path).is_file()
}

/// An opened workspace: its root and the layout read from its config
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Turn `root` into a workspace with a default config.
    /// Fails if `root` already holds a marker directory.
    pub fn create(root: &Path) -> Result<Self> {
        if root.join(MARKER_DIR).exists() {
            return Err(AssistError::Config(format!(
                "Directory already initialized: {}",
                root.display()
            )));
        }

        fs::create_dir_all(root)?;
        let config = Config::new();
        config.save_to_dir(root)?;
        Ok(Workspace {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Open the workspace rooted exactly at `root`
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        debug!(root = %root.display(), data_dir = %config.data_dir, export_dir = %config.export_dir, "workspace opened");
        Ok(Workspace { root, config })
    }

    /// Open the workspace named by `ASSISTANT_ROOT`, or the nearest one
    /// above the current directory.
    pub fn discover() -> Result<Self> {
        let root = match std::env::var_os(ROOT_ENV) {
            Some(value) => {
                let root = PathBuf::from(value);
                if !is_workspace_root(&root) {
                    return Err(AssistError::Config(format!(
                        "{} points to '{}', which has no {}/config.toml. \
                        Run 'assistant init' there or unset {}.",
                        ROOT_ENV,
                        root.display(),
                        MARKER_DIR,
                        ROOT_ENV
                    )));
                }
                root
            }
            None => find_root(&std::env::current_dir()?)?,
        };
        Self::open(root)
    }

    /// Open the nearest workspace at or above `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        Self::open(find_root(start)?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the config and write it back to disk
    pub fn save_config(&mut self, config: Config) -> Result<()> {
        config.save_to_dir(&self.root)?;
        self.config = config;
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(&self.config.data_dir)
    }

    /// Directory receiving exports and reports
    pub fn export_dir(&self) -> PathBuf {
        self.root.join(&self.config.export_dir)
    }

    /// JSON store location for `kind`
    pub fn store_path(&self, kind: EntityKind) -> PathBuf {
        self.data_dir().join(kind.store_file_name())
    }

    /// Load the repository for `R`, creating its store on first use
    pub fn open_repository<R: Record>(&self) -> Result<Repository<R>> {
        Repository::open(JsonStore::new(self.store_path(R::KIND)))
    }
}

fn find_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|candidate| is_workspace_root(candidate))
        .map(Path::to_path_buf)
        .ok_or_else(|| AssistError::NotAssistantDirectory(start.to_path_buf()))
}
