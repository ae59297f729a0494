//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::Workspace;
use std::path::Path;
use tracing::info;

/// Create `.assistant/config.toml` under `path`, creating `path` if needed.
/// Stores are created lazily on first use.
pub fn init(path: &Path) -> Result<Workspace> {
    let workspace = Workspace::create(path)?;

    info!(root = %path.display(), "workspace initialized");
    Ok(workspace)
}
