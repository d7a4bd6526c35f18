//! External tool discovery.

use crate::foundation::error::{SlideshowError, SlideshowResult};
use std::path::{Path, PathBuf};

/// Resolve a tool binary, preferring a configured path over `PATH` lookup.
pub fn locate_tool(name: &str, configured: Option<&Path>) -> SlideshowResult<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(
            tool = name,
            path = %path.display(),
            "configured tool path does not exist, falling back to PATH"
        );
    }
    which::which(name).map_err(|_| SlideshowError::tool_not_found(name))
}
