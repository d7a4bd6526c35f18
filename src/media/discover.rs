use crate::foundation::error::{SlideshowError, SlideshowResult};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// Whether a source file is a still image or a video clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still image, held on screen for the configured image duration.
    Image,
    /// Video clip, cut down to the configured maximum.
    Video,
}

impl MediaKind {
    /// Classify a path by extension (case-insensitive); `None` for unsupported files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// One discovered source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaItem {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Image or video.
    pub kind: MediaKind,
    /// Position in file-name order.
    pub index: usize,
}

impl MediaItem {
    /// File name for progress output.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// List supported media in `dir`, sorted by file name ignoring case.
///
/// Subdirectories and files with other extensions are skipped.
pub fn discover_media(dir: &Path) -> SlideshowResult<Vec<MediaItem>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        SlideshowError::discovery(format!("read media dir '{}': {e}", dir.display()))
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            SlideshowError::discovery(format!("read media dir '{}': {e}", dir.display()))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(kind) = MediaKind::from_path(&path) else {
            tracing::debug!(path = %path.display(), "skipping unsupported file");
            continue;
        };
        found.push((entry.file_name(), path, kind));
    }

    // Case-insensitive by name first, raw bytes break ties.
    found.sort_by_cached_key(|(name, _, _)| {
        (name.to_string_lossy().to_lowercase(), name.clone())
    });

    Ok(found
        .into_iter()
        .enumerate()
        .map(|(index, (_, path, kind))| MediaItem { path, kind, index })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/media/discover.rs"]
mod tests;
