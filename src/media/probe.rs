use crate::foundation::error::{SlideshowError, SlideshowResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Duration lookup for source clips.
pub trait Prober {
    /// Playback duration of `path` in seconds.
    fn duration_secs(&self, path: &Path) -> SlideshowResult<f64>;
}

/// [`Prober`] backed by the system `ffprobe`.
#[derive(Clone, Debug)]
pub struct FfprobeProber {
    bin: PathBuf,
}

impl FfprobeProber {
    /// Use the `ffprobe` binary at `bin`.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl Prober for FfprobeProber {
    fn duration_secs(&self, path: &Path) -> SlideshowResult<f64> {
        let out = Command::new(&self.bin)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|e| SlideshowError::probe(format!("failed to run ffprobe: {e}")))?;
        if !out.status.success() {
            return Err(SlideshowError::probe(format!(
                "ffprobe failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        parse_duration(&String::from_utf8_lossy(&out.stdout))
    }
}

/// Parse ffprobe's bare `format=duration` output.
pub(crate) fn parse_duration(stdout: &str) -> SlideshowResult<f64> {
    let text = stdout.trim();
    let secs: f64 = text
        .parse()
        .map_err(|_| SlideshowError::probe(format!("unparseable duration '{text}'")))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(SlideshowError::probe(format!("invalid duration '{text}'")));
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;
