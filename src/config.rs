use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SlideshowError, SlideshowResult};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Run configuration: input/output locations, segment timing and the output profile.
///
/// Every field has a default, so an empty JSON object (or no config file at all) reproduces the
/// stock layout: `./media` in, `./music.mp3` as soundtrack, `./output/slideshow.mp4` out.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Directory scanned for images and clips.
    pub media_dir: PathBuf,
    /// Scratch directory holding normalized segments.
    pub scratch_dir: PathBuf,
    /// Directory receiving the final video.
    pub output_dir: PathBuf,
    /// File name of the final video inside `output_dir`.
    pub output_file: String,
    /// Background track, looped for the length of the video.
    pub music_file: PathBuf,

    /// On-timeline duration of every image segment.
    pub image_duration_secs: f64,
    /// Upper bound for video segments; also the fallback when probing fails.
    pub cut_video_duration_secs: f64,
    /// Length of every cross-fade.
    pub transition_duration_secs: f64,
    /// ffmpeg `xfade` transition name.
    pub transition: String,

    /// Output resolution.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Pixel format for segments and the final video.
    pub pixel_format: String,
    /// Video encoder.
    pub video_codec: String,
    /// Encoder speed preset.
    pub preset: String,
    /// Audio encoder for the final mux.
    pub audio_codec: String,
    /// Audio bitrate for the final mux (ffmpeg syntax, e.g. `192k`).
    pub audio_bitrate: String,

    /// Explicit `ffmpeg` binary; resolved on `PATH` when unset.
    pub ffmpeg: Option<PathBuf>,
    /// Explicit `ffprobe` binary; resolved on `PATH` when unset.
    pub ffprobe: Option<PathBuf>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("./media"),
            scratch_dir: PathBuf::from("./tmp"),
            output_dir: PathBuf::from("./output"),
            output_file: "slideshow.mp4".to_string(),
            music_file: PathBuf::from("./music.mp3"),
            image_duration_secs: 4.0,
            cut_video_duration_secs: 5.0,
            transition_duration_secs: 1.0,
            transition: "fade".to_string(),
            canvas: Canvas::default(),
            fps: Fps::default(),
            pixel_format: "yuv420p".to_string(),
            video_codec: "libx264".to_string(),
            preset: "veryfast".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "192k".to_string(),
            ffmpeg: None,
            ffprobe: None,
        }
    }
}

impl SlideshowConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlideshowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlideshowError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SlideshowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlideshowError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Full path of the final video.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Check timing and profile values before any media is touched.
    ///
    /// Every segment's duration basis must exceed the transition length, otherwise the
    /// cross-fade offsets stall or run backwards.
    pub fn validate(&self) -> SlideshowResult<()> {
        for (name, v) in [
            ("image_duration_secs", self.image_duration_secs),
            ("cut_video_duration_secs", self.cut_video_duration_secs),
            ("transition_duration_secs", self.transition_duration_secs),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(SlideshowError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        let t = self.transition_duration_secs;
        if self.image_duration_secs <= t {
            return Err(SlideshowError::validation(format!(
                "image_duration_secs ({}) must exceed transition_duration_secs ({t})",
                self.image_duration_secs
            )));
        }
        if self.cut_video_duration_secs <= t {
            return Err(SlideshowError::validation(format!(
                "cut_video_duration_secs ({}) must exceed transition_duration_secs ({t})",
                self.cut_video_duration_secs
            )));
        }

        // Both end up inside filter graphs.
        for (name, v) in [
            ("transition", &self.transition),
            ("pixel_format", &self.pixel_format),
        ] {
            if !is_plain_name(v) {
                return Err(SlideshowError::validation(format!(
                    "{name} must be a plain filter name (got '{v}')"
                )));
            }
        }
        if self.output_file.trim().is_empty() {
            return Err(SlideshowError::validation("output_file must be non-empty"));
        }
        for (name, v) in [
            ("video_codec", &self.video_codec),
            ("preset", &self.preset),
            ("audio_codec", &self.audio_codec),
            ("audio_bitrate", &self.audio_bitrate),
        ] {
            if v.trim().is_empty() {
                return Err(SlideshowError::validation(format!("{name} must be non-empty")));
            }
        }

        self.canvas.validate()?;
        self.fps.validate()?;
        Ok(())
    }
}

fn is_plain_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
