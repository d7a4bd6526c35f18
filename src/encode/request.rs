use crate::foundation::core::Fps;
use crate::foundation::error::SlideshowResult;
use std::path::{Path, PathBuf};

/// One input of an encode.
#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
    /// Still image repeated for `duration_secs`.
    Still {
        /// Image path.
        path: PathBuf,
        /// How long the image is held.
        duration_secs: f64,
    },
    /// Video read starting at `start_secs`.
    Clip {
        /// Clip path.
        path: PathBuf,
        /// Seek position.
        start_secs: f64,
    },
    /// Audio repeated until the output ends.
    LoopedAudio {
        /// Audio path.
        path: PathBuf,
    },
    /// Input used as-is.
    Stream {
        /// Media path.
        path: PathBuf,
    },
}

impl InputSource {
    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Still { path, .. }
            | Self::Clip { path, .. }
            | Self::LoopedAudio { path }
            | Self::Stream { path } => path,
        }
    }
}

/// Filtering applied between inputs and output.
#[derive(Clone, Debug, PartialEq)]
pub enum VideoFilter {
    /// Single-input video filter chain.
    Simple(String),
    /// Multi-input graph plus the stream selectors mapped to the output, in order.
    Complex {
        /// Graph description.
        graph: String,
        /// Output stream selectors (`[video_out]`, `3:a`, ...).
        maps: Vec<String>,
    },
}

/// Audio treatment of the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioOutput {
    /// Drop all audio.
    Strip,
    /// Encode audio with `codec` at `bitrate`.
    Encode {
        /// Audio encoder name.
        codec: String,
        /// Bitrate in encoder syntax.
        bitrate: String,
    },
}

/// Output encoding options.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputProfile {
    /// Video encoder name.
    pub video_codec: String,
    /// Encoder preset.
    pub preset: String,
    /// Forced output pixel format.
    pub pixel_format: Option<String>,
    /// Forced output frame rate.
    pub fps: Option<Fps>,
    /// Audio treatment.
    pub audio: AudioOutput,
    /// Stop at the end of the shortest mapped stream.
    pub shortest: bool,
    /// Move the index to the front of the file.
    pub faststart: bool,
}

/// A complete request for one external encode.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeRequest {
    /// Inputs in index order.
    pub inputs: Vec<InputSource>,
    /// Optional filtering.
    pub filter: Option<VideoFilter>,
    /// Output duration limit.
    pub duration_secs: Option<f64>,
    /// Encoding options.
    pub profile: OutputProfile,
    /// Destination file, overwritten if present.
    pub out_path: PathBuf,
}

/// Executes [`EncodeRequest`]s.
pub trait Encoder {
    /// Run one encode to completion.
    fn encode(&mut self, req: &EncodeRequest) -> SlideshowResult<()>;
}
