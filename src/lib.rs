//! Slideshow builds one MP4 from a directory of images and clips, cross-fading between
//! consecutive segments over a looped soundtrack.
//!
//! - Discover media and normalize each item into a uniform segment
//! - Plan the chained `xfade` graph from each segment's duration basis
//! - Mux the chain with the soundtrack in a single final encode
//!
//! All decoding and encoding is delegated to `ffmpeg`/`ffprobe` behind the [`Encoder`] and
//! [`Prober`] traits.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Run configuration.
pub mod config;
/// Encode requests and encoders.
pub mod encode;
/// Media discovery and probing.
pub mod media;
/// Segment normalization.
pub mod normalize;
/// End-to-end orchestration.
pub mod pipeline;
/// Final render job.
pub mod render;
/// Cross-fade timeline planning.
pub mod timeline;
/// External tool discovery.
pub mod tools;

pub use crate::config::SlideshowConfig;
pub use crate::encode::ffmpeg::{DryRunEncoder, FfmpegEncoder};
pub use crate::encode::request::{
    AudioOutput, EncodeRequest, Encoder, InputSource, OutputProfile, VideoFilter,
};
pub use crate::foundation::core::{Canvas, Fps};
pub use crate::foundation::error::{SlideshowError, SlideshowResult};
pub use crate::media::discover::{MediaItem, MediaKind, discover_media};
pub use crate::media::probe::{FfprobeProber, Prober};
pub use crate::normalize::segment::{NormalizedSegment, Normalizer};
pub use crate::pipeline::{RunReport, preflight, run};
pub use crate::render::job::RenderJob;
pub use crate::timeline::xfade::{
    SegmentTiming, TransitionPlan, XfadeGraph, XfadeOptions, build_xfade_graph,
};
pub use crate::tools::locate_tool;
