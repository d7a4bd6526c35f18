use crate::config::SlideshowConfig;
use crate::encode::request::{
    AudioOutput, EncodeRequest, Encoder, InputSource, OutputProfile, VideoFilter,
};
use crate::foundation::error::{SlideshowError, SlideshowResult};
use crate::normalize::segment::NormalizedSegment;
use crate::timeline::xfade::{SegmentTiming, XfadeGraph, XfadeOptions, build_xfade_graph};
use std::path::PathBuf;

/// Everything needed for the single final encode.
#[derive(Clone, Debug)]
pub struct RenderJob {
    /// Normalized clips, one input each, in timeline order.
    pub segments: Vec<PathBuf>,
    /// Cross-fade chain over those inputs.
    pub graph: XfadeGraph,
    /// Soundtrack, looped until the video ends.
    pub music: PathBuf,
    /// Destination file, overwritten if present.
    pub out_path: PathBuf,
}

impl RenderJob {
    /// Plan the final render for `segments` under `cfg`.
    pub fn plan(cfg: &SlideshowConfig, segments: &[NormalizedSegment]) -> SlideshowResult<Self> {
        if segments.is_empty() {
            return Err(SlideshowError::validation("no segments to render"));
        }
        let timings: Vec<SegmentTiming> = segments.iter().map(NormalizedSegment::timing).collect();
        let graph = build_xfade_graph(
            &timings,
            &XfadeOptions {
                transition: &cfg.transition,
                duration_secs: cfg.transition_duration_secs,
                pixel_format: &cfg.pixel_format,
            },
        )?;
        Ok(Self {
            segments: segments.iter().map(|s| s.path.clone()).collect(),
            graph,
            music: cfg.music_file.clone(),
            out_path: cfg.output_path(),
        })
    }

    /// The encode request: segment inputs, then the looped soundtrack as the last input.
    pub fn to_request(&self, cfg: &SlideshowConfig) -> EncodeRequest {
        let mut inputs: Vec<InputSource> = self
            .segments
            .iter()
            .map(|path| InputSource::Stream { path: path.clone() })
            .collect();
        inputs.push(InputSource::LoopedAudio {
            path: self.music.clone(),
        });

        EncodeRequest {
            inputs,
            filter: Some(VideoFilter::Complex {
                graph: self.graph.description.clone(),
                maps: vec![
                    self.graph.output_selector(),
                    format!("{}:a", self.segments.len()),
                ],
            }),
            duration_secs: None,
            profile: OutputProfile {
                video_codec: cfg.video_codec.clone(),
                preset: cfg.preset.clone(),
                pixel_format: None,
                fps: None,
                audio: AudioOutput::Encode {
                    codec: cfg.audio_codec.clone(),
                    bitrate: cfg.audio_bitrate.clone(),
                },
                shortest: true,
                faststart: true,
            },
            out_path: self.out_path.clone(),
        }
    }

    /// Run the final encode.
    pub fn execute(&self, cfg: &SlideshowConfig, encoder: &mut dyn Encoder) -> SlideshowResult<()> {
        encoder.encode(&self.to_request(cfg))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/job.rs"]
mod tests;
