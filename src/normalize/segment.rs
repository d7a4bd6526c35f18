use crate::config::SlideshowConfig;
use crate::encode::request::{
    AudioOutput, EncodeRequest, Encoder, InputSource, OutputProfile, VideoFilter,
};
use crate::foundation::error::SlideshowResult;
use crate::media::discover::{MediaItem, MediaKind};
use crate::media::probe::Prober;
use crate::timeline::xfade::SegmentTiming;
use std::path::PathBuf;

/// A source item re-encoded to the output resolution, frame rate and pixel format.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSegment {
    /// The item this segment was made from.
    pub source: MediaItem,
    /// Normalized clip in the scratch directory.
    pub path: PathBuf,
    /// Physical length of the normalized clip.
    pub clip_duration_secs: f64,
    /// Authored on-timeline duration used for transition offsets.
    pub basis_secs: f64,
}

impl NormalizedSegment {
    /// Kind inherited from the source item.
    pub fn kind(&self) -> MediaKind {
        self.source.kind
    }

    /// Timing input for the cross-fade planner.
    pub fn timing(&self) -> SegmentTiming {
        SegmentTiming::new(self.kind(), self.basis_secs)
    }
}

/// Result of normalizing one item.
#[derive(Debug)]
pub struct NormalizeOutcome {
    /// The item attempted.
    pub item: MediaItem,
    /// The segment, or why it could not be produced.
    pub result: SlideshowResult<NormalizedSegment>,
}

/// Builds and runs the normalization encode for each item.
pub struct Normalizer<'a> {
    cfg: &'a SlideshowConfig,
    prober: &'a dyn Prober,
}

impl<'a> Normalizer<'a> {
    /// Normalizer for `cfg`, probing clip durations through `prober`.
    pub fn new(cfg: &'a SlideshowConfig, prober: &'a dyn Prober) -> Self {
        Self { cfg, prober }
    }

    /// Scratch location of the segment for `item`.
    pub fn scratch_path(&self, item: &MediaItem) -> PathBuf {
        self.cfg.scratch_dir.join(format!("clip_{}.mp4", item.index))
    }

    /// Authored on-timeline duration for a segment of `kind`.
    pub fn duration_basis(&self, kind: MediaKind) -> f64 {
        match kind {
            MediaKind::Image => self.cfg.image_duration_secs,
            MediaKind::Video => self.cfg.cut_video_duration_secs,
        }
    }

    /// Probe a clip, assuming the cut duration when probing fails.
    fn source_duration(&self, item: &MediaItem) -> f64 {
        match self.prober.duration_secs(&item.path) {
            Ok(secs) => secs,
            Err(e) => {
                let fallback = self.cfg.cut_video_duration_secs;
                tracing::warn!(
                    file = %item.display_name(),
                    error = %e,
                    "cannot read duration, assuming {fallback}s"
                );
                fallback
            }
        }
    }

    /// Encode request for `item` plus the length of the clip it produces.
    ///
    /// Images are held for image + transition seconds so the next fade has material to consume;
    /// clips are cut to the shorter of their own length and the configured maximum.
    pub fn request_for(&self, item: &MediaItem) -> (EncodeRequest, f64) {
        let cfg = self.cfg;
        let (input, duration_secs, clip_secs) = match item.kind {
            MediaKind::Image => {
                let held = cfg.image_duration_secs + cfg.transition_duration_secs;
                let input = InputSource::Still {
                    path: item.path.clone(),
                    duration_secs: held,
                };
                (input, None, held)
            }
            MediaKind::Video => {
                let cut = self.source_duration(item).min(cfg.cut_video_duration_secs);
                let input = InputSource::Clip {
                    path: item.path.clone(),
                    start_secs: 0.0,
                };
                (input, Some(cut), cut)
            }
        };

        let req = EncodeRequest {
            inputs: vec![input],
            filter: Some(VideoFilter::Simple(format!(
                "{},format={}",
                cfg.canvas.fit_and_pad_filter(),
                cfg.pixel_format
            ))),
            duration_secs,
            profile: OutputProfile {
                video_codec: cfg.video_codec.clone(),
                preset: cfg.preset.clone(),
                pixel_format: Some(cfg.pixel_format.clone()),
                fps: Some(cfg.fps),
                audio: AudioOutput::Strip,
                shortest: false,
                faststart: false,
            },
            out_path: self.scratch_path(item),
        };
        (req, clip_secs)
    }

    /// Normalize one item.
    pub fn normalize(
        &self,
        item: &MediaItem,
        encoder: &mut dyn Encoder,
    ) -> SlideshowResult<NormalizedSegment> {
        let (req, clip_duration_secs) = self.request_for(item);
        encoder.encode(&req)?;
        Ok(NormalizedSegment {
            source: item.clone(),
            path: req.out_path,
            clip_duration_secs,
            basis_secs: self.duration_basis(item.kind),
        })
    }
}

/// Normalize every item in order, one at a time; a failure is recorded and the run moves on.
pub fn normalize_all(
    items: &[MediaItem],
    normalizer: &Normalizer<'_>,
    encoder: &mut dyn Encoder,
) -> Vec<NormalizeOutcome> {
    let total = items.len();
    items
        .iter()
        .map(|item| {
            tracing::info!(
                "[{}/{total}] processing: {}",
                item.index + 1,
                item.display_name()
            );
            let result = normalizer.normalize(item, encoder);
            match &result {
                Ok(_) => tracing::info!("done: {}", item.display_name()),
                Err(e) => tracing::error!(
                    error = %e,
                    "error when processing {}",
                    item.display_name()
                ),
            }
            NormalizeOutcome {
                item: item.clone(),
                result,
            }
        })
        .collect()
}

/// Successful segments in their original order.
pub fn surviving_segments(outcomes: Vec<NormalizeOutcome>) -> Vec<NormalizedSegment> {
    outcomes.into_iter().filter_map(|o| o.result.ok()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/segment.rs"]
mod tests;
