//! End-to-end run: discovery, normalization, planning, render.

use crate::config::SlideshowConfig;
use crate::encode::request::Encoder;
use crate::foundation::error::{SlideshowError, SlideshowResult};
use crate::media::discover::discover_media;
use crate::media::probe::Prober;
use crate::normalize::segment::{Normalizer, normalize_all, surviving_segments};
use crate::render::job::RenderJob;
use crate::timeline::xfade::TransitionPlan;
use std::path::PathBuf;

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Number of eligible media files found.
    pub discovered: usize,
    /// Number of segments that made it into the video.
    pub normalized: usize,
    /// Source files skipped because normalization failed.
    pub failed: Vec<PathBuf>,
    /// Cross-fades in the final graph.
    pub transitions: Vec<TransitionPlan>,
    /// The written video.
    pub output: PathBuf,
}

/// Create the media, scratch and output directories if absent.
pub fn prepare_dirs(cfg: &SlideshowConfig) -> SlideshowResult<()> {
    use anyhow::Context as _;
    for dir in [&cfg.media_dir, &cfg.scratch_dir, &cfg.output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}

/// Validate `cfg`, create its directories and require the soundtrack.
///
/// Safe to call more than once; [`run`] calls it before touching any media.
pub fn preflight(cfg: &SlideshowConfig) -> SlideshowResult<()> {
    cfg.validate()?;
    prepare_dirs(cfg)?;
    if !cfg.music_file.is_file() {
        return Err(SlideshowError::discovery(format!(
            "no music file '{}'",
            cfg.music_file.display()
        )));
    }
    Ok(())
}

/// Build the slideshow described by `cfg`.
///
/// Items are processed strictly one after another in file-name order. A failed item is logged
/// and left out; the run only aborts when the soundtrack or every input is missing, or when the
/// final render fails.
#[tracing::instrument(skip_all, fields(media_dir = %cfg.media_dir.display()))]
pub fn run(
    cfg: &SlideshowConfig,
    prober: &dyn Prober,
    encoder: &mut dyn Encoder,
) -> SlideshowResult<RunReport> {
    preflight(cfg)?;

    let items = discover_media(&cfg.media_dir)?;
    if items.is_empty() {
        return Err(SlideshowError::discovery(format!(
            "no media files found in '{}'",
            cfg.media_dir.display()
        )));
    }
    tracing::info!("total {} media", items.len());

    let normalizer = Normalizer::new(cfg, prober);
    let outcomes = normalize_all(&items, &normalizer, encoder);
    let failed: Vec<PathBuf> = outcomes
        .iter()
        .filter(|o| o.result.is_err())
        .map(|o| o.item.path.clone())
        .collect();
    let segments = surviving_segments(outcomes);
    if segments.is_empty() {
        return Err(SlideshowError::encode(
            "no media files were processed successfully",
        ));
    }

    tracing::info!(segments = segments.len(), "creating xfade filter");
    let job = RenderJob::plan(cfg, &segments)?;
    tracing::debug!(graph = %job.graph, "filter graph");

    job.execute(cfg, encoder)?;
    tracing::info!("done: {}", job.out_path.display());

    Ok(RunReport {
        discovered: items.len(),
        normalized: segments.len(),
        failed,
        transitions: job.graph.transitions(),
        output: job.out_path,
    })
}
