//! Chained `xfade` graph for an ordered list of normalized segments.
//!
//! Each segment contributes a *duration basis*: the time it was authored to occupy on the
//! timeline (the configured image duration, or the configured cut duration for clips). The
//! physical clip on disk may be longer; image clips carry one extra transition length of padding
//! that the following fade consumes. Offsets are accumulated from the basis only.
//!
//! Step `i` blends the running composite of segments `0..i` with segment `i`. It is emitted at the
//! accumulator value *before* that accumulator is advanced by `basis(i - 1) - transition`, so the
//! first fade always starts at 0.

use crate::foundation::error::{SlideshowError, SlideshowResult};
use crate::media::discover::MediaKind;
use std::fmt;

/// Label of the graph's final video output (without brackets).
pub const VIDEO_OUT_LABEL: &str = "video_out";

/// Timing input for one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentTiming {
    /// Source kind of the segment.
    pub kind: MediaKind,
    /// Authored on-timeline duration used for offset arithmetic.
    pub basis_secs: f64,
}

impl SegmentTiming {
    /// Timing for a segment of `kind` with the given basis.
    pub fn new(kind: MediaKind, basis_secs: f64) -> Self {
        Self { kind, basis_secs }
    }
}

/// One cross-fade into segment `into_segment`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionPlan {
    /// Index of the segment faded in (>= 1).
    pub into_segment: usize,
    /// Timeline position at which the fade starts.
    pub offset_secs: f64,
    /// Fade length.
    pub duration_secs: f64,
}

/// Options shared by every step of the chain.
#[derive(Clone, Copy, Debug)]
pub struct XfadeOptions<'a> {
    /// `xfade` transition name.
    pub transition: &'a str,
    /// Length of every fade.
    pub duration_secs: f64,
    /// Pixel format forced on the final output.
    pub pixel_format: &'a str,
}

/// One binary `xfade` step.
#[derive(Clone, Debug, PartialEq)]
pub struct XfadeStep {
    /// Running composite (or segment 0's raw stream for the first step).
    pub from_label: String,
    /// Raw stream of the segment faded in.
    pub into_label: String,
    /// Intermediate output label.
    pub out_label: String,
    /// Timing of this step.
    pub plan: TransitionPlan,
}

/// A complete cross-fade chain.
#[derive(Clone, Debug, PartialEq)]
pub struct XfadeGraph {
    /// Steps in chain order; empty for a single segment.
    pub steps: Vec<XfadeStep>,
    /// `filter_complex` description.
    pub description: String,
    /// Output label the description binds (without brackets).
    pub output_label: String,
}

impl XfadeGraph {
    /// Output label in `-map` syntax, e.g. `[video_out]`.
    pub fn output_selector(&self) -> String {
        format!("[{}]", self.output_label)
    }

    /// Timing of every step, in chain order.
    pub fn transitions(&self) -> Vec<TransitionPlan> {
        self.steps.iter().map(|s| s.plan).collect()
    }
}

impl fmt::Display for XfadeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

fn input_label(i: usize) -> String {
    format!("[{i}:v]")
}

/// Per-step fade timing, in chain order (`N - 1` entries).
pub fn plan_transitions(segments: &[SegmentTiming], transition_secs: f64) -> Vec<TransitionPlan> {
    segments
        .windows(2)
        .enumerate()
        .scan(0.0, |offset, (i, pair)| {
            let plan = TransitionPlan {
                into_segment: i + 1,
                offset_secs: *offset,
                duration_secs: transition_secs,
            };
            *offset += pair[0].basis_secs - transition_secs;
            Some(plan)
        })
        .collect()
}

/// Cumulative timeline offsets `offset[1..N]`.
///
/// `offset[i] = offset[i - 1] + basis(i - 1) - transition`, seeded with 0. These are the
/// accumulator values *after* each step; [`plan_transitions`] reports the values the steps start at.
pub fn timeline_offsets(segments: &[SegmentTiming], transition_secs: f64) -> Vec<f64> {
    let Some((_, leading)) = segments.split_last() else {
        return Vec::new();
    };
    leading
        .iter()
        .scan(0.0, |acc, seg| {
            *acc += seg.basis_secs - transition_secs;
            Some(*acc)
        })
        .collect()
}

/// Build the chained cross-fade graph for `segments`.
///
/// Inputs are referenced as `[i:v]` in segment order. Negative or stalled offsets are not
/// rejected here; callers validate the basis against the transition length up front.
pub fn build_xfade_graph(
    segments: &[SegmentTiming],
    opts: &XfadeOptions<'_>,
) -> SlideshowResult<XfadeGraph> {
    if segments.is_empty() {
        return Err(SlideshowError::validation(
            "cannot build a cross-fade graph without segments",
        ));
    }

    let (steps, last_label) = plan_transitions(segments, opts.duration_secs)
        .into_iter()
        .fold(
            (Vec::with_capacity(segments.len() - 1), input_label(0)),
            |(mut steps, from_label), plan| {
                let out_label = format!("[v{}]", plan.into_segment);
                steps.push(XfadeStep {
                    from_label,
                    into_label: input_label(plan.into_segment),
                    out_label: out_label.clone(),
                    plan,
                });
                (steps, out_label)
            },
        );

    let mut parts: Vec<String> = steps
        .iter()
        .map(|s| {
            format!(
                "{}{}xfade=transition={}:duration={}:offset={}{}",
                s.from_label,
                s.into_label,
                opts.transition,
                s.plan.duration_secs,
                s.plan.offset_secs,
                s.out_label
            )
        })
        .collect();
    parts.push(format!(
        "{last_label}format={}[{VIDEO_OUT_LABEL}]",
        opts.pixel_format
    ));

    Ok(XfadeGraph {
        steps,
        description: parts.join(";"),
        output_label: VIDEO_OUT_LABEL.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/xfade.rs"]
mod tests;
