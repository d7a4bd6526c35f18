use super::*;

const OPTS: XfadeOptions<'static> = XfadeOptions {
    transition: "fade",
    duration_secs: 1.0,
    pixel_format: "yuv420p",
};

fn image() -> SegmentTiming {
    SegmentTiming::new(MediaKind::Image, 4.0)
}

fn video() -> SegmentTiming {
    SegmentTiming::new(MediaKind::Video, 5.0)
}

#[test]
fn two_images_fade_once_at_zero() {
    let g = build_xfade_graph(&[image(), image()], &OPTS).unwrap();
    assert_eq!(g.steps.len(), 1);
    assert_eq!(
        g.transitions(),
        [TransitionPlan {
            into_segment: 1,
            offset_secs: 0.0,
            duration_secs: 1.0
        }]
    );
    assert_eq!(
        g.description,
        "[0:v][1:v]xfade=transition=fade:duration=1:offset=0[v1];[v1]format=yuv420p[video_out]"
    );
    assert_eq!(g.description.matches("xfade=").count(), 1);
}

#[test]
fn image_then_video_offset_uses_image_basis() {
    let segs = [image(), video()];
    assert_eq!(timeline_offsets(&segs, 1.0), [3.0]);
    assert_eq!(plan_transitions(&segs, 1.0).len(), 1);
}

#[test]
fn three_mixed_segments() {
    let segs = [image(), video(), image()];
    assert_eq!(timeline_offsets(&segs, 1.0), [3.0, 7.0]);

    let g = build_xfade_graph(&segs, &OPTS).unwrap();
    let offsets: Vec<f64> = g.transitions().iter().map(|p| p.offset_secs).collect();
    assert_eq!(offsets, [0.0, 3.0]);
    assert_eq!(
        g.description,
        "[0:v][1:v]xfade=transition=fade:duration=1:offset=0[v1];\
         [v1][2:v]xfade=transition=fade:duration=1:offset=3[v2];\
         [v2]format=yuv420p[video_out]"
    );
}

#[test]
fn single_segment_is_only_format_normalized() {
    let g = build_xfade_graph(&[video()], &OPTS).unwrap();
    assert!(g.steps.is_empty());
    assert_eq!(g.description, "[0:v]format=yuv420p[video_out]");
    assert_eq!(g.output_selector(), "[video_out]");
    assert!(timeline_offsets(&[video()], 1.0).is_empty());
}

#[test]
fn empty_input_is_rejected() {
    let err = build_xfade_graph(&[], &OPTS).unwrap_err();
    assert!(matches!(err, SlideshowError::Validation(_)));
    assert!(timeline_offsets(&[], 1.0).is_empty());
    assert!(plan_transitions(&[], 1.0).is_empty());
}

#[test]
fn offsets_strictly_increase_when_basis_exceeds_transition() {
    let bases = [1.5, 4.0, 2.25, 5.0, 1.01, 7.5, 3.0];
    let segs: Vec<SegmentTiming> = bases
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let kind = if i % 2 == 0 {
                MediaKind::Image
            } else {
                MediaKind::Video
            };
            SegmentTiming::new(kind, b)
        })
        .collect();

    let offsets = timeline_offsets(&segs, 1.0);
    assert_eq!(offsets.len(), segs.len() - 1);
    assert!(offsets.windows(2).all(|w| w[1] > w[0]));

    let plans = plan_transitions(&segs, 1.0);
    assert!(plans.windows(2).all(|w| w[1].offset_secs > w[0].offset_secs));
}

#[test]
fn offsets_follow_the_recurrence() {
    let segs = [image(), video(), video(), image(), video()];
    let t = 0.5;
    let offsets = timeline_offsets(&segs, t);
    let mut prev = 0.0;
    for (i, off) in offsets.iter().enumerate() {
        assert_eq!(*off, prev + segs[i].basis_secs - t);
        prev = *off;
    }

    // Each step starts where the previous timeline offset left off.
    let plans = plan_transitions(&segs, t);
    assert_eq!(plans[0].offset_secs, 0.0);
    for (plan, off) in plans[1..].iter().zip(&offsets) {
        assert_eq!(plan.offset_secs, *off);
    }
}

#[test]
fn chain_preserves_input_order() {
    let segs = [image(), video(), image(), video()];
    let g = build_xfade_graph(&segs, &OPTS).unwrap();
    assert_eq!(g.steps[0].from_label, "[0:v]");
    for (i, step) in g.steps.iter().enumerate() {
        assert_eq!(step.plan.into_segment, i + 1);
        assert_eq!(step.into_label, format!("[{}:v]", i + 1));
        if i > 0 {
            assert_eq!(step.from_label, g.steps[i - 1].out_label);
        }
    }
    assert!(g.description.ends_with("[v3]format=yuv420p[video_out]"));
}

#[test]
fn fractional_values_render_without_padding() {
    let opts = XfadeOptions {
        transition: "wipeleft",
        duration_secs: 0.5,
        pixel_format: "yuv420p",
    };
    let segs = [
        SegmentTiming::new(MediaKind::Image, 2.25),
        SegmentTiming::new(MediaKind::Image, 2.25),
        SegmentTiming::new(MediaKind::Image, 2.25),
    ];
    let g = build_xfade_graph(&segs, &opts).unwrap();
    assert!(
        g.description
            .contains("[v1][2:v]xfade=transition=wipeleft:duration=0.5:offset=1.75[v2]")
    );
}

#[test]
fn basis_not_exceeding_transition_stalls_without_error() {
    let segs = [
        SegmentTiming::new(MediaKind::Image, 1.0),
        SegmentTiming::new(MediaKind::Image, 0.5),
        SegmentTiming::new(MediaKind::Image, 4.0),
    ];
    assert_eq!(timeline_offsets(&segs, 1.0), [0.0, -0.5]);
    assert!(build_xfade_graph(&segs, &OPTS).is_ok());
}
