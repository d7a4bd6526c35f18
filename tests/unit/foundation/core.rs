use super::*;

#[test]
fn fps_display_matches_ffmpeg_rate_syntax() {
    assert_eq!(Fps::new(30, 1).unwrap().to_string(), "30");
    assert_eq!(Fps::new(30000, 1001).unwrap().to_string(), "30000/1001");
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn canvas_requires_even_non_zero_dims() {
    assert!(Canvas::default().validate().is_ok());
    assert!(
        Canvas {
            width: 0,
            height: 720
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 1281,
            height: 720
        }
        .validate()
        .is_err()
    );
}

#[test]
fn fit_and_pad_filter_letterboxes_to_canvas() {
    assert_eq!(
        Canvas::default().fit_and_pad_filter(),
        "scale=1280:720:force_original_aspect_ratio=decrease,pad=1280:720:(ow-iw)/2:(oh-ih)/2"
    );
}
