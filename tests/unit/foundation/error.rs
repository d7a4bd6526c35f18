use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlideshowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SlideshowError::discovery("x")
            .to_string()
            .contains("discovery error:")
    );
    assert!(
        SlideshowError::probe("x")
            .to_string()
            .contains("probe error:")
    );
    assert!(
        SlideshowError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        SlideshowError::tool_not_found("ffmpeg")
            .to_string()
            .contains("tool not found: ffmpeg")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlideshowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
