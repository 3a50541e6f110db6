use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramecastError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FramecastError::font("x").to_string().contains("font error:"));
    assert!(
        FramecastError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FramecastError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn io_mentions_path_and_cause() {
    let err = FramecastError::io(
        "/nope/frame_001.png",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.to_string();
    assert!(msg.contains("/nope/frame_001.png"));
    assert!(msg.contains("denied"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
