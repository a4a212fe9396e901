use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PerspectiveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PerspectiveError::feed("x")
            .to_string()
            .contains("feed error:")
    );
    assert!(
        PerspectiveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PerspectiveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
