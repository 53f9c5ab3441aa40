use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EruptionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        EruptionError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        EruptionError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EruptionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
