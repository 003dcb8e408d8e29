use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MockupError::directive("x")
            .to_string()
            .contains("directive error:")
    );
    assert!(
        MockupError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MockupError::unknown_scene("x")
            .to_string()
            .contains("unknown scene:")
    );
    assert!(MockupError::asset("x").to_string().contains("asset error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MockupError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn input_errors_are_distinguished_from_configuration_faults() {
    assert!(MockupError::directive("x").is_input_error());
    assert!(MockupError::validation("x").is_input_error());
    assert!(MockupError::unknown_scene("x").is_input_error());
    assert!(!MockupError::asset("x").is_input_error());
    assert!(!MockupError::Other(anyhow::anyhow!("io")).is_input_error());
}
