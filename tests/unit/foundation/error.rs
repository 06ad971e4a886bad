use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WeightboxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WeightboxError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        WeightboxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WeightboxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn fails() -> WeightboxResult<()> {
        Err(anyhow::anyhow!("inner failure"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, WeightboxError::Other(_)));
    assert_eq!(err.to_string(), "inner failure");
}
