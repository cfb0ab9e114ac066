use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RetouchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RetouchError::flatten("x")
            .to_string()
            .contains("flatten error:")
    );
    assert!(RetouchError::render("x").to_string().contains("render error:"));
    assert!(
        RetouchError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn session_errors_have_distinct_messages() {
    let msgs = [
        SessionError::Malformed("eof".into()).to_string(),
        SessionError::MissingFields.to_string(),
        SessionError::DimensionMismatch {
            session: (100, 50),
            current: (120, 50),
        }
        .to_string(),
        SessionError::UnknownOperation("warp".into()).to_string(),
    ];
    for (i, a) in msgs.iter().enumerate() {
        for b in &msgs[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(msgs[2].contains("100x50"));
    assert!(msgs[3].contains("\"warp\""));
}

#[test]
fn nested_errors_convert_with_prefix() {
    let err: RetouchError = IngestError::TooLarge { size: 11, max: 10 }.into();
    assert!(err.to_string().starts_with("ingest error:"));
    let err: RetouchError = SessionError::MissingFields.into();
    assert!(err.to_string().starts_with("session error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RetouchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
