use sqrtsum_core::errors::{ErrorInfo, SqrtSumError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", "-1")
        .with_context("path", "sum.yaml")
}

#[test]
fn input_error_surface() {
    let err = SqrtSumError::Input(sample_info("negative-bound", "bound below zero"));
    assert_eq!(err.info().code, "negative-bound");
    assert!(err.info().context.contains_key("n"));
}

#[test]
fn config_error_surface() {
    let err = SqrtSumError::Config(sample_info("config-parse", "bad yaml").with_hint("fix it"));
    assert_eq!(err.info().code, "config-parse");
    assert_eq!(err.info().hint.as_deref(), Some("fix it"));
}

#[test]
fn display_lists_context_in_key_order() {
    let err = SqrtSumError::Serde(sample_info("json-read", "truncated"));
    assert_eq!(
        err.to_string(),
        "serde error: truncated (code: json-read) | context: [n=-1, path=sum.yaml]"
    );
}

#[test]
fn errors_round_trip_json() {
    let err = SqrtSumError::Config(sample_info("config-read", "missing"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Config\""));
    let decoded: SqrtSumError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
