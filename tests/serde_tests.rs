//! Serialization of validation errors and report settings.

#![cfg(feature = "serde")]

use serde_json::json;
use utf8view::text::{validate_bytes_detailed, ColorChoice, ReportConfig, Utf8ErrorKind};

#[test]
fn test_error_serializes_with_snake_case_kind() {
    let err = validate_bytes_detailed(b"ok\n\xED\xA0\x80").unwrap_err();
    let value = serde_json::to_value(&err).unwrap();

    assert_eq!(
        value,
        json!({
            "offset": 3,
            "line": 2,
            "column": 1,
            "valid_up_to": 3,
            "kind": "surrogate_codepoint",
        })
    );
}

#[test]
fn test_error_kind_roundtrip() {
    let kinds = [
        Utf8ErrorKind::InvalidLeadByte,
        Utf8ErrorKind::InvalidContinuationByte,
        Utf8ErrorKind::OverlongEncoding,
        Utf8ErrorKind::SurrogateCodepoint,
        Utf8ErrorKind::OutOfRangeCodepoint,
        Utf8ErrorKind::TruncatedSequence,
    ];
    for kind in kinds {
        let text = serde_json::to_string(&kind).unwrap();
        let back: Utf8ErrorKind = serde_json::from_str(&text).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let config: ReportConfig = serde_json::from_str(r#"{"tab_width": 8}"#).unwrap();
    assert_eq!(config.tab_width, 8);
    assert_eq!(config.snippet_width, ReportConfig::default().snippet_width);
    assert_eq!(config.color, ColorChoice::Auto);
}

#[test]
fn test_config_color_names() {
    for (name, choice) in [
        ("auto", ColorChoice::Auto),
        ("always", ColorChoice::Always),
        ("never", ColorChoice::Never),
    ] {
        let config: ReportConfig =
            serde_json::from_value(json!({ "color": name })).unwrap();
        assert_eq!(config.color, choice);
    }
}

#[test]
fn test_config_rejects_unknown_color() {
    let result: Result<ReportConfig, _> = serde_json::from_value(json!({ "color": "rainbow" }));
    assert!(result.is_err());
}
