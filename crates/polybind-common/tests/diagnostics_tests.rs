use super::*;
use crate::diagnostics::get_message_template;

#[test]
fn test_format_message_positional_args() {
    let text = format_message("{0} then {1} then {0}", &["a", "b"]);
    assert_eq!(text, "a then b then a");
}

#[test]
fn test_format_message_missing_args_left_in_place() {
    let text = format_message("{0} and {1}", &["only"]);
    assert_eq!(text, "only and {1}");
}

#[test]
fn test_format_message_does_not_rescan_arguments() {
    let text = format_message("{0} / {1}", &["{1}", "x"]);
    assert_eq!(text, "{1} / x");
}

#[test]
fn test_format_message_keeps_non_placeholder_braces() {
    let text = format_message("{a} {} {0", &["z"]);
    assert_eq!(text, "{a} {} {0");
}

#[test]
fn test_from_message_uses_template_code_and_category() {
    let diag = Diagnostic::from_message(
        "com.acme.Api#send",
        &diagnostic_messages::ILLEGAL_RETURN_TYPE,
        &["java.util.List<java.util.List<java.lang.String>>", "LIST", "send"],
    );

    assert_eq!(diag.code, diagnostic_codes::ILLEGAL_RETURN_TYPE);
    assert!(diag.is_error());
    assert_eq!(diag.subject, "com.acme.Api#send");
    assert_eq!(
        diag.message_text,
        "type 'java.util.List<java.util.List<java.lang.String>>' of kind LIST is not legal as the return type of method 'send'"
    );
}

#[test]
fn test_get_message_template_lookup() {
    assert_eq!(
        get_message_template(diagnostic_codes::ILLEGAL_PARAMETER_TYPE),
        Some(diagnostic_messages::ILLEGAL_PARAMETER_TYPE.message)
    );
    assert_eq!(get_message_template(42), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error("com.acme.Api#close", "boom", 2001);
    assert_eq!(diag.to_string(), "error PB2001: com.acme.Api#close: boom");
}

#[test]
fn test_diagnostic_serializes_camel_case() {
    let diag = Diagnostic::error("com.acme.Api#close", "boom", 2001);
    let json = serde_json::to_value(&diag).expect("serializable");

    assert_eq!(json["category"], "error");
    assert_eq!(json["code"], 2001);
    assert_eq!(json["messageText"], "boom");
}
