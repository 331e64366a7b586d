//! Build-time diagnostics.
//!
//! A declaration that uses a type illegally is an expected condition: the
//! driver collects one `Diagnostic` per offending position and keeps going,
//! so every problem in a declaration set is reported in a single pass.

use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const ILLEGAL_PARAMETER_TYPE: u32 = 1001;
    pub const ILLEGAL_RETURN_TYPE: u32 = 1002;
    pub const MODEL_INVARIANT_VIOLATION: u32 = 2001;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const ILLEGAL_PARAMETER_TYPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::ILLEGAL_PARAMETER_TYPE,
        category: DiagnosticCategory::Error,
        message: "type '{0}' of kind {1} is not legal as parameter '{2}' of method '{3}'",
    };

    pub const ILLEGAL_RETURN_TYPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::ILLEGAL_RETURN_TYPE,
        category: DiagnosticCategory::Error,
        message: "type '{0}' of kind {1} is not legal as the return type of method '{2}'",
    };

    pub const MODEL_INVARIANT_VIOLATION: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::MODEL_INVARIANT_VIOLATION,
        category: DiagnosticCategory::Error,
        message: "internal type model inconsistency while checking method '{0}': {1}",
    };

    pub const ALL: &[DiagnosticMessage] = &[
        ILLEGAL_PARAMETER_TYPE,
        ILLEGAL_RETURN_TYPE,
        MODEL_INVARIANT_VIOLATION,
    ];
}

/// A single diagnostic attached to a declaration.
///
/// `subject` identifies the declaration the diagnostic is about, in
/// `owner#member` form (for example `com.acme.Api#send`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub subject: String,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(subject: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            subject: subject.into(),
            message_text: message.into(),
        }
    }

    /// Render a registered message template with positional arguments.
    pub fn from_message(
        subject: impl Into<String>,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            category: message.category,
            code: message.code,
            subject: subject.into(),
            message_text: format_message(message.message, args),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        };
        write!(
            f,
            "{category} PB{}: {}: {}",
            self.code, self.subject, self.message_text
        )
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    diagnostic_messages::ALL
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

/// Substitute `{N}` placeholders in one pass. Argument text is never
/// rescanned; placeholders without a matching argument are kept.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let digits = &after[..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let arg = args.get(digits.parse::<usize>().ok()?)?;
            Some((*arg, close))
        });
        match placeholder {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}
