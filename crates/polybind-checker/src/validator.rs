//! Signature validation.
//!
//! Runs the usage rules over every parameter and the return type of a method
//! and reports each offending position as a diagnostic. A single pass reports
//! all offences; it does not stop at the first.

use crate::config::LegalityConfig;
use crate::error::CheckError;
use crate::method::{MethodDecl, MethodSignature};
use crate::usage::{UsageChecker, UsagePosition};
use polybind_common::{Diagnostic, DiagnosticMessage, diagnostic_messages, format_message};
use polybind_model::TypeModel;
use tracing::debug;

/// Outcome of checking one position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Legal,
    Illegal { reason: String },
}

impl Verdict {
    pub fn is_legal(&self) -> bool {
        matches!(self, Verdict::Legal)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureValidator {
    config: LegalityConfig,
    usage: UsageChecker,
}

impl SignatureValidator {
    pub fn new(config: LegalityConfig) -> Self {
        Self {
            config,
            usage: UsageChecker::new(),
        }
    }

    pub fn config(&self) -> &LegalityConfig {
        &self.config
    }

    /// `Illegal` carries the same text the signature diagnostic reports.
    pub fn check_param(
        &self,
        method: &MethodDecl,
        name: &str,
        ty: &TypeModel,
    ) -> Result<Verdict, CheckError> {
        let allow_any = self.config.allow_any(method, UsagePosition::Parameter);
        if self.usage.check(method, ty, UsagePosition::Parameter, allow_any)? {
            return Ok(Verdict::Legal);
        }
        let type_name = ty.to_string();
        Ok(Verdict::Illegal {
            reason: format_message(
                diagnostic_messages::ILLEGAL_PARAMETER_TYPE.message,
                &[&type_name, ty.kind().as_str(), name, &method.name],
            ),
        })
    }

    pub fn check_return(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
    ) -> Result<Verdict, CheckError> {
        let allow_any = self.config.allow_any(method, UsagePosition::Return);
        if self.usage.check(method, ty, UsagePosition::Return, allow_any)? {
            return Ok(Verdict::Legal);
        }
        let type_name = ty.to_string();
        Ok(Verdict::Illegal {
            reason: format_message(
                diagnostic_messages::ILLEGAL_RETURN_TYPE.message,
                &[&type_name, ty.kind().as_str(), &method.name],
            ),
        })
    }

    pub fn validate(&self, signature: &MethodSignature) -> Result<Vec<Diagnostic>, CheckError> {
        let method = &signature.method;
        let subject = method.qualified_name();
        let mut diagnostics = Vec::new();

        for param in &signature.params {
            if let Verdict::Illegal { reason } = self.check_param(method, &param.name, &param.ty)? {
                diagnostics.push(offence(
                    &subject,
                    &diagnostic_messages::ILLEGAL_PARAMETER_TYPE,
                    reason,
                ));
            }
        }
        if let Verdict::Illegal { reason } = self.check_return(method, &signature.return_type)? {
            diagnostics.push(offence(
                &subject,
                &diagnostic_messages::ILLEGAL_RETURN_TYPE,
                reason,
            ));
        }

        debug!(method = %method, offences = diagnostics.len(), "validated signature");
        Ok(diagnostics)
    }

    /// Validate a batch. A model inconsistency in one signature becomes an
    /// error diagnostic for that method and the rest are still validated.
    pub fn validate_all(&self, signatures: &[MethodSignature]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for signature in signatures {
            match self.validate(signature) {
                Ok(found) => diagnostics.extend(found),
                Err(err) => {
                    debug!(method = %signature.method, error = %err, "signature check failed");
                    let reason = err.to_string();
                    diagnostics.push(Diagnostic::from_message(
                        signature.method.qualified_name(),
                        &diagnostic_messages::MODEL_INVARIANT_VIOLATION,
                        &[&signature.method.name, &reason],
                    ));
                }
            }
        }
        diagnostics
    }
}

fn offence(subject: &str, message: &DiagnosticMessage, reason: String) -> Diagnostic {
    Diagnostic {
        category: message.category,
        code: message.code,
        subject: subject.to_string(),
        message_text: reason,
    }
}
