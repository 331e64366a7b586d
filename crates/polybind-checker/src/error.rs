use thiserror::Error;

/// Internal contract breach detected while checking.
///
/// An illegal type is not an error; checkers report that as `Ok(false)`.
/// This signals a model that the builder should never have produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("invariant violated for '{type_name}': {reason}")]
    InvariantViolation { type_name: String, reason: String },
}
