use thiserror::Error;

/// Failure to model a declared type.
///
/// Fatal for the declaration being modeled; sibling declarations are
/// unaffected since the builder holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A raw type shape the model cannot represent (wildcard, array, unknown
    /// primitive or unresolvable type variable).
    #[error("unsupported type {0}")]
    UnsupportedTypeShape(String),

    /// A referenced class was never registered.
    #[error("unknown declaration {0}")]
    UnknownDeclaration(String),

    /// The builder produced an inconsistent tree.
    #[error("type model invariant violated: {0}")]
    InvariantViolation(String),
}
