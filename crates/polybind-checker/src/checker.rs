//! The `Checker` capability and the two base rules.
//!
//! A checker decides whether a type is legal at a usage position on a method.
//! Checkers are stateless; higher-level rules hold the lower-level ones they
//! delegate to as plain fields.

use crate::error::CheckError;
use crate::method::MethodDecl;
use polybind_model::{Kind, TypeModel};
use tracing::trace;

pub trait Checker: Send + Sync {
    /// `allow_any` loosens the rule to accept otherwise unmodeled types.
    /// Each checker decides whether and how the flag applies.
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError>;
}

impl<C: Checker + ?Sized> Checker for &C {
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        (**self).check(method, ty, allow_any)
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        (**self).check(method, ty, allow_any)
    }
}

/// Basic-argument rule.
///
/// Legal: primitives, boxed primitives, strings, JSON types and API
/// interfaces. With `allow_any`, every other kind except the containers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegalArgumentChecker;

impl LegalArgumentChecker {
    pub const fn is_legal(kind: Kind, allow_any: bool) -> bool {
        if kind.is_basic() || matches!(kind, Kind::Api) {
            return true;
        }
        allow_any && !kind.is_container()
    }
}

impl Checker for LegalArgumentChecker {
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        let legal = Self::is_legal(ty.kind(), allow_any);
        trace!(method = %method, ty = %ty, allow_any, legal, "LegalArgumentChecker");
        Ok(legal)
    }
}

/// Value-object rule: legal iff the type is a value object, abstract or not.
/// `allow_any` has no effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueObjectChecker;

impl Checker for ValueObjectChecker {
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        _allow_any: bool,
    ) -> Result<bool, CheckError> {
        let legal = ty.kind() == Kind::ValueObject;
        trace!(method = %method, ty = %ty, legal, "ValueObjectChecker");
        Ok(legal)
    }
}
