//! Per-position legality, composed from the base rules.

use crate::checker::{Checker, LegalArgumentChecker, ValueObjectChecker};
use crate::container::ContainerChecker;
use crate::error::CheckError;
use crate::method::MethodDecl;
use polybind_model::{Kind, TypeModel};
use serde::Serialize;
use std::fmt;
use tracing::trace;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UsagePosition {
    Parameter,
    Return,
}

impl fmt::Display for UsagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UsagePosition::Parameter => "parameter",
            UsagePosition::Return => "return",
        })
    }
}

/// A type is legal at a position when any of these accept it:
/// the basic-argument rule, the value-object rule, an enum, a type variable,
/// or the container rule. `void` is only legal as a return type and is
/// decided before any other rule runs.
#[derive(Clone, Copy, Debug)]
pub struct UsageChecker {
    argument: LegalArgumentChecker,
    value_object: ValueObjectChecker,
    container: ContainerChecker,
}

impl Default for UsageChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageChecker {
    pub const fn new() -> Self {
        Self {
            argument: LegalArgumentChecker,
            value_object: ValueObjectChecker,
            container: ContainerChecker::standard(),
        }
    }

    pub fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        position: UsagePosition,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        if matches!(ty, TypeModel::Void) {
            return Ok(position == UsagePosition::Return);
        }
        let legal = self.argument.check(method, ty, allow_any)?
            || self.value_object.check(method, ty, false)?
            || ty.kind() == Kind::Enum
            || matches!(ty, TypeModel::TypeVariable(_))
            || self.container.check(method, ty, allow_any)?;
        trace!(method = %method, ty = %ty, %position, allow_any, legal, "UsageChecker");
        Ok(legal)
    }

    /// The rule for one position, usable wherever a `Checker` is expected.
    pub fn at(&self, position: UsagePosition) -> PositionChecker<'_> {
        PositionChecker {
            usage: self,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PositionChecker<'a> {
    usage: &'a UsageChecker,
    position: UsagePosition,
}

impl Checker for PositionChecker<'_> {
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        self.usage.check(method, ty, self.position, allow_any)
    }
}
