//! Container legality rule.
//!
//! Judges `List<T>`, `Set<T>` and `Map<K, V>` usages:
//!
//! | Container | Legal when |
//! |-----------|------------|
//! | `List<T>` / `Set<T>` | `T` passes the argument rule, or is a value object, or is an enum |
//! | `Map<K, V>` | `K` is exactly `String` and `V` passes the argument rule |
//!
//! The value-object rule is always consulted with `allow_any` off. No
//! container kind satisfies any of the element rules, so nested containers
//! are rejected without a dedicated case.

use crate::checker::{Checker, LegalArgumentChecker, ValueObjectChecker};
use crate::error::CheckError;
use crate::method::MethodDecl;
use polybind_model::{Kind, TypeModel};
use tracing::trace;

#[derive(Clone, Copy, Debug, Default)]
pub struct ContainerChecker<A = LegalArgumentChecker, V = ValueObjectChecker> {
    argument: A,
    value_object: V,
}

impl ContainerChecker {
    /// Container rule over the standard argument and value-object rules.
    pub const fn standard() -> Self {
        Self {
            argument: LegalArgumentChecker,
            value_object: ValueObjectChecker,
        }
    }
}

impl<A: Checker, V: Checker> ContainerChecker<A, V> {
    pub fn new(argument: A, value_object: V) -> Self {
        Self {
            argument,
            value_object,
        }
    }

    fn check_element(
        &self,
        method: &MethodDecl,
        element: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        Ok(self.argument.check(method, element, allow_any)?
            || self.value_object.check(method, element, false)?
            || element.kind() == Kind::Enum)
    }

    fn check_map(
        &self,
        method: &MethodDecl,
        key: &TypeModel,
        value: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        if key.kind() != Kind::String {
            return Ok(false);
        }
        self.argument.check(method, value, allow_any)
    }
}

fn invariant(ty: &TypeModel, reason: &str) -> CheckError {
    CheckError::InvariantViolation {
        type_name: ty.to_string(),
        reason: reason.to_string(),
    }
}

impl<A: Checker, V: Checker> Checker for ContainerChecker<A, V> {
    fn check(
        &self,
        method: &MethodDecl,
        ty: &TypeModel,
        allow_any: bool,
    ) -> Result<bool, CheckError> {
        let kind = ty.kind();
        if !kind.is_container() {
            return Ok(false);
        }
        let Some(parameterized) = ty.as_parameterized() else {
            return Err(invariant(ty, "container type is not parameterized"));
        };

        let legal = match kind {
            Kind::Map => {
                let (Some(key), Some(value)) = (parameterized.arg(0), parameterized.arg(1)) else {
                    return Err(invariant(ty, "map type needs key and value arguments"));
                };
                self.check_map(method, key, value, allow_any)?
            }
            _ => {
                let Some(element) = parameterized.arg(0) else {
                    return Err(invariant(ty, "collection type needs an element argument"));
                };
                self.check_element(method, element, allow_any)?
            }
        };
        trace!(method = %method, ty = %ty, allow_any, legal, "ContainerChecker");
        Ok(legal)
    }
}
