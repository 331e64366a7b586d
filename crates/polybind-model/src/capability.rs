//! Capability type-argument resolution.
//!
//! An API interface may implement well-known generic capabilities such as
//! `ReadStream<T>` or `Function<T, R>`, directly or through any number of
//! intermediate supertypes. `resolve_type_argument` finds the type bound to
//! one of a capability's type parameters by walking the supertype graph and
//! substituting type variables along the way.
//!
//! ```text
//! interface Source extends Base<String>     resolve(Source, ReadStream, 0)
//! interface Base<X> extends ReadStream<X>   => String
//! ```

use crate::names;
use crate::raw::{RawType, TypeVarOwner};
use crate::registry::DeclarationRegistry;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::trace;

/// A well-known generic capability looked up on API interfaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    ReadStream,
    WriteStream,
    Handler,
    Iterable,
    Iterator,
    Function,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::ReadStream,
        Capability::WriteStream,
        Capability::Handler,
        Capability::Iterable,
        Capability::Iterator,
        Capability::Function,
    ];

    /// Declaration name of the capability interface.
    pub const fn declaration(self) -> &'static str {
        match self {
            Capability::ReadStream => names::READ_STREAM,
            Capability::WriteStream => names::WRITE_STREAM,
            Capability::Handler => names::HANDLER,
            Capability::Iterable => names::ITERABLE,
            Capability::Iterator => names::ITERATOR,
            Capability::Function => names::FUNCTION,
        }
    }

    /// Number of type parameters the capability declares.
    pub const fn arity(self) -> usize {
        match self {
            Capability::Function => 2,
            _ => 1,
        }
    }
}

type Substitution = FxHashMap<String, RawType>;

/// Replace variables owned by `owner` with their bound arguments.
fn substitute(ty: &RawType, owner: &str, subst: &Substitution) -> RawType {
    match ty {
        RawType::TypeVariable {
            owner: TypeVarOwner::Class(var_owner),
            name,
        } if var_owner == owner => subst.get(name).cloned().unwrap_or_else(|| ty.clone()),
        RawType::Parameterized { raw, args } => RawType::Parameterized {
            raw: raw.clone(),
            args: args.iter().map(|a| substitute(a, owner, subst)).collect(),
        },
        RawType::Array(component) => RawType::Array(Box::new(substitute(component, owner, subst))),
        RawType::Wildcard { upper, lower } => RawType::Wildcard {
            upper: upper
                .as_ref()
                .map(|b| Box::new(substitute(b, owner, subst))),
            lower: lower
                .as_ref()
                .map(|b| Box::new(substitute(b, owner, subst))),
        },
        _ => ty.clone(),
    }
}

/// Type arguments of `ty` as seen from its own declaration. A raw class
/// reference binds each parameter to its own variable.
fn bound_args(registry: &DeclarationRegistry, ty: &RawType) -> Option<(String, Vec<RawType>)> {
    match ty {
        RawType::Class(name) => {
            let decl = registry.class(name)?;
            let args = decl
                .type_params
                .iter()
                .map(|p| RawType::class_var(name.clone(), p.clone()))
                .collect();
            Some((name.clone(), args))
        }
        RawType::Parameterized { raw, args } => Some((raw.clone(), args.clone())),
        _ => None,
    }
}

/// Resolve the type bound to `capability`'s `index`-th type parameter on `ty`.
///
/// Returns `None` when `ty` does not implement the capability, or the index is
/// out of range.
pub fn resolve_type_argument(
    registry: &DeclarationRegistry,
    ty: &RawType,
    capability: Capability,
    index: usize,
) -> Option<RawType> {
    let target = capability.declaration();
    let mut queue = VecDeque::from([ty.clone()]);
    let mut visited: FxHashSet<String> = FxHashSet::default();

    while let Some(current) = queue.pop_front() {
        let Some((name, args)) = bound_args(registry, &current) else {
            continue;
        };
        if !visited.insert(name.clone()) {
            continue;
        }
        if name == target {
            let resolved = args.get(index).cloned();
            trace!(
                from = %ty,
                capability = target,
                index,
                resolved = ?resolved.as_ref().map(ToString::to_string),
                "resolve_type_argument"
            );
            return resolved;
        }
        let Some(decl) = registry.class(&name) else {
            continue;
        };
        let subst: Substitution = decl
            .type_params
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();
        for supertype in &decl.supertypes {
            queue.push_back(substitute(supertype, &name, &subst));
        }
    }
    None
}
