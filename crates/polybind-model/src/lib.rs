//! Type modeling for the polybind API generator.
//!
//! The driver describes the host declarations it discovered in a
//! [`DeclarationRegistry`] and hands raw type references ([`RawType`]) to a
//! [`TypeModelBuilder`]. The builder classifies every referenced declaration
//! into a [`Kind`] and produces an immutable, serializable [`TypeModel`] tree
//! that the legality checks and the emitter consume.
//!
//! - `kind`: the closed `Kind` classification and `DeclFlags`
//! - `raw` / `registry`: builder input
//! - `model`: the `TypeModel` tree
//! - `builder` / `capability`: tree construction
pub mod builder;
pub mod capability;
mod error;
pub mod kind;
pub mod model;
pub mod names;
pub mod raw;
pub mod registry;

pub use builder::TypeModelBuilder;
pub use capability::{Capability, resolve_type_argument};
pub use error::ModelError;
pub use kind::{DeclFlags, Kind, classify, classify_annotated};
pub use model::{
    ApiType, ApiTypeArgs, ClassType, EnumType, ModuleInfo, ParameterizedType, PrimitiveType,
    TypeModel, TypeParam, TypeParamOwner, TypeVariable, ValueObjectType,
};
pub use raw::{RawType, TypeVarOwner};
pub use registry::{ClassDecl, DeclarationRegistry, ModuleDescriptor, PackageDecl};

#[cfg(any(test, feature = "test-fixtures"))]
pub mod test_fixtures;

#[cfg(test)]
#[path = "../tests/kind_tests.rs"]
mod kind_tests;
#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod registry_tests;
#[cfg(test)]
#[path = "../tests/capability_tests.rs"]
mod capability_tests;
#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod builder_tests;
#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod model_tests;
