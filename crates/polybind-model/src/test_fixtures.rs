//! Shared declaration fixtures for tests across the workspace.
//!
//! Enabled for this crate's own tests and, through the `test-fixtures`
//! feature, for dependent crates' tests.

use crate::builder::TypeModelBuilder;
use crate::model::TypeModel;
use crate::names;
use crate::raw::RawType;
use crate::registry::{ClassDecl, DeclarationRegistry, PackageDecl};

pub const WIDGET: &str = "com.acme.api.Widget";
pub const SOURCE: &str = "com.acme.api.Source";
pub const PIPE: &str = "com.acme.api.Pipe";
pub const TRANSFORMER: &str = "com.acme.api.Transformer";
pub const CHAIN: &str = "com.acme.api.Chain";
pub const BASE_STREAM: &str = "com.acme.api.BaseStream";
pub const DERIVED_STREAM: &str = "com.acme.api.DerivedStream";
pub const NAMES: &str = "com.acme.api.Names";
pub const POINT: &str = "com.acme.model.Point";
pub const SHAPE: &str = "com.acme.model.Shape";
pub const COLOR: &str = "com.acme.model.Color";
pub const OPAQUE: &str = "com.acme.internal.Opaque";

/// Builtins plus a small `com.acme` API surface.
pub fn sample_registry() -> DeclarationRegistry {
    let mut registry = DeclarationRegistry::with_builtins();
    registry
        .register_package(PackageDecl::module("com.acme", "acme", "com.acme"))
        .register_package(PackageDecl::new("com.acme.api"))
        .register_package(PackageDecl::new("com.acme.model"));

    registry
        .register_class(ClassDecl::new(WIDGET).api())
        .register_class(
            ClassDecl::new(SOURCE)
                .api()
                .extends(RawType::parameterized(
                    names::READ_STREAM,
                    vec![RawType::class(names::STRING)],
                )),
        )
        .register_class(
            ClassDecl::new(PIPE)
                .api()
                .type_params(["T"])
                .extends(RawType::parameterized(
                    names::READ_STREAM,
                    vec![RawType::class_var(PIPE, "T")],
                ))
                .extends(RawType::parameterized(
                    names::WRITE_STREAM,
                    vec![RawType::class_var(PIPE, "T")],
                )),
        )
        .register_class(
            ClassDecl::new(TRANSFORMER)
                .api()
                .type_params(["T", "R"])
                .extends(RawType::parameterized(
                    names::FUNCTION,
                    vec![
                        RawType::class_var(TRANSFORMER, "T"),
                        RawType::class_var(TRANSFORMER, "R"),
                    ],
                )),
        )
        .register_class(
            ClassDecl::new(CHAIN)
                .api()
                .extends(RawType::parameterized(
                    names::HANDLER,
                    vec![RawType::class(CHAIN)],
                )),
        )
        .register_class(
            ClassDecl::new(BASE_STREAM)
                .type_params(["X"])
                .extends(RawType::parameterized(
                    names::READ_STREAM,
                    vec![RawType::class_var(BASE_STREAM, "X")],
                )),
        )
        .register_class(
            ClassDecl::new(DERIVED_STREAM)
                .api()
                .extends(RawType::parameterized(
                    BASE_STREAM,
                    vec![RawType::class(names::JSON_OBJECT)],
                )),
        )
        .register_class(
            ClassDecl::new(NAMES)
                .api()
                .extends(RawType::parameterized(
                    names::ITERABLE,
                    vec![RawType::class(names::STRING)],
                )),
        )
        .register_class(ClassDecl::new(POINT).value_object())
        .register_class(ClassDecl::new(SHAPE).value_object().abstract_())
        .register_class(ClassDecl::new(COLOR).enumeration(["RED", "GREEN", "BLUE"]))
        .register_class(ClassDecl::new(OPAQUE));
    registry
}

pub fn string() -> RawType {
    RawType::class(names::STRING)
}

pub fn list_of(element: RawType) -> RawType {
    RawType::parameterized(names::LIST, vec![element])
}

pub fn set_of(element: RawType) -> RawType {
    RawType::parameterized(names::SET, vec![element])
}

pub fn map_of(key: RawType, value: RawType) -> RawType {
    RawType::parameterized(names::MAP, vec![key, value])
}

/// Build `raw` against `registry`, panicking on failure.
pub fn build(registry: &DeclarationRegistry, raw: &RawType) -> TypeModel {
    TypeModelBuilder::new(registry)
        .build(raw)
        .unwrap_or_else(|err| panic!("failed to build {raw}: {err}"))
}
