use super::*;
use crate::test_fixtures::*;

#[test]
fn test_direct_capability_argument() {
    let registry = sample_registry();
    let resolved = resolve_type_argument(
        &registry,
        &RawType::class(SOURCE),
        Capability::ReadStream,
        0,
    );
    assert_eq!(resolved, Some(string()));
}

#[test]
fn test_capability_not_implemented() {
    let registry = sample_registry();
    let raw = RawType::class(SOURCE);

    assert_eq!(
        resolve_type_argument(&registry, &raw, Capability::WriteStream, 0),
        None
    );
    assert_eq!(
        resolve_type_argument(&registry, &RawType::class(WIDGET), Capability::Handler, 0),
        None
    );
}

#[test]
fn test_unbound_variables_flow_through() {
    let registry = sample_registry();
    let raw = RawType::class(TRANSFORMER);

    assert_eq!(
        resolve_type_argument(&registry, &raw, Capability::Function, 0),
        Some(RawType::class_var(TRANSFORMER, "T"))
    );
    assert_eq!(
        resolve_type_argument(&registry, &raw, Capability::Function, 1),
        Some(RawType::class_var(TRANSFORMER, "R"))
    );
    assert_eq!(
        resolve_type_argument(&registry, &raw, Capability::Function, 2),
        None
    );
}

#[test]
fn test_substitution_through_intermediate_supertype() {
    let registry = sample_registry();
    let resolved = resolve_type_argument(
        &registry,
        &RawType::class(DERIVED_STREAM),
        Capability::ReadStream,
        0,
    );
    assert_eq!(resolved, Some(RawType::class(names::JSON_OBJECT)));
}

#[test]
fn test_parameterized_input_binds_arguments() {
    let registry = sample_registry();
    let raw = RawType::parameterized(PIPE, vec![RawType::class("java.lang.Long")]);

    assert_eq!(
        resolve_type_argument(&registry, &raw, Capability::WriteStream, 0),
        Some(RawType::class("java.lang.Long"))
    );
}

#[test]
fn test_capability_itself() {
    let registry = sample_registry();
    let resolved = resolve_type_argument(
        &registry,
        &RawType::class(names::HANDLER),
        Capability::Handler,
        0,
    );
    assert_eq!(resolved, Some(RawType::class_var(names::HANDLER, "E")));
}

#[test]
fn test_cyclic_supertypes_terminate() {
    let mut registry = DeclarationRegistry::with_builtins();
    registry
        .register_class(ClassDecl::new("x.A").extends(RawType::class("x.B")))
        .register_class(ClassDecl::new("x.B").extends(RawType::class("x.A")));

    assert_eq!(
        resolve_type_argument(&registry, &RawType::class("x.A"), Capability::Iterable, 0),
        None
    );
}

#[test]
fn test_capability_arity_matches_builtins() {
    let registry = DeclarationRegistry::with_builtins();
    for capability in Capability::ALL {
        let decl = registry
            .class(capability.declaration())
            .expect("capability registered");
        assert_eq!(decl.type_params.len(), capability.arity());
    }
}
