use super::*;
use polybind_model::test_fixtures::*;
use polybind_model::{DeclarationRegistry, RawType, TypeModel, names};
use rayon::prelude::*;

fn method() -> MethodDecl {
    MethodDecl::new(WIDGET, "send")
}

fn check(registry: &DeclarationRegistry, raw: &RawType, allow_any: bool) -> bool {
    let ty = build(registry, raw);
    ContainerChecker::standard()
        .check(&method(), &ty, allow_any)
        .unwrap_or_else(|err| panic!("{raw}: {err}"))
}

/// Element and value types covering every kind the registry can produce.
fn element_types() -> Vec<RawType> {
    vec![
        RawType::primitive("int"),
        RawType::class("java.lang.Integer"),
        string(),
        RawType::class(names::JSON_OBJECT),
        RawType::class(names::JSON_ARRAY),
        RawType::class(WIDGET),
        RawType::class(POINT),
        RawType::class(SHAPE),
        RawType::class(COLOR),
        RawType::class(OPAQUE),
        RawType::class(names::THROWABLE),
        list_of(string()),
        set_of(string()),
        map_of(string(), string()),
    ]
}

#[test]
fn test_list_of_boxed_primitive_is_legal() {
    let registry = sample_registry();
    assert!(check(&registry, &list_of(RawType::class("java.lang.Integer")), false));
}

#[test]
fn test_nested_list_is_illegal() {
    let registry = sample_registry();
    assert!(!check(&registry, &list_of(list_of(string())), false));
    assert!(!check(&registry, &list_of(list_of(string())), true));
}

#[test]
fn test_map_of_string_to_api_is_legal() {
    let registry = sample_registry();
    assert!(check(&registry, &map_of(string(), RawType::class(WIDGET)), false));
}

#[test]
fn test_map_with_non_string_key_is_illegal() {
    let registry = sample_registry();
    let raw = map_of(RawType::class("java.lang.Integer"), string());
    assert!(!check(&registry, &raw, false));
}

#[test]
fn test_set_of_enum_is_legal() {
    let registry = sample_registry();
    assert!(check(&registry, &set_of(RawType::class(COLOR)), false));
}

#[test]
fn test_list_of_value_object_is_legal_and_bare_value_object_is_not_a_container() {
    let registry = sample_registry();
    assert!(check(&registry, &list_of(RawType::class(POINT)), true));
    assert!(check(&registry, &list_of(RawType::class(SHAPE)), false));
    assert!(!check(&registry, &RawType::class(POINT), true));
}

#[test]
fn test_non_container_is_rejected_regardless_of_allow_any() {
    let registry = sample_registry();
    let non_containers = element_types()
        .into_iter()
        .filter(|raw| !build(&registry, raw).kind().is_container());
    for raw in non_containers {
        assert!(!check(&registry, &raw, false), "{raw}");
        assert!(!check(&registry, &raw, true), "{raw}");
    }
}

#[test]
fn test_no_element_type_makes_a_nested_container_legal() {
    let registry = sample_registry();
    let containers = [
        list_of(string()),
        list_of(RawType::class(POINT)),
        set_of(RawType::class(COLOR)),
        map_of(string(), string()),
    ];
    for inner in containers {
        for allow_any in [false, true] {
            assert!(!check(&registry, &list_of(inner.clone()), allow_any), "{inner}");
            assert!(!check(&registry, &set_of(inner.clone()), allow_any), "{inner}");
            assert!(
                !check(&registry, &map_of(string(), inner.clone()), allow_any),
                "{inner}"
            );
        }
    }
}

#[test]
fn test_value_object_two_levels_deep_is_illegal() {
    let registry = sample_registry();
    let raw = list_of(list_of(RawType::class(POINT)));
    assert!(!check(&registry, &raw, false));
    assert!(!check(&registry, &raw, true));
}

#[test]
fn test_non_string_map_key_rejects_every_value() {
    let registry = sample_registry();
    let keys = [
        RawType::class("java.lang.Integer"),
        RawType::class(WIDGET),
        RawType::class(COLOR),
        RawType::class(names::JSON_OBJECT),
    ];
    for key in keys {
        for value in element_types() {
            for allow_any in [false, true] {
                let raw = map_of(key.clone(), value.clone());
                assert!(!check(&registry, &raw, allow_any), "{raw}");
            }
        }
    }
}

#[test]
fn test_string_keyed_map_follows_the_argument_rule() {
    let registry = sample_registry();
    for value in element_types() {
        let value_ty = build(&registry, &value);
        for allow_any in [false, true] {
            let expected = LegalArgumentChecker.check(&method(), &value_ty, allow_any).unwrap();
            let raw = map_of(string(), value.clone());
            assert_eq!(check(&registry, &raw, allow_any), expected, "{raw} {allow_any}");
        }
    }
}

#[test]
fn test_map_values_exclude_value_objects_and_enums() {
    let registry = sample_registry();
    assert!(!check(&registry, &map_of(string(), RawType::class(POINT)), false));
    assert!(!check(&registry, &map_of(string(), RawType::class(COLOR)), false));
    // Relaxed: the argument rule accepts them as unmodeled types.
    assert!(check(&registry, &map_of(string(), RawType::class(POINT)), true));
}

#[test]
fn test_collection_elements_widen_the_argument_rule() {
    let registry = sample_registry();
    for element in element_types() {
        let element_ty = build(&registry, &element);
        let base = LegalArgumentChecker.check(&method(), &element_ty, false).unwrap();
        if base {
            assert!(check(&registry, &list_of(element.clone()), false), "{element}");
            assert!(check(&registry, &set_of(element.clone()), false), "{element}");
        }
    }
}

#[test]
fn test_check_is_deterministic() {
    let registry = sample_registry();
    let raw = map_of(string(), RawType::class(SOURCE));
    let first = check(&registry, &raw, false);
    for _ in 0..8 {
        assert_eq!(check(&registry, &raw, false), first);
    }
}

#[test]
fn test_unparameterized_container_is_an_invariant_violation() {
    let registry = sample_registry();
    let raw_list = build(&registry, &RawType::class(names::LIST));
    assert!(matches!(raw_list, TypeModel::Class(_)));

    let err = ContainerChecker::standard()
        .check(&method(), &raw_list, false)
        .expect_err("raw List has no element type");
    let CheckError::InvariantViolation { type_name, .. } = err;
    assert_eq!(type_name, names::LIST);
}

#[test]
fn test_custom_delegates() {
    struct Nothing;
    impl Checker for Nothing {
        fn check(&self, _: &MethodDecl, _: &TypeModel, _: bool) -> Result<bool, CheckError> {
            Ok(false)
        }
    }

    let registry = sample_registry();
    let checker = ContainerChecker::new(Nothing, Nothing);
    let strings = build(&registry, &list_of(string()));
    let colors = build(&registry, &list_of(RawType::class(COLOR)));

    assert!(!checker.check(&method(), &strings, true).unwrap());
    // Enum elements are accepted by the container rule itself.
    assert!(checker.check(&method(), &colors, false).unwrap());
}

#[test]
fn test_concurrent_checks_agree() {
    let registry = sample_registry();
    let models: Vec<_> = element_types()
        .into_iter()
        .flat_map(|e| [list_of(e.clone()), set_of(e.clone()), map_of(string(), e)])
        .map(|raw| build(&registry, &raw))
        .collect();
    let checker = ContainerChecker::standard();

    let sequential: Vec<bool> = models
        .iter()
        .map(|ty| checker.check(&method(), ty, false).unwrap())
        .collect();
    let parallel: Vec<bool> = models
        .par_iter()
        .map(|ty| checker.check(&method(), ty, false).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
