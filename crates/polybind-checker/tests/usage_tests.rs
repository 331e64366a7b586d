use super::*;
use polybind_model::test_fixtures::*;
use polybind_model::{RawType, names};

fn method() -> MethodDecl {
    MethodDecl::new(PIPE, "write")
}

#[test]
fn test_void_only_legal_as_return() {
    let registry = sample_registry();
    let usage = UsageChecker::new();
    let void = build(&registry, &RawType::Void);

    assert!(usage.check(&method(), &void, UsagePosition::Return, false).unwrap());
    assert!(!usage.check(&method(), &void, UsagePosition::Parameter, false).unwrap());
    assert!(!usage.check(&method(), &void, UsagePosition::Parameter, true).unwrap());
}

#[test]
fn test_each_rule_contributes() {
    let registry = sample_registry();
    let usage = UsageChecker::new();
    let cases = [
        RawType::primitive("double"),
        RawType::class(WIDGET),
        RawType::parameterized(PIPE, vec![string()]),
        RawType::class(POINT),
        RawType::class(COLOR),
        RawType::class_var(PIPE, "T"),
        list_of(RawType::class(POINT)),
        map_of(string(), RawType::class(names::JSON_ARRAY)),
    ];
    for raw in cases {
        let ty = build(&registry, &raw);
        for position in [UsagePosition::Parameter, UsagePosition::Return] {
            assert!(usage.check(&method(), &ty, position, false).unwrap(), "{raw} {position}");
        }
    }
}

#[test]
fn test_unmodeled_types_follow_allow_any() {
    let registry = sample_registry();
    let usage = UsageChecker::new();
    let opaque = build(&registry, &RawType::class(OPAQUE));
    let nested = build(&registry, &list_of(list_of(string())));

    assert!(!usage.check(&method(), &opaque, UsagePosition::Parameter, false).unwrap());
    assert!(usage.check(&method(), &opaque, UsagePosition::Parameter, true).unwrap());
    assert!(!usage.check(&method(), &nested, UsagePosition::Return, true).unwrap());
}

#[test]
fn test_position_checker_is_a_checker() {
    let registry = sample_registry();
    let usage = UsageChecker::new();
    let void = build(&registry, &RawType::Void);

    let returns: &dyn Checker = &usage.at(UsagePosition::Return);
    let params = usage.at(UsagePosition::Parameter);

    assert!(returns.check(&method(), &void, false).unwrap());
    assert!(!params.check(&method(), &void, false).unwrap());
}

#[test]
fn test_usage_position_display() {
    assert_eq!(UsagePosition::Parameter.to_string(), "parameter");
    assert_eq!(UsagePosition::Return.to_string(), "return");
}
