use super::*;
use crate::test_fixtures::*;

fn class(kind: Kind, name: &str, params: &[&str]) -> TypeModel {
    TypeModel::Class(ClassType {
        kind,
        name: name.to_string(),
        module: None,
        type_params: params
            .iter()
            .enumerate()
            .map(|(index, p)| TypeParam {
                owner: TypeParamOwner::Class {
                    name: name.to_string(),
                },
                index,
                name: (*p).to_string(),
            })
            .collect(),
    })
}

#[test]
fn test_parameterized_new_checks_arity() {
    let list = class(Kind::List, names::LIST, &["E"]);
    let string = class(Kind::String, names::STRING, &[]);

    assert!(ParameterizedType::new(list.clone(), vec![string.clone()]).is_ok());
    assert!(matches!(
        ParameterizedType::new(list.clone(), vec![]),
        Err(ModelError::InvariantViolation(_))
    ));
    assert!(matches!(
        ParameterizedType::new(list, vec![string.clone(), string]),
        Err(ModelError::InvariantViolation(_))
    ));
}

#[test]
fn test_parameterized_new_rejects_non_class_raw() {
    let err = ParameterizedType::new(TypeModel::Void, vec![TypeModel::Void])
        .expect_err("void is not generic");
    assert_eq!(
        err.to_string(),
        "type model invariant violated: parameterized raw type 'void' is not a class"
    );
}

#[test]
fn test_parameterized_kind_comes_from_raw() {
    let set = class(Kind::Set, names::SET, &["E"]);
    let node = ParameterizedType::new(set, vec![class(Kind::Other, "x.Y", &[])])
        .map(TypeModel::Parameterized)
        .expect("valid");

    assert_eq!(node.kind(), Kind::Set);
    assert_eq!(node.name(), names::SET);
    assert_eq!(node.class().map(|c| c.name.as_str()), Some(names::SET));
    assert_eq!(
        node.as_parameterized()
            .and_then(|p| p.arg(0))
            .map(TypeModel::kind),
        Some(Kind::Other)
    );
}

#[test]
fn test_non_parameterized_accessors() {
    let primitive = TypeModel::Primitive(PrimitiveType {
        name: "long".to_string(),
        boxed: "java.lang.Long".to_string(),
    });

    assert!(primitive.args().is_empty());
    assert_eq!(primitive.raw(), &primitive);
    assert!(primitive.class().is_none());
    assert!(!primitive.is_class_like());
    assert!(primitive.api_args().is_none());
    assert_eq!(primitive.to_string(), "long");
    assert_eq!(TypeModel::Void.to_string(), "void");
}

#[test]
fn test_simple_name() {
    let TypeModel::Class(opaque) = class(Kind::Other, "com.acme.internal.Opaque", &[]) else {
        unreachable!()
    };
    assert_eq!(opaque.simple_name(), "Opaque");
}

#[test]
fn test_type_variable_display_uses_name() {
    let registry = sample_registry();
    let model = build(&registry, &RawType::class_var(TRANSFORMER, "R"));
    assert_eq!(model.to_string(), "R");
    assert_eq!(model.name(), "R");
}

#[test]
fn test_model_json_round_trip() {
    let registry = sample_registry();
    let model = build(
        &registry,
        &map_of(string(), list_of(RawType::class(TRANSFORMER))),
    );

    let json = serde_json::to_string(&model).expect("serializable");
    let back: TypeModel = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, model);
}

#[test]
fn test_model_json_shape() {
    let registry = sample_registry();
    let model = build(&registry, &RawType::class(POINT));
    let json = serde_json::to_value(&model).expect("serializable");

    assert_eq!(json["shape"], "valueObject");
    assert_eq!(json["class"]["kind"], "VALUE_OBJECT");
    assert_eq!(json["class"]["module"]["name"], "acme");
    assert_eq!(json["isAbstract"], false);
}

#[test]
fn test_parameterized_json_checks_arity() {
    let registry = sample_registry();
    let model = build(&registry, &list_of(string()));
    let mut json = serde_json::to_value(&model).expect("serializable");
    assert_eq!(json["shape"], "parameterized");

    let element = json["args"][0].clone();
    json["args"] = serde_json::json!([]);
    let err = serde_json::from_value::<TypeModel>(json.clone()).expect_err("empty args");
    assert!(err.to_string().contains("0 argument(s)"), "{err}");

    json["args"] = serde_json::json!([element.clone(), element]);
    let err = serde_json::from_value::<TypeModel>(json).expect_err("too many args");
    assert!(err.to_string().contains("2 argument(s)"), "{err}");
}
