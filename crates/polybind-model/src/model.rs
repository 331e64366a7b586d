//! Type Model.
//!
//! `TypeModel` is the canonical, immutable tree built for every type reference
//! found on a declaration. Nodes compare by value: two builds of the same raw
//! type are equal even though they are distinct allocations.
//!
//! | Variant | Kind | Carries |
//! |---------|------|---------|
//! | `Void` | `VOID` | - |
//! | `Primitive` | `PRIMITIVE` | name, boxed name |
//! | `Class` | any | kind, name, module, type params |
//! | `Api` | `API_INTERFACE` | class + capability slots |
//! | `ValueObject` | `VALUE_OBJECT` | class + abstract flag |
//! | `Enum` | `ENUM` | class + constants |
//! | `Parameterized` | raw's kind | raw + type arguments |
//! | `TypeVariable` | `OTHER` | owner, index, name |

use crate::error::ModelError;
use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Module a declaration belongs to. Code-organization metadata only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    /// Package carrying the module descriptor.
    pub package: String,
    pub name: String,
    pub group_package: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeParamOwner {
    Class { name: String },
    Method { class: String, method: String },
}

impl fmt::Display for TypeParamOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeParamOwner::Class { name } => f.write_str(name),
            TypeParamOwner::Method { class, method } => write!(f, "{class}#{method}"),
        }
    }
}

/// A declared type variable and its position on its owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParam {
    pub owner: TypeParamOwner,
    pub index: usize,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveType {
    pub name: String,
    pub boxed: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassType {
    pub kind: Kind,
    pub name: String,
    pub module: Option<ModuleInfo>,
    pub type_params: Vec<TypeParam>,
}

impl ClassType {
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Type arguments an API interface binds on the well-known generic
/// capabilities it implements. A slot is `None` when the capability is not
/// implemented.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTypeArgs {
    pub read_stream_arg: Option<Box<TypeModel>>,
    pub write_stream_arg: Option<Box<TypeModel>>,
    pub handler_arg: Option<Box<TypeModel>>,
    pub iterable_arg: Option<Box<TypeModel>>,
    pub iterator_arg: Option<Box<TypeModel>>,
    pub function_arg_in: Option<Box<TypeModel>>,
    pub function_arg_out: Option<Box<TypeModel>>,
}

impl ApiTypeArgs {
    pub fn is_read_stream(&self) -> bool {
        self.read_stream_arg.is_some()
    }

    pub fn is_write_stream(&self) -> bool {
        self.write_stream_arg.is_some()
    }

    pub fn is_handler(&self) -> bool {
        self.handler_arg.is_some()
    }

    pub fn is_iterable(&self) -> bool {
        self.iterable_arg.is_some()
    }

    pub fn is_iterator(&self) -> bool {
        self.iterator_arg.is_some()
    }

    pub fn is_function(&self) -> bool {
        self.function_arg_in.is_some() || self.function_arg_out.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiType {
    pub class: ClassType,
    pub args: ApiTypeArgs,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueObjectType {
    pub class: ClassType,
    pub is_abstract: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumType {
    pub class: ClassType,
    pub values: Vec<String>,
}

/// Deserialization goes through `ParameterizedType::new`, so a decoded tree
/// holds the same arity invariant as a built one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ParameterizedRepr")]
pub struct ParameterizedType {
    raw: Box<TypeModel>,
    args: Vec<TypeModel>,
}

#[derive(Deserialize)]
struct ParameterizedRepr {
    raw: Box<TypeModel>,
    args: Vec<TypeModel>,
}

impl TryFrom<ParameterizedRepr> for ParameterizedType {
    type Error = ModelError;

    fn try_from(repr: ParameterizedRepr) -> Result<Self, Self::Error> {
        Self::new(*repr.raw, repr.args)
    }
}

impl ParameterizedType {
    /// Wrap a class-like raw type with its type arguments.
    ///
    /// The argument count must match the raw type's declared arity and may not
    /// be zero.
    pub fn new(raw: TypeModel, args: Vec<TypeModel>) -> Result<Self, ModelError> {
        let Some(class) = raw.class() else {
            return Err(ModelError::InvariantViolation(format!(
                "parameterized raw type '{raw}' is not a class"
            )));
        };
        if args.is_empty() || args.len() != class.type_params.len() {
            return Err(ModelError::InvariantViolation(format!(
                "'{}' declares {} type parameter(s) but {} argument(s) were given",
                class.name,
                class.type_params.len(),
                args.len()
            )));
        }
        Ok(Self {
            raw: Box::new(raw),
            args,
        })
    }

    pub fn raw(&self) -> &TypeModel {
        &self.raw
    }

    pub fn args(&self) -> &[TypeModel] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&TypeModel> {
        self.args.get(index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariable {
    pub param: TypeParam,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum TypeModel {
    Void,
    Primitive(PrimitiveType),
    Class(ClassType),
    Api(ApiType),
    ValueObject(ValueObjectType),
    Enum(EnumType),
    Parameterized(ParameterizedType),
    TypeVariable(TypeVariable),
}

impl TypeModel {
    pub fn kind(&self) -> Kind {
        match self {
            TypeModel::Void => Kind::Void,
            TypeModel::Primitive(_) => Kind::Primitive,
            TypeModel::Class(class) => class.kind,
            TypeModel::Api(_) => Kind::Api,
            TypeModel::ValueObject(_) => Kind::ValueObject,
            TypeModel::Enum(_) => Kind::Enum,
            TypeModel::Parameterized(p) => p.raw.kind(),
            TypeModel::TypeVariable(_) => Kind::Other,
        }
    }

    /// Fully-qualified name of the declaration, the primitive name, or the
    /// variable name.
    pub fn name(&self) -> &str {
        match self {
            TypeModel::Void => "void",
            TypeModel::Primitive(p) => &p.name,
            TypeModel::TypeVariable(v) => &v.param.name,
            TypeModel::Parameterized(p) => p.raw.name(),
            TypeModel::Class(_)
            | TypeModel::Api(_)
            | TypeModel::ValueObject(_)
            | TypeModel::Enum(_) => self.class().map_or("", |c| c.name.as_str()),
        }
    }

    /// Class-like component, looking through `Parameterized`.
    pub fn class(&self) -> Option<&ClassType> {
        match self {
            TypeModel::Class(class) => Some(class),
            TypeModel::Api(api) => Some(&api.class),
            TypeModel::ValueObject(vo) => Some(&vo.class),
            TypeModel::Enum(e) => Some(&e.class),
            TypeModel::Parameterized(p) => p.raw.class(),
            TypeModel::Void | TypeModel::Primitive(_) | TypeModel::TypeVariable(_) => None,
        }
    }

    pub fn is_class_like(&self) -> bool {
        matches!(
            self,
            TypeModel::Class(_) | TypeModel::Api(_) | TypeModel::ValueObject(_) | TypeModel::Enum(_)
        )
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, TypeModel::Parameterized(_))
    }

    pub fn as_parameterized(&self) -> Option<&ParameterizedType> {
        match self {
            TypeModel::Parameterized(p) => Some(p),
            _ => None,
        }
    }

    /// Type arguments of a parameterized node, empty otherwise.
    pub fn args(&self) -> &[TypeModel] {
        match self {
            TypeModel::Parameterized(p) => &p.args,
            _ => &[],
        }
    }

    /// Unparameterized form: the raw component of a parameterized node,
    /// the node itself otherwise.
    pub fn raw(&self) -> &TypeModel {
        match self {
            TypeModel::Parameterized(p) => &p.raw,
            _ => self,
        }
    }

    /// Capability slots of an API interface (through `Parameterized`).
    pub fn api_args(&self) -> Option<&ApiTypeArgs> {
        match self.raw() {
            TypeModel::Api(api) => Some(&api.args),
            _ => None,
        }
    }

    pub fn module(&self) -> Option<&ModuleInfo> {
        self.class().and_then(|c| c.module.as_ref())
    }
}

impl fmt::Display for TypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeModel::Parameterized(p) => {
                write!(f, "{}<", p.raw)?;
                for (i, arg) in p.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            _ => f.write_str(self.name()),
        }
    }
}
