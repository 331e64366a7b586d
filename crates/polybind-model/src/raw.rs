//! Raw type descriptions handed over by the declaration driver.
//!
//! A `RawType` is the unresolved shape of a type reference as it appears at a
//! declaration site. It names declarations but carries none of their facts;
//! those live in the `DeclarationRegistry`.

use std::fmt;

/// Owner of a type variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeVarOwner {
    /// Declared on a class or interface, e.g. `T` in `ReadStream<T>`.
    Class(String),
    /// Declared on a generic method. `type_params` lists the method's
    /// variables in declaration order.
    Method {
        class: String,
        method: String,
        type_params: Vec<String>,
    },
}

impl TypeVarOwner {
    /// Name used as the owner identity in the model.
    pub fn identity(&self) -> String {
        match self {
            TypeVarOwner::Class(name) => name.clone(),
            TypeVarOwner::Method { class, method, .. } => format!("{class}#{method}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawType {
    Void,
    /// A primitive by name (`int`, `boolean`, ...).
    Primitive(String),
    /// A declared class, interface or enum referenced without type arguments.
    Class(String),
    /// `raw<args...>`.
    Parameterized { raw: String, args: Vec<RawType> },
    TypeVariable { owner: TypeVarOwner, name: String },
    /// `?`, `? extends B` or `? super B`.
    Wildcard {
        upper: Option<Box<RawType>>,
        lower: Option<Box<RawType>>,
    },
    Array(Box<RawType>),
}

impl RawType {
    pub fn class(name: impl Into<String>) -> Self {
        RawType::Class(name.into())
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        RawType::Primitive(name.into())
    }

    pub fn parameterized(raw: impl Into<String>, args: Vec<RawType>) -> Self {
        RawType::Parameterized {
            raw: raw.into(),
            args,
        }
    }

    /// Variable declared on a class.
    pub fn class_var(class: impl Into<String>, name: impl Into<String>) -> Self {
        RawType::TypeVariable {
            owner: TypeVarOwner::Class(class.into()),
            name: name.into(),
        }
    }

    pub fn wildcard() -> Self {
        RawType::Wildcard {
            upper: None,
            lower: None,
        }
    }

    /// Declared name of the class this type refers to, if any.
    pub fn declaration_name(&self) -> Option<&str> {
        match self {
            RawType::Class(name) | RawType::Parameterized { raw: name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawType::Void => f.write_str("void"),
            RawType::Primitive(name) | RawType::Class(name) => f.write_str(name),
            RawType::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            RawType::TypeVariable { name, .. } => f.write_str(name),
            RawType::Wildcard { upper, lower } => {
                f.write_str("?")?;
                if let Some(upper) = upper {
                    write!(f, " extends {upper}")?;
                }
                if let Some(lower) = lower {
                    write!(f, " super {lower}")?;
                }
                Ok(())
            }
            RawType::Array(component) => write!(f, "{component}[]"),
        }
    }
}
