//! Method declarations as seen by the legality rules.

use polybind_model::TypeModel;
use std::fmt;

/// The declaration a checked type appears on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub declaring_type: String,
    pub name: String,
    /// The method opts into accepting otherwise unmodeled types.
    pub permits_any_type: bool,
}

impl MethodDecl {
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            permits_any_type: false,
        }
    }

    pub fn permitting_any_type(mut self) -> Self {
        self.permits_any_type = true;
        self
    }

    /// `owner#method`, the diagnostic subject.
    pub fn qualified_name(&self) -> String {
        format!("{}#{}", self.declaring_type, self.name)
    }
}

impl fmt::Display for MethodDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.declaring_type, self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub ty: TypeModel,
}

impl ParamInfo {
    pub fn new(name: impl Into<String>, ty: TypeModel) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A method with its built parameter and return types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub method: MethodDecl,
    pub params: Vec<ParamInfo>,
    pub return_type: TypeModel,
}

impl MethodSignature {
    pub fn new(method: MethodDecl, return_type: TypeModel) -> Self {
        Self {
            method,
            params: Vec::new(),
            return_type,
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeModel) -> Self {
        self.params.push(ParamInfo::new(name, ty));
        self
    }
}
