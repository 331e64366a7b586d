//! Type Model Builder.
//!
//! Turns `RawType` references into `TypeModel` trees, consulting the
//! `DeclarationRegistry` for declaration facts:
//!
//! - `void` and primitives map to their leaf nodes.
//! - A class reference is classified and specialised: enums capture their
//!   constants, API interfaces get their capability slots, value objects their
//!   abstract flag.
//! - A parameterized reference builds its arguments, then its raw class.
//! - A type variable resolves its position on its owner.
//! - Wildcards and arrays are rejected.
//!
//! The registry is the only context the builder reads, and it is never
//! mutated, so a builder can be shared freely between threads.

use crate::capability::{Capability, resolve_type_argument};
use crate::error::ModelError;
use crate::kind::{Kind, classify};
use crate::model::{
    ApiType, ApiTypeArgs, ClassType, EnumType, ParameterizedType, PrimitiveType, TypeModel,
    TypeParam, TypeParamOwner, TypeVariable, ValueObjectType,
};
use crate::names;
use crate::raw::{RawType, TypeVarOwner};
use crate::registry::{ClassDecl, DeclarationRegistry};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug)]
pub struct TypeModelBuilder<'a> {
    registry: &'a DeclarationRegistry,
}

impl<'a> TypeModelBuilder<'a> {
    pub fn new(registry: &'a DeclarationRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a DeclarationRegistry {
        self.registry
    }

    /// Build the model of a raw type reference.
    pub fn build(&self, raw: &RawType) -> Result<TypeModel, ModelError> {
        let mut in_progress = Vec::new();
        let result = self.build_in(raw, &mut in_progress);
        if let Err(err) = &result {
            debug!(raw = %raw, error = %err, "TypeModelBuilder::build failed");
        }
        result
    }

    /// `in_progress` holds the API interfaces whose capability slots are being
    /// built, outermost first.
    fn build_in(
        &self,
        raw: &RawType,
        in_progress: &mut Vec<String>,
    ) -> Result<TypeModel, ModelError> {
        match raw {
            RawType::Void => Ok(TypeModel::Void),
            RawType::Primitive(name) => Self::build_primitive(name),
            RawType::Class(name) => self.build_class(name, in_progress),
            RawType::Parameterized { raw: raw_name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.build_in(arg, in_progress))
                    .collect::<Result<Vec<_>, _>>()?;
                let raw_model = self.build_class(raw_name, in_progress)?;
                Ok(TypeModel::Parameterized(ParameterizedType::new(
                    raw_model, args,
                )?))
            }
            RawType::TypeVariable { owner, name } => self.build_type_variable(owner, name),
            RawType::Wildcard { .. } | RawType::Array(_) => {
                Err(ModelError::UnsupportedTypeShape(raw.to_string()))
            }
        }
    }

    fn build_primitive(name: &str) -> Result<TypeModel, ModelError> {
        let boxed = names::boxed_name(name)
            .ok_or_else(|| ModelError::UnsupportedTypeShape(name.to_string()))?;
        Ok(TypeModel::Primitive(PrimitiveType {
            name: name.to_string(),
            boxed: boxed.to_string(),
        }))
    }

    fn build_class(
        &self,
        name: &str,
        in_progress: &mut Vec<String>,
    ) -> Result<TypeModel, ModelError> {
        let decl = self
            .registry
            .class(name)
            .ok_or_else(|| ModelError::UnknownDeclaration(name.to_string()))?;
        let kind = classify(&decl.name, decl.flags);
        let class = ClassType {
            kind,
            name: decl.name.clone(),
            module: self.registry.owning_module(&decl.package),
            type_params: class_type_params(decl),
        };
        trace!(name, kind = %kind, "TypeModelBuilder::build_class");

        let model = match kind {
            Kind::Enum => TypeModel::Enum(EnumType {
                class,
                values: decl.enum_constants.clone(),
            }),
            Kind::Api => {
                let args = if in_progress.iter().any(|n| n == name) {
                    // Re-entered through its own capability arguments; the
                    // outer node already carries the slots.
                    ApiTypeArgs::default()
                } else {
                    in_progress.push(name.to_string());
                    let args = self.build_api_args(name, in_progress);
                    in_progress.pop();
                    args?
                };
                TypeModel::Api(ApiType { class, args })
            }
            Kind::ValueObject => TypeModel::ValueObject(ValueObjectType {
                class,
                is_abstract: decl.is_abstract(),
            }),
            _ => TypeModel::Class(class),
        };
        Ok(model)
    }

    fn build_api_args(
        &self,
        name: &str,
        in_progress: &mut Vec<String>,
    ) -> Result<ApiTypeArgs, ModelError> {
        let raw = RawType::class(name);
        let mut slot = |capability: Capability,
                        index: usize|
         -> Result<Option<Box<TypeModel>>, ModelError> {
            match resolve_type_argument(self.registry, &raw, capability, index) {
                Some(arg) => Ok(Some(Box::new(self.build_in(&arg, in_progress)?))),
                None => Ok(None),
            }
        };
        Ok(ApiTypeArgs {
            read_stream_arg: slot(Capability::ReadStream, 0)?,
            write_stream_arg: slot(Capability::WriteStream, 0)?,
            handler_arg: slot(Capability::Handler, 0)?,
            iterable_arg: slot(Capability::Iterable, 0)?,
            iterator_arg: slot(Capability::Iterator, 0)?,
            function_arg_in: slot(Capability::Function, 0)?,
            function_arg_out: slot(Capability::Function, 1)?,
        })
    }

    fn build_type_variable(
        &self,
        owner: &TypeVarOwner,
        name: &str,
    ) -> Result<TypeModel, ModelError> {
        let (param_owner, index) = match owner {
            TypeVarOwner::Class(class) => {
                let decl = self
                    .registry
                    .class(class)
                    .ok_or_else(|| ModelError::UnknownDeclaration(class.clone()))?;
                let index = decl.type_param_index(name);
                (TypeParamOwner::Class { name: class.clone() }, index)
            }
            TypeVarOwner::Method {
                class,
                method,
                type_params,
            } => (
                TypeParamOwner::Method {
                    class: class.clone(),
                    method: method.clone(),
                },
                type_params.iter().position(|p| p == name),
            ),
        };
        let index = index.ok_or_else(|| {
            ModelError::UnsupportedTypeShape(format!(
                "type variable {name} is not declared on {}",
                owner.identity()
            ))
        })?;
        Ok(TypeModel::TypeVariable(TypeVariable {
            param: TypeParam {
                owner: param_owner,
                index,
                name: name.to_string(),
            },
        }))
    }
}

fn class_type_params(decl: &ClassDecl) -> Vec<TypeParam> {
    decl.type_params
        .iter()
        .enumerate()
        .map(|(index, name)| TypeParam {
            owner: TypeParamOwner::Class {
                name: decl.name.clone(),
            },
            index,
            name: name.clone(),
        })
        .collect()
}
