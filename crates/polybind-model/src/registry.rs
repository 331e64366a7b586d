//! Declaration registry.
//!
//! The driver registers every class, interface, enum and package it discovers
//! here before any type is built. The registry is the builder's resolution
//! context: it is passed explicitly and only read while building, so one
//! registry can serve any number of concurrent builds.

use crate::kind::DeclFlags;
use crate::model::ModuleInfo;
use crate::names;
use crate::raw::RawType;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Module descriptor found on a package annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub group_package: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageDecl {
    pub name: String,
    pub module: Option<ModuleDescriptor>,
}

impl PackageDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
        }
    }

    /// Package carrying a module descriptor.
    pub fn module(
        name: impl Into<String>,
        module_name: impl Into<String>,
        group_package: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            module: Some(ModuleDescriptor {
                name: module_name.into(),
                group_package: group_package.into(),
            }),
        }
    }
}

/// Facts about one declared class, interface or enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub package: String,
    pub flags: DeclFlags,
    /// Declared type variables, in order.
    pub type_params: Vec<String>,
    /// Direct supertypes (superclass and implemented interfaces).
    pub supertypes: Vec<RawType>,
    /// Enumeration constants, in declaration order.
    pub enum_constants: Vec<String>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let package = names::package_of(&name).to_string();
        Self {
            name,
            package,
            flags: DeclFlags::empty(),
            type_params: Vec::new(),
            supertypes: Vec::new(),
            enum_constants: Vec::new(),
        }
    }

    pub fn value_object(mut self) -> Self {
        self.flags |= DeclFlags::VALUE_OBJECT;
        self
    }

    pub fn api(mut self) -> Self {
        self.flags |= DeclFlags::API;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.flags |= DeclFlags::ABSTRACT;
        self
    }

    pub fn enumeration<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags |= DeclFlags::ENUM;
        self.enum_constants = constants.into_iter().map(Into::into).collect();
        self
    }

    pub fn type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn extends(mut self, supertype: RawType) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(DeclFlags::ABSTRACT)
    }

    /// Position of a declared type variable.
    pub fn type_param_index(&self, name: &str) -> Option<usize> {
        self.type_params.iter().position(|p| p == name)
    }
}

#[derive(Debug, Default)]
pub struct DeclarationRegistry {
    classes: FxHashMap<String, ClassDecl>,
    packages: FxHashMap<String, PackageDecl>,
}

impl DeclarationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the host's well-known declarations.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    fn register_builtins(&mut self) {
        for (_, boxed) in names::PRIMITIVES {
            self.register_class(ClassDecl::new(*boxed));
        }
        for name in [
            names::VOID_BOXED,
            names::OBJECT,
            names::STRING,
            names::JSON_OBJECT,
            names::JSON_ARRAY,
        ] {
            self.register_class(ClassDecl::new(name));
        }
        for name in names::THROWABLES {
            self.register_class(ClassDecl::new(*name));
        }
        self.register_class(ClassDecl::new(names::LIST).type_params(["E"]));
        self.register_class(ClassDecl::new(names::SET).type_params(["E"]));
        self.register_class(ClassDecl::new(names::MAP).type_params(["K", "V"]));
        self.register_class(ClassDecl::new(names::ITERABLE).type_params(["T"]));
        self.register_class(ClassDecl::new(names::ITERATOR).type_params(["E"]));
        self.register_class(ClassDecl::new(names::FUNCTION).type_params(["T", "R"]));
        self.register_class(ClassDecl::new(names::HANDLER).api().type_params(["E"]));
        self.register_class(ClassDecl::new(names::READ_STREAM).api().type_params(["T"]));
        self.register_class(ClassDecl::new(names::WRITE_STREAM).api().type_params(["T"]));
    }

    /// Register a class declaration, replacing any previous one of the same name.
    pub fn register_class(&mut self, decl: ClassDecl) -> &mut Self {
        trace!(name = %decl.name, flags = ?decl.flags, "DeclarationRegistry::register_class");
        self.classes.insert(decl.name.clone(), decl);
        self
    }

    pub fn register_package(&mut self, package: PackageDecl) -> &mut Self {
        trace!(name = %package.name, "DeclarationRegistry::register_package");
        self.packages.insert(package.name.clone(), package);
        self
    }

    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }

    pub fn package(&self, name: &str) -> Option<&PackageDecl> {
        self.packages.get(name)
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Find the module a package belongs to.
    ///
    /// Walks from `package` towards the root until a package carrying a module
    /// descriptor is found. The walk stops at the first ancestor that was never
    /// registered, and at the root package.
    pub fn owning_module(&self, package: &str) -> Option<ModuleInfo> {
        let mut current = self.packages.get(package);
        while let Some(pkg) = current {
            if let Some(module) = &pkg.module {
                trace!(package, module = %module.name, found_on = %pkg.name, "owning_module");
                return Some(ModuleInfo {
                    package: pkg.name.clone(),
                    name: module.name.clone(),
                    group_package: module.group_package.clone(),
                });
            }
            current = names::parent_package(&pkg.name).and_then(|parent| self.packages.get(parent));
        }
        None
    }
}
