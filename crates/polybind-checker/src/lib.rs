//! Usage-position legality rules.
//!
//! Given a built `TypeModel` and the method it appears on, decides whether the
//! type may be used as a parameter or return type of a generated API:
//! - `checker`: the `Checker` trait, the basic-argument and value-object rules
//! - `container`: `List` / `Set` / `Map` legality over the base rules
//! - `usage`: per-position composition of every rule
//! - `validator`: whole-signature validation producing diagnostics

pub mod checker;
pub mod config;
pub mod container;
mod error;
pub mod method;
pub mod usage;
pub mod validator;

pub use checker::{Checker, LegalArgumentChecker, ValueObjectChecker};
pub use config::LegalityConfig;
pub use container::ContainerChecker;
pub use error::CheckError;
pub use method::{MethodDecl, MethodSignature, ParamInfo};
pub use usage::{PositionChecker, UsageChecker, UsagePosition};
pub use validator::{SignatureValidator, Verdict};

#[cfg(test)]
#[path = "../tests/checker_tests.rs"]
mod checker_tests;

#[cfg(test)]
#[path = "../tests/container_tests.rs"]
mod container_tests;

#[cfg(test)]
#[path = "../tests/usage_tests.rs"]
mod usage_tests;

#[cfg(test)]
#[path = "../tests/validator_tests.rs"]
mod validator_tests;

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
