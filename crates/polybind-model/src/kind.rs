//! Kind classification.
//!
//! Every declared type is assigned exactly one `Kind` from its fully-qualified
//! name and the flags found on its declaration. The kind is what the legality
//! rules look at; the rest of the model is carried along for the emitter.
//!
//! Resolution order:
//!
//! 1. Exact well-known names (`void`, primitives, boxed primitives, `String`,
//!    the JSON types, the throwable family). Flags are ignored.
//! 2. The container identities `List`, `Set`, `Map`. Flags are ignored.
//! 3. `VALUE_OBJECT` flag, then `API` flag, then `ENUM` flag.
//! 4. Anything else is `Other`.

use crate::names;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Declaration-site facts discovered by the driver.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeclFlags: u8 {
        /// Annotated as a plain data-holding value object.
        const VALUE_OBJECT = 1 << 0;
        /// Annotated as part of the generated API surface.
        const API = 1 << 1;
        /// Declared as an enumeration.
        const ENUM = 1 << 2;
        /// Declared abstract.
        const ABSTRACT = 1 << 3;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Void,
    Primitive,
    BoxedPrimitive,
    String,
    JsonObject,
    JsonArray,
    Enum,
    #[serde(rename = "API_INTERFACE")]
    Api,
    ValueObject,
    List,
    Set,
    Map,
    Throwable,
    /// Opaque bucket for unrecognised, unannotated types.
    Other,
}

impl Kind {
    /// `List`, `Set` or `Map`.
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::List | Kind::Set | Kind::Map)
    }

    /// Primitive, boxed primitive, string or JSON.
    pub const fn is_basic(self) -> bool {
        matches!(
            self,
            Kind::Primitive
                | Kind::BoxedPrimitive
                | Kind::String
                | Kind::JsonObject
                | Kind::JsonArray
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Void => "VOID",
            Kind::Primitive => "PRIMITIVE",
            Kind::BoxedPrimitive => "BOXED_PRIMITIVE",
            Kind::String => "STRING",
            Kind::JsonObject => "JSON_OBJECT",
            Kind::JsonArray => "JSON_ARRAY",
            Kind::Enum => "ENUM",
            Kind::Api => "API_INTERFACE",
            Kind::ValueObject => "VALUE_OBJECT",
            Kind::List => "LIST",
            Kind::Set => "SET",
            Kind::Map => "MAP",
            Kind::Throwable => "THROWABLE",
            Kind::Other => "OTHER",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a name that is recognised regardless of declaration flags.
fn well_known_kind(name: &str) -> Option<Kind> {
    let kind = match name {
        names::VOID | names::VOID_BOXED => Kind::Void,
        names::STRING => Kind::String,
        names::JSON_OBJECT => Kind::JsonObject,
        names::JSON_ARRAY => Kind::JsonArray,
        names::LIST => Kind::List,
        names::SET => Kind::Set,
        names::MAP => Kind::Map,
        _ if names::THROWABLES.contains(&name) => Kind::Throwable,
        _ if names::is_primitive(name) => Kind::Primitive,
        _ if names::is_boxed_primitive(name) => Kind::BoxedPrimitive,
        _ => return None,
    };
    Some(kind)
}

/// Classify a fully-qualified name given its declaration flags.
///
/// Never fails: unrecognised, unannotated names are `Kind::Other`.
pub fn classify(name: &str, flags: DeclFlags) -> Kind {
    if let Some(kind) = well_known_kind(name) {
        return kind;
    }
    if flags.contains(DeclFlags::VALUE_OBJECT) {
        Kind::ValueObject
    } else if flags.contains(DeclFlags::API) {
        Kind::Api
    } else if flags.contains(DeclFlags::ENUM) {
        Kind::Enum
    } else {
        Kind::Other
    }
}

/// Classify from the two annotation flags alone.
pub fn classify_annotated(name: &str, is_value_object: bool, is_api: bool) -> Kind {
    let mut flags = DeclFlags::empty();
    flags.set(DeclFlags::VALUE_OBJECT, is_value_object);
    flags.set(DeclFlags::API, is_api);
    classify(name, flags)
}
