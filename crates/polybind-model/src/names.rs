//! Fully-qualified names of the host declarations the model treats specially.

pub const VOID: &str = "void";
pub const VOID_BOXED: &str = "java.lang.Void";

pub const STRING: &str = "java.lang.String";
pub const OBJECT: &str = "java.lang.Object";

pub const JSON_OBJECT: &str = "io.vertx.core.json.JsonObject";
pub const JSON_ARRAY: &str = "io.vertx.core.json.JsonArray";

pub const THROWABLE: &str = "java.lang.Throwable";
pub const EXCEPTION: &str = "java.lang.Exception";
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";
pub const ERROR: &str = "java.lang.Error";

pub const LIST: &str = "java.util.List";
pub const SET: &str = "java.util.Set";
pub const MAP: &str = "java.util.Map";

pub const READ_STREAM: &str = "io.vertx.core.streams.ReadStream";
pub const WRITE_STREAM: &str = "io.vertx.core.streams.WriteStream";
pub const HANDLER: &str = "io.vertx.core.Handler";
pub const ITERABLE: &str = "java.lang.Iterable";
pub const ITERATOR: &str = "java.util.Iterator";
pub const FUNCTION: &str = "java.util.function.Function";

/// Primitive names paired with their boxed counterparts.
pub const PRIMITIVES: &[(&str, &str)] = &[
    ("boolean", "java.lang.Boolean"),
    ("byte", "java.lang.Byte"),
    ("short", "java.lang.Short"),
    ("int", "java.lang.Integer"),
    ("long", "java.lang.Long"),
    ("float", "java.lang.Float"),
    ("double", "java.lang.Double"),
    ("char", "java.lang.Character"),
];

pub const THROWABLES: &[&str] = &[THROWABLE, EXCEPTION, RUNTIME_EXCEPTION, ERROR];

/// Boxed counterpart of a primitive name.
pub fn boxed_name(primitive: &str) -> Option<&'static str> {
    PRIMITIVES
        .iter()
        .find(|(name, _)| *name == primitive)
        .map(|(_, boxed)| *boxed)
}

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.iter().any(|(primitive, _)| *primitive == name)
}

pub fn is_boxed_primitive(name: &str) -> bool {
    PRIMITIVES.iter().any(|(_, boxed)| *boxed == name)
}

/// Package part of a fully-qualified name (`""` for the root package).
pub fn package_of(name: &str) -> &str {
    name.rfind('.').map_or("", |pos| &name[..pos])
}

/// Parent of a dotted package name, `None` at the root.
pub fn parent_package(package: &str) -> Option<&str> {
    package.rfind('.').map(|pos| &package[..pos])
}
