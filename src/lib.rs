// jsonshape library entry point

pub mod internal;
pub mod schema;

pub use internal::error::{Error, Result};
pub use schema::{
    sanitize_identifier, DeclarationEmitter, DirectorySource, SchemaKey, SchemaSource,
    SchemaValidator, TypeInferencer, ValueKind,
};
