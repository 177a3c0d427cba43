pub mod schema;
pub mod validation;

pub use schema::{apply_metadata, DocumentSchema, SchemaHandle};
pub use validation::{deserialize_document, validate_payload};
