mod document_schema;
mod schema_extraction;

use proc_macro::TokenStream;

/// Attaches a cached JSON Schema to an export document struct.
///
/// Generates a `DocumentSchema` impl whose handle is built once from
/// `schemars::schema_for!` and titled with `name` (defaults to the struct
/// name). The description comes from `description = "..."` or the struct's
/// doc comment.
///
/// ```ignore
/// #[document_schema(name = "trip_plan")]
/// #[derive(Serialize, Deserialize, JsonSchema)]
/// pub struct PlanDocument { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn document_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    document_schema::document_schema(attr, item)
}
