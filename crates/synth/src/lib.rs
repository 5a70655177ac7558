//! Sample operation URLs from an introspection document.
//!
//! Every field of the `Query` and `Mutation` object types becomes one
//! operation such as `query {user(id: <ID>) { id name }}`, percent-encoded
//! into `<endpoint>?query=...`. The `<ID>` parts are placeholders to be
//! edited by hand; the generated text is not meant to be executed as-is.
//!
//! ```
//! use gqlurl_introspect::IntrospectionResponse;
//! use gqlurl_synth::{synthesize, SynthesisOptions};
//!
//! let response: IntrospectionResponse = serde_json::from_str(r#"{
//!   "data": { "__schema": { "types": [
//!     { "kind": "OBJECT", "name": "Query", "fields": [
//!       { "name": "ping", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
//!     ] }
//!   ] } }
//! }"#).unwrap();
//!
//! let urls = synthesize(&response, "https://api.example.com/graphql/", SynthesisOptions::default());
//! assert_eq!(urls.queries, ["https://api.example.com/graphql?query=query%20%7Bping%28%29%7D"]);
//! assert!(urls.mutations.is_empty());
//! ```

mod operation;
mod url;

pub use operation::{OperationKind, PlaceholderStyle, SynthesisOptions, SynthesizedOperation};
pub use url::{decode_query_component, encode_query_component, normalize_base_url, operation_url};

use gqlurl_introspect::{IntrospectionResponse, IntrospectionSchema, IntrospectionType, TypeKind};
use serde::Serialize;

/// Operation URLs grouped by root type, each in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynthesizedUrls {
    pub queries: Vec<String>,
    pub mutations: Vec<String>,
}

impl SynthesizedUrls {
    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len() + self.mutations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty() && self.mutations.is_empty()
    }
}

/// Operations for every field of every root object type, in document order.
pub fn root_operations(
    schema: &IntrospectionSchema,
    options: SynthesisOptions,
) -> impl Iterator<Item = SynthesizedOperation> + '_ {
    schema
        .types
        .iter()
        .filter_map(|ty| root_kind(ty).map(|kind| (kind, ty)))
        .flat_map(move |(kind, ty)| {
            ty.fields
                .iter()
                .map(move |field| SynthesizedOperation::from_field(kind, field, options))
        })
}

fn root_kind(ty: &IntrospectionType) -> Option<OperationKind> {
    if ty.kind != TypeKind::Object {
        return None;
    }
    ty.name.as_deref().and_then(OperationKind::from_root_name)
}

/// Builds the query and mutation URLs for `response` against `base_url`.
///
/// A single trailing `/` is stripped from `base_url`. A response without a
/// schema, or a schema without `Query`/`Mutation` object types, gives two
/// empty lists.
#[must_use]
#[tracing::instrument(skip(response, options))]
pub fn synthesize(
    response: &IntrospectionResponse,
    base_url: &str,
    options: SynthesisOptions,
) -> SynthesizedUrls {
    let mut urls = SynthesizedUrls::default();

    let Some(schema) = response.schema() else {
        tracing::debug!("Response has no schema, nothing to synthesize");
        return urls;
    };

    warn_on_custom_roots(schema);

    let base_url = normalize_base_url(base_url);
    for operation in root_operations(schema, options) {
        let url = operation.to_url(base_url);
        match operation.kind {
            OperationKind::Query => urls.queries.push(url),
            OperationKind::Mutation => urls.mutations.push(url),
        }
    }

    tracing::info!(
        queries = urls.queries.len(),
        mutations = urls.mutations.len(),
        "Synthesized operation URLs"
    );
    urls
}

/// Roots are matched by literal name only; say so when the schema renames them.
fn warn_on_custom_roots(schema: &IntrospectionSchema) {
    let (query, mutation) = schema.root_names();
    for (declared, kind) in [(query, OperationKind::Query), (mutation, OperationKind::Mutation)] {
        if let Some(name) = declared.filter(|name| *name != kind.root_name()) {
            tracing::warn!(
                declared = name,
                expected = kind.root_name(),
                "Root type has a custom name and will not be matched"
            );
        }
    }
}
