//! A single sample operation built from one root field.

use gqlurl_introspect::{IntrospectionField, IntrospectionTypeRef, TypeKind};
use serde::Serialize;

/// Which root type a field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Matches the literal root type names `Query` and `Mutation`.
    ///
    /// Renamed roots (`schema { query: RootQuery }`) are not recognized.
    #[must_use]
    pub fn from_root_name(name: &str) -> Option<Self> {
        match name {
            "Query" => Some(Self::Query),
            "Mutation" => Some(Self::Mutation),
            _ => None,
        }
    }

    #[must_use]
    pub const fn root_name(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }

    /// Operation keyword used in the document text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How an argument's type is written inside its `<...>` placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// The `name` of the argument's type reference as-is. Wrapped types
    /// (`ID!`, `[String]`) have no name at that level and render as `<>`.
    #[default]
    Immediate,
    /// Full GraphQL type syntax, looking through wrappers: `<ID!>`.
    Unwrapped,
}

impl PlaceholderStyle {
    fn render(self, type_ref: &IntrospectionTypeRef) -> String {
        match self {
            Self::Immediate => type_ref.name.clone().unwrap_or_default(),
            Self::Unwrapped => type_ref.to_type_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub placeholder_style: PlaceholderStyle,
}

/// One root field rendered as a sample operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedOperation {
    pub kind: OperationKind,
    pub field_name: String,
    /// `(argument name, placeholder type)` in declaration order.
    pub arguments: Vec<(String, String)>,
    /// Directly scalar sub-fields of the return type, in order.
    pub selection: Vec<String>,
}

impl SynthesizedOperation {
    /// Builds the operation for `field`.
    ///
    /// Only the return type's own `fields` are inspected; nested object types
    /// are never descended into.
    #[must_use]
    pub fn from_field(
        kind: OperationKind,
        field: &IntrospectionField,
        options: SynthesisOptions,
    ) -> Self {
        let arguments = field
            .args
            .iter()
            .map(|arg| {
                (
                    arg.name.clone(),
                    options.placeholder_style.render(&arg.type_ref),
                )
            })
            .collect();

        let selection = field
            .type_ref
            .fields
            .iter()
            .filter(|sub_field| sub_field.type_ref.kind == TypeKind::Scalar)
            .map(|sub_field| sub_field.name.clone())
            .collect();

        Self {
            kind,
            field_name: field.name.clone(),
            arguments,
            selection,
        }
    }

    /// The field with its arguments and, when there is one, its selection set.
    ///
    /// ```
    /// # use gqlurl_synth::{OperationKind, SynthesizedOperation};
    /// let op = SynthesizedOperation {
    ///     kind: OperationKind::Query,
    ///     field_name: "user".to_string(),
    ///     arguments: vec![("id".to_string(), "ID".to_string())],
    ///     selection: vec!["id".to_string(), "name".to_string()],
    /// };
    /// assert_eq!(op.body(), "user(id: <ID>) { id name }");
    /// assert_eq!(op.document(), "query {user(id: <ID>) { id name }}");
    /// ```
    #[must_use]
    pub fn body(&self) -> String {
        let args = self
            .arguments
            .iter()
            .map(|(name, placeholder)| format!("{name}: <{placeholder}>"))
            .collect::<Vec<_>>()
            .join(", ");

        if self.selection.is_empty() {
            format!("{}({args})", self.field_name)
        } else {
            format!(
                "{}({args}) {{ {} }}",
                self.field_name,
                self.selection.join(" ")
            )
        }
    }

    /// Full operation text: `keyword {body}`.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{} {{{}}}", self.kind.keyword(), self.body())
    }

    /// The operation as a `?query=` URL against `base_url`.
    ///
    /// `base_url` is used verbatim; see [`crate::normalize_base_url`].
    #[must_use]
    pub fn to_url(&self, base_url: &str) -> String {
        crate::url::operation_url(base_url, &self.document())
    }
}

impl std::fmt::Display for SynthesizedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.document())
    }
}
