//! Type definitions for GraphQL introspection responses.
//!
//! The model is deliberately forgiving: lists may be `null` or absent, names
//! may be `null`, and unknown `kind` strings are kept instead of rejected.
//! A malformed entry in a list of types, fields or arguments is dropped on its
//! own, and a wrongly typed description reads as absent. Only a document
//! whose structure is wrong (for example `types` not being a list) fails.

use crate::query::MAX_TYPE_REF_DEPTH;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    #[serde(default)]
    pub data: Option<IntrospectionData>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<GraphQLError>,
}

impl IntrospectionResponse {
    /// The schema, if the server returned one.
    #[must_use]
    pub fn schema(&self) -> Option<&IntrospectionSchema> {
        self.data.as_ref().map(|data| &data.schema)
    }

    /// All types in the schema, or an empty slice when there is no schema.
    #[must_use]
    pub fn types(&self) -> &[IntrospectionType] {
        self.schema().map_or(&[], |schema| schema.types.as_slice())
    }
}

/// An entry of the GraphQL `errors` array. Only the message is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQLError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Schema information from introspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<NamedTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<NamedTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<NamedTypeRef>,
    #[serde(default, deserialize_with = "skip_invalid")]
    pub types: Vec<IntrospectionType>,
}

impl IntrospectionSchema {
    /// Root type names as declared by `queryType` and `mutationType`.
    #[must_use]
    pub fn root_names(&self) -> (Option<&str>, Option<&str>) {
        (
            self.query_type.as_ref().and_then(NamedTypeRef::name),
            self.mutation_type.as_ref().and_then(NamedTypeRef::name),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedTypeRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedTypeRef {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A named type from the `types` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntrospectionType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Only populated for `OBJECT` and `INTERFACE` kinds.
    #[serde(default, deserialize_with = "skip_invalid")]
    pub fields: Vec<IntrospectionField>,
}

impl IntrospectionType {
    /// Whether this is an `OBJECT` type with exactly the given name.
    #[must_use]
    pub fn is_object_named(&self, name: &str) -> bool {
        self.kind == TypeKind::Object && self.name.as_deref() == Some(name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "skip_invalid")]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_ref: IntrospectionTypeRef,
    #[serde(default, deserialize_with = "lenient")]
    pub is_deprecated: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_ref: IntrospectionTypeRef,
    #[serde(default, deserialize_with = "lenient")]
    pub default_value: Option<String>,
}

/// A possibly wrapped reference to a type.
///
/// `fields` is empty for documents produced by [`crate::INTROSPECTION_QUERY`],
/// which never selects fields on a reference; it is filled only when a
/// document inlines them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
    #[serde(
        default,
        deserialize_with = "skip_invalid",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub fields: Vec<IntrospectionField>,
}

impl IntrospectionTypeRef {
    /// Name of the innermost type, looking through `LIST` and `NON_NULL`.
    ///
    /// Follows at most [`MAX_TYPE_REF_DEPTH`] `ofType` links. A chain that is
    /// still wrapped after that many hops has no name.
    ///
    /// ```
    /// # use gqlurl_introspect::{IntrospectionTypeRef, TypeKind};
    /// let type_ref = IntrospectionTypeRef {
    ///     kind: TypeKind::NonNull,
    ///     of_type: Some(Box::new(IntrospectionTypeRef {
    ///         kind: TypeKind::Scalar,
    ///         name: Some("ID".to_string()),
    ///         ..Default::default()
    ///     })),
    ///     ..Default::default()
    /// };
    /// assert_eq!(type_ref.named_type(), Some("ID"));
    /// ```
    #[must_use]
    pub fn named_type(&self) -> Option<&str> {
        let mut current = self;
        for _ in 0..MAX_TYPE_REF_DEPTH {
            match current.of_type.as_deref() {
                Some(inner) if current.kind.is_wrapper() => current = inner,
                _ => break,
            }
        }
        if current.kind.is_wrapper() {
            return None;
        }
        current.name.as_deref()
    }

    /// Converts the type reference to a GraphQL type string.
    ///
    /// Handles wrappers to produce `String`, `String!`, `[String]` or
    /// `[String!]!`. Nesting deeper than [`MAX_TYPE_REF_DEPTH`] is cut off.
    #[must_use]
    pub fn to_type_string(&self) -> String {
        self.render(0)
    }

    fn render(&self, depth: usize) -> String {
        let inner = self
            .of_type
            .as_deref()
            .filter(|_| depth < MAX_TYPE_REF_DEPTH);
        match self.kind {
            TypeKind::NonNull => inner.map_or_else(
                || "!".to_string(),
                |of_type| format!("{}!", of_type.render(depth + 1)),
            ),
            TypeKind::List => inner.map_or_else(
                || "[]".to_string(),
                |of_type| format!("[{}]", of_type.render(depth + 1)),
            ),
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for IntrospectionTypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_type_string())
    }
}

/// The `__TypeKind` enum. Unknown values survive as [`TypeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    Other(String),
}

impl TypeKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "SCALAR" => Self::Scalar,
            "OBJECT" => Self::Object,
            "INTERFACE" => Self::Interface,
            "UNION" => Self::Union,
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Other(other) => other,
        }
    }

    /// `LIST` and `NON_NULL` wrap another type via `ofType`.
    #[must_use]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}

impl Default for TypeKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Deserializes a list entry by entry, dropping entries that do not fit.
///
/// A `null` or missing list is empty. A value that is not a list at all is
/// still an error.
fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed introspection entry");
                None
            }
        })
        .collect())
}

/// Informational values never reject their parent; a wrong type reads as the default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
