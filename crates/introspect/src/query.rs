//! The fixed introspection query.

use crate::{IntrospectionClient, IntrospectionResponse, Result};

/// Number of `ofType` levels requested below a field or argument type.
///
/// Deep enough for wrappers like `[[[String!]!]!]`. Every walk over a
/// [`crate::IntrospectionTypeRef`] stops after this many hops.
pub const MAX_TYPE_REF_DEPTH: usize = 7;

/// Standard GraphQL introspection query sent to every endpoint.
///
/// Requests the root type names, every type with its fields and arguments,
/// and the directive list. Type references nest `ofType` seven levels deep,
/// matching [`MAX_TYPE_REF_DEPTH`].
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types { ...FullType }
    directives {
      name
      description
      locations
      args { ...InputValue }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args { ...InputValue }
    type { ...TypeRef }
    isDeprecated
    deprecationReason
  }
  inputFields { ...InputValue }
  interfaces { ...TypeRef }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes { ...TypeRef }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind name
  ofType { kind name
    ofType { kind name
      ofType { kind name
        ofType { kind name
          ofType { kind name
            ofType { kind name
              ofType { kind name }
            }
          }
        }
      }
    }
  }
}
";

/// Executes the introspection query against `url` with a default client.
///
/// # Examples
///
/// ```no_run
/// # use gqlurl_introspect::execute_introspection;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let response = execute_introspection("https://api.example.com/graphql").await?;
/// println!("Schema has {} types", response.types().len());
/// # Ok(())
/// # }
/// ```
pub async fn execute_introspection(url: &str) -> Result<IntrospectionResponse> {
    IntrospectionClient::new().execute(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_query_is_valid() {
        assert!(INTROSPECTION_QUERY.contains("IntrospectionQuery"));
        assert!(INTROSPECTION_QUERY.contains("__schema"));
        assert!(INTROSPECTION_QUERY.contains("queryType { name }"));
        assert!(INTROSPECTION_QUERY.contains("mutationType { name }"));
        assert!(INTROSPECTION_QUERY.contains("fields(includeDeprecated: true)"));
    }

    #[test]
    fn test_type_ref_fragment_depth_matches_cap() {
        let fragment = INTROSPECTION_QUERY
            .split("fragment TypeRef")
            .nth(1)
            .unwrap_or_default();
        assert_eq!(fragment.matches("ofType").count(), MAX_TYPE_REF_DEPTH);
    }
}
