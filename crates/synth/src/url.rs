//! URL assembly for synthesized operations.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters and `/` is escaped.
const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Strips a single trailing `/` from the endpoint URL.
#[must_use]
pub fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Percent-encodes operation text for use as a query-string value.
///
/// ```
/// # use gqlurl_synth::encode_query_component;
/// assert_eq!(encode_query_component("query {me}"), "query%20%7Bme%7D");
/// ```
#[must_use]
pub fn encode_query_component(text: &str) -> String {
    utf8_percent_encode(text, QUERY_COMPONENT_SET).to_string()
}

/// Reverses [`encode_query_component`]. Returns `None` for invalid UTF-8.
#[must_use]
pub fn decode_query_component(encoded: &str) -> Option<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// `{base_url}?query={encoded document}`. `base_url` is used as given.
#[must_use]
pub fn operation_url(base_url: &str, document: &str) -> String {
    format!("{base_url}?query={}", encode_query_component(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.example.com/graphql/"),
            "https://api.example.com/graphql"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com/graphql"),
            "https://api.example.com/graphql"
        );
        assert_eq!(normalize_base_url("http://host//"), "http://host/");
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(
            encode_query_component("user(id: <ID>) { id name }"),
            "user%28id%3A%20%3CID%3E%29%20%7B%20id%20name%20%7D"
        );
    }

    #[test]
    fn test_encode_leaves_unreserved_and_slash() {
        assert_eq!(encode_query_component("a-b_c.d~e/f"), "a-b_c.d~e/f");
        assert_eq!(encode_query_component("a+b&c=d"), "a%2Bb%26c%3Dd");
    }

    #[test]
    fn test_encode_non_ascii() {
        let encoded = encode_query_component("héllo");
        assert_eq!(encoded, "h%C3%A9llo");
        assert_eq!(decode_query_component(&encoded).as_deref(), Some("héllo"));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert_eq!(decode_query_component("%FF"), None);
    }

    #[test]
    fn test_operation_url() {
        assert_eq!(
            operation_url("http://localhost/graphql", "query {ping()}"),
            "http://localhost/graphql?query=query%20%7Bping%28%29%7D"
        );
    }
}
