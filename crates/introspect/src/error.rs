use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

/// Why an introspection request produced no usable document.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// No response at all: connection refused, DNS failure, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// A non-2xx status, with the response body.
    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    /// A 2xx response whose body is not JSON. The raw body is kept for diagnostics.
    #[error("Invalid JSON response received: {message}\n{body}")]
    Parse { message: String, body: String },

    /// Valid JSON that does not have the shape of an introspection response.
    #[error("Invalid introspection response: {0}")]
    Invalid(String),
}

impl IntrospectionError {
    /// Short label for the failure class, used in user-facing diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Http(..) => "http",
            Self::Parse { .. } => "parse",
            Self::Invalid(_) => "invalid",
        }
    }
}
