//! HTTP client for the introspection request.
//!
//! One POST per call. There are no retries and no timeout settings: the
//! request either yields a document or one of the [`IntrospectionError`]
//! variants, and the caller decides what to do with the failure.

use crate::{IntrospectionError, IntrospectionResponse, Result, INTROSPECTION_QUERY};

/// Sends the introspection query to a GraphQL endpoint.
///
/// ```no_run
/// use gqlurl_introspect::IntrospectionClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrospectionClient::new();
/// let response = client.execute("https://api.example.com/graphql").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntrospectionClient {
    http: reqwest::Client,
}

impl IntrospectionClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the introspection query against `url`.
    ///
    /// # Errors
    ///
    /// - [`IntrospectionError::Network`] when no response arrives
    /// - [`IntrospectionError::Http`] for a non-2xx status
    /// - [`IntrospectionError::Parse`] when a 2xx body is not JSON
    /// - [`IntrospectionError::Invalid`] when the JSON is not an introspection response
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<IntrospectionResponse> {
        let query_body = serde_json::json!({
            "query": INTROSPECTION_QUERY
        });

        tracing::info!("Sending introspection query");
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(&query_body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %error_body, "HTTP error response");
            return Err(IntrospectionError::Http(status.as_u16(), error_body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let introspection = parse_response(&body)?;

        for error in &introspection.errors {
            tracing::warn!(message = %error.message, "GraphQL error in introspection response");
        }

        tracing::info!(
            types = introspection.types().len(),
            "Introspection successful"
        );

        Ok(introspection)
    }
}

/// Parses a response body, keeping the body text when it is not JSON.
fn parse_response(body: &str) -> Result<IntrospectionResponse> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "Response body is not JSON");
        IntrospectionError::Parse {
            message: e.to_string(),
            body: body.to_string(),
        }
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse introspection response");
        IntrospectionError::Invalid(e.to_string())
    })
}
