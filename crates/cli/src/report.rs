//! Text rendering of the synthesized URLs and of fetch failures.

use gqlurl_introspect::IntrospectionError;
use gqlurl_synth::SynthesizedUrls;
use std::fmt::Write;

/// Both URL lists under their headings, one URL per line.
pub fn render(urls: &SynthesizedUrls) -> String {
    let mut out = String::new();
    push_section(&mut out, "Query URLs:", &urls.queries);
    out.push('\n');
    push_section(&mut out, "Mutation URLs:", &urls.mutations);
    out
}

fn push_section(out: &mut String, heading: &str, urls: &[String]) {
    out.push_str(heading);
    out.push('\n');
    for url in urls {
        out.push_str(url);
        out.push('\n');
    }
}

/// One diagnostic line per failure class, naming what went wrong and where.
/// Response bodies are appended after `: ` as received.
pub fn describe_failure(url: &str, error: &IntrospectionError) -> String {
    let mut message = String::new();
    match error {
        IntrospectionError::Network(detail) => {
            let _ = write!(message, "Error during request to {url}: {detail}");
        }
        IntrospectionError::Http(status, body) => {
            let _ = write!(message, "HTTP error {status} from {url}");
            if !body.trim().is_empty() {
                let _ = write!(message, ": {}", body.trim());
            }
        }
        IntrospectionError::Parse { body, .. } => {
            let _ = write!(message, "Invalid JSON response received from {url}: {}", body.trim());
        }
        IntrospectionError::Invalid(detail) => {
            let _ = write!(
                message,
                "Response from {url} is not an introspection result: {detail}"
            );
        }
    }
    message
}
