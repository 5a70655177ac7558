//! GraphQL schema introspection.
//!
//! Sends the standard introspection query to an endpoint and deserializes the
//! answer into a forgiving document model.
//!
//! # Examples
//!
//! ```no_run
//! use gqlurl_introspect::execute_introspection;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let introspection = execute_introspection("https://api.example.com/graphql").await?;
//!
//!     for ty in introspection.types() {
//!         println!("{} {:?}", ty.kind, ty.name);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod types;

pub use client::IntrospectionClient;
pub use error::{IntrospectionError, Result};
pub use query::{execute_introspection, INTROSPECTION_QUERY, MAX_TYPE_REF_DEPTH};
pub use types::*;
