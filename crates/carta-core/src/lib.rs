//! Cross-cutting service plumbing: health endpoint, request-id middleware,
//! tracing setup, and shared serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
