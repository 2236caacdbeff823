//! axum integration for the standard API response envelope.
//!
//! Exposes the status helpers, the handler error type, and the router
//! builder so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod reply;
pub mod router;
pub mod routes;
