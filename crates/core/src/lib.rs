//! Framework-agnostic building blocks for the standard API response envelope.
//!
//! [`envelope::ResponseEnvelope`] is the JSON shape every reply is wrapped in;
//! [`error::CoreError`] names the handler-level failures that map onto it.

pub mod envelope;
pub mod error;

pub use envelope::{reason_phrase, ResponseEnvelope};
pub use error::CoreError;
