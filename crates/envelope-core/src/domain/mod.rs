//! Domain model (status codes, the response envelope and its builder).

pub mod builder;
pub mod envelope;
pub mod status;

pub use builder::{EnvelopeParams, ResultEnvelopeBuilder};
pub use envelope::ResultEnvelope;
pub use status::StatusCode;
