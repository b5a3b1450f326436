//! Error types for the mapping engine

use sightline_transport::TransportError;
use thiserror::Error;

/// Errors surfaced from an observation call.
///
/// Missing or oddly-shaped event fields are never errors - they silently
/// produce empty relations, empty judgement lists or null-valued fields.
#[derive(Error, Debug)]
pub enum ObserveError {
    /// The requested observable kind is not in the registry
    #[error("unknown observable kind: {0}")]
    UnknownKind(String),

    /// Transport failure, propagated unchanged from the event source
    #[error(transparent)]
    Transport(#[from] TransportError),
}
