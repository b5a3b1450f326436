//! Transient entity identifiers

use serde::Serialize;
use std::fmt;

/// A per-response-only entity identifier of the form `transient:<uuid>`.
///
/// Transient ids are synthesized fresh for every constructed entity and are
/// never persisted or stable across calls. They exist so relationships can
/// reference sightings, judgements and indicators within a single response.
///
/// # Examples
///
/// ```
/// use sightline_domain::TransientId;
///
/// let id = TransientId::new();
/// assert!(id.as_str().starts_with("transient:"));
/// assert_ne!(id, TransientId::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TransientId(String);

impl TransientId {
    /// Generate a fresh transient id backed by a UUIDv4.
    pub fn new() -> Self {
        Self(format!("transient:{}", uuid::Uuid::new_v4()))
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
