//! Sightline Transport Layer
//!
//! Pluggable event sources for the Qualys IOC events API.
//!
//! # Architecture
//!
//! This crate owns the network seam of the mapping engine. The
//! [`EventSource`] trait hands back raw event records for a prepared query
//! URL; the orchestrator in `sightline-mapper` never touches HTTP itself.
//!
//! # Sources
//!
//! - [`MockSource`]: scripted, deterministic source for testing
//! - [`QualysClient`]: blocking HTTP source against a live Qualys instance
//!
//! # Examples
//!
//! ```
//! use sightline_transport::{EventSource, MockSource};
//! use serde_json::json;
//!
//! let mut source = MockSource::new();
//! source.add_events("https://api/ioc/events?filter=x", vec![json!({"id": "e-1"})]);
//!
//! let events = source.events("https://api/ioc/events?filter=x", false).unwrap();
//! assert_eq!(events[0]["id"], "e-1");
//! ```

#![warn(missing_docs)]

pub mod qualys;

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use qualys::{QualysClient, StaticToken, DEFAULT_TIMEOUT_SECS};

/// Errors that can occur while fetching events.
///
/// [`TransportError::Unauthorized`] is the only recoverable variant: the
/// orchestrator retries exactly once with a refreshed credential. Everything
/// else is fatal for the call and propagates to the surrounding service.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The API rejected the bearer credential (HTTP 401)
    #[error("authorization rejected (HTTP 401)")]
    Unauthorized,

    /// Any other non-2xx response status
    #[error("unexpected response status: HTTP {0}")]
    Status(u16),

    /// Network-level failure (connect, DNS, timeout)
    #[error("request failed: {0}")]
    Connection(String),

    /// The body was not a JSON array of event records
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// A source of raw Qualys IOC event records.
///
/// `fresh` asks the source to obtain a new bearer credential before the
/// request instead of reusing a cached one; sources without credentials may
/// ignore it.
pub trait EventSource {
    /// Fetch the list of event records for a prepared query URL.
    fn events(&self, url: &str, fresh: bool) -> Result<Vec<Value>, TransportError>;
}

/// Supplies bearer credentials for the Qualys API.
///
/// Token acquisition and caching are outside this module's scope; an
/// implementation may exchange client credentials, read a vault, or hand
/// out a pre-issued token. `fresh` forces a refresh after a 401.
pub trait CredentialSource {
    /// Return a bearer token, refreshing it when `fresh` is set.
    fn bearer_token(&self, fresh: bool) -> Result<String, TransportError>;
}

/// One scripted reply of a [`MockSource`].
#[derive(Debug, Clone)]
enum MockReply {
    Events(Vec<Value>),
    Unauthorized,
    Status(u16),
}

/// Scripted event source for deterministic testing.
///
/// Replies are queued per URL and consumed in order, so a URL can answer
/// 401 on the first call and succeed on the retry. URLs with no queued
/// reply return an empty event list. Every request is recorded together
/// with its `fresh` flag.
///
/// # Examples
///
/// ```
/// use sightline_transport::{EventSource, MockSource, TransportError};
///
/// let mut source = MockSource::new();
/// source.add_unauthorized("https://api/ioc/events?filter=x");
/// source.add_events("https://api/ioc/events?filter=x", vec![]);
///
/// let first = source.events("https://api/ioc/events?filter=x", false);
/// assert!(matches!(first, Err(TransportError::Unauthorized)));
///
/// let retry = source.events("https://api/ioc/events?filter=x", true);
/// assert!(retry.unwrap().is_empty());
/// assert_eq!(source.requests(), vec![
///     ("https://api/ioc/events?filter=x".to_string(), false),
///     ("https://api/ioc/events?filter=x".to_string(), true),
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    replies: Arc<Mutex<HashMap<String, VecDeque<MockReply>>>>,
    requests: Arc<Mutex<Vec<(String, bool)>>>,
}

impl MockSource {
    /// Create a source with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply carrying the given events for a URL.
    pub fn add_events(&mut self, url: impl Into<String>, events: Vec<Value>) {
        self.push(url.into(), MockReply::Events(events));
    }

    /// Queue an HTTP 401 reply for a URL.
    pub fn add_unauthorized(&mut self, url: impl Into<String>) {
        self.push(url.into(), MockReply::Unauthorized);
    }

    /// Queue a non-401 failure status reply for a URL.
    pub fn add_status(&mut self, url: impl Into<String>, status: u16) {
        self.push(url.into(), MockReply::Status(status));
    }

    /// All requests seen so far, as `(url, fresh)` pairs in call order.
    pub fn requests(&self) -> Vec<(String, bool)> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn push(&mut self, url: String, reply: MockReply) {
        self.replies
            .lock()
            .unwrap()
            .entry(url)
            .or_default()
            .push_back(reply);
    }
}

impl EventSource for MockSource {
    fn events(&self, url: &str, fresh: bool) -> Result<Vec<Value>, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), fresh));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(MockReply::Events(events)) => Ok(events),
            Some(MockReply::Unauthorized) => Err(TransportError::Unauthorized),
            Some(MockReply::Status(status)) => Err(TransportError::Status(status)),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_source_default_empty() {
        let source = MockSource::new();
        let events = source.events("https://api/anything", false).unwrap();
        assert!(events.is_empty());
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_mock_source_replies_in_queue_order() {
        let mut source = MockSource::new();
        source.add_events("u", vec![json!({"id": "first"})]);
        source.add_events("u", vec![json!({"id": "second"})]);

        assert_eq!(source.events("u", false).unwrap()[0]["id"], "first");
        assert_eq!(source.events("u", false).unwrap()[0]["id"], "second");
        // Queue exhausted, back to the default
        assert!(source.events("u", false).unwrap().is_empty());
    }

    #[test]
    fn test_mock_source_error_replies() {
        let mut source = MockSource::new();
        source.add_unauthorized("u");
        source.add_status("u", 503);

        assert!(matches!(
            source.events("u", false),
            Err(TransportError::Unauthorized)
        ));
        assert!(matches!(
            source.events("u", true),
            Err(TransportError::Status(503))
        ));
    }

    #[test]
    fn test_mock_source_records_fresh_flag() {
        let source = MockSource::new();
        source.events("a", false).unwrap();
        source.events("a", true).unwrap();

        assert_eq!(
            source.requests(),
            vec![("a".to_string(), false), ("a".to_string(), true)]
        );
    }

    #[test]
    fn test_mock_source_clone_shares_state() {
        let mut source = MockSource::new();
        source.add_events("u", vec![json!({})]);
        let clone = source.clone();

        clone.events("u", false).unwrap();

        // Both handles see the same request log and consumed queue
        assert_eq!(source.call_count(), 1);
        assert!(source.events("u", false).unwrap().is_empty());
    }
}
