//! Observation orchestration
//!
//! Runs the two-phase query fetch for an observable, maps every returned
//! event through the builder, and merges the fragments into one bundle.

use crate::builder;
use crate::error::ObserveError;
use serde_json::Value;
use sightline_domain::{Bundle, Observable, ObservableKind};
use sightline_transport::{EventSource, TransportError};
use tracing::{debug, info, warn};

/// Orchestrates observable lookups against an event source.
///
/// Holds no mutable state: separate `observe` calls are independent, so one
/// observer is safe to share across threads when the source is.
pub struct Observer<S: EventSource> {
    source: S,
}

impl<S: EventSource> Observer<S> {
    /// Create an observer around an event source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Retrieve CTIM entities for an observable.
    ///
    /// Issues the active-state query first, then the unfiltered (full)
    /// query; the two result sets overlap by design and are concatenated in
    /// encounter order without deduplication.
    ///
    /// # Errors
    ///
    /// [`ObserveError::UnknownKind`] when `kind` is not registered;
    /// otherwise transport failures propagate unchanged, with one
    /// exception: a 401 is retried once with a fresh credential, and a
    /// second 401 surfaces as a plain status failure.
    pub fn observe(&self, api: &str, kind: &str, value: &str) -> Result<Bundle, ObserveError> {
        let kind = ObservableKind::of(kind)
            .ok_or_else(|| ObserveError::UnknownKind(kind.to_string()))?;
        let observable = Observable::new(kind, value);

        let mut observed = Bundle::new();

        // Exact order: the active-state query first.
        for active in [true, false] {
            let url = events_url(api, &kind.filter(&observable.value), active);
            let events = self.fetch(&url)?;

            debug!(
                kind = kind.type_tag(),
                active,
                count = events.len(),
                "mapping events"
            );

            for event in &events {
                observed.extend(builder::map_event(&observable, event, active));
            }
        }

        info!(
            kind = kind.type_tag(),
            sightings = observed.sightings.len(),
            judgements = observed.judgements.len(),
            relationships = observed.relationships.len(),
            "observation complete"
        );

        Ok(observed)
    }

    fn fetch(&self, url: &str) -> Result<Vec<Value>, TransportError> {
        match self.source.events(url, false) {
            Err(TransportError::Unauthorized) => {
                // Refresh the token if expired.
                warn!("bearer token rejected, retrying once with a fresh one");
                self.source.events(url, true).map_err(|e| match e {
                    // The retry exhausted recovery; report a plain status
                    // failure so the caller never sees a recoverable 401.
                    TransportError::Unauthorized => TransportError::Status(401),
                    other => other,
                })
            }
            result => result,
        }
    }
}

/// Build a URL for pivoting back to the Qualys hunting UI.
///
/// Deterministic and network-free; the filter expression is URL-escaped
/// here, unlike in the events query.
pub fn refer(api: &str, kind: &str, value: &str) -> Result<String, ObserveError> {
    let kind =
        ObservableKind::of(kind).ok_or_else(|| ObserveError::UnknownKind(kind.to_string()))?;

    Ok(format!(
        "{}/ioc/#/hunting?search={}",
        api,
        urlencoding::encode(&kind.filter(value))
    ))
}

fn events_url(api: &str, filter: &str, active: bool) -> String {
    // The filter is deliberately not URL-escaped on this path; the events
    // endpoint expects it verbatim.
    if active {
        format!("{}/ioc/events?state=true&filter={}", api, filter)
    } else {
        format!("{}/ioc/events?filter={}", api, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_phases() {
        let filter = "file.hash.md5: \"x\"";
        assert_eq!(
            events_url("https://api", filter, true),
            "https://api/ioc/events?state=true&filter=file.hash.md5: \"x\""
        );
        assert_eq!(
            events_url("https://api", filter, false),
            "https://api/ioc/events?filter=file.hash.md5: \"x\""
        );
    }

    #[test]
    fn test_refer_escapes_filter() {
        let url = refer("https://api", "md5", "abc").unwrap();
        assert_eq!(
            url,
            "https://api/ioc/#/hunting?search=file.hash.md5%3A%20%22abc%22"
        );
    }

    #[test]
    fn test_refer_is_deterministic() {
        let a = refer("https://api", "ip", "10.0.0.1").unwrap();
        let b = refer("https://api", "ip", "10.0.0.1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_refer_unknown_kind() {
        let result = refer("https://api", "registry_key", "x");
        assert!(matches!(result, Err(ObserveError::UnknownKind(k)) if k == "registry_key"));
    }
}
