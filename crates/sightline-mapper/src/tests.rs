//! Integration tests for the observation orchestrator

use crate::error::ObserveError;
use crate::observer::Observer;
use serde_json::{json, Value};
use sightline_transport::{MockSource, TransportError};

const API: &str = "https://api.qualys.test";

fn active_url() -> String {
    format!(
        "{}/ioc/events?state=true&filter=file.hash.md5: \"d41d8cd98f00b204e9800998ecf8427e\"",
        API
    )
}

fn inactive_url() -> String {
    format!(
        "{}/ioc/events?filter=file.hash.md5: \"d41d8cd98f00b204e9800998ecf8427e\"",
        API
    )
}

fn observe_md5(source: MockSource) -> Result<sightline_domain::Bundle, ObserveError> {
    Observer::new(source).observe(API, "md5", "d41d8cd98f00b204e9800998ecf8427e")
}

#[test]
fn test_two_phase_merge_order_and_tagging() {
    let mut source = MockSource::new();
    source.add_events(active_url(), vec![json!({"id": "active-event"})]);
    source.add_events(inactive_url(), vec![json!({"id": "all-event"})]);

    let tracker = source.clone();
    let bundle = observe_md5(source).unwrap();

    assert_eq!(bundle.sightings.len(), 2);
    assert_eq!(
        bundle.sightings[0].external_ids,
        vec![Some("active-event".to_string())]
    );
    assert_eq!(bundle.sightings[0].data.rows, vec![vec!["True".to_string()]]);
    assert_eq!(
        bundle.sightings[1].external_ids,
        vec![Some("all-event".to_string())]
    );
    assert_eq!(
        bundle.sightings[1].data.rows,
        vec![vec!["False".to_string()]]
    );

    // One indicator and one sighting-of edge per event
    assert_eq!(bundle.indicators.len(), 2);
    assert_eq!(bundle.relationships.len(), 2);

    // Active-state query goes out first, and only it carries state=true
    assert_eq!(
        tracker.requests(),
        vec![(active_url(), false), (inactive_url(), false)]
    );
}

#[test]
fn test_phase_overlap_is_not_deduplicated() {
    let event = json!({"id": "seen-twice"});
    let mut source = MockSource::new();
    source.add_events(active_url(), vec![event.clone()]);
    source.add_events(inactive_url(), vec![event]);

    let bundle = observe_md5(source).unwrap();

    assert_eq!(bundle.sightings.len(), 2);
    assert_eq!(bundle.sightings[0].external_ids, bundle.sightings[1].external_ids);
    assert_ne!(bundle.sightings[0].id, bundle.sightings[1].id);
}

#[test]
fn test_unauthorized_then_success_recovers() {
    let mut source = MockSource::new();
    source.add_unauthorized(active_url());
    source.add_events(active_url(), vec![json!({"id": "after-refresh"})]);

    let tracker = source.clone();
    let bundle = observe_md5(source).unwrap();

    assert_eq!(bundle.sightings.len(), 1);
    assert_eq!(
        bundle.sightings[0].external_ids,
        vec![Some("after-refresh".to_string())]
    );

    // Retry went out with a fresh credential, then the inactive phase ran
    assert_eq!(
        tracker.requests(),
        vec![
            (active_url(), false),
            (active_url(), true),
            (inactive_url(), false),
        ]
    );
}

#[test]
fn test_unauthorized_twice_is_a_transport_failure() {
    let mut source = MockSource::new();
    source.add_unauthorized(active_url());
    source.add_unauthorized(active_url());

    let result = observe_md5(source);

    // The final caller must never see a recoverable 401
    match result {
        Err(ObserveError::Transport(TransportError::Status(401))) => {}
        other => panic!("expected a 401 status failure, got {:?}", other),
    }
}

#[test]
fn test_other_status_is_fatal_without_retry() {
    let mut source = MockSource::new();
    source.add_status(active_url(), 503);

    let tracker = source.clone();
    let result = observe_md5(source);

    assert!(matches!(
        result,
        Err(ObserveError::Transport(TransportError::Status(503)))
    ));
    // No retry, no second phase
    assert_eq!(tracker.call_count(), 1);
}

#[test]
fn test_unknown_kind_makes_no_requests() {
    let source = MockSource::new();
    let tracker = source.clone();

    let result = Observer::new(source).observe(API, "registry_key", "HKLM\\x");

    assert!(matches!(result, Err(ObserveError::UnknownKind(k)) if k == "registry_key"));
    assert_eq!(tracker.call_count(), 0);
}

#[test]
fn test_empty_phases_yield_empty_bundle() {
    let bundle = observe_md5(MockSource::new()).unwrap();
    assert!(bundle.is_empty());
}

#[test]
fn test_observe_is_deterministic_apart_from_ids() {
    let event = json!({
        "id": "event-1",
        "dateTime": "2024-05-01T12:00:00.000Z",
        "asset": {"netBiosName": "WS-01", "interfaces": [{"ipAddress": "10.0.0.5"}]},
        "file": {"fileName": "evil.exe", "sha256": "feed"},
        "indicator2": [{"verdict": "MALICIOUS", "threatName": "Trojan.Agent"}],
    });

    let run = |event: Value| {
        let mut source = MockSource::new();
        source.add_events(active_url(), vec![event]);
        let bundle = observe_md5(source).unwrap();
        let mut json = serde_json::to_value(bundle).unwrap();
        strip_ids(&mut json);
        json
    };

    assert_eq!(run(event.clone()), run(event));
}

/// Remove the transient-id fields, the only non-deterministic part of an
/// observation result.
fn strip_ids(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("id");
            map.remove("source_ref");
            map.remove("target_ref");
            for entry in map.values_mut() {
                strip_ids(entry);
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                strip_ids(entry);
            }
        }
        _ => {}
    }
}

#[test]
fn test_list_kinds_is_exposed() {
    let kinds = crate::list_kinds();
    assert_eq!(kinds.len(), 7);
    assert_eq!(kinds[0].type_tag, "md5");
}
