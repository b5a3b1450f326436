//! Event-to-CTIM translation
//!
//! Synthesizes the CTIM entities for a single event: one sighting, zero or
//! more judgements (one per embedded verdict record), one indicator, and
//! the relationship edges connecting them. Every constructor is a pure
//! function of `(observable, event, active)`; all entity state is explicit.

use crate::{path, relations, target};
use serde_json::Value;
use sightline_domain::{
    Bundle, DataColumn, Disposition, Indicator, Judgement, Observable, ObservedTime,
    Relationship, RelationshipType, Sighting, SightingData, SightingTarget, TransientId,
    ValidTime, CONFIDENCE, SCHEMA_VERSION, SEVERITY, SOURCE,
};

/// Map one Qualys event to its CTIM fragments.
///
/// `active` records which query phase produced the event and only shows up
/// in the sighting's data table. Entities get fresh transient ids on every
/// call - mapping the same event twice yields distinct entities, which is
/// intended.
pub fn map_event(observable: &Observable, event: &Value, active: bool) -> Bundle {
    let sighting = build_sighting(observable, event, active);
    let judgements = build_judgements(observable, event);
    let indicator = build_indicator(event);

    // Full cross product of the (possibly empty) judgement list against the
    // singleton sighting and indicator.
    let mut relationships = Vec::new();
    for judgement in &judgements {
        relationships.push(Relationship::link(
            judgement.id.clone(),
            RelationshipType::BasedOn,
            indicator.id.clone(),
        ));
    }
    for judgement in &judgements {
        relationships.push(Relationship::link(
            sighting.id.clone(),
            RelationshipType::BasedOn,
            judgement.id.clone(),
        ));
    }
    relationships.push(Relationship::link(
        sighting.id.clone(),
        RelationshipType::SightingOf,
        indicator.id.clone(),
    ));

    Bundle {
        sightings: vec![sighting],
        judgements,
        indicators: vec![indicator],
        relationships,
    }
}

fn build_sighting(observable: &Observable, event: &Value, active: bool) -> Sighting {
    let observed_time = ObservedTime {
        start_time: path::get_string(event, ".dateTime"),
    };

    Sighting {
        id: TransientId::new(),
        confidence: CONFIDENCE,
        count: 1,
        external_ids: vec![path::get_string(event, ".id")],
        external_references: Vec::new(),
        observables: vec![observable.to_ref()],
        observed_time: observed_time.clone(),
        relations: relations::infer(event),
        schema_version: SCHEMA_VERSION,
        severity: SEVERITY,
        sensor: "endpoint",
        source: SOURCE,
        targets: vec![SightingTarget {
            observables: target::endpoint_observables(event),
            observed_time,
            target_type: "endpoint",
            os: path::get_string(event, ".asset.fullOSName"),
        }],
        entity_type: "sighting",
        description: format!("A Qualys IOC event related to \"{}\"", observable.value),
        data: SightingData {
            columns: vec![DataColumn {
                name: "Active",
                column_type: "string",
            }],
            rows: vec![vec![active_label(active).to_string()]],
            row_count: 1,
        },
    }
}

fn build_judgements(observable: &Observable, event: &Value) -> Vec<Judgement> {
    path::get(event, ".indicator2")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|verdict_record| build_judgement(observable, event, verdict_record))
        .collect()
}

fn build_judgement(observable: &Observable, event: &Value, verdict_record: &Value) -> Judgement {
    let verdict = verdict_record.get("verdict").and_then(Value::as_str);
    let disposition = Disposition::from_verdict(verdict);

    Judgement {
        id: TransientId::new(),
        confidence: CONFIDENCE,
        disposition: disposition.code(),
        disposition_name: disposition.name(),
        external_ids: vec![path::get_string(event, ".id")],
        external_references: Vec::new(),
        observable: observable.to_ref(),
        priority: 90,
        reason: verdict_record
            .get("threatName")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        schema_version: SCHEMA_VERSION,
        severity: SEVERITY,
        source: SOURCE,
        entity_type: "judgement",
        valid_time: ValidTime::default(),
    }
}

fn build_indicator(event: &Value) -> Indicator {
    Indicator {
        id: TransientId::new(),
        entity_type: "indicator",
        schema_version: SCHEMA_VERSION,
        source: SOURCE,
        producer: SOURCE,
        severity: SEVERITY,
        valid_time: ValidTime::default(),
        external_ids: vec![path::get_string(event, ".id")],
        confidence: CONFIDENCE,
    }
}

/// Data-table label for a query phase, matching the upstream wire contract.
fn active_label(active: bool) -> &'static str {
    if active {
        "True"
    } else {
        "False"
    }
}
