//! Indicator entity

use crate::id::TransientId;
use serde::Serialize;

/// A provenance placeholder linking judgements and sightings to the Qualys
/// IOC detection source.
///
/// Exactly one indicator is synthesized per event. It carries no detection
/// pattern - only provenance metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    /// Transient identifier
    pub id: TransientId,
    /// CTIM entity type tag
    #[serde(rename = "type")]
    pub entity_type: &'static str,
    /// CTIM schema version
    pub schema_version: &'static str,
    /// Provenance label
    pub source: &'static str,
    /// Producing system
    pub producer: &'static str,
    /// Fixed severity level
    pub severity: &'static str,
    /// Validity window; always open-ended here
    pub valid_time: crate::judgement::ValidTime,
    /// The source event's id; a null entry when the event carries none
    pub external_ids: Vec<Option<String>>,
    /// Fixed confidence level
    pub confidence: &'static str,
}
