//! Sighting entity and its embedded sub-shapes

use crate::id::TransientId;
use crate::observable::ObservableRef;
use serde::Serialize;

/// A report that an observable was seen in one Qualys IOC event.
///
/// Exactly one sighting is synthesized per event. Each carries the
/// triggering observable, the event's external id and observed time, the
/// inferred observable-to-observable relations, the affected endpoint as a
/// target block, and a one-row data table recording which query phase
/// (active vs. all) produced the event.
#[derive(Debug, Clone, Serialize)]
pub struct Sighting {
    /// Transient identifier
    pub id: TransientId,
    /// Fixed confidence level
    pub confidence: &'static str,
    /// Number of times the observable was seen (always 1 per event)
    pub count: u32,
    /// The source event's id; a null entry when the event carries none
    pub external_ids: Vec<Option<String>>,
    /// Always empty
    pub external_references: Vec<String>,
    /// The triggering observable
    pub observables: Vec<ObservableRef>,
    /// When the event was observed
    pub observed_time: ObservedTime,
    /// Relations inferred from the event record
    pub relations: Vec<ObservedRelation>,
    /// CTIM schema version
    pub schema_version: &'static str,
    /// Fixed severity level
    pub severity: &'static str,
    /// Sensor class that produced the event
    pub sensor: &'static str,
    /// Provenance label
    pub source: &'static str,
    /// The affected endpoint
    pub targets: Vec<SightingTarget>,
    /// CTIM entity type tag
    #[serde(rename = "type")]
    pub entity_type: &'static str,
    /// Human-readable description interpolating the observable value
    pub description: String,
    /// One-row table recording the query phase
    pub data: SightingData,
}

/// Observation time window; only the start is known for IOC events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservedTime {
    /// Event timestamp; null when absent from the record
    pub start_time: Option<String>,
}

/// The endpoint an event was observed on.
#[derive(Debug, Clone, Serialize)]
pub struct SightingTarget {
    /// Endpoint identity observables (hostname, interface IPs and MACs)
    pub observables: Vec<ObservableRef>,
    /// Same window as the enclosing sighting
    pub observed_time: ObservedTime,
    /// Target type tag
    #[serde(rename = "type")]
    pub target_type: &'static str,
    /// Full OS name reported by the asset, when present
    pub os: Option<String>,
}

/// The `Active` data table attached to every sighting.
#[derive(Debug, Clone, Serialize)]
pub struct SightingData {
    /// Column declarations
    pub columns: Vec<DataColumn>,
    /// Row values, stringified
    pub rows: Vec<Vec<String>>,
    /// Number of rows
    pub row_count: u32,
}

/// One column declaration of a sighting data table.
#[derive(Debug, Clone, Serialize)]
pub struct DataColumn {
    /// Column name
    pub name: &'static str,
    /// Column value type
    #[serde(rename = "type")]
    pub column_type: &'static str,
}

/// Label of an inferred observable-to-observable relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelationLabel {
    /// A file name belongs to a hash
    #[serde(rename = "File_Name_Of")]
    FileNameOf,
    /// A file path belongs to a hash
    #[serde(rename = "File_Path_Of")]
    FilePathOf,
    /// A process reached out to a remote address
    #[serde(rename = "Connected_To")]
    ConnectedTo,
    /// A remote address resolved to a domain
    #[serde(rename = "Resolved_To")]
    ResolvedTo,
}

/// A typed relation between two observables found in the same event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservedRelation {
    /// Provenance label
    pub origin: &'static str,
    /// Target observable
    pub related: ObservableRef,
    /// Relation label
    pub relation: RelationLabel,
    /// Source observable
    pub source: ObservableRef,
}
