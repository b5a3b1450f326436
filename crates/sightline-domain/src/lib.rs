//! Sightline Domain Layer
//!
//! Core types for mapping Qualys IOC events into CTIM (Cisco Threat
//! Intelligence Model) entities. This crate defines the fundamental
//! concepts all other layers depend upon:
//!
//! - **Observable**: a typed indicator value (hash, file path, IP, ...) a
//!   caller wants threat intelligence about, drawn from a closed registry
//!   of kinds
//! - **Sighting**: a report that an observable was seen in a Qualys event
//! - **Judgement**: a clean/malicious/unknown verdict about an observable
//! - **Indicator**: a provenance placeholder naming the detection source
//! - **Relationship**: a directed edge connecting the entities above
//! - **Bundle**: the per-entity-type accumulation returned to callers
//!
//! ## Architecture
//!
//! This crate holds data shapes and the observable registry only. All
//! event interpretation (path lookups, relation inference, entity
//! construction) lives in `sightline-mapper`; all I/O lives in
//! `sightline-transport`.
//!
//! Field names and literal constant values on the CTIM structs are part of
//! the wire contract - a consuming system validates against them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod id;
pub mod indicator;
pub mod judgement;
pub mod observable;
pub mod relationship;
pub mod sighting;

// Re-exports for convenience
pub use bundle::Bundle;
pub use id::TransientId;
pub use indicator::Indicator;
pub use judgement::{Disposition, Judgement, ValidTime};
pub use observable::{list_kinds, KindSummary, Observable, ObservableKind, ObservableRef};
pub use relationship::{Relationship, RelationshipType};
pub use sighting::{
    DataColumn, ObservedRelation, ObservedTime, RelationLabel, Sighting, SightingData,
    SightingTarget,
};

/// CTIM schema version stamped on every emitted entity.
pub const SCHEMA_VERSION: &str = "1.0.16";

/// Provenance label for everything this module produces.
pub const SOURCE: &str = "Qualys IOC";

/// Fixed confidence attached to sightings and judgements.
pub const CONFIDENCE: &str = "High";

/// Fixed severity attached to sightings and judgements.
pub const SEVERITY: &str = "Medium";
