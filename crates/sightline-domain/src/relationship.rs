//! Relationship entity - directed edges between CTIM entities

use crate::id::TransientId;
use serde::Serialize;

/// Kind of edge between two CTIM entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipType {
    /// judgement→indicator and sighting→judgement edges
    #[serde(rename = "based-on")]
    BasedOn,
    /// sighting→indicator edges
    #[serde(rename = "sighting-of")]
    SightingOf,
}

/// A directed edge connecting two previously constructed entities.
///
/// Per event, the full cross product of the (possibly empty) judgement list
/// against the singleton indicator and sighting is generated; see the
/// builder in `sightline-mapper`.
#[derive(Debug, Clone, Serialize)]
pub struct Relationship {
    /// Transient identifier of this edge itself
    pub id: TransientId,
    /// CTIM entity type tag
    #[serde(rename = "type")]
    pub entity_type: &'static str,
    /// CTIM schema version
    pub schema_version: &'static str,
    /// Provenance label
    pub source: &'static str,
    /// Always empty
    pub source_uri: &'static str,
    /// Id of the entity the edge points from
    pub source_ref: TransientId,
    /// Id of the entity the edge points to
    pub target_ref: TransientId,
    /// Edge kind
    pub relationship_type: RelationshipType,
    /// Always empty
    pub external_ids: Vec<String>,
}

impl Relationship {
    /// Create a fresh edge between two entity ids.
    pub fn link(
        source_ref: TransientId,
        relationship_type: RelationshipType,
        target_ref: TransientId,
    ) -> Self {
        Self {
            id: TransientId::new(),
            entity_type: "relationship",
            schema_version: crate::SCHEMA_VERSION,
            source: crate::SOURCE,
            source_uri: "",
            source_ref,
            target_ref,
            relationship_type,
            external_ids: Vec::new(),
        }
    }
}
