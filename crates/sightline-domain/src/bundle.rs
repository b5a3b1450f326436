//! The per-entity-type result accumulation

use crate::indicator::Indicator;
use crate::judgement::Judgement;
use crate::relationship::Relationship;
use crate::sighting::Sighting;
use serde::Serialize;

/// The result mapping returned from an observation: one ordered-append list
/// per CTIM entity type.
///
/// Lists accumulate across all events and both query phases in encounter
/// order. No identity merging happens - duplicate or near-duplicate entities
/// across events are kept by design, since the active/all phase overlap is
/// itself a signal to downstream consumers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Bundle {
    /// Accumulated sightings
    pub sightings: Vec<Sighting>,
    /// Accumulated judgements
    pub judgements: Vec<Judgement>,
    /// Accumulated indicators
    pub indicators: Vec<Indicator>,
    /// Accumulated relationships
    pub relationships: Vec<Relationship>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another bundle's entities, preserving encounter order.
    pub fn extend(&mut self, other: Bundle) {
        self.sightings.extend(other.sightings);
        self.judgements.extend(other.judgements);
        self.indicators.extend(other.indicators);
        self.relationships.extend(other.relationships);
    }

    /// Total number of entities across all four lists.
    pub fn len(&self) -> usize {
        self.sightings.len()
            + self.judgements.len()
            + self.indicators.len()
            + self.relationships.len()
    }

    /// True when no entities have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle_wire_shape() {
        let json = serde_json::to_value(Bundle::new()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert!(keys.contains(&"sightings".to_string()));
        assert!(keys.contains(&"judgements".to_string()));
        assert!(keys.contains(&"indicators".to_string()));
        assert!(keys.contains(&"relationships".to_string()));
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_len_and_is_empty() {
        let bundle = Bundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.len(), 0);
    }
}
