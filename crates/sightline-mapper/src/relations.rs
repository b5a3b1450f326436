//! Relation inference over event records
//!
//! A fixed, ordered rule table derives observable-to-observable relations
//! from known sub-paths of an event. A rule only fires when both of its
//! endpoint values are present and non-empty; rules are independent of each
//! other.

use crate::path;
use serde_json::Value;
use sightline_domain::{ObservableRef, ObservedRelation, RelationLabel, SOURCE};

struct Rule {
    source_kind: &'static str,
    source_path: &'static str,
    label: RelationLabel,
    target_kind: &'static str,
    target_path: &'static str,
}

const RULES: [Rule; 7] = [
    // Relations from `.file`.
    Rule {
        source_kind: "file_name",
        source_path: ".file.fileName",
        label: RelationLabel::FileNameOf,
        target_kind: "sha256",
        target_path: ".file.sha256",
    },
    Rule {
        source_kind: "file_name",
        source_path: ".file.fileName",
        label: RelationLabel::FileNameOf,
        target_kind: "md5",
        target_path: ".file.md5",
    },
    Rule {
        source_kind: "file_path",
        source_path: ".file.fullPath",
        label: RelationLabel::FilePathOf,
        target_kind: "sha256",
        target_path: ".file.sha256",
    },
    Rule {
        source_kind: "file_path",
        source_path: ".file.fullPath",
        label: RelationLabel::FilePathOf,
        target_kind: "md5",
        target_path: ".file.md5",
    },
    // Relations from `.process`.
    Rule {
        source_kind: "file_name",
        source_path: ".process.processName",
        label: RelationLabel::ConnectedTo,
        target_kind: "ip",
        target_path: ".network.remoteIP",
    },
    Rule {
        source_kind: "file_name",
        source_path: ".process.processName",
        label: RelationLabel::ConnectedTo,
        target_kind: "domain",
        target_path: ".network.remoteDns",
    },
    // Relations from `.network`.
    Rule {
        source_kind: "ip",
        source_path: ".network.remoteIP",
        label: RelationLabel::ResolvedTo,
        target_kind: "domain",
        target_path: ".network.remoteDns",
    },
];

/// Infer relations from an event record, in rule declaration order.
pub fn infer(event: &Value) -> Vec<ObservedRelation> {
    RULES
        .iter()
        .filter_map(|rule| {
            let source_value = path::get_nonempty(event, rule.source_path)?;
            let target_value = path::get_nonempty(event, rule.target_path)?;

            Some(ObservedRelation {
                origin: SOURCE,
                related: ObservableRef::new(rule.target_kind, target_value),
                relation: rule.label,
                source: ObservableRef::new(rule.source_kind, source_value),
            })
        })
        .collect()
}
