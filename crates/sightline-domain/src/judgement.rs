//! Judgement entity and verdict disposition mapping

use crate::id::TransientId;
use crate::observable::ObservableRef;
use serde::Serialize;

/// The clean/malicious/unknown classification attached to a judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Verdict KNOWN - the observable is considered benign
    Clean,
    /// Verdict MALICIOUS or REMEDIATED
    Malicious,
    /// Verdict UNKNOWN, missing, or unrecognized
    Unknown,
}

impl Disposition {
    /// Map a raw Qualys verdict string onto a disposition.
    ///
    /// Unrecognized or missing verdicts fall back to [`Disposition::Unknown`];
    /// that is normal operation, not an error.
    pub fn from_verdict(verdict: Option<&str>) -> Self {
        match verdict {
            Some("KNOWN") => Disposition::Clean,
            Some("MALICIOUS") | Some("REMEDIATED") => Disposition::Malicious,
            _ => Disposition::Unknown,
        }
    }

    /// CTIM disposition code.
    pub fn code(&self) -> u8 {
        match self {
            Disposition::Clean => 1,
            Disposition::Malicious => 2,
            Disposition::Unknown => 5,
        }
    }

    /// CTIM disposition name.
    pub fn name(&self) -> &'static str {
        match self {
            Disposition::Clean => "Clean",
            Disposition::Malicious => "Malicious",
            Disposition::Unknown => "Unknown",
        }
    }
}

/// A verdict about an observable, one per embedded `indicator2` record.
#[derive(Debug, Clone, Serialize)]
pub struct Judgement {
    /// Transient identifier
    pub id: TransientId,
    /// Fixed confidence level
    pub confidence: &'static str,
    /// Disposition code
    pub disposition: u8,
    /// Disposition name matching the code
    pub disposition_name: &'static str,
    /// The source event's id; a null entry when the event carries none
    pub external_ids: Vec<Option<String>>,
    /// Always empty
    pub external_references: Vec<String>,
    /// The triggering observable
    pub observable: ObservableRef,
    /// Fixed priority
    pub priority: u8,
    /// The verdict's threat name, or empty when it carries none
    pub reason: String,
    /// CTIM schema version
    pub schema_version: &'static str,
    /// Fixed severity level
    pub severity: &'static str,
    /// Provenance label
    pub source: &'static str,
    /// CTIM entity type tag
    #[serde(rename = "type")]
    pub entity_type: &'static str,
    /// Validity window; always open-ended here
    pub valid_time: ValidTime,
}

/// An empty validity window, serialized as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidTime {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_table() {
        assert_eq!(Disposition::from_verdict(Some("KNOWN")), Disposition::Clean);
        assert_eq!(
            Disposition::from_verdict(Some("UNKNOWN")),
            Disposition::Unknown
        );
        assert_eq!(
            Disposition::from_verdict(Some("MALICIOUS")),
            Disposition::Malicious
        );
        assert_eq!(
            Disposition::from_verdict(Some("REMEDIATED")),
            Disposition::Malicious
        );
    }

    #[test]
    fn test_disposition_fallback() {
        assert_eq!(
            Disposition::from_verdict(Some("BOGUS")),
            Disposition::Unknown
        );
        assert_eq!(Disposition::from_verdict(None), Disposition::Unknown);
        // Verdicts are case-sensitive
        assert_eq!(
            Disposition::from_verdict(Some("known")),
            Disposition::Unknown
        );
    }

    #[test]
    fn test_codes_and_names_agree() {
        assert_eq!(Disposition::Clean.code(), 1);
        assert_eq!(Disposition::Clean.name(), "Clean");
        assert_eq!(Disposition::Malicious.code(), 2);
        assert_eq!(Disposition::Malicious.name(), "Malicious");
        assert_eq!(Disposition::Unknown.code(), 5);
        assert_eq!(Disposition::Unknown.name(), "Unknown");
    }

    #[test]
    fn test_valid_time_serializes_as_empty_object() {
        let json = serde_json::to_value(ValidTime::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
