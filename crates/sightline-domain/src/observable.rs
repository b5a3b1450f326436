//! Observable kinds and the closed type registry
//!
//! The set of supported observable kinds is a closed enum rather than a
//! runtime-mutable registry: adding a kind means adding a variant and its
//! three match arms, nothing else changes.

use serde::Serialize;

/// The closed set of observable kinds this module can search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservableKind {
    /// MD5 file hash
    Md5,
    /// SHA256 file hash
    Sha256,
    /// Bare file name
    FileName,
    /// Full file path
    FilePath,
    /// IPv4/IPv6 address (matched against local and remote fields)
    Ip,
    /// Fully-qualified domain name
    Domain,
    /// Named mutex handle
    Mutex,
}

impl ObservableKind {
    /// Every registered kind, in registry order.
    pub const ALL: [ObservableKind; 7] = [
        ObservableKind::Md5,
        ObservableKind::Sha256,
        ObservableKind::FileName,
        ObservableKind::FilePath,
        ObservableKind::Ip,
        ObservableKind::Domain,
        ObservableKind::Mutex,
    ];

    /// Look up a kind by its machine type tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightline_domain::ObservableKind;
    ///
    /// assert_eq!(ObservableKind::of("md5"), Some(ObservableKind::Md5));
    /// assert_eq!(ObservableKind::of("registry_key"), None);
    /// ```
    pub fn of(type_tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.type_tag() == type_tag)
    }

    /// Stable machine identifier for this kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ObservableKind::Md5 => "md5",
            ObservableKind::Sha256 => "sha256",
            ObservableKind::FileName => "file_name",
            ObservableKind::FilePath => "file_path",
            ObservableKind::Ip => "ip",
            ObservableKind::Domain => "domain",
            ObservableKind::Mutex => "mutex",
        }
    }

    /// Human-readable noun phrase, fit for "Search for this {name}".
    pub fn display_name(&self) -> &'static str {
        match self {
            ObservableKind::Md5 => "MD5",
            ObservableKind::Sha256 => "SHA256",
            ObservableKind::FileName => "file name",
            ObservableKind::FilePath => "file path",
            ObservableKind::Ip => "IP",
            ObservableKind::Domain => "domain",
            ObservableKind::Mutex => "mutex",
        }
    }

    /// Qualys query-language filter searching for `value` under this kind.
    ///
    /// IP is the one special case: it ORs the local and remote address
    /// fields. Quote characters inside `value` are NOT escaped - a known
    /// limitation of the upstream query contract, preserved here.
    pub fn filter(&self, value: &str) -> String {
        match self {
            ObservableKind::Md5 => format!("file.hash.md5: \"{}\"", value),
            ObservableKind::Sha256 => format!("file.hash.sha256: \"{}\"", value),
            ObservableKind::FileName => format!("file.name: \"{}\"", value),
            ObservableKind::FilePath => format!("file.fullPath: \"{}\"", value),
            ObservableKind::Ip => format!(
                "network.local.address.ip: \"{}\" or network.remote.address.ip: \"{}\"",
                value, value
            ),
            ObservableKind::Domain => format!("network.remote.address.fqdn: \"{}\"", value),
            ObservableKind::Mutex => format!("handle.name: \"{}\"", value),
        }
    }
}

/// A typed observable value a caller wants intelligence about.
#[derive(Debug, Clone, PartialEq)]
pub struct Observable {
    /// The registered kind
    pub kind: ObservableKind,
    /// The raw value (hash, path, address, ...)
    pub value: String,
}

impl Observable {
    /// Create an observable from a kind and a raw value.
    pub fn new(kind: ObservableKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The wire-shape reference `{type, value}` embedded in CTIM entities.
    pub fn to_ref(&self) -> ObservableRef {
        ObservableRef {
            kind: self.kind.type_tag().to_string(),
            value: self.value.clone(),
        }
    }
}

/// Wire shape of an observable reference embedded in CTIM entities.
///
/// The `type` field is a free-form tag rather than an [`ObservableKind`]:
/// inferred relations and endpoint targets mention types (`hostname`,
/// `mac_address`) that are not searchable kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservableRef {
    /// Observable type tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Observable value
    pub value: String,
}

impl ObservableRef {
    /// Create a reference from a type tag and value.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// One row of the kind listing exposed to the surrounding service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    /// Stable machine identifier
    pub type_tag: &'static str,
    /// Human-readable noun phrase
    pub display_name: &'static str,
}

/// List every registered kind in registry order.
pub fn list_kinds() -> Vec<KindSummary> {
    ObservableKind::ALL
        .iter()
        .map(|k| KindSummary {
            type_tag: k.type_tag(),
            display_name: k.display_name(),
        })
        .collect()
}
