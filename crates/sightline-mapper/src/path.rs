//! Safe nested-field lookup on loosely-structured event records
//!
//! Event records are vendor-supplied JSON with no shape guarantees beyond
//! "documented paths are optionally present". All field access in this
//! crate goes through these accessors, which centralizes the
//! "missing field means default" contract in one place.

use serde_json::Value;

/// Look up a value by a dot-delimited path.
///
/// Paths carry a leading separator, so the first segment is always empty
/// and skipped: `get(event, ".asset.fullOSName")`. Any absent intermediate
/// segment, or an intermediate value that is not an object, yields `None`.
/// Sequence indexing is not supported.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sightline_mapper::path::get;
///
/// let event = json!({"a": {"b": 1}});
/// assert_eq!(get(&event, ".a.b"), Some(&json!(1)));
/// assert_eq!(get(&event, ".a.missing"), None);
/// assert_eq!(get(&json!({"a": 1}), ".a.b"), None);
/// ```
pub fn get<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');

    // Skip the first entry.
    // It is always empty due to the leading separator.
    parts.next();

    let mut result = record;
    for part in parts {
        result = result.as_object()?.get(part)?;
    }

    Some(result)
}

/// String view of a path lookup; non-string values count as absent.
pub fn get_str<'a>(record: &'a Value, path: &str) -> Option<&'a str> {
    get(record, path)?.as_str()
}

/// Owned-string view of a path lookup.
pub fn get_string(record: &Value, path: &str) -> Option<String> {
    get_str(record, path).map(ToOwned::to_owned)
}

/// Non-empty string view of a path lookup.
///
/// Mirrors the truthiness contract of the event schema: an empty string at
/// a documented path means "not set".
pub fn get_nonempty<'a>(record: &'a Value, path: &str) -> Option<&'a str> {
    get_str(record, path).filter(|s| !s.is_empty())
}
