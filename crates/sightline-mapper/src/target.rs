//! Endpoint identity extraction from an event's asset record

use crate::path;
use serde_json::Value;
use sightline_domain::ObservableRef;

/// Derive endpoint identity observables from an event's asset sub-record.
///
/// Order is fixed: the NetBIOS hostname first (when present), then each
/// network interface in its original order, IP before MAC per interface.
/// A missing asset record or an empty interface list simply yields fewer
/// entries.
pub fn endpoint_observables(event: &Value) -> Vec<ObservableRef> {
    let mut observables = Vec::new();

    if let Some(name) = path::get_nonempty(event, ".asset.netBiosName") {
        observables.push(ObservableRef::new("hostname", name));
    }

    let interfaces = path::get(event, ".asset.interfaces")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for interface in interfaces {
        if let Some(ip) = nonempty(interface.get("ipAddress")) {
            observables.push(ObservableRef::new("ip", ip));
        }
        if let Some(mac) = nonempty(interface.get("macAddress")) {
            observables.push(ObservableRef::new("mac_address", mac));
        }
    }

    observables
}

fn nonempty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
