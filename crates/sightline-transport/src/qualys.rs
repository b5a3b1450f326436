//! Qualys IOC API client
//!
//! Blocking HTTP source against a live Qualys IOC instance. The call chain
//! is intentionally synchronous: one observable lookup performs two
//! sequential fetches, each of which may perform one authorization retry,
//! and nothing is shared mutably across calls.

use crate::{CredentialSource, EventSource, TransportError};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default timeout for event fetches (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Event source backed by the Qualys IOC events API.
///
/// Performs a bearer-authenticated GET per prepared URL and expects a JSON
/// array of event records back. Authorization retry policy lives in the
/// orchestrator, not here: this client reports a 401 as
/// [`TransportError::Unauthorized`] and lets the caller decide.
pub struct QualysClient<C: CredentialSource> {
    client: Client,
    credentials: C,
}

impl<C: CredentialSource> QualysClient<C> {
    /// Create a client around a credential source.
    pub fn new(credentials: C) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            client,
            credentials,
        }
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(credentials: C, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            client,
            credentials,
        }
    }
}

impl<C: CredentialSource> EventSource for QualysClient<C> {
    fn events(&self, url: &str, fresh: bool) -> Result<Vec<Value>, TransportError> {
        let token = self.credentials.bearer_token(fresh)?;

        debug!(%url, fresh, "fetching IOC events");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(TransportError::Unauthorized);
        }
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let events = decode_events(&body)?;
        debug!(count = events.len(), "fetched IOC events");
        Ok(events)
    }
}

/// Parse a response body into the expected array of event records.
fn decode_events(body: &str) -> Result<Vec<Value>, TransportError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;

    match parsed {
        Value::Array(events) => Ok(events),
        other => Err(TransportError::Decode(format!(
            "expected a JSON array of events, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Credential source handing out a single pre-issued bearer token.
///
/// `fresh` is a no-op here - the token is whatever the operator configured.
/// A production deployment would swap in a source that exchanges client
/// credentials against the Qualys gateway.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a pre-issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CredentialSource for StaticToken {
    fn bearer_token(&self, _fresh: bool) -> Result<String, TransportError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned HTTP response on an ephemeral port and return
    /// the URL to hit.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/ioc/events?filter=x", addr)
    }

    #[test]
    fn test_static_token_ignores_fresh() {
        let source = StaticToken::new("abc");
        assert_eq!(source.bearer_token(false).unwrap(), "abc");
        assert_eq!(source.bearer_token(true).unwrap(), "abc");
    }

    #[test]
    fn test_decode_events_accepts_array() {
        let events = decode_events(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["id"], 1);
    }

    #[test]
    fn test_decode_events_rejects_non_array() {
        let err = decode_events("{}").unwrap_err();
        match err {
            TransportError::Decode(msg) => assert!(msg.contains("an object"), "{}", msg),
            other => panic!("expected a decode failure, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_events_rejects_invalid_json() {
        let result = decode_events("not json at all");
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }

    #[test]
    fn test_events_decode_error_on_object_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        );
        let client = QualysClient::new(StaticToken::new("abc"));
        let result = client.events(&url, false);
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }

    #[test]
    fn test_events_unauthorized_on_401() {
        let url = serve_once(
            "HTTP/1.1 401 Unauthorized\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let client = QualysClient::new(StaticToken::new("abc"));
        let result = client.events(&url, false);
        assert!(matches!(result, Err(TransportError::Unauthorized)));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&serde_json::json!({})), "an object");
        assert_eq!(json_type_name(&serde_json::json!([])), "an array");
    }

    #[test]
    fn test_connection_error_on_unreachable_host() {
        // Invalid port guarantees a connection-level failure
        let client = QualysClient::with_timeout(
            StaticToken::new("abc"),
            Duration::from_millis(250),
        );
        let result = client.events("http://127.0.0.1:1/ioc/events?filter=x", false);
        assert!(matches!(result, Err(TransportError::Connection(_))));

        let client = QualysClient::new(StaticToken::new("abc"));
        let result = client.events("http://127.0.0.1:1/ioc/events?filter=x", false);
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }
}
