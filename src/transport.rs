//! HTTP transport for the Join API.
//!
//! Every call is a blocking GET returning the same JSON envelope.
//! Failures never cross this boundary: API-level errors are logged and
//! the envelope is still returned, transport-level failures are logged
//! and collapse to `None`.

use serde::Deserialize;
use tracing::{debug, warn};

/// One registered device as returned in the envelope's `records`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRecord {
    #[serde(rename = "deviceId")]
    pub device_id: String,
    #[serde(rename = "deviceName")]
    pub device_name: String,
}

/// The JSON object every Join endpoint returns.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
    pub records: Option<Vec<DeviceRecord>>,
}

pub struct Transport {
    client: reqwest::blocking::Client,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET `url` and decode the envelope.
    ///
    /// Returns `Some` whenever the API answered with parseable JSON,
    /// even on `success: false` (the caller may want `errorMessage`).
    /// Network errors, timeouts and non-JSON bodies return `None`.
    pub fn send(&self, url: &str) -> Option<Envelope> {
        debug!("GET {url}");

        let response = match self.client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                if e.is_timeout() {
                    warn!("Join API request timed out");
                } else {
                    warn!("Error in transmission: {e}");
                }
                return None;
            }
        };

        // text() honors the declared charset before we parse JSON
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read Join API response: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => {
                if !envelope.success {
                    warn!(
                        "Join API error: {}",
                        envelope.error_message.as_deref().unwrap_or("unknown error")
                    );
                }
                Some(envelope)
            }
            Err(e) => {
                warn!("Failed to parse Join API response: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on an ephemeral port, returning
    /// the bound address and the server thread.
    fn one_shot_server(body: &'static str) -> (std::net::SocketAddr, std::thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
        });
        (addr, handle)
    }

    #[test]
    fn send_collapses_connection_failure_to_none() {
        let transport = Transport::new();
        // Nothing listens on port 1; the error must not escape send().
        assert!(transport.send("http://127.0.0.1:1/").is_none());
    }

    #[test]
    fn send_returns_error_envelope_with_its_message() {
        let (addr, server) = one_shot_server(r#"{"success": false, "errorMessage": "bad key"}"#);

        let transport = Transport::new();
        let envelope = transport
            .send(&format!("http://{addr}/"))
            .expect("envelope is returned even on success: false");
        assert!(!envelope.success);
        assert_eq!(envelope.error_message.as_deref(), Some("bad key"));

        server.join().expect("server thread");
    }

    #[test]
    fn send_collapses_non_json_body_to_none() {
        let (addr, server) = one_shot_server("<html>not json</html>");

        let transport = Transport::new();
        assert!(transport.send(&format!("http://{addr}/")).is_none());

        server.join().expect("server thread");
    }

    #[test]
    fn decodes_error_envelope() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success": false, "errorMessage": "bad key"}"#)
                .expect("valid envelope");
        assert!(!envelope.success);
        assert_eq!(envelope.error_message.as_deref(), Some("bad key"));
        assert!(envelope.records.is_none());
    }

    #[test]
    fn decodes_device_records() {
        let json = r#"{
            "success": true,
            "records": [
                {"deviceId": "d1", "deviceName": "Phone", "deviceType": 1},
                {"deviceId": "d2", "deviceName": "Tablet"}
            ]
        }"#;
        let envelope: Envelope = serde_json::from_str(json).expect("valid envelope");
        assert!(envelope.success);
        let records = envelope.records.expect("records present");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].device_id, "d1");
        assert_eq!(records[1].device_name, "Tablet");
    }

    #[test]
    fn wrong_typed_records_is_a_parse_failure() {
        let result = serde_json::from_str::<Envelope>(r#"{"success": true, "records": "oops"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn success_defaults_to_false_when_absent() {
        let envelope: Envelope = serde_json::from_str("{}").expect("valid envelope");
        assert!(!envelope.success);
    }
}
