use crate::error::UploadError;
use crate::upload::types::{UploadPayload, UploadResponse};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

/// Fixed endpoint of the receiving service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/upload";

#[derive(Debug, Clone)]
pub struct UploadClient {
    endpoint: String,
}

impl Default for UploadClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadClient {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// One POST, no retry, no explicit timeout beyond the platform default.
    /// Returns the filename to report in the success message.
    pub async fn upload(&self, payload: &UploadPayload) -> Result<String, UploadError> {
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        log::info!("Response status: {}", status);

        let body = response.text().await?;
        interpret_response(status, &body, &payload.file_name)
    }
}

/// The body is parsed before the status is checked, so a malformed body is an
/// error even on 2xx. An empty body counts as `{}`.
fn interpret_response(
    status: StatusCode,
    body: &str,
    sent_name: &str,
) -> Result<String, UploadError> {
    let parsed: UploadResponse = if body.is_empty() {
        UploadResponse::default()
    } else {
        serde_json::from_str(body)?
    };

    if status.is_success() {
        Ok(parsed.file_name.unwrap_or_else(|| sent_name.to_string()))
    } else if let Some(message) = parsed.error {
        Err(UploadError::Server(message))
    } else {
        Err(UploadError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};

    #[test]
    fn success_body_yields_server_assigned_name() {
        let name = interpret_response(StatusCode::OK, r#"{"fileName":"a.txt"}"#, "sent.txt");
        assert_eq!(name.unwrap(), "a.txt");
    }

    #[test]
    fn empty_success_body_falls_back_to_sent_name() {
        let name = interpret_response(StatusCode::OK, "", "sent.txt");
        assert_eq!(name.unwrap(), "sent.txt");
    }

    #[test]
    fn error_body_message_is_surfaced() {
        let err = interpret_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"disk full"}"#,
            "a.txt",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[rstest]
    #[case(StatusCode::NOT_FOUND, 404)]
    #[case(StatusCode::BAD_GATEWAY, 502)]
    fn status_fallback_when_no_error_field(#[case] status: StatusCode, #[case] code: u16) {
        let err = interpret_response(status, "{}", "a.txt").unwrap_err();
        assert_eq!(err.to_string(), format!("Upload failed with status {}", code));
    }

    #[test]
    fn malformed_body_is_an_error_even_on_success_status() {
        let err = interpret_response(StatusCode::OK, "not json", "a.txt").unwrap_err();
        assert!(matches!(err, UploadError::Body(_)));
    }

    // Minimal one-shot HTTP server: accepts a single connection, reads the
    // whole request, writes a canned response.
    fn serve_one(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/api/upload", addr)
    }

    fn read_request(stream: &mut TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&data[..pos]).to_lowercase();
                let body_len = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= pos + 4 + body_len {
                    return;
                }
            }
        }
    }

    fn payload() -> UploadPayload {
        UploadPayload {
            content: "hello".to_string(),
            file_name: "a.txt".to_string(),
        }
    }

    #[test]
    fn upload_round_trips_against_live_server() {
        let endpoint = serve_one("200 OK", r#"{"fileName":"a.txt"}"#);
        let client = UploadClient::with_endpoint(endpoint);
        let rt = tokio::runtime::Runtime::new().unwrap();
        let name = rt.block_on(client.upload(&payload())).unwrap();
        assert_eq!(name, "a.txt");
    }

    #[test]
    fn upload_surfaces_server_error_message() {
        let endpoint = serve_one("500 Internal Server Error", r#"{"error":"disk full"}"#);
        let client = UploadClient::with_endpoint(endpoint);
        let rt = tokio::runtime::Runtime::new().unwrap();
        let err = rt.block_on(client.upload(&payload())).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let client = UploadClient::with_endpoint("http://127.0.0.1:1/api/upload");
        let rt = tokio::runtime::Runtime::new().unwrap();
        let err = rt.block_on(client.upload(&payload())).unwrap_err();
        assert!(matches!(err, UploadError::Transport(_)));
    }
}
