use super::chart::{TemplateRequest, TemplateResponse};
use super::error::AppError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP client for the chart rendering service.
///
/// Always called from a worker thread, never from the UI thread.
pub struct TemplateClient {
    endpoint: String,
    timeout_secs: u64,
}

impl TemplateClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            endpoint: format!("{}/template", server_url.trim_end_matches('/')),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// POST the request and decode the JSON response.
    ///
    /// Any non-2xx status is an `AppError::Api` carrying the status code,
    /// reason phrase and response body, so the UI can show the server's own
    /// explanation of the failure.
    pub fn render(&self, request: &TemplateRequest) -> Result<TemplateResponse, AppError> {
        let response = minreq::post(self.endpoint.as_str())
            .with_timeout(self.timeout_secs)
            .with_json(request)?
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(AppError::Api {
                status: response.status_code,
                reason: response.reason_phrase.clone(),
                body: response.as_str().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::chart::parse_values;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve exactly one canned HTTP response on a loopback port and capture
    /// the raw request (headers + body) for assertions.
    fn spawn_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(rest) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = rest.trim().parse().unwrap();
                }
                let end_of_headers = line == "\r\n" || line == "\n";
                request.push_str(&line);
                if end_of_headers {
                    break;
                }
            }
            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).unwrap();
            request.push_str(&String::from_utf8_lossy(&body_bytes));
            tx.send(request).unwrap();

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    fn request_for(chart_url: &str, values_text: &str) -> TemplateRequest {
        TemplateRequest {
            chart_url: chart_url.to_string(),
            values: parse_values(values_text).unwrap(),
        }
    }

    #[test]
    fn test_render_success() {
        let (server_url, requests) = spawn_server(
            "200 OK",
            r#"{"templates": "foo: bar", "valuesExist": true, "values": "a: 1"}"#,
        );

        let client = TemplateClient::new(&server_url).with_timeout(5);
        let response = client
            .render(&request_for("https://charts.example.com/app.tgz", ""))
            .unwrap();

        assert_eq!(response.templates, "foo: bar");
        assert!(response.values_exist);
        assert_eq!(response.values, "a: 1");

        let raw = requests.recv().unwrap();
        assert!(raw.starts_with("POST /template "));
        assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(raw.contains("\"chartUrl\":\"https://charts.example.com/app.tgz\""));
        assert!(raw.contains("\"values\":{}"));
    }

    #[test]
    fn test_render_api_error_carries_status_and_body() {
        let (server_url, _requests) = spawn_server("500 Internal Server Error", "boom");

        let client = TemplateClient::new(&server_url).with_timeout(5);
        let err = client
            .render(&request_for("https://charts.example.com/app.tgz", ""))
            .unwrap_err();

        match &err {
            AppError::Api {
                status,
                reason,
                body,
            } => {
                assert_eq!(*status, 500);
                assert_eq!(reason, "Internal Server Error");
                assert_eq!(body, "boom");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "API error: 500 Internal Server Error - boom"
        );
    }

    #[test]
    fn test_render_bad_request_is_api_error() {
        let (server_url, _requests) =
            spawn_server("400 Bad Request", "Invalid JSON request body\n");

        let client = TemplateClient::new(&server_url).with_timeout(5);
        let err = client
            .render(&request_for("https://charts.example.com/app.tgz", ""))
            .unwrap_err();
        assert!(matches!(err, AppError::Api { status: 400, .. }));
    }

    #[test]
    fn test_render_connection_refused_is_transport_error() {
        // Bind a port, then drop the listener so nothing is accepting on it
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TemplateClient::new(&format!("http://{}", addr)).with_timeout(5);
        let err = client
            .render(&request_for("https://charts.example.com/app.tgz", ""))
            .unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = TemplateClient::new("http://localhost:8080/");
        assert_eq!(client.endpoint, "http://localhost:8080/template");
    }
}
