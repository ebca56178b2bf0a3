use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::{ENDPOINT_BASE, REQUEST_TIMEOUT};

/// Sends a single JSON record to the log server.
///
/// Delivery is at-most-once: one attempt, bounded by the timeout, never retried.
#[derive(Debug, Clone)]
pub struct Notifier {
    base_url: String,
    timeout: Duration,
}

impl Notifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Notifier for the fixed local log server
    pub fn local() -> Self {
        Self::new(ENDPOINT_BASE, REQUEST_TIMEOUT)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send `payload` as JSON. Connection errors, timeouts and non-2xx
    /// statuses are all errors.
    pub fn deliver<T: Serialize>(&self, method: Method, path: &str, payload: &T) -> Result<()> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let url = self.url(path);
        client
            .request(method.clone(), &url)
            .json(payload)
            .send()
            .with_context(|| format!("{} {} failed", method, url))?
            .error_for_status()
            .with_context(|| format!("{} {} rejected", method, url))?;

        Ok(())
    }

    /// Best-effort `deliver`: any failure is logged at debug level and dropped.
    /// Returns whether the server accepted the record.
    pub fn notify<T: Serialize>(&self, method: Method, path: &str, payload: &T) -> bool {
        match self.deliver(method, path, payload) {
            Ok(()) => {
                debug!(path, "log record delivered");
                true
            }
            Err(e) => {
                debug!(path, error = %format!("{:#}", e), "log record dropped");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Instant;

    #[test]
    fn test_url_joins_without_double_slash() {
        let notifier = Notifier::new("http://localhost:3210/", REQUEST_TIMEOUT);
        assert_eq!(
            notifier.url("/api/logs/session"),
            "http://localhost:3210/api/logs/session"
        );
    }

    #[test]
    fn test_deliver_sends_json_body() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/logs/response")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"session_id": "s1"})))
            .with_status(200)
            .create();

        let notifier = Notifier::new(server.url(), REQUEST_TIMEOUT);
        notifier
            .deliver(Method::POST, "/api/logs/response", &json!({"session_id": "s1"}))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_deliver_non_success_status_is_error() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/api/logs/session")
            .with_status(500)
            .create();

        let notifier = Notifier::new(server.url(), REQUEST_TIMEOUT);
        let result = notifier.deliver(Method::PATCH, "/api/logs/session", &json!({}));

        assert!(result.is_err());
        mock.assert();
    }

    #[test]
    fn test_notify_swallows_connection_refused() {
        // Nothing listens on port 1
        let notifier = Notifier::new("http://127.0.0.1:1", Duration::from_millis(500));
        assert!(!notifier.notify(Method::POST, "/api/logs/response", &json!({})));
    }

    #[test]
    fn test_notify_gives_up_on_silent_server() {
        // The kernel completes the handshake from the backlog; nothing ever replies
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let notifier = Notifier::new(format!("http://{}", addr), Duration::from_millis(300));

        let started = Instant::now();
        let accepted = notifier.notify(Method::POST, "/api/logs/response", &json!({}));

        assert!(!accepted);
        assert!(
            started.elapsed() < Duration::from_secs(3),
            "request should abort at the timeout, took {:?}",
            started.elapsed()
        );
        drop(listener);
    }

    #[test]
    fn test_notify_reports_success() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/api/logs/session")
            .with_status(204)
            .create();

        let notifier = Notifier::new(server.url(), REQUEST_TIMEOUT);
        assert!(notifier.notify(Method::PATCH, "/api/logs/session", &json!({})));
        mock.assert();
    }
}
