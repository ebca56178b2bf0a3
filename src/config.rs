use std::time::Duration;

/// Base address of the local log server. Fixed; there is no discovery.
pub const ENDPOINT_BASE: &str = "http://localhost:3210";

/// Receives `PATCH` requests marking a session as ended
pub const SESSION_PATH: &str = "/api/logs/session";

/// Receives `POST` requests carrying the last assistant response
pub const RESPONSE_PATH: &str = "/api/logs/response";

/// Upper bound on the single outbound request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Responses longer than this many characters are cut down before sending
pub const MAX_RESPONSE_CHARS: usize = 50_000;

/// Appended to a response after it has been cut to `MAX_RESPONSE_CHARS`
pub const TRUNCATION_MARKER: &str = "\n...(truncated)";
