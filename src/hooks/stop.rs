use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use super::{timestamp, Outcome};
use crate::config::{MAX_RESPONSE_CHARS, RESPONSE_PATH, TRUNCATION_MARKER};
use crate::input::HookInput;
use crate::notify::Notifier;
use crate::transcript;

/// Body of the `POST` carrying the last assistant response
#[derive(Debug, Serialize)]
pub struct ResponsePayload<'a> {
    pub session_id: &'a str,
    pub response: String,
    pub timestamp: String,
}

/// Cut `text` to `max_chars` characters plus the truncation marker.
/// Text at or under the limit is returned unchanged.
pub fn truncate_response(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut truncated = text;
            truncated.truncate(cut);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}

/// Forward the latest assistant response in the session transcript
pub fn run(input: &HookInput, notifier: &Notifier, now: DateTime<Utc>) -> Outcome {
    let (Some(session_id), Some(transcript_path)) = (input.session_id(), input.transcript_path())
    else {
        debug!("Stop: session_id or transcript_path missing, skipping");
        return Outcome::Skipped("missing session_id or transcript_path");
    };

    let response = match transcript::last_assistant_response(transcript_path) {
        Some(text) if !text.is_empty() => text,
        _ => {
            debug!(session_id, transcript_path, "Stop: no assistant response found");
            return Outcome::Skipped("no assistant response");
        }
    };

    let payload = ResponsePayload {
        session_id,
        response: truncate_response(response, MAX_RESPONSE_CHARS),
        timestamp: timestamp(now),
    };

    debug!(
        session_id,
        chars = payload.response.chars().count(),
        "Stop: recording response"
    );
    Outcome::from_delivery(notifier.notify(Method::POST, RESPONSE_PATH, &payload))
}
