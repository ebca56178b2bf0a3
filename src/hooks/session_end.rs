use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use super::{timestamp, Outcome};
use crate::config::SESSION_PATH;
use crate::input::HookInput;
use crate::notify::Notifier;

/// Body of the `PATCH` marking a session as ended
#[derive(Debug, Serialize)]
pub struct SessionEndPayload<'a> {
    pub session_id: &'a str,
    pub ended_at: String,
    pub end_reason: &'a str,
    pub transcript_path: &'a str,
}

/// Record that the session in `input` has ended.
///
/// Missing optional fields are sent as empty strings.
pub fn run(input: &HookInput, notifier: &Notifier, now: DateTime<Utc>) -> Outcome {
    let Some(session_id) = input.session_id() else {
        debug!("SessionEnd: no session_id, skipping");
        return Outcome::Skipped("missing session_id");
    };

    let payload = SessionEndPayload {
        session_id,
        ended_at: timestamp(now),
        end_reason: input.reason.as_deref().unwrap_or_default(),
        transcript_path: input.transcript_path.as_deref().unwrap_or_default(),
    };

    debug!(session_id, reason = payload.end_reason, "SessionEnd: recording");
    Outcome::from_delivery(notifier.notify(Method::PATCH, SESSION_PATH, &payload))
}
