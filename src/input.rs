use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

/// Input JSON from Claude Code hook system.
///
/// Every field is optional. A field holding anything other than a JSON
/// string is treated as missing rather than rejecting the whole event.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub transcript_path: Option<String>,
    /// Why the session ended (SessionEnd only)
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: Option<String>,
}

impl HookInput {
    /// Session id, or `None` when absent or empty
    pub fn session_id(&self) -> Option<&str> {
        non_empty(&self.session_id)
    }

    /// Transcript path, or `None` when absent or empty
    pub fn transcript_path(&self) -> Option<&str> {
        non_empty(&self.transcript_path)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Read exactly one JSON document from `reader`.
///
/// Malformed JSON is an error; the caller lets it terminate the process.
pub fn read_input<R: Read>(mut reader: R) -> Result<HookInput> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("Failed to read hook input from stdin")?;
    let input: HookInput =
        serde_json::from_str(&buffer).context("Failed to parse hook input as JSON")?;
    Ok(input)
}
