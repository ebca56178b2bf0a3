use serde::de::IgnoredAny;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// One block of an entry's `content` array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentBlock {
    PlainText(String),
    Typed {
        #[serde(rename = "type")]
        type_: String,
        text: Option<String>,
    },
    Other(IgnoredAny),
}

impl ContentBlock {
    /// Text carried by this block. Only plain strings and `type: "text"`
    /// blocks contribute; tool calls, images and the like are skipped.
    fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::PlainText(text) => Some(text.as_str()),
            ContentBlock::Typed { type_, text } if type_ == "text" => text.as_deref(),
            _ => None,
        }
    }
}

/// Represents a transcript line
#[derive(Debug, Deserialize)]
struct TranscriptEntry {
    role: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
}

impl TranscriptEntry {
    fn is_assistant(&self) -> bool {
        self.role.as_deref() == Some("assistant")
    }

    /// Text fragments of this entry joined by newlines, or `None` if it has none
    fn joined_text(&self) -> Option<String> {
        let fragments: Vec<&str> = self.content.iter().filter_map(ContentBlock::text).collect();
        if fragments.is_empty() {
            None
        } else {
            Some(fragments.join("\n"))
        }
    }
}

/// Find the text of the last assistant entry in a JSONL transcript.
///
/// An unreadable file yields `None`. Blank and malformed lines are skipped.
/// A later assistant entry replaces an earlier one only if it has text.
pub fn last_assistant_response(transcript_path: &str) -> Option<String> {
    let path = Path::new(transcript_path);
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "transcript not readable");
            return None;
        }
    };

    let reader = BufReader::new(file);
    let mut last_response = None;

    for line in reader.split(b'\n') {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "transcript read interrupted");
                break;
            }
        };
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let Ok(entry) = serde_json::from_slice::<TranscriptEntry>(&line) else {
            continue;
        };

        if entry.is_assistant() {
            if let Some(text) = entry.joined_text() {
                last_response = Some(text);
            }
        }
    }

    last_response
}
