//! Hook handlers. Each takes the parsed stdin event, decides whether there is
//! anything to record, and hands at most one payload to the [`Notifier`].
//!
//! [`Notifier`]: crate::notify::Notifier

use chrono::{DateTime, SecondsFormat, Utc};

pub mod session_end;
pub mod stop;

/// What a hook did with its event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to record; no request was made
    Skipped(&'static str),
    /// The log server accepted the record
    Delivered,
    /// A request was attempted and failed; the record is gone
    Dropped,
}

impl Outcome {
    fn from_delivery(accepted: bool) -> Self {
        if accepted {
            Outcome::Delivered
        } else {
            Outcome::Dropped
        }
    }
}

/// ISO-8601 UTC timestamp with microseconds and an explicit `+00:00` offset
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 5).unwrap();
        assert_eq!(timestamp(now), "2026-10-16T09:30:05.000000+00:00");
    }

    #[test]
    fn test_timestamp_round_trips_as_utc() {
        let now = Utc::now();
        let parsed = DateTime::parse_from_rfc3339(&timestamp(now)).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
