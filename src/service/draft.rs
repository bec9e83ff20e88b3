use chrono::{DateTime, LocalResult, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::event::{EventDraft, EventForm};

// Editable-field layout: date plus time, no offset. A trailing seconds
// component is tolerated since some pickers emit one.
const FORM_LAYOUT: &str = "%Y-%m-%dT%H:%M";
const FORM_LAYOUT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("End time must be after start time.")]
    EndNotAfterStart,
    #[error("Unrecognized time zone: {0}")]
    UnknownZone(String),
    #[error("Could not read \"{0}\" as a local date and time")]
    UnreadableTime(String),
    #[error("\"{0}\" does not exist in {1}; clocks skip over that time")]
    SkippedTime(String, String),
}

/// Interprets the form's wall-clock `start`/`end` strings in the viewer's
/// zone, renders both as absolute zone-qualified timestamps, and rejects the
/// range unless the end instant strictly follows the start instant. Text
/// fields are trimmed. Pure; the caller decides what to do with the result.
pub fn normalize(form: &EventForm, viewer_zone: &str) -> Result<EventDraft, DraftError> {
    let zone: Tz = viewer_zone
        .parse()
        .map_err(|_| DraftError::UnknownZone(viewer_zone.to_string()))?;

    let start = anchor_local(&form.start, zone, viewer_zone)?;
    let end = anchor_local(&form.end, zone, viewer_zone)?;

    // Ordering is decided on the resolved instants, never on the raw field
    // text; wall-clock comparison misorders ranges across DST transitions.
    if end <= start {
        return Err(DraftError::EndNotAfterStart);
    }

    Ok(EventDraft {
        summary: form.summary.trim().to_string(),
        start: start.to_rfc3339_opts(SecondsFormat::Secs, false),
        end: end.to_rfc3339_opts(SecondsFormat::Secs, false),
        description: form.description.trim().to_string(),
        location: form.location.trim().to_string(),
        time_zone: viewer_zone.to_string(),
    })
}

/// The viewer's IANA zone: an explicit override wins, then the zone the
/// host system reports, then UTC.
pub fn resolve_viewer_zone(override_zone: Option<String>) -> String {
    override_zone
        .filter(|zone| !zone.trim().is_empty())
        .or_else(|| iana_time_zone::get_timezone().ok())
        .unwrap_or_else(|| "UTC".to_string())
}

fn anchor_local(text: &str, zone: Tz, zone_name: &str) -> Result<DateTime<Tz>, DraftError> {
    let trimmed = text.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, FORM_LAYOUT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, FORM_LAYOUT_SECONDS))
        .map_err(|_| DraftError::UnreadableTime(trimmed.to_string()))?;

    match zone.from_local_datetime(&naive) {
        LocalResult::Single(anchored) => Ok(anchored),
        // Fall-back repeats an hour; take the first pass, matching what the
        // wall clock shows when the user types the time.
        LocalResult::Ambiguous(first, _) => Ok(first),
        LocalResult::None => Err(DraftError::SkippedTime(
            trimmed.to_string(),
            zone_name.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn form(start: &str, end: &str) -> EventForm {
        EventForm {
            summary: "  Standup  ".to_string(),
            start: start.to_string(),
            end: end.to_string(),
            description: " daily sync ".to_string(),
            location: " room 4 ".to_string(),
        }
    }

    fn instant(rfc3339: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn anchors_both_ends_in_the_viewer_zone() {
        let draft = normalize(
            &form("2025-03-01T09:00", "2025-03-01T10:00"),
            "America/New_York",
        )
        .unwrap();

        assert_eq!(draft.start, "2025-03-01T09:00:00-05:00");
        assert_eq!(draft.end, "2025-03-01T10:00:00-05:00");
        assert_eq!(
            instant(&draft.end) - instant(&draft.start),
            Duration::hours(1)
        );
        assert_eq!(draft.time_zone, "America/New_York");
    }

    #[test]
    fn trims_text_fields() {
        let draft = normalize(
            &form("2025-03-01T09:00", "2025-03-01T10:00"),
            "America/New_York",
        )
        .unwrap();

        assert_eq!(draft.summary, "Standup");
        assert_eq!(draft.description, "daily sync");
        assert_eq!(draft.location, "room 4");
    }

    #[test]
    fn rejects_end_before_start() {
        let result = normalize(
            &form("2025-03-01T10:00", "2025-03-01T09:00"),
            "America/New_York",
        );
        assert_eq!(result, Err(DraftError::EndNotAfterStart));
    }

    #[test]
    fn rejects_equal_start_and_end() {
        let result = normalize(
            &form("2025-03-01T09:00", "2025-03-01T09:00"),
            "America/New_York",
        );
        assert_eq!(result, Err(DraftError::EndNotAfterStart));
    }

    #[test]
    fn one_wall_hour_across_fall_back_is_two_elapsed_hours() {
        // New York falls back on 2025-11-02: 01:00 resolves to the earlier
        // EDT pass, 02:00 is already EST. Wall clocks show one hour; two
        // hours actually elapse. The range is valid either way.
        let draft = normalize(
            &form("2025-11-02T01:00", "2025-11-02T02:00"),
            "America/New_York",
        )
        .unwrap();

        assert_eq!(draft.start, "2025-11-02T01:00:00-04:00");
        assert_eq!(draft.end, "2025-11-02T02:00:00-05:00");
        assert_eq!(
            instant(&draft.end) - instant(&draft.start),
            Duration::hours(2)
        );
    }

    #[test]
    fn two_wall_hours_across_spring_forward_is_one_elapsed_hour() {
        // 2025-03-09 in New York: 02:00-03:00 does not exist, so a
        // 01:30 to 03:30 range spans a single elapsed hour.
        let draft = normalize(
            &form("2025-03-09T01:30", "2025-03-09T03:30"),
            "America/New_York",
        )
        .unwrap();

        assert_eq!(draft.start, "2025-03-09T01:30:00-05:00");
        assert_eq!(draft.end, "2025-03-09T03:30:00-04:00");
        assert_eq!(
            instant(&draft.end) - instant(&draft.start),
            Duration::hours(1)
        );
    }

    #[test]
    fn equal_wall_times_in_the_repeated_hour_are_rejected() {
        let result = normalize(
            &form("2025-11-02T01:30", "2025-11-02T01:30"),
            "America/New_York",
        );
        assert_eq!(result, Err(DraftError::EndNotAfterStart));
    }

    #[test]
    fn reports_times_skipped_by_spring_forward() {
        let result = normalize(
            &form("2025-03-09T02:30", "2025-03-09T03:30"),
            "America/New_York",
        );
        assert_eq!(
            result,
            Err(DraftError::SkippedTime(
                "2025-03-09T02:30".to_string(),
                "America/New_York".to_string()
            ))
        );
    }

    #[test]
    fn reports_unknown_zones() {
        let result = normalize(&form("2025-03-01T09:00", "2025-03-01T10:00"), "Mars/Olympus");
        assert_eq!(result, Err(DraftError::UnknownZone("Mars/Olympus".to_string())));
    }

    #[test]
    fn reports_unreadable_field_text() {
        let result = normalize(&form("next tuesday", "2025-03-01T10:00"), "America/New_York");
        assert_eq!(
            result,
            Err(DraftError::UnreadableTime("next tuesday".to_string()))
        );
    }

    #[test]
    fn accepts_seconds_in_the_field_text() {
        let draft = normalize(
            &form("2025-03-01T09:00:30", "2025-03-01T10:00"),
            "America/New_York",
        )
        .unwrap();
        assert_eq!(draft.start, "2025-03-01T09:00:30-05:00");
    }

    #[test]
    fn viewer_zone_override_wins() {
        assert_eq!(
            resolve_viewer_zone(Some("Europe/Paris".to_string())),
            "Europe/Paris"
        );
        // A blank override falls through to detection or UTC; either way the
        // result is a non-empty zone name.
        assert!(!resolve_viewer_zone(Some("  ".to_string())).is_empty());
    }
}
