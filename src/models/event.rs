use serde::{Deserialize, Serialize};

pub const UNSPECIFIED_ORGANIZER: &str = "Not specified";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
}

impl CalendarEvent {
    pub fn organizer_label(&self) -> &str {
        self.organizer.as_deref().unwrap_or(UNSPECIFIED_ORGANIZER)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: String,
    pub end: String,
}

/// Raw field values lifted from the create-event form, exactly as typed.
/// `start` and `end` are local wall-clock strings with no offset attached.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub description: String,
    pub location: String,
}

/// Normalized, validated payload for the create-event endpoint. `start` and
/// `end` are absolute zone-qualified timestamps; `time_zone` names the
/// viewer's IANA zone that anchored them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

/// Optional day selector forwarded as query parameters; an empty filter
/// means "today" on the server side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayFilter {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}
