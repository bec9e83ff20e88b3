//! The shell's visible state. The original front end held a handle to each
//! DOM container and rewrote its fragment after every action; here the
//! handles are explicit fields and a panel is a block of rendered lines.

use crate::models::email::InboxPage;
use crate::models::event::{AvailabilityWindow, CalendarEvent};

pub const EVENTS_ERROR: &str = "Error fetching events. Please try again.";
pub const AVAILABILITIES_ERROR: &str = "Error fetching availabilities. Please try again.";
pub const EMAILS_ERROR: &str = "Error fetching emails. Please try again.";
pub const CONTACTS_ERROR: &str = "Error fetching contacts. Please try again.";
pub const CHAT_FALLBACK: &str = "Sorry, an error occurred. Please try again.";

#[derive(Debug, Default)]
pub struct ViewHandles {
    pub logged_in: bool,
    pub events_panel: Vec<String>,
    pub availabilities_panel: Vec<String>,
    pub emails_panel: Vec<String>,
    pub contacts_panel: Vec<String>,
    /// One-shot message shown after form submissions and validation
    /// failures; the shell prints and clears it.
    pub notice: Option<String>,
    /// Last fetched inbox, kept so a reply can reference its ids.
    pub inbox: Option<InboxPage>,
}

impl ViewHandles {
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

pub fn render_events(events: &[CalendarEvent]) -> Vec<String> {
    let mut lines = vec!["Your Upcoming Events:".to_string()];
    for event in events {
        lines.push(format!("Summary: {}", event.summary));
        lines.push(format!("Start: {}", event.start));
        lines.push(format!("End: {}", event.end));
        lines.push(format!("Organizer: {}", event.organizer_label()));
        lines.push(format!("Description: {}", event.description));
        lines.push(format!("Location: {}", event.location));
        lines.push(format!("Status: {}", event.status));
        lines.push(String::new());
    }
    lines
}

pub fn render_availabilities(windows: &[AvailabilityWindow]) -> Vec<String> {
    let mut lines = vec!["Your Availabilities:".to_string()];
    for window in windows {
        lines.push(format!("Start: {}", window.start));
        lines.push(format!("End: {}", window.end));
        lines.push(String::new());
    }
    lines
}

pub fn render_emails(page: &InboxPage) -> Vec<String> {
    let mut lines = vec!["Today's Emails:".to_string()];
    if page.emails.is_empty() {
        lines.push("No emails found for today.".to_string());
    }
    for email in &page.emails {
        lines.push(format!("Subject: {}", email.subject));
        lines.push(format!("From: {}", email.sender));
        lines.push(format!("Date: {}", email.date));
        if let Some(received) = &email.internal_date {
            lines.push(format!("Received: {}", received));
        }
        lines.push(format!("Snippet: {}", email.snippet));
        lines.push(String::new());
    }
    lines.push(format!("Total results: {}", page.total_results));
    lines.push(format!("Query used: {}", page.query));
    lines
}

pub fn render_contacts(contacts: &[String]) -> Vec<String> {
    let mut lines = vec!["Your Contacts:".to_string()];
    lines.extend(contacts.iter().cloned());
    lines
}

pub fn error_panel(message: &str) -> Vec<String> {
    vec![message.to_string()]
}
