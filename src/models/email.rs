use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSummary {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub internal_date: Option<String>,
    #[serde(default)]
    pub snippet: String,
    // Present when the backend includes Gmail ids; required for replies.
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboxPage {
    #[serde(default)]
    pub emails: Vec<EmailSummary>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailReply {
    pub thread_id: String,
    pub message_id: String,
    pub sender: String,
    pub subject: String,
    pub body: String,
}
