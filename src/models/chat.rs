use serde::{Deserialize, Serialize};

/// The assistant agents the backend exposes as chat endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAgent {
    EmailManager,
    CalendarManager,
    SuperManager,
}

impl ChatAgent {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ChatAgent::EmailManager => "/email_manager",
            ChatAgent::CalendarManager => "/calendar_manager",
            ChatAgent::SuperManager => "/super_manager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatAgent::EmailManager => "Email manager",
            ChatAgent::CalendarManager => "Calendar manager",
            ChatAgent::SuperManager => "Super manager",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnRequest {
    pub input: String,
    pub thread_id: String,
}

/// Zero or more assistant lines, appended to the transcript in order.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurnReply {
    pub response: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
    pub role: ChatRole,
    pub text: String,
}

impl ChatLine {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}
