use uuid::Uuid;

use crate::models::chat::{ChatLine, ChatRole};

/// One session's worth of conversation with the assistant agents. The
/// thread id accompanies every turn so the backend can keep its own
/// conversational state; the transcript only grows, in arrival order.
#[derive(Debug)]
pub struct ChatSession {
    thread_id: String,
    transcript: Vec<ChatLine>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            thread_id: Uuid::new_v4().to_string(),
            transcript: Vec::new(),
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn push_user(&mut self, text: &str) {
        self.transcript.push(ChatLine::user(text));
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.transcript.push(ChatLine::assistant(text));
    }

    pub fn transcript(&self) -> &[ChatLine] {
        &self.transcript
    }

    pub fn assistant_lines(&self) -> impl Iterator<Item = &ChatLine> {
        self.transcript
            .iter()
            .filter(|line| line.role == ChatRole::Assistant)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
