#![allow(dead_code)]

use async_trait::async_trait;
use tokio::sync::Mutex;

use calendarManager::clients::ApiError;
use calendarManager::models::chat::{ChatAgent, ChatTurnReply, ChatTurnRequest};
use calendarManager::models::email::{EmailReply, InboxPage, OutgoingEmail};
use calendarManager::models::event::{AvailabilityWindow, CalendarEvent, DayFilter, EventDraft};
use calendarManager::models::session::LoginStatus;
use calendarManager::service::assistant_service::AssistantApi;

/// Backend stand-in: every endpoint answers with a preset result and
/// records what it was asked, so flow tests can assert both the view and
/// the traffic that produced it.
pub struct ScriptedApi {
    pub login: Result<bool, String>,
    pub events: Result<Vec<CalendarEvent>, String>,
    pub windows: Result<Vec<AvailabilityWindow>, String>,
    pub inbox: Result<InboxPage, String>,
    pub contacts: Result<Vec<String>, String>,
    pub send_email_result: Result<(), String>,
    pub reply_result: Result<(), String>,
    pub create_result: Result<serde_json::Value, String>,
    pub chat_lines: Result<Vec<String>, String>,

    pub created: Mutex<Vec<EventDraft>>,
    pub sent_emails: Mutex<Vec<OutgoingEmail>>,
    pub sent_replies: Mutex<Vec<EmailReply>>,
    pub chat_requests: Mutex<Vec<(ChatAgent, ChatTurnRequest)>>,
    pub event_filters: Mutex<Vec<DayFilter>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            login: Ok(true),
            events: Ok(Vec::new()),
            windows: Ok(Vec::new()),
            inbox: Ok(InboxPage::default()),
            contacts: Ok(Vec::new()),
            send_email_result: Ok(()),
            reply_result: Ok(()),
            create_result: Ok(serde_json::json!({"message": "Event created successfully", "id": "evt-1"})),
            chat_lines: Ok(Vec::new()),
            created: Mutex::new(Vec::new()),
            sent_emails: Mutex::new(Vec::new()),
            sent_replies: Mutex::new(Vec::new()),
            chat_requests: Mutex::new(Vec::new()),
            event_filters: Mutex::new(Vec::new()),
        }
    }
}

fn scripted<T: Clone>(value: &Result<T, String>) -> Result<T, ApiError> {
    match value {
        Ok(inner) => Ok(inner.clone()),
        Err(err) => Err(err.clone().into()),
    }
}

#[async_trait]
impl AssistantApi for ScriptedApi {
    async fn check_login(&self) -> Result<LoginStatus, ApiError> {
        scripted(&self.login).map(|logged_in| LoginStatus { logged_in })
    }

    async fn calendar_events(&self, filter: &DayFilter) -> Result<Vec<CalendarEvent>, ApiError> {
        self.event_filters.lock().await.push(*filter);
        scripted(&self.events)
    }

    async fn availabilities(
        &self,
        _filter: &DayFilter,
    ) -> Result<Vec<AvailabilityWindow>, ApiError> {
        scripted(&self.windows)
    }

    async fn todays_emails(&self) -> Result<InboxPage, ApiError> {
        scripted(&self.inbox)
    }

    async fn contacts(&self) -> Result<Vec<String>, ApiError> {
        scripted(&self.contacts)
    }

    async fn send_email(&self, email: &OutgoingEmail) -> Result<serde_json::Value, ApiError> {
        self.sent_emails.lock().await.push(email.clone());
        scripted(&self.send_email_result).map(|_| serde_json::json!({"message": "ok"}))
    }

    async fn reply_email(&self, reply: &EmailReply) -> Result<serde_json::Value, ApiError> {
        self.sent_replies.lock().await.push(reply.clone());
        scripted(&self.reply_result).map(|_| serde_json::json!({"message": "ok"}))
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<serde_json::Value, ApiError> {
        self.created.lock().await.push(draft.clone());
        scripted(&self.create_result)
    }

    async fn chat_turn(
        &self,
        agent: ChatAgent,
        request: &ChatTurnRequest,
    ) -> Result<ChatTurnReply, ApiError> {
        self.chat_requests.lock().await.push((agent, request.clone()));
        scripted(&self.chat_lines).map(|response| ChatTurnReply { response })
    }
}
