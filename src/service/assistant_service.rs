use async_trait::async_trait;
use reqwest::Client;

use crate::clients::{ApiError, http_api};
use crate::models::chat::{ChatAgent, ChatTurnReply, ChatTurnRequest};
use crate::models::email::{EmailReply, InboxPage, OutgoingEmail};
use crate::models::event::{AvailabilityWindow, CalendarEvent, DayFilter, EventDraft};
use crate::models::session::LoginStatus;

/// Everything the front end asks of the backend. The REST endpoints are
/// external collaborators; this trait is the seam tests replace.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn check_login(&self) -> Result<LoginStatus, ApiError>;
    async fn calendar_events(&self, filter: &DayFilter) -> Result<Vec<CalendarEvent>, ApiError>;
    async fn availabilities(&self, filter: &DayFilter)
    -> Result<Vec<AvailabilityWindow>, ApiError>;
    async fn todays_emails(&self) -> Result<InboxPage, ApiError>;
    async fn contacts(&self) -> Result<Vec<String>, ApiError>;
    async fn send_email(&self, email: &OutgoingEmail) -> Result<serde_json::Value, ApiError>;
    async fn reply_email(&self, reply: &EmailReply) -> Result<serde_json::Value, ApiError>;
    async fn create_event(&self, draft: &EventDraft) -> Result<serde_json::Value, ApiError>;
    async fn chat_turn(
        &self,
        agent: ChatAgent,
        request: &ChatTurnRequest,
    ) -> Result<ChatTurnReply, ApiError>;
}

pub struct AssistantService {
    base_url: String,
    http: Client,
}

impl AssistantService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Signing in is a browser navigation, not a JSON call.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }
}

#[async_trait]
impl AssistantApi for AssistantService {
    async fn check_login(&self) -> Result<LoginStatus, ApiError> {
        http_api::check_login(&self.http, &self.base_url).await
    }

    async fn calendar_events(&self, filter: &DayFilter) -> Result<Vec<CalendarEvent>, ApiError> {
        http_api::calendar_events(&self.http, &self.base_url, filter).await
    }

    async fn availabilities(
        &self,
        filter: &DayFilter,
    ) -> Result<Vec<AvailabilityWindow>, ApiError> {
        http_api::availabilities(&self.http, &self.base_url, filter).await
    }

    async fn todays_emails(&self) -> Result<InboxPage, ApiError> {
        http_api::todays_emails(&self.http, &self.base_url).await
    }

    async fn contacts(&self) -> Result<Vec<String>, ApiError> {
        http_api::contacts(&self.http, &self.base_url).await
    }

    async fn send_email(&self, email: &OutgoingEmail) -> Result<serde_json::Value, ApiError> {
        http_api::send_email(&self.http, &self.base_url, email).await
    }

    async fn reply_email(&self, reply: &EmailReply) -> Result<serde_json::Value, ApiError> {
        http_api::reply_email(&self.http, &self.base_url, reply).await
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<serde_json::Value, ApiError> {
        http_api::create_event(&self.http, &self.base_url, draft).await
    }

    async fn chat_turn(
        &self,
        agent: ChatAgent,
        request: &ChatTurnRequest,
    ) -> Result<ChatTurnReply, ApiError> {
        http_api::chat_turn(&self.http, &self.base_url, agent, request).await
    }
}
