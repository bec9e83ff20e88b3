use log::error;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::clients::ApiError;
use crate::models::chat::{ChatAgent, ChatTurnReply, ChatTurnRequest};
use crate::models::email::{EmailReply, InboxPage, OutgoingEmail};
use crate::models::event::{AvailabilityWindow, CalendarEvent, DayFilter, EventDraft};
use crate::models::session::LoginStatus;

pub async fn check_login(http: &Client, base_url: &str) -> Result<LoginStatus, ApiError> {
    read_json(http.get(format!("{}/check_login", base_url))).await
}

pub async fn calendar_events(
    http: &Client,
    base_url: &str,
    filter: &DayFilter,
) -> Result<Vec<CalendarEvent>, ApiError> {
    let request = with_day_filter(http.get(format!("{}/calendar_events", base_url)), filter);
    read_json(request).await
}

pub async fn availabilities(
    http: &Client,
    base_url: &str,
    filter: &DayFilter,
) -> Result<Vec<AvailabilityWindow>, ApiError> {
    let request = with_day_filter(http.get(format!("{}/availabilities", base_url)), filter);
    read_json(request).await
}

pub async fn todays_emails(http: &Client, base_url: &str) -> Result<InboxPage, ApiError> {
    read_json(http.get(format!("{}/todays_emails", base_url))).await
}

pub async fn contacts(http: &Client, base_url: &str) -> Result<Vec<String>, ApiError> {
    read_json(http.get(format!("{}/contacts", base_url))).await
}

pub async fn send_email(
    http: &Client,
    base_url: &str,
    email: &OutgoingEmail,
) -> Result<serde_json::Value, ApiError> {
    read_json(http.post(format!("{}/send_email", base_url)).json(email)).await
}

pub async fn reply_email(
    http: &Client,
    base_url: &str,
    reply: &EmailReply,
) -> Result<serde_json::Value, ApiError> {
    read_json(http.post(format!("{}/reply_email", base_url)).json(reply)).await
}

pub async fn create_event(
    http: &Client,
    base_url: &str,
    draft: &EventDraft,
) -> Result<serde_json::Value, ApiError> {
    read_json(http.post(format!("{}/create_event", base_url)).json(draft)).await
}

pub async fn chat_turn(
    http: &Client,
    base_url: &str,
    agent: ChatAgent,
    request: &ChatTurnRequest,
) -> Result<ChatTurnReply, ApiError> {
    read_json(
        http.post(format!("{}{}", base_url, agent.endpoint()))
            .json(request),
    )
    .await
}

fn with_day_filter(mut request: RequestBuilder, filter: &DayFilter) -> RequestBuilder {
    if let Some(day) = filter.day {
        request = request.query(&[("day", day)]);
    }
    if let Some(month) = filter.month {
        request = request.query(&[("month", month)]);
    }
    if let Some(year) = filter.year {
        request = request.query(&[("year", year)]);
    }
    request
}

async fn read_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let url = response.url().clone();
    let status = response.status();
    let text = response.text().await?; // read the body once

    if !status.is_success() {
        error!("{} returned {}: {}", url, status, text);
        return Err(format!("Request failed with status {}", status).into());
    }

    let parsed: T = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse JSON: {}\nRaw body: {}", e, text))?;
    Ok(parsed)
}
