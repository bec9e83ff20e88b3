use std::sync::Arc;

use log::{error, info};
use tokio::sync::Mutex;

use crate::models::chat::{ChatAgent, ChatTurnRequest};
use crate::models::email::{EmailReply, OutgoingEmail};
use crate::models::event::{DayFilter, EventForm};
use crate::service::assistant_service::AssistantApi;
use crate::service::chat_session::ChatSession;
use crate::service::draft;
use crate::view::{self, ViewHandles};

/// One variant per control of the original page: the fetch buttons, the two
/// forms, the chat input, and the login check that ran on load.
#[derive(Debug)]
pub enum UiAction {
    CheckLogin,
    FetchEvents { filter: DayFilter },
    FetchAvailabilities { filter: DayFilter },
    FetchEmails,
    FetchContacts,
    SubmitEmail { email: OutgoingEmail },
    SubmitReply { reply: EmailReply },
    SubmitEvent { form: EventForm },
    ChatMessage { agent: ChatAgent, text: String },
}

/// Runs one UI action to completion: at most one backend call, then a view
/// update. Never panics on a failed call; panels get their error line, forms
/// get a notice, and details go to the log.
#[derive(Clone)]
pub struct ActionEngine {
    api: Arc<dyn AssistantApi>,
    view: Arc<Mutex<ViewHandles>>,
    chat: Arc<Mutex<ChatSession>>,
    viewer_zone: String,
}

impl ActionEngine {
    pub fn new(api: Arc<dyn AssistantApi>, view: Arc<Mutex<ViewHandles>>, viewer_zone: String) -> Self {
        Self {
            api,
            view,
            chat: Arc::new(Mutex::new(ChatSession::new())),
            viewer_zone,
        }
    }

    pub fn view(&self) -> Arc<Mutex<ViewHandles>> {
        self.view.clone()
    }

    pub fn chat(&self) -> Arc<Mutex<ChatSession>> {
        self.chat.clone()
    }

    pub fn viewer_zone(&self) -> &str {
        &self.viewer_zone
    }

    pub async fn handle_action(&self, action: UiAction) {
        match action {
            UiAction::CheckLogin => {
                match self.api.check_login().await {
                    Ok(status) => {
                        let mut view = self.view.lock().await;
                        view.logged_in = status.logged_in;
                    }
                    // The original only logged this; the login button stays.
                    Err(err) => error!("Error checking login status: {}", err),
                }
            }
            UiAction::FetchEvents { filter } => {
                let panel = match self.api.calendar_events(&filter).await {
                    Ok(events) => view::render_events(&events),
                    Err(err) => {
                        error!("Error fetching events: {}", err);
                        view::error_panel(view::EVENTS_ERROR)
                    }
                };
                self.view.lock().await.events_panel = panel;
            }
            UiAction::FetchAvailabilities { filter } => {
                let panel = match self.api.availabilities(&filter).await {
                    Ok(windows) => view::render_availabilities(&windows),
                    Err(err) => {
                        error!("Error fetching availabilities: {}", err);
                        view::error_panel(view::AVAILABILITIES_ERROR)
                    }
                };
                self.view.lock().await.availabilities_panel = panel;
            }
            UiAction::FetchEmails => match self.api.todays_emails().await {
                Ok(page) => {
                    let mut view = self.view.lock().await;
                    view.emails_panel = view::render_emails(&page);
                    view.inbox = Some(page);
                }
                Err(err) => {
                    error!("Error fetching emails: {}", err);
                    let mut view = self.view.lock().await;
                    view.emails_panel = view::error_panel(view::EMAILS_ERROR);
                    view.inbox = None;
                }
            },
            UiAction::FetchContacts => {
                let panel = match self.api.contacts().await {
                    Ok(contacts) => view::render_contacts(&contacts),
                    Err(err) => {
                        error!("Error fetching contacts: {}", err);
                        view::error_panel(view::CONTACTS_ERROR)
                    }
                };
                self.view.lock().await.contacts_panel = panel;
            }
            UiAction::SubmitEmail { email } => {
                let notice = match self.api.send_email(&email).await {
                    Ok(_) => "Email sent successfully!".to_string(),
                    Err(err) => {
                        error!("Error sending email: {}", err);
                        "Error sending email. Please try again.".to_string()
                    }
                };
                self.view.lock().await.notice = Some(notice);
            }
            UiAction::SubmitReply { reply } => {
                let notice = match self.api.reply_email(&reply).await {
                    Ok(_) => "Reply sent successfully!".to_string(),
                    Err(err) => {
                        error!("Error replying to email: {}", err);
                        "Error replying to email. Please try again.".to_string()
                    }
                };
                self.view.lock().await.notice = Some(notice);
            }
            UiAction::SubmitEvent { form } => {
                // Validation failures block submission outright; the
                // endpoint is only reached with a normalized draft.
                let draft = match draft::normalize(&form, &self.viewer_zone) {
                    Ok(draft) => draft,
                    Err(err) => {
                        self.view.lock().await.notice = Some(err.to_string());
                        return;
                    }
                };
                let notice = match self.api.create_event(&draft).await {
                    Ok(details) => {
                        info!("Event details: {}", details);
                        "Event created successfully!".to_string()
                    }
                    Err(err) => {
                        error!("Error creating event: {}", err);
                        "Error creating event. Please check the logs for details.".to_string()
                    }
                };
                self.view.lock().await.notice = Some(notice);
            }
            UiAction::ChatMessage { agent, text } => {
                let message = text.trim().to_string();
                if message.is_empty() {
                    return;
                }
                let request = {
                    let mut chat = self.chat.lock().await;
                    chat.push_user(&message);
                    ChatTurnRequest {
                        input: message,
                        thread_id: chat.thread_id().to_string(),
                    }
                };
                match self.api.chat_turn(agent, &request).await {
                    Ok(reply) => {
                        let mut chat = self.chat.lock().await;
                        for line in &reply.response {
                            chat.push_assistant(line);
                        }
                    }
                    Err(err) => {
                        error!("Error sending message: {}", err);
                        self.chat.lock().await.push_assistant(view::CHAT_FALLBACK);
                    }
                }
            }
        }
    }
}
