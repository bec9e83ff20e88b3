use inquire::{Select, Text};

use crate::events::queue::EventBus;
use crate::events::worker::run_event_worker;
use crate::handlers::action::{ActionEngine, UiAction};
use crate::models::chat::{ChatAgent, ChatRole};
use crate::models::email::{EmailReply, OutgoingEmail};
use crate::models::event::{DayFilter, EventForm};

/// Dispatches a single action through the bus and waits for the worker to
/// drain it. The one-shot CLI path and scripted tests both use this.
pub async fn run_once(engine: ActionEngine, action: UiAction) {
    let (bus, rx) = EventBus::new(8);
    let worker = tokio::spawn(run_event_worker(rx, engine));
    bus.emit(action).await;
    drop(bus);
    let _ = worker.await;
}

const SIGN_IN: &str = "Sign in";
const REFRESH_LOGIN: &str = "Refresh login status";
const FETCH_EVENTS: &str = "Fetch events";
const FETCH_AVAILABILITIES: &str = "Fetch availabilities";
const FETCH_EMAILS: &str = "Fetch today's emails";
const FETCH_CONTACTS: &str = "Fetch contacts";
const SEND_EMAIL: &str = "Send an email";
const REPLY_EMAIL: &str = "Reply to an email";
const CREATE_EVENT: &str = "Create an event";
const OPEN_CHAT: &str = "Open chat";
const QUIT: &str = "Quit";

/// Interactive shell: the menu stands in for the page's buttons, prompts
/// for its forms. One choice is handled to completion before the menu is
/// shown again.
pub async fn run_shell(engine: ActionEngine, login_url: String) {
    // The original checked login state on page load.
    engine.handle_action(UiAction::CheckLogin).await;

    loop {
        let logged_in = engine.view().lock().await.logged_in;
        let options = if logged_in {
            vec![
                FETCH_EVENTS,
                FETCH_AVAILABILITIES,
                FETCH_EMAILS,
                FETCH_CONTACTS,
                SEND_EMAIL,
                REPLY_EMAIL,
                CREATE_EVENT,
                OPEN_CHAT,
                REFRESH_LOGIN,
                QUIT,
            ]
        } else {
            vec![SIGN_IN, REFRESH_LOGIN, QUIT]
        };

        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(_) => break,
        };

        match choice {
            SIGN_IN => {
                println!("Open {} in your browser, then refresh the login status here.", login_url);
            }
            REFRESH_LOGIN => {
                engine.handle_action(UiAction::CheckLogin).await;
                let logged_in = engine.view().lock().await.logged_in;
                println!("{}", if logged_in { "Logged in." } else { "Not logged in." });
            }
            FETCH_EVENTS => {
                engine
                    .handle_action(UiAction::FetchEvents {
                        filter: DayFilter::default(),
                    })
                    .await;
                print_lines(&engine.view().lock().await.events_panel);
            }
            FETCH_AVAILABILITIES => {
                engine
                    .handle_action(UiAction::FetchAvailabilities {
                        filter: DayFilter::default(),
                    })
                    .await;
                print_lines(&engine.view().lock().await.availabilities_panel);
            }
            FETCH_EMAILS => {
                engine.handle_action(UiAction::FetchEmails).await;
                print_lines(&engine.view().lock().await.emails_panel);
            }
            FETCH_CONTACTS => {
                engine.handle_action(UiAction::FetchContacts).await;
                print_lines(&engine.view().lock().await.contacts_panel);
            }
            SEND_EMAIL => {
                if let Some(email) = prompt_email_form() {
                    engine.handle_action(UiAction::SubmitEmail { email }).await;
                    print_notice(&engine).await;
                }
            }
            REPLY_EMAIL => {
                reply_flow(&engine).await;
            }
            CREATE_EVENT => {
                if let Some(form) = prompt_event_form() {
                    engine.handle_action(UiAction::SubmitEvent { form }).await;
                    print_notice(&engine).await;
                }
            }
            OPEN_CHAT => {
                chat_loop(&engine).await;
            }
            QUIT => break,
            _ => {}
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

async fn print_notice(engine: &ActionEngine) {
    if let Some(notice) = engine.view().lock().await.take_notice() {
        println!("{}", notice);
    }
}

fn prompt_email_form() -> Option<OutgoingEmail> {
    let to = Text::new("To:").prompt().ok()?;
    let subject = Text::new("Subject:").prompt().ok()?;
    let body = Text::new("Body:").prompt().ok()?;
    Some(OutgoingEmail { to, subject, body })
}

fn prompt_event_form() -> Option<EventForm> {
    let summary = Text::new("Summary:").prompt().ok()?;
    let start = Text::new("Start (YYYY-MM-DDTHH:MM):").prompt().ok()?;
    let end = Text::new("End (YYYY-MM-DDTHH:MM):").prompt().ok()?;
    let description = Text::new("Description:").prompt().ok()?;
    let location = Text::new("Location:").prompt().ok()?;
    Some(EventForm {
        summary,
        start,
        end,
        description,
        location,
    })
}

/// Replying needs the ids from a previously fetched inbox page.
async fn reply_flow(engine: &ActionEngine) {
    let inbox = engine.view().lock().await.inbox.clone();
    let Some(page) = inbox else {
        println!("Fetch today's emails first.");
        return;
    };
    if page.emails.is_empty() {
        println!("No emails to reply to.");
        return;
    }

    let labels: Vec<String> = page
        .emails
        .iter()
        .map(|email| format!("{} (from {})", email.subject, email.sender))
        .collect();
    let Ok(choice) = Select::new("Reply to which email?", labels.clone()).prompt() else {
        return;
    };
    let Some(index) = labels.iter().position(|label| label == &choice) else {
        return;
    };
    let email = &page.emails[index];

    let (Some(thread_id), Some(message_id)) = (&email.thread_id, &email.message_id) else {
        println!("That email did not come with reply ids.");
        return;
    };
    let Ok(body) = Text::new("Reply body:").prompt() else {
        return;
    };

    let reply = EmailReply {
        thread_id: thread_id.clone(),
        message_id: message_id.clone(),
        sender: email.sender.clone(),
        subject: email.subject.clone(),
        body,
    };
    engine.handle_action(UiAction::SubmitReply { reply }).await;
    print_notice(engine).await;
}

async fn chat_loop(engine: &ActionEngine) {
    let agents = [
        ChatAgent::EmailManager,
        ChatAgent::CalendarManager,
        ChatAgent::SuperManager,
    ];
    let labels: Vec<&str> = agents.iter().map(|agent| agent.label()).collect();
    let Ok(choice) = Select::new("Chat with which assistant?", labels.clone()).prompt() else {
        return;
    };
    let Some(index) = labels.iter().position(|label| *label == choice) else {
        return;
    };
    let agent = agents[index];

    println!("Chatting with {}. An empty message closes the chat.", agent.label());
    loop {
        let Ok(message) = Text::new("You:").prompt() else {
            break;
        };
        if message.trim().is_empty() {
            break;
        }

        let before = engine.chat().lock().await.transcript().len();
        engine
            .handle_action(UiAction::ChatMessage {
                agent,
                text: message,
            })
            .await;

        let chat = engine.chat();
        let chat = chat.lock().await;
        for line in &chat.transcript()[before..] {
            match line.role {
                ChatRole::User => {}
                ChatRole::Assistant => println!("AI: {}", line.text),
            }
        }
    }
}
