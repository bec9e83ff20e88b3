use clap::{Parser, Subcommand};

use crate::handlers::action::{ActionEngine, UiAction};
use crate::models::chat::{ChatAgent, ChatRole};
use crate::models::email::OutgoingEmail;
use crate::models::event::{DayFilter, EventForm};
use crate::runtime::run_once;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the backend whether this session is signed in
    CheckLogin,
    /// List calendar events, today's by default
    Events {
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// List free windows, today's by default
    Availabilities {
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// List today's emails
    Emails,
    /// List contacts
    Contacts,
    /// Send an email
    SendEmail {
        to: String,
        subject: String,
        body: String,
    },
    /// Create a calendar event from local wall-clock times
    CreateEvent {
        summary: String,
        start: String,
        end: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Send one chat message to an assistant agent
    Chat {
        message: String,
        #[arg(long, default_value = "email")]
        agent: String,
    },
}

pub async fn cli(engine: ActionEngine) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command {
        Commands::CheckLogin => {
            run_once(engine.clone(), UiAction::CheckLogin).await;
            let logged_in = engine.view().lock().await.logged_in;
            println!("{}", if logged_in { "Logged in." } else { "Not logged in." });
        }
        Commands::Events { day, month, year } => {
            let filter = DayFilter { day, month, year };
            run_once(engine.clone(), UiAction::FetchEvents { filter }).await;
            print_lines(&engine.view().lock().await.events_panel);
        }
        Commands::Availabilities { day, month, year } => {
            let filter = DayFilter { day, month, year };
            run_once(engine.clone(), UiAction::FetchAvailabilities { filter }).await;
            print_lines(&engine.view().lock().await.availabilities_panel);
        }
        Commands::Emails => {
            run_once(engine.clone(), UiAction::FetchEmails).await;
            print_lines(&engine.view().lock().await.emails_panel);
        }
        Commands::Contacts => {
            run_once(engine.clone(), UiAction::FetchContacts).await;
            print_lines(&engine.view().lock().await.contacts_panel);
        }
        Commands::SendEmail { to, subject, body } => {
            let email = OutgoingEmail { to, subject, body };
            run_once(engine.clone(), UiAction::SubmitEmail { email }).await;
            print_notice(&engine).await;
        }
        Commands::CreateEvent {
            summary,
            start,
            end,
            description,
            location,
        } => {
            let form = EventForm {
                summary,
                start,
                end,
                description,
                location,
            };
            run_once(engine.clone(), UiAction::SubmitEvent { form }).await;
            print_notice(&engine).await;
        }
        Commands::Chat { message, agent } => {
            let Some(agent) = parse_agent(&agent) else {
                println!("Invalid agent {}; expected email, calendar or super", agent);
                return;
            };
            run_once(
                engine.clone(),
                UiAction::ChatMessage {
                    agent,
                    text: message,
                },
            )
            .await;
            let chat = engine.chat();
            let chat = chat.lock().await;
            for line in chat.transcript() {
                if line.role == ChatRole::Assistant {
                    println!("AI: {}", line.text);
                }
            }
        }
    }
}

fn parse_agent(name: &str) -> Option<ChatAgent> {
    match name {
        "email" => Some(ChatAgent::EmailManager),
        "calendar" => Some(ChatAgent::CalendarManager),
        "super" => Some(ChatAgent::SuperManager),
        _ => None,
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
