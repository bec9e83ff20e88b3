mod common;

use std::fs;
use std::sync::Arc;

use calendarManager::events::queue::EventBus;
use calendarManager::events::worker::run_event_worker;
use calendarManager::handlers::action::{ActionEngine, UiAction};
use calendarManager::models::chat::ChatAgent;
use calendarManager::models::event::{DayFilter, EventForm};
use calendarManager::view::ViewHandles;
use common::ScriptedApi;
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Deserialize)]
struct ScriptLine {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

fn action_for(step: &ScriptLine) -> Option<UiAction> {
    match step.kind.as_str() {
        "check_login" => Some(UiAction::CheckLogin),
        "fetch_events" => Some(UiAction::FetchEvents {
            filter: DayFilter::default(),
        }),
        "fetch_contacts" => Some(UiAction::FetchContacts),
        "chat" => Some(UiAction::ChatMessage {
            agent: ChatAgent::EmailManager,
            text: step.text.clone(),
        }),
        "create_event" => Some(UiAction::SubmitEvent {
            form: EventForm {
                summary: "scripted".to_string(),
                start: step.start.clone(),
                end: step.end.clone(),
                description: String::new(),
                location: String::new(),
            },
        }),
        _ => None,
    }
}

#[tokio::test]
async fn script_drives_the_action_worker() {
    let temp_dir =
        std::env::temp_dir().join(format!("calendarmanager_script_{}", uuid::Uuid::new_v4()));
    let script_path = temp_dir.join("script.jsonl");
    fs::create_dir_all(&temp_dir).unwrap();
    fs::write(
        &script_path,
        r#"{"type":"check_login"}
{"type":"fetch_contacts"}
{"type":"chat","text":"plan my day"}
{"type":"create_event","start":"2025-03-01T09:00","end":"2025-03-01T08:00"}"#,
    )
    .unwrap();

    let mut api = ScriptedApi::new();
    api.contacts = Ok(vec!["ada@example.com".to_string()]);
    api.chat_lines = Ok(vec!["Here is your day.".to_string()]);
    let api = Arc::new(api);

    let view = Arc::new(Mutex::new(ViewHandles::default()));
    let engine = ActionEngine::new(api.clone(), view, "America/New_York".to_string());

    let (bus, rx) = EventBus::new(8);
    let worker = tokio::spawn(run_event_worker(rx, engine.clone()));

    let content = fs::read_to_string(&script_path).unwrap();
    for line in content.lines() {
        let step: ScriptLine = serde_json::from_str(line).unwrap();
        if let Some(action) = action_for(&step) {
            bus.emit(action).await;
        }
    }
    drop(bus);
    let _ = worker.await;

    let view = engine.view();
    let view = view.lock().await;
    assert!(view.logged_in);
    assert_eq!(
        view.contacts_panel,
        vec!["Your Contacts:".to_string(), "ada@example.com".to_string()]
    );
    // The scripted create-event range is inverted, so nothing was submitted.
    assert!(api.created.lock().await.is_empty());
    assert!(view.notice.is_some());

    let chat = engine.chat();
    let chat = chat.lock().await;
    assert_eq!(chat.transcript().len(), 2);
    assert_eq!(chat.transcript()[1].text, "Here is your day.");
}
