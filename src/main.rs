#![allow(non_snake_case)]

use std::env;
use std::sync::Arc;

use calendarManager::cli;
use calendarManager::config::{AppConfig, DEFAULT_BASE_URL};
use calendarManager::handlers::action::ActionEngine;
use calendarManager::runtime;
use calendarManager::service::assistant_service::AssistantService;
use calendarManager::service::draft;
use calendarManager::view::ViewHandles;
use tokio::sync::Mutex;

const DEFAULT_RUN_MODE: &str = "shell";

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let base_url = get_prop("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL.to_string());
    let viewer_zone = draft::resolve_viewer_zone(get_prop("TIME_ZONE"));
    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());

    let service = Arc::new(AssistantService::new(base_url));
    let view = Arc::new(Mutex::new(ViewHandles::default()));
    let engine = ActionEngine::new(service.clone(), view, viewer_zone);

    if run_mode == "shell" {
        runtime::run_shell(engine, service.login_url()).await;
    } else if run_mode == "cli" {
        cli::cli(engine).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
