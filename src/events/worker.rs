use tokio::sync::mpsc;

use crate::handlers::action::{ActionEngine, UiAction};

/// Drains queued UI actions strictly one at a time; a handler always runs
/// to completion before the next action is taken off the queue. Exits when
/// every bus handle has been dropped.
pub async fn run_event_worker(mut rx: mpsc::Receiver<UiAction>, engine: ActionEngine) {
    while let Some(action) = rx.recv().await {
        engine.handle_action(action).await;
    }
}
