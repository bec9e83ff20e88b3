use tokio::sync::mpsc;

use crate::handlers::action::UiAction;

#[derive(Clone)]
pub struct EventBus {
    tx: mpsc::Sender<UiAction>,
}

impl EventBus {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<UiAction>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn emit(&self, action: UiAction) {
        let _ = self.tx.send(action).await;
    }
}
