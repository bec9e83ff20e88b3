use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LoginStatus {
    #[serde(default)]
    pub logged_in: bool,
}
