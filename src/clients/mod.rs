pub mod http_api;

pub type ApiError = Box<dyn std::error::Error + Send + Sync>;
