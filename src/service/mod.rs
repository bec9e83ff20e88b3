pub mod assistant_service;
pub mod chat_session;
pub mod draft;
