pub mod alert;
pub mod api_error;
pub mod config;
pub mod envelope;
pub mod load_state;
pub mod pagination;
pub mod request_context;
pub mod search;
pub mod serde_helpers;
