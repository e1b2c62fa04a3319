pub mod api_context;
pub mod components;
pub mod form_options;
pub mod list_state;
