// Presentation layer - layout tree and the HTTP surface over it
pub mod app_state;
pub mod handlers;
pub mod layout;
