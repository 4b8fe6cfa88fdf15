//! Telegram bot integration and handlers

pub mod bot;
pub mod files;
pub mod handlers;
pub mod types;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{route_message, schema};
pub use types::{HandlerDeps, HandlerError};
