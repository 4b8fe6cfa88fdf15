//! ProofPal - Telegram bot that archives proof-of-delivery photos
//!
//! Sellers post photos of shipped orders into a registered Telegram group.
//! The bot pulls an order number out of the caption, uploads the image to
//! the remote asset store under a per-seller folder and confirms in the chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, order extraction, group registry
//! - `assets`: folder layout, request signing and uploads to the asset store
//! - `telegram`: bot integration and message routing

pub mod assets;
pub mod cli;
pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use assets::{AssetStoreConfig, AssetUploader};
pub use core::registry::{GroupRegistry, SellerGroup};
pub use telegram::{create_bot, route_message, schema, HandlerDeps, HandlerError};
