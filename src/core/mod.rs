//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod orders;
pub mod registry;

// Re-exports for convenience
pub use error::{ChatApiError, UploadError};
pub use logging::{init_logger, log_asset_store_configuration};
