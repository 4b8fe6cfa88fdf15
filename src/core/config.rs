use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// Path to the log file
/// Read from LOG_FILE_PATH environment variable
/// Defaults to "proofpal.log" in the working directory
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "proofpal.log".to_string()));

/// Public URL Telegram should deliver webhook updates to
/// Read from WEBHOOK_URL environment variable
/// When unset the bot falls back to long polling
pub static WEBHOOK_URL: Lazy<Option<String>> = Lazy::new(|| env::var("WEBHOOK_URL").ok());

/// Webhook listener configuration
pub mod webhook {
    use super::*;

    /// Local port the webhook listener binds to
    /// Read from PORT environment variable (default 3000)
    pub static PORT: Lazy<u16> = Lazy::new(|| {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000)
    });
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for outbound HTTP requests (in seconds)
    /// Applies to Telegram API calls, file downloads and asset uploads so a
    /// stalled third-party dependency cannot hold event handling forever
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Asset upload configuration
pub mod upload {
    /// Upload preset sent with (and signed into) every upload request
    pub const UPLOAD_PRESET: &str = "proof-intake";

    /// Top-level folder all proofs are stored under
    pub const ROOT_FOLDER: &str = "Root";

    /// Bucket used when no order number was found in the caption
    pub const MISC_BUCKET: &str = "misc";
}
