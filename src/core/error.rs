use thiserror::Error;

/// Errors talking to the chat platform (file resolve/download, replies).
///
/// Uses `thiserror` for automatic error conversion and display formatting.
#[derive(Debug, Error)]
pub enum ChatApiError {
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("file download failed with status: {0}")]
    Http(reqwest::StatusCode),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// Errors talking to the asset store.
///
/// Covers transport faults, non-success statuses and malformed response
/// bodies. The router converts these into a user-facing failure reply;
/// they never abort event processing.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("asset store returned status: {0}")]
    Http(reqwest::StatusCode),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("malformed asset store response: {0}")]
    Malformed(#[from] serde_json::Error),
}
