//! Handler types and dependencies

use std::sync::Arc;

use crate::assets::AssetUploader;
use crate::core::registry::GroupRegistry;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub registry: Arc<GroupRegistry>,
    pub uploader: Arc<AssetUploader>,
    /// Shared client for raw file downloads from the Bot API
    pub http: reqwest::Client,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(registry: Arc<GroupRegistry>, uploader: Arc<AssetUploader>, http: reqwest::Client) -> Self {
        Self {
            registry,
            uploader,
            http,
        }
    }
}
