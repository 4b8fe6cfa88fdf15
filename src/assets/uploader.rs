//! Signed multipart uploads to the remote asset store

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::anyhow;
use serde::Deserialize;

use super::signature::sign_upload;
use crate::core::config;
use crate::core::error::UploadError;

/// Connection settings for the asset store.
#[derive(Clone, Debug)]
pub struct AssetStoreConfig {
    /// Full URL of the upload endpoint
    pub upload_url: String,
    /// Public API key sent with every request
    pub api_key: String,
    /// Shared secret used to sign requests (never sent on the wire)
    pub api_secret: String,
    /// Upload preset name, signed into every request
    pub upload_preset: String,
    /// Top-level folder all proofs are stored under
    pub root_folder: String,
}

impl AssetStoreConfig {
    /// Reads the asset store settings from the environment.
    ///
    /// URL and credentials are required; preset and root folder fall back
    /// to the compiled-in defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            upload_url: env::var("ASSET_UPLOAD_URL").map_err(|_| anyhow!("ASSET_UPLOAD_URL is not set"))?,
            api_key: env::var("ASSET_API_KEY").map_err(|_| anyhow!("ASSET_API_KEY is not set"))?,
            api_secret: env::var("ASSET_API_SECRET").map_err(|_| anyhow!("ASSET_API_SECRET is not set"))?,
            upload_preset: env::var("ASSET_UPLOAD_PRESET")
                .unwrap_or_else(|_| config::upload::UPLOAD_PRESET.to_string()),
            root_folder: env::var("ASSET_ROOT_FOLDER").unwrap_or_else(|_| config::upload::ROOT_FOLDER.to_string()),
        })
    }
}

/// Success body returned by the asset store.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Uploads proof photos to the asset store.
pub struct AssetUploader {
    config: AssetStoreConfig,
    http: reqwest::Client,
}

impl AssetUploader {
    pub fn new(config: AssetStoreConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Uploads an image and returns the secure URL of the stored asset.
    ///
    /// The folder path is derived from the seller name and the extracted
    /// order number; the timestamp is fixed once per request and the
    /// signature covers folder, timestamp and preset exactly as sent.
    ///
    /// # Errors
    /// Returns `UploadError` on transport faults, non-success statuses and
    /// bodies missing the secure URL.
    pub async fn upload(
        &self,
        image: Vec<u8>,
        seller_name: &str,
        order_id: Option<&str>,
    ) -> Result<String, UploadError> {
        let folder = folder_path(&self.config.root_folder, seller_name, order_id);
        let timestamp = unix_timestamp();
        let signature = sign_upload(&folder, timestamp, &self.config.upload_preset, &self.config.api_secret);

        log::info!("⬆️ Uploading {} bytes to folder {}", image.len(), folder);

        let file = reqwest::multipart::Part::bytes(image).file_name("proof.jpg");
        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("timestamp", timestamp.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("folder", folder)
            .text("signature", signature);

        let resp = self.http.post(&self.config.upload_url).multipart(form).send().await?;

        if !resp.status().is_success() {
            return Err(UploadError::Http(resp.status()));
        }

        let body = resp.text().await?;
        let parsed: UploadResponse = serde_json::from_str(&body)?;
        Ok(parsed.secure_url)
    }
}

/// Builds the folder path a proof is stored under.
///
/// `<root>/<seller>/ORDER-<id>` when an order number was found, otherwise
/// `<root>/<seller>/misc`.
pub fn folder_path(root: &str, seller_name: &str, order_id: Option<&str>) -> String {
    let seller = sanitize_segment(seller_name);
    match order_id {
        Some(id) => format!("{}/{}/ORDER-{}", root, seller, id),
        None => format!("{}/{}/{}", root, seller, config::upload::MISC_BUCKET),
    }
}

/// Makes a display name safe to use as a single path segment.
///
/// Path separators and control characters would otherwise let a display
/// name spill into extra folder levels at the remote store.
fn sanitize_segment(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();

    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
