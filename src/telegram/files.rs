//! Raw file downloads from the Bot API

use teloxide::prelude::*;
use teloxide::types::FileId;

use crate::core::error::ChatApiError;

/// Downloads a photo's bytes from Telegram.
///
/// Resolves the file path via `getFile`, then fetches the bytes from the
/// Bot API file endpoint.
///
/// # Errors
/// Returns `ChatApiError` if the file cannot be resolved or downloaded.
pub async fn download_photo_bytes(
    bot: &Bot,
    http: &reqwest::Client,
    file_id: &FileId,
) -> Result<Vec<u8>, ChatApiError> {
    let file = bot.get_file(file_id.clone()).await?;
    log::info!("📥 Resolved file {} ({} bytes)", file.path, file.size);

    // File endpoint layout: <api_url>/file/bot<token>/<file_path>
    let url = format!("{}file/bot{}/{}", bot.api_url(), bot.token(), file.path);

    let resp = http.get(&url).send().await?;
    if !resp.status().is_success() {
        return Err(ChatApiError::Http(resp.status()));
    }

    Ok(resp.bytes().await?.to_vec())
}
