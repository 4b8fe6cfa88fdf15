//! Logging initialization and startup configuration checking

use anyhow::Result;
use simplelog::*;
use std::fs::File;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs asset store configuration at application startup
///
/// Uploads need the upload URL and the API credentials; a missing variable
/// is called out loudly here instead of failing on the first photo.
pub fn log_asset_store_configuration() {
    log::info!("🗂 Asset store configuration check");

    for var in ["ASSET_UPLOAD_URL", "ASSET_API_KEY", "ASSET_API_SECRET"] {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => log::info!("✅ {}: set", var),
            _ => log::error!("❌ {}: not set - photo uploads will FAIL!", var),
        }
    }

    match std::env::var("ASSET_ROOT_FOLDER") {
        Ok(folder) if !folder.is_empty() => log::info!("✅ ASSET_ROOT_FOLDER: {}", folder),
        _ => log::info!(
            "ASSET_ROOT_FOLDER not set, using default \"{}\"",
            crate::core::config::upload::ROOT_FOLDER
        ),
    }
}
