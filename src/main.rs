use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::{webhooks, Polling};

use proofpal::assets::{AssetStoreConfig, AssetUploader};
use proofpal::cli::{Cli, Commands};
use proofpal::core::registry::GroupRegistry;
use proofpal::core::{config, init_logger, log_asset_store_configuration};
use proofpal::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Set up global panic handler so a panic in the dispatcher is logged
    // instead of silently terminating the process
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Some(Commands::Run { webhook }) => {
            log::info!("Running bot (webhook: {})", webhook);
            run_bot(webhook).await
        }
        None => {
            // No command specified - default to running the bot
            log::info!("No command specified, running bot in default mode");
            run_bot(false).await
        }
    }
}

/// Builds the bot and its dependencies, then dispatches updates until shutdown.
async fn run_bot(use_webhook: bool) -> Result<()> {
    log_asset_store_configuration();

    let bot = create_bot()?;
    let store_config = AssetStoreConfig::from_env()?;

    let http = reqwest::Client::builder().timeout(config::network::timeout()).build()?;
    let uploader = Arc::new(AssetUploader::new(store_config, http.clone()));
    let registry = Arc::new(GroupRegistry::new());

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let deps = HandlerDeps::new(registry, uploader, http);
    let handler = schema(deps);

    // Check if webhook mode is enabled
    let webhook_url = if use_webhook { config::WEBHOOK_URL.clone() } else { None };

    if let Some(url) = webhook_url {
        // Webhook mode: the listener binds the local port, registers the
        // webhook URL with Telegram and acknowledges every delivery with
        // 200 regardless of what the handlers did with the update.
        log::info!("Starting bot in webhook mode at {}", url);

        let addr = SocketAddr::from(([0, 0, 0, 0], *config::webhook::PORT));
        let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url::Url::parse(&url)?)).await?;

        log::info!("📡 Webhook listener bound on port {}", *config::webhook::PORT);

        Dispatcher::builder(bot, handler)
            .dependencies(DependencyMap::new())
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    } else {
        // Long polling mode (default)
        log::info!("Starting bot in long polling mode");
        log::info!("📡 Ready to receive updates!");

        // Drop updates that piled up while the bot was down
        let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

        Dispatcher::builder(bot, handler)
            .dependencies(DependencyMap::new())
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    }

    Ok(())
}
