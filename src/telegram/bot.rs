//! Bot initialization and command setup

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "I can:")]
pub enum Command {
    #[command(description = "register this group for proof submissions")]
    Start,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, network issues, etc.)
pub fn create_bot() -> anyhow::Result<Bot> {
    // Check if a custom Bot API server is configured
    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::from_env_with_client(ClientBuilder::new().timeout(config::network::timeout()).build()?).set_api_url(url)
    } else {
        Bot::from_env_with_client(ClientBuilder::new().timeout(config::network::timeout()).build()?)
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;

    Ok(())
}
