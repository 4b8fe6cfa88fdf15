//! Message routing for the proof-of-delivery pipeline
//!
//! One linear handler per inbound event: classify the chat, update the
//! group registry, run the caption through the order extractor and hand
//! the photo to the asset uploader. Every external failure is caught
//! here and turned into a user-facing reply plus an operator log entry;
//! nothing escapes event handling.

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Message, MessageId, PhotoSize, ReplyParameters};

use super::files::download_photo_bytes;
use super::types::{HandlerDeps, HandlerError};
use crate::core::orders::extract_order_id;
use crate::core::registry::SellerGroup;

const NOT_A_GROUP_REPLY: &str = "Hi! Please add me to a group and send /start there.";
const REGISTRATION_REQUIRED_REPLY: &str = "⚠️ Send /start first to register this group.";
const UPLOAD_FAILED_REPLY: &str = "❌ Could not save this photo, please try again later.";

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration
/// tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (group registry, asset uploader, etc.)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry().branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move { route_message(bot, msg, deps).await }
    }))
}

/// Routes one inbound message through the intake pipeline.
///
/// Dispatch priority:
/// 1. Not a group chat: point the sender at group usage.
/// 2. `/start` in a group: register the chat (create or overwrite) and
///    confirm readiness.
/// 3. Unregistered chat, anything else: ask for registration first.
/// 4. Registered chat with a photo: extract, upload, confirm.
/// 5. Registered chat, anything else: stay silent.
pub async fn route_message(bot: Bot, msg: Message, deps: HandlerDeps) -> Result<(), HandlerError> {
    let chat_id = msg.chat.id;

    if !is_group_chat(&msg) {
        send_reply(&bot, chat_id, NOT_A_GROUP_REPLY, None).await;
        return Ok(());
    }

    if is_registration_command(msg.text()) {
        let group = SellerGroup {
            user_id: msg.from.as_ref().map(|u| u.id.0).unwrap_or(0),
            user_name: sender_display_name(&msg),
            registered_at: chrono::Utc::now(),
        };
        log::info!("📝 Registering chat {} for {}", chat_id, group.user_name);

        let reply = registration_reply(&group.user_name);
        deps.registry.register(chat_id, group).await;
        send_reply(&bot, chat_id, &reply, None).await;
        return Ok(());
    }

    if !deps.registry.is_registered(chat_id).await {
        send_reply(&bot, chat_id, REGISTRATION_REQUIRED_REPLY, None).await;
        return Ok(());
    }

    if let Some(photos) = msg.photo() {
        handle_photo(&bot, &msg, photos, &deps).await;
    }
    // Anything else in a registered chat is ignored on purpose.

    Ok(())
}

/// Handles a photo submission in a registered chat.
///
/// Runs the linear pipeline: pick the largest photo variant, extract the
/// order number from the caption, download the bytes, upload them, then
/// reply to the original message. Failures become the generic failure
/// reply; the underlying error goes to the operator log.
async fn handle_photo(bot: &Bot, msg: &Message, photos: &[PhotoSize], deps: &HandlerDeps) {
    let seller_name = sender_display_name(msg);
    let caption = msg.caption().unwrap_or_default();
    let order_id = extract_order_id(caption);

    let Some(photo) = photos.iter().max_by_key(|p| p.width.saturating_mul(p.height)) else {
        return;
    };

    log::info!(
        "📸 Photo from {} in chat {} (order: {})",
        seller_name,
        msg.chat.id,
        order_id.as_deref().unwrap_or("none")
    );

    let reply = match submit_proof(bot, deps, photo, &seller_name, order_id.as_deref()).await {
        Ok(asset_url) => match order_id {
            Some(id) => upload_success_reply(&seller_name, &id, &asset_url),
            None => upload_success_no_order_reply(&seller_name, &asset_url),
        },
        Err(e) => {
            log::error!(
                "Failed to store proof from {} in chat {}: {}",
                seller_name,
                msg.chat.id,
                e
            );
            UPLOAD_FAILED_REPLY.to_string()
        }
    };

    send_reply(bot, msg.chat.id, &reply, Some(msg.id)).await;
}

/// Downloads the photo bytes and uploads them to the asset store.
async fn submit_proof(
    bot: &Bot,
    deps: &HandlerDeps,
    photo: &PhotoSize,
    seller_name: &str,
    order_id: Option<&str>,
) -> Result<String, HandlerError> {
    let bytes = download_photo_bytes(bot, &deps.http, &photo.file.id).await?;
    let asset_url = deps.uploader.upload(bytes, seller_name, order_id).await?;
    Ok(asset_url)
}

/// Sends a reply, optionally threaded under the message it answers.
///
/// Send failures are logged and swallowed so a flaky chat API can never
/// abort event handling.
async fn send_reply(bot: &Bot, chat_id: ChatId, text: &str, reply_to: Option<MessageId>) {
    let mut request = bot.send_message(chat_id, text);
    if let Some(message_id) = reply_to {
        request = request.reply_parameters(ReplyParameters::new(message_id));
    }

    if let Err(e) = request.await {
        log::error!("Failed to send reply to chat {}: {}", chat_id, e);
    }
}

fn is_group_chat(msg: &Message) -> bool {
    msg.chat.is_group() || msg.chat.is_supergroup()
}

/// Whether the message text is the registration command, with or without
/// the `@botname` suffix Telegram appends in groups.
fn is_registration_command(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return false;
    };
    let command = text.split_whitespace().next().unwrap_or_default();
    command.split('@').next() == Some("/start")
}

fn sender_display_name(msg: &Message) -> String {
    msg.from
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

fn registration_reply(user_name: &str) -> String {
    format!("✅ Group registered for {}! Send photos with order numbers now.", user_name)
}

fn upload_success_reply(seller_name: &str, order_id: &str, asset_url: &str) -> String {
    format!("✅ Proof saved for {} (order {}).\n{}", seller_name, order_id, asset_url)
}

fn upload_success_no_order_reply(seller_name: &str, asset_url: &str) -> String {
    format!(
        "✅ Photo uploaded for {}!\n💡 Add an order number to the caption next time (e.g. ORDER 12345).\n{}",
        seller_name, asset_url
    )
}
