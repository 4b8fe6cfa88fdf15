//! In-memory registry of seller groups
//!
//! Tracks which chats have been registered for proof submissions. State
//! lives for the lifetime of the process; there is no eviction and no
//! persistence across restarts. The registry is constructed once at
//! startup and injected into handlers, so a persistent store can replace
//! it later without touching the routing code.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use teloxide::types::ChatId;
use tokio::sync::Mutex;

/// Registration record for a single chat group.
#[derive(Clone, Debug)]
pub struct SellerGroup {
    /// Telegram id of the user who registered the group
    pub user_id: u64,
    /// Display name of the registering user
    pub user_name: String,
    /// When the group was registered
    pub registered_at: DateTime<Utc>,
}

/// Mapping from chat id to its registration record.
///
/// Reads and writes may interleave across concurrently handled events; the
/// mutex guarantees each operation sees a consistent snapshot. Two racing
/// registrations of the same chat resolve last-committed-wins.
#[derive(Clone)]
pub struct GroupRegistry {
    groups: Arc<Mutex<HashMap<ChatId, SellerGroup>>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self {
            groups: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers a chat, overwriting any previous record for the same chat.
    pub async fn register(&self, chat_id: ChatId, group: SellerGroup) {
        let mut groups = self.groups.lock().await;
        groups.insert(chat_id, group);
    }

    /// Returns a snapshot of the registration record for a chat, if any.
    pub async fn get(&self, chat_id: ChatId) -> Option<SellerGroup> {
        let groups = self.groups.lock().await;
        groups.get(&chat_id).cloned()
    }

    /// Whether the chat has been registered.
    pub async fn is_registered(&self, chat_id: ChatId) -> bool {
        let groups = self.groups.lock().await;
        groups.contains_key(&chat_id)
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}
