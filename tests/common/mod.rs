//! Common test utilities
//!
//! Shared across integration tests: a Bot wired to a wiremock Telegram
//! API, canned API responses and multipart body helpers.

#![allow(dead_code)]

use teloxide::types::Message;
use teloxide::Bot;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test_token_12345:ABCDEF";

/// Creates a Bot instance that talks to the mock server instead of Telegram.
pub fn test_bot(server: &MockServer) -> Bot {
    Bot::new(TEST_TOKEN).set_api_url(server.uri().parse().expect("mock server uri should parse"))
}

/// Mounts a canned successful sendMessage response.
pub async fn mock_send_message(server: &MockServer) {
    let response = serde_json::json!({
        "ok": true,
        "result": {
            "message_id": 42,
            "from": {
                "id": 987654321,
                "is_bot": true,
                "first_name": "ProofPal",
                "username": "proofpal_bot"
            },
            "chat": {
                "id": -1001234567,
                "title": "Sellers",
                "type": "supergroup"
            },
            "date": 1735992000,
            "text": "ok"
        }
    });

    Mock::given(method("POST"))
        .and(path_regex("(?i)/bot[^/]+/sendmessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

/// Mounts a canned getFile response resolving any file id to `file_path`.
pub async fn mock_get_file(server: &MockServer, file_path: &str) {
    let response = serde_json::json!({
        "ok": true,
        "result": {
            "file_id": "photo-big",
            "file_unique_id": "u2",
            "file_size": 64000,
            "file_path": file_path
        }
    });

    Mock::given(method("POST"))
        .and(path_regex("(?i)/bot[^/]+/getfile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

/// Mounts the raw file endpoint serving `bytes`.
pub async fn mock_file_download(server: &MockServer, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path_regex("(?i)/file/bot[^/]+/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.to_vec()))
        .mount(server)
        .await;
}

/// Deserializes a Telegram message from raw update JSON
/// (more reliable than struct construction).
pub fn message_from_json(json: serde_json::Value) -> Message {
    serde_json::from_value(json).expect("Failed to deserialize message")
}

/// A text message in a chat of the given type.
pub fn text_message_json(chat_id: i64, chat_type: &str, first_name: &str, text: &str) -> serde_json::Value {
    let chat = if chat_type == "private" {
        serde_json::json!({"id": chat_id, "type": "private", "first_name": first_name})
    } else {
        serde_json::json!({"id": chat_id, "type": chat_type, "title": "Sellers"})
    };

    serde_json::json!({
        "message_id": 1,
        "date": 1735992000,
        "chat": chat,
        "from": {"id": 11, "is_bot": false, "first_name": first_name},
        "text": text
    })
}

/// A photo message (two size variants, the second one larger) with an
/// optional caption.
pub fn photo_message_json(chat_id: i64, first_name: &str, caption: Option<&str>) -> serde_json::Value {
    let mut message = serde_json::json!({
        "message_id": 7,
        "date": 1735992000,
        "chat": {"id": chat_id, "type": "supergroup", "title": "Sellers"},
        "from": {"id": 11, "is_bot": false, "first_name": first_name},
        "photo": [
            {"file_id": "photo-small", "file_unique_id": "u1", "width": 90, "height": 67, "file_size": 1000},
            {"file_id": "photo-big", "file_unique_id": "u2", "width": 1280, "height": 960, "file_size": 64000}
        ]
    });
    if let Some(caption) = caption {
        message["caption"] = serde_json::json!(caption);
    }
    message
}

/// Bodies of all sendMessage calls the mock Telegram server received.
pub async fn send_message_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .iter()
        .filter(|r| r.url.path().to_lowercase().contains("sendmessage"))
        .map(|r| serde_json::from_slice(&r.body).expect("sendMessage body should be JSON"))
        .collect()
}

/// Bodies of all getFile calls the mock Telegram server received.
pub async fn get_file_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .iter()
        .filter(|r| r.url.path().to_lowercase().contains("getfile"))
        .map(|r| serde_json::from_slice(&r.body).expect("getFile body should be JSON"))
        .collect()
}

/// Extracts a text field from a raw multipart body.
pub fn multipart_field(body: &str, name: &str) -> Option<String> {
    let pattern = format!(r#"name="{}"\r\n\r\n([^\r]+)"#, regex::escape(name));
    regex::Regex::new(&pattern)
        .expect("field pattern should compile")
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
