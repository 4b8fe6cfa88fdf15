//! Order number extraction from photo captions
//!
//! Sellers tag proofs in several ways ("ORDER 12345", "pedido-9001",
//! "#777", or just a bare number at the start of the caption). The
//! patterns below are tried in priority order and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword form: ORDER/PEDIDO, optional separators, then digits.
/// Checked first so "ORDER #12345" resolves through the keyword, not the hash.
static KEYWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:order|pedido)[\s:#-]*(\d+)").expect("Failed to compile keyword regex"));

/// Hash form: "#" immediately followed by digits.
static HASH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+)").expect("Failed to compile hash regex"));

/// Bare form: caption begins with a run of 4 or more digits.
static LEADING_DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4,})").expect("Failed to compile leading digits regex"));

/// Extracts an order number from a photo caption.
///
/// Patterns are evaluated in priority order and evaluation stops at the
/// first match; only that pattern's capture is returned. Captions without
/// a recognizable order number (including empty captions) yield `None`.
///
/// This function is total: it never fails and has no side effects.
pub fn extract_order_id(caption: &str) -> Option<String> {
    let patterns: [&Lazy<Regex>; 3] = [&KEYWORD_PATTERN, &HASH_PATTERN, &LEADING_DIGITS_PATTERN];

    patterns.iter().find_map(|pattern| {
        pattern
            .captures(caption)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
