//! Reply formatting
//!
//! Every command reply goes through [`prepare_reply`] before it reaches Discord.

use rebrt_types::MAX_MESSAGE_LENGTH;

/// Sent instead of an empty reply, which Discord would reject
pub const FALLBACK_REPLY: &str = "Error hz";

/// Cut `text` to at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Make `text` sendable: never empty, never over the message limit.
///
/// Overlong text is cut silently, so a long leaderboard page may lose its
/// closing code fence.
pub fn prepare_reply(text: &str) -> String {
    if text.trim().is_empty() {
        return FALLBACK_REPLY.to_string();
    }
    truncate_chars(text, MAX_MESSAGE_LENGTH).to_string()
}
