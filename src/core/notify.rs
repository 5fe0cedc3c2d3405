//! Notification seam. The core only needs "send this title/body to this
//! token, best effort"; the actual transport (FCM, email) lives outside.

use crate::errors::AppResult;
use crate::ui::messages;

pub trait PushSender {
    fn send(&self, token: &str, title: &str, body: &str) -> AppResult<()>;
}

/// Prints notifications to the console. Used by the CLI sweep and by tests.
pub struct ConsoleSender;

impl PushSender for ConsoleSender {
    fn send(&self, token: &str, title: &str, body: &str) -> AppResult<()> {
        messages::push(title, format!("{body} [token {}…]", token_prefix(token)));
        Ok(())
    }
}

fn token_prefix(token: &str) -> &str {
    let end = token
        .char_indices()
        .nth(8)
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    &token[..end]
}
