//! Fallback for messages that match no command

use crate::framework::{Context, HandlerFuture};
use crate::messages;

/// Points the user at `/start`
pub fn unknown(_ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async { messages::UNKNOWN_COMMAND.to_string() })
}
