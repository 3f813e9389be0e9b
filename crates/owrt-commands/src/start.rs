//! `/start` command

use crate::framework::{Context, HandlerFuture};
use crate::messages;

/// Lists the available commands
pub fn start(_ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async { messages::START.to_string() })
}
