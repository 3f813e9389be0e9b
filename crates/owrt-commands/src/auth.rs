//! Allow-list authorization gate

use owrt_common::ChatId;
use owrt_config::AllowList;
use tracing::warn;

/// Decides whether `chat_id` may issue commands.
///
/// Denials are logged at `warn`. An empty allow-list denies everyone.
pub fn authorize(allowed: &AllowList, chat_id: ChatId) -> bool {
    if allowed.permits(chat_id) {
        return true;
    }

    warn!(%chat_id, "Unauthorized access");
    false
}
