//! Reply formatting for Telegram delivery

use owrt_commands::KEYBOARD_LAYOUT;
use owrt_common::truncate_utf16;
use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// Longest text Telegram accepts in a single message, in UTF-16 code units
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Reply keyboard with the command shortcuts
pub fn reply_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(KEYBOARD_LAYOUT.iter().map(|row| {
        row.iter()
            .map(|label| KeyboardButton::new(*label))
            .collect::<Vec<_>>()
    }))
    .resize_keyboard()
}

/// Cuts reply text down to what Telegram will accept
pub fn fit_message(text: &str) -> String {
    truncate_utf16(text, MAX_MESSAGE_LEN)
}
