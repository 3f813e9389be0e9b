//! Integration tests for owrt-bot crate

use owrt_bot::{fit_message, reply_keyboard, BotError, MAX_MESSAGE_LEN};
use owrt_commands::KEYBOARD_LAYOUT;
use owrt_common::test_utils::init_test_logging;
use owrt_common::OwrtError;

#[test]
fn test_keyboard_matches_layout() {
    init_test_logging();
    let markup = reply_keyboard();

    assert_eq!(markup.keyboard.len(), KEYBOARD_LAYOUT.len());
    for (row, expected) in markup.keyboard.iter().zip(KEYBOARD_LAYOUT.iter()) {
        let labels: Vec<&str> = row.iter().map(|button| button.text.as_str()).collect();
        assert_eq!(labels, *expected);
    }
    assert_eq!(markup.keyboard[2][0].text, "/rua_add example.com");
}

#[test]
fn test_fit_message_limit() {
    let long = "a".repeat(MAX_MESSAGE_LEN + 1);
    assert_eq!(fit_message(&long).encode_utf16().count(), MAX_MESSAGE_LEN);

    let exact = "b".repeat(MAX_MESSAGE_LEN);
    assert_eq!(fit_message(&exact), exact);
}

#[test]
fn test_config_error_converts() {
    let err: BotError = OwrtError::config_var("TELEGRAM_TOKEN", "Telegram bot token is not set").into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Telegram bot token is not set"
    );
}
