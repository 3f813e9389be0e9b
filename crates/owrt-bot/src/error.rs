//! Application-wide error types using thiserror

use owrt_common::OwrtError;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration or logging setup error
    #[error(transparent)]
    Config(#[from] OwrtError),

    /// Telegram Bot API error
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Result type for the bot application
pub type BotResult<T> = Result<T, BotError>;
