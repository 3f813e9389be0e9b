//! Startup validation of the assembled configuration

use crate::loader::vars;
use crate::schema::Config;
use owrt_common::{OwrtError, Result};

impl Config {
    /// Validates the configuration.
    ///
    /// The add template is already checked when it is parsed, so only the
    /// remaining fields are looked at here.
    pub fn validate(&self) -> Result<()> {
        if self.telegram.token.is_empty() {
            return Err(OwrtError::config_var(
                vars::TELEGRAM_TOKEN,
                "Telegram bot token is not set",
            ));
        }

        if self.execution.timeout.is_zero() {
            return Err(OwrtError::config_var(
                vars::COMMAND_TIMEOUT_SECS,
                "command timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}
