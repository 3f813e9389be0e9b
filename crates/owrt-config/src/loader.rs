//! Configuration loading from the process environment

use crate::defaults::{DEFAULT_STATUS_CMD, DEFAULT_TIMEOUT_SECS, DEFAULT_UPDATE_CMD};
use crate::schema::*;
use owrt_common::{ChatId, OwrtError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Names of the environment variables read by [`ConfigLoader`]
pub mod vars {
    /// Telegram bot token (required)
    pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
    /// Comma-separated chat IDs allowed to use the bot
    pub const ALLOWED_CHAT_IDS: &str = "ALLOWED_CHAT_IDS";
    /// Override for the ruantiblock status command
    pub const RUANTIBLOCK_STATUS_CMD: &str = "RUANTIBLOCK_STATUS_CMD";
    /// Override for the ruantiblock add template
    pub const RUANTIBLOCK_ADD_CMD: &str = "RUANTIBLOCK_ADD_CMD";
    /// Override for the ruantiblock update command
    pub const RUANTIBLOCK_UPDATE_CMD: &str = "RUANTIBLOCK_UPDATE_CMD";
    /// Command timeout in whole seconds
    pub const COMMAND_TIMEOUT_SECS: &str = "COMMAND_TIMEOUT_SECS";
}

/// Loads the configuration from environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads variables from a dotenv file without overriding ones already set.
    ///
    /// With no explicit path, `.env` is searched for from the working
    /// directory upwards and a missing file is not an error. An explicit
    /// path must exist.
    pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| {
                    OwrtError::config(format!("failed to read {}: {e}", path.display()))
                })?;
                Ok(Some(path.to_path_buf()))
            }
            None => match dotenvy::dotenv() {
                Ok(found) => Ok(Some(found)),
                Err(e) if e.not_found() => Ok(None),
                Err(e) => Err(OwrtError::config(format!("failed to read .env: {e}"))),
            },
        }
    }

    /// Loads and validates the configuration from the process environment
    pub fn load() -> Result<Config> {
        Self::load_from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads and validates the configuration from an arbitrary variable source
    pub fn load_from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset so that `FOO=` in a service file falls
        // back to the default.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = get(vars::TELEGRAM_TOKEN).unwrap_or_default();

        let allowed_chat_ids = parse_allowed_chat_ids(lookup(vars::ALLOWED_CHAT_IDS).as_deref());

        let add_cmd = match get(vars::RUANTIBLOCK_ADD_CMD) {
            Some(raw) => AddCommandTemplate::parse(&raw)?,
            None => AddCommandTemplate::default(),
        };

        let timeout_secs = match get(vars::COMMAND_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                OwrtError::config_var(
                    vars::COMMAND_TIMEOUT_SECS,
                    format!("invalid command timeout '{raw}': {e}"),
                )
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Config {
            telegram: TelegramConfig {
                token: BotToken::new(token.trim()),
            },
            access: AccessConfig { allowed_chat_ids },
            ruantiblock: RuantiblockConfig {
                status_cmd: get(vars::RUANTIBLOCK_STATUS_CMD)
                    .unwrap_or_else(|| DEFAULT_STATUS_CMD.to_string()),
                add_cmd,
                update_cmd: get(vars::RUANTIBLOCK_UPDATE_CMD)
                    .unwrap_or_else(|| DEFAULT_UPDATE_CMD.to_string()),
            },
            execution: ExecutionConfig {
                timeout: Duration::from_secs(timeout_secs),
            },
        };

        config.validate()?;

        if config.access.allowed_chat_ids.is_empty() {
            warn!("{} is empty, every chat will be denied", vars::ALLOWED_CHAT_IDS);
        } else {
            info!(
                allowed_chats = config.access.allowed_chat_ids.len(),
                "Access list loaded"
            );
        }
        debug!(
            status_cmd = %config.ruantiblock.status_cmd,
            add_cmd = %config.ruantiblock.add_cmd.raw(),
            add_cmd_shell = config.ruantiblock.add_cmd.needs_shell(),
            update_cmd = %config.ruantiblock.update_cmd,
            timeout_secs,
            "ruantiblock commands configured"
        );

        Ok(config)
    }
}

/// Parses a comma-separated list of chat IDs.
///
/// Blank items are ignored; items that are not integers are logged and
/// skipped one by one, they never abort loading.
pub fn parse_allowed_chat_ids(raw: Option<&str>) -> AllowList {
    let Some(raw) = raw else {
        return AllowList::default();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| match item.parse::<ChatId>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(value = item, "Skipping invalid chat id value");
                None
            }
        })
        .collect()
}
