//! Test utilities and shared test helpers for OWRT Bot.
//!
//! This module provides logging setup and fixtures that can be used across
//! all crates in the workspace for unit and integration testing.

use crate::types::ChatId;
use std::collections::HashMap;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Chat-related fixtures
pub mod chat_fixtures {
    use super::ChatId;

    /// A chat that test configurations allow
    pub fn allowed_chat_id() -> ChatId {
        ChatId(123_456_789)
    }

    /// A chat that test configurations never allow
    pub fn stranger_chat_id() -> ChatId {
        ChatId(987_654_321)
    }

    /// A group chat ID (negative, as Telegram assigns them)
    pub fn group_chat_id() -> ChatId {
        ChatId(-1_001_234_567_890)
    }
}

/// Environment fixtures for configuration loading
pub mod env_fixtures {
    use super::HashMap;

    /// Minimal environment that produces a valid configuration
    pub fn minimal_env() -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("TELEGRAM_TOKEN".to_string(), "123456:test-token".to_string());
        env.insert("ALLOWED_CHAT_IDS".to_string(), "123456789".to_string());
        env
    }

    /// Environment with every supported variable set
    pub fn full_env() -> HashMap<String, String> {
        let mut env = minimal_env();
        env.insert(
            "ALLOWED_CHAT_IDS".to_string(),
            "123456789, -1001234567890".to_string(),
        );
        env.insert(
            "RUANTIBLOCK_STATUS_CMD".to_string(),
            "/usr/bin/ruantiblock status".to_string(),
        );
        env.insert(
            "RUANTIBLOCK_ADD_CMD".to_string(),
            "/usr/bin/ruantiblock add 'user list' {domain}".to_string(),
        );
        env.insert(
            "RUANTIBLOCK_UPDATE_CMD".to_string(),
            "/usr/bin/ruantiblock update".to_string(),
        );
        env.insert("COMMAND_TIMEOUT_SECS".to_string(), "5".to_string());
        env
    }
}

/// Property-based testing utilities using proptest
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::ChatId;
    use proptest::prelude::*;

    /// Strategy for generating chat IDs across the whole signed range
    pub fn chat_id_strategy() -> impl Strategy<Value = ChatId> {
        any::<i64>().prop_map(ChatId)
    }

    /// Strategy for generating list items that never parse as a chat ID
    pub fn garbage_item_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z][a-zA-Z_.]{0,12}".prop_map(|s| s.to_string())
    }
}
