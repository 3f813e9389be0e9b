//! Default values used when an environment variable is not set

use crate::schema::*;
use std::time::Duration;

/// Default command printing the blocklist status
pub const DEFAULT_STATUS_CMD: &str = "ruantiblock status";
/// Default template adding a domain to the user list
pub const DEFAULT_ADD_CMD: &str = "ruantiblock add list1 {domain}";
/// Default command refreshing the blocklists
pub const DEFAULT_UPDATE_CMD: &str = "ruantiblock update";
/// Default upper bound on a single command run, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

impl Default for RuantiblockConfig {
    fn default() -> Self {
        Self {
            status_cmd: DEFAULT_STATUS_CMD.to_string(),
            add_cmd: AddCommandTemplate::default(),
            update_cmd: DEFAULT_UPDATE_CMD.to_string(),
        }
    }
}

impl Default for AddCommandTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_ADD_CMD.to_string(),
            program: "ruantiblock".to_string(),
            args: vec![
                "add".to_string(),
                "list1".to_string(),
                DOMAIN_PLACEHOLDER.to_string(),
            ],
            needs_shell: false,
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
