//! Configuration schema definitions

use crate::loader::vars;
use owrt_common::{ChatId, OwrtError, Result};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

/// Substitution point for the user supplied domain in the add template
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// Main configuration structure for OWRT Bot
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram configuration
    pub telegram: TelegramConfig,
    /// Access control configuration
    pub access: AccessConfig,
    /// ruantiblock command templates
    pub ruantiblock: RuantiblockConfig,
    /// Command execution configuration
    pub execution: ExecutionConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token
    pub token: BotToken,
}

/// Telegram bot token. Never printed in full
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Wraps a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for handing to the Telegram client
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty or blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("BotToken(<empty>)")
        } else {
            f.write_str("BotToken(<redacted>)")
        }
    }
}

/// Access control configuration
#[derive(Debug, Clone, Default)]
pub struct AccessConfig {
    /// Chats allowed to issue commands. Empty means nobody is allowed
    pub allowed_chat_ids: AllowList,
}

/// Fixed set of chat IDs permitted to issue commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList(HashSet<ChatId>);

impl AllowList {
    /// Builds an allow-list from any collection of chat IDs
    pub fn new(ids: impl IntoIterator<Item = ChatId>) -> Self {
        ids.into_iter().collect()
    }

    /// Whether no chat is allowed at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of allowed chats
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Plain membership test; see [`AllowList::permits`] for the access policy
    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.0.contains(&chat_id)
    }

    /// Access policy: an empty list denies everyone, otherwise membership decides
    pub fn permits(&self, chat_id: ChatId) -> bool {
        !self.is_empty() && self.contains(chat_id)
    }
}

impl FromIterator<ChatId> for AllowList {
    fn from_iter<I: IntoIterator<Item = ChatId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// ruantiblock command templates
#[derive(Debug, Clone)]
pub struct RuantiblockConfig {
    /// Shell command printing the blocklist status
    pub status_cmd: String,
    /// Template adding a domain to the user list
    pub add_cmd: AddCommandTemplate,
    /// Shell command refreshing the blocklists
    pub update_cmd: String,
}

/// The "add domain" command, pre-split into words.
///
/// The template is split once at startup with POSIX shell word rules. A plain
/// template runs as an argument vector with the domain substituted into the
/// words that carry [`DOMAIN_PLACEHOLDER`]. A template using shell syntax
/// (`&&`, `|`, redirects, `$VAR`, ...) runs through `sh` instead, with the
/// placeholder rewritten to `"$1"` and the domain passed as that positional
/// parameter. Either way the domain is never parsed as shell code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommandTemplate {
    pub(crate) raw: String,
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
    pub(crate) needs_shell: bool,
}

/// Characters with a meaning to `sh` outside quotes that word splitting
/// alone does not reproduce.
const SHELL_SYNTAX: &[char] = &[
    '|', '&', ';', '<', '>', '(', ')', '$', '`', '*', '?', '[', '~', '#', '\n',
];

/// Result of scanning a template for shell syntax
#[derive(Debug, Default)]
struct TemplateScan {
    needs_shell: bool,
    placeholder_single_quoted: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

fn scan_template(raw: &str) -> TemplateScan {
    let mut scan = TemplateScan::default();
    let mut quote = Quote::None;
    let mut escaped = false;

    for (i, c) in raw.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if raw[i..].starts_with(DOMAIN_PLACEHOLDER) && quote == Quote::Single {
            scan.placeholder_single_quoted = true;
        }
        match (quote, c) {
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::None, '\'') => quote = Quote::Single,
            (Quote::None, '"') => quote = Quote::Double,
            (Quote::None | Quote::Double, '\\') => escaped = true,
            (Quote::Double, '$' | '`') => scan.needs_shell = true,
            (Quote::None, c) if SHELL_SYNTAX.contains(&c) => scan.needs_shell = true,
            _ => {}
        }
    }

    scan
}

impl AddCommandTemplate {
    /// Splits and checks a template string
    pub fn parse(raw: &str) -> Result<Self> {
        let words = shlex::split(raw).ok_or_else(|| {
            OwrtError::config_var(
                vars::RUANTIBLOCK_ADD_CMD,
                format!("cannot split add command template into words: {raw}"),
            )
        })?;

        let Some((program, args)) = words.split_first() else {
            return Err(OwrtError::config_var(
                vars::RUANTIBLOCK_ADD_CMD,
                "add command template is empty",
            ));
        };

        if program.contains(DOMAIN_PLACEHOLDER) {
            return Err(OwrtError::config_var(
                vars::RUANTIBLOCK_ADD_CMD,
                "the program name must not contain the {domain} placeholder",
            ));
        }

        if !args.iter().any(|word| word.contains(DOMAIN_PLACEHOLDER)) {
            return Err(OwrtError::config_var(
                vars::RUANTIBLOCK_ADD_CMD,
                format!("add command template has no {DOMAIN_PLACEHOLDER} placeholder: {raw}"),
            ));
        }

        let scan = scan_template(raw);
        if scan.needs_shell && scan.placeholder_single_quoted {
            return Err(OwrtError::config_var(
                vars::RUANTIBLOCK_ADD_CMD,
                "a shell template must not put {domain} inside single quotes",
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            program: program.clone(),
            args: args.to_vec(),
            needs_shell: scan.needs_shell,
        })
    }

    /// The template as it was configured
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the template has to be interpreted by `sh`
    pub const fn needs_shell(&self) -> bool {
        self.needs_shell
    }

    /// Program to execute
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with the placeholder replaced by `domain`
    pub fn args_for(&self, domain: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|word| word.replace(DOMAIN_PLACEHOLDER, domain))
            .collect()
    }

    /// Script for `sh -c` reading the domain from `$1`.
    ///
    /// Inside double quotes `"$1"` closes and reopens the quoting, so the
    /// expansion stays a single word in both contexts.
    pub fn shell_script(&self) -> String {
        self.raw.replace(DOMAIN_PLACEHOLDER, "\"$1\"")
    }
}

/// Command execution configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Upper bound on a single command run
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allow_list_denies_everyone() {
        let list = AllowList::default();
        assert!(!list.permits(ChatId(0)));
        assert!(!list.permits(ChatId(123)));
    }

    #[test]
    fn test_allow_list_membership() {
        let list = AllowList::new([ChatId(1), ChatId(-2)]);
        assert!(list.permits(ChatId(1)));
        assert!(list.permits(ChatId(-2)));
        assert!(!list.permits(ChatId(2)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_template_substitution_stays_one_word() {
        let template = AddCommandTemplate::parse("ruantiblock add list1 {domain}").unwrap();
        assert_eq!(template.program(), "ruantiblock");
        assert_eq!(
            template.args_for("evil; rm -rf /"),
            vec!["add", "list1", "evil; rm -rf /"]
        );
    }

    #[test]
    fn test_add_template_quoted_words() {
        let template = AddCommandTemplate::parse("tool --list 'user list' --host={domain}").unwrap();
        assert_eq!(
            template.args_for("example.com"),
            vec!["--list", "user list", "--host=example.com"]
        );
    }

    #[test]
    fn test_add_template_rejects_bad_templates() {
        assert!(AddCommandTemplate::parse("ruantiblock add 'list1 {domain}").is_err());
        assert!(AddCommandTemplate::parse("   ").is_err());
        assert!(AddCommandTemplate::parse("ruantiblock add list1").is_err());
        assert!(AddCommandTemplate::parse("{domain} add").is_err());
    }

    #[test]
    fn test_plain_template_runs_without_shell() {
        let template = AddCommandTemplate::parse("tool --list 'a;b' --host={domain}").unwrap();
        assert!(!template.needs_shell());
        assert!(!AddCommandTemplate::parse("ruantiblock add list1 {domain}")
            .unwrap()
            .needs_shell());
    }

    #[test]
    fn test_shell_syntax_switches_to_shell() {
        for raw in [
            "ruantiblock add list1 {domain} && ruantiblock update",
            "ruantiblock add list1 {domain} | logger",
            "ruantiblock add list1 {domain} >/tmp/rua.log",
            "ruantiblock add $LIST {domain}",
            "ruantiblock add \"$LIST\" {domain}",
            "ruantiblock add list1 {domain}; ruantiblock update",
        ] {
            let template = AddCommandTemplate::parse(raw).unwrap();
            assert!(template.needs_shell(), "template {raw}");
        }
    }

    #[test]
    fn test_shell_script_reads_domain_from_positional() {
        let template =
            AddCommandTemplate::parse("ruantiblock add list1 \"--host={domain}\" && echo ok").unwrap();
        assert_eq!(
            template.shell_script(),
            "ruantiblock add list1 \"--host=\"$1\"\" && echo ok"
        );
    }

    #[test]
    fn test_shell_template_rejects_single_quoted_placeholder() {
        let err = AddCommandTemplate::parse("ruantiblock add '{domain}' && echo ok").unwrap_err();
        assert_eq!(err.variable(), Some("RUANTIBLOCK_ADD_CMD"));
        assert!(AddCommandTemplate::parse("ruantiblock add '{domain}'").is_ok());
    }

    #[test]
    fn test_bot_token_debug_is_redacted() {
        let token = BotToken::new("123456:secret");
        assert_eq!(format!("{token:?}"), "BotToken(<redacted>)");
        assert_eq!(token.expose(), "123456:secret");
        assert!(BotToken::new("  ").is_empty());
    }
}
