//! Parsing of incoming chat messages into requests

use owrt_common::ChatId;

/// A single incoming message, reduced to what the router needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Chat the message came from
    pub chat_id: ChatId,
    /// Lowercased command name without the leading `/` or `@botname`
    /// suffix, `None` for anything that is not a command.
    pub command: Option<String>,
    /// Whitespace-separated words following the command
    pub args: Vec<String>,
}

impl Request {
    /// Builds a request from the message text (`None` for non-text messages).
    ///
    /// `bot_username` is this bot's username. A command addressed to another
    /// bot (`/start@other_bot`) is not treated as a command.
    pub fn parse(chat_id: ChatId, text: Option<&str>, bot_username: &str) -> Self {
        let mut request = Self {
            chat_id,
            command: None,
            args: Vec::new(),
        };

        let Some(body) = text.and_then(|t| t.strip_prefix('/')) else {
            return request;
        };

        let mut words = body.split_whitespace();
        let head = words.next().unwrap_or_default();
        // `/start@my_bot` addresses a bot in group chats.
        let (name, addressee) = match head.split_once('@') {
            Some((name, addressee)) => (name, Some(addressee)),
            None => (head, None),
        };
        if name.is_empty() {
            return request;
        }
        if addressee.is_some_and(|bot| !bot.eq_ignore_ascii_case(bot_username)) {
            return request;
        }

        request.command = Some(name.to_lowercase());
        request.args = words.map(str::to_string).collect();
        request
    }

    /// The command name, if this is a command
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: ChatId = ChatId(7);
    const BOT: &str = "owrt_bot";

    #[test]
    fn test_plain_command() {
        let request = Request::parse(CHAT, Some("/clients"), BOT);
        assert_eq!(request.command(), Some("clients"));
        assert!(request.args.is_empty());
    }

    #[test]
    fn test_command_with_arguments() {
        let request = Request::parse(CHAT, Some("/rua_add  example.com   extra"), BOT);
        assert_eq!(request.command(), Some("rua_add"));
        assert_eq!(request.args, vec!["example.com", "extra"]);
    }

    #[test]
    fn test_bot_suffix_and_case() {
        let request = Request::parse(CHAT, Some("/Start@owrt_bot"), BOT);
        assert_eq!(request.command(), Some("start"));
    }

    #[test]
    fn test_command_for_another_bot() {
        let request = Request::parse(CHAT, Some("/clients@some_other_bot"), BOT);
        assert_eq!(request.command(), None);
        assert!(request.args.is_empty());

        let request = Request::parse(CHAT, Some("/clients@OWRT_Bot now"), BOT);
        assert_eq!(request.command(), Some("clients"));
        assert_eq!(request.args, vec!["now"]);
    }

    #[test]
    fn test_not_a_command() {
        assert_eq!(Request::parse(CHAT, Some("hello"), BOT).command(), None);
        assert_eq!(Request::parse(CHAT, Some(" /start"), BOT).command(), None);
        assert_eq!(Request::parse(CHAT, Some("/"), BOT).command(), None);
        assert_eq!(Request::parse(CHAT, Some("/@bot"), BOT).command(), None);
        assert_eq!(Request::parse(CHAT, None, BOT).command(), None);
    }
}
