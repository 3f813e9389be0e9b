//! Common type definitions and newtype wrappers for domain modeling

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A Telegram chat ID.
///
/// Private chats carry the user's positive ID, groups and channels use
/// negative IDs, so the inner value is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChatId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_group_id() {
        let id: ChatId = "-1001234567890".parse().unwrap();
        assert_eq!(id, ChatId(-1_001_234_567_890));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<ChatId>().is_err());
        assert!("".parse::<ChatId>().is_err());
    }
}
