//! Shared text helpers

/// Truncates a string to at most `max_units` UTF-16 code units, ending it
/// with an ellipsis when anything was cut.
///
/// Telegram measures message length in UTF-16 code units, so characters
/// outside the Basic Multilingual Plane (emoji) count twice. Cuts always land
/// on a character boundary.
pub fn truncate_utf16(input: &str, max_units: usize) -> String {
    if input.encode_utf16().count() <= max_units {
        return input.to_string();
    }

    let budget = max_units.saturating_sub(3);
    let mut used = 0;
    let mut truncated: String = input
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= budget
        })
        .collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_utf16() {
        let input = "This is a very long string that should be truncated";
        let truncated = truncate_utf16(input, 20);
        assert_eq!(truncated, "This is a very lo...");

        let short = "Short";
        let not_truncated = truncate_utf16(short, 20);
        assert_eq!(not_truncated, "Short");
    }

    #[test]
    fn test_truncate_utf16_cyrillic() {
        let input = "Клиенты: очень длинный список";
        let truncated = truncate_utf16(input, 10);
        assert_eq!(truncated, "Клиенты...");
        assert_eq!(truncated.encode_utf16().count(), 10);
    }

    #[test]
    fn test_truncate_utf16_counts_emoji_twice() {
        // Each emoji is two UTF-16 code units.
        let input = "😀".repeat(6);
        assert_eq!(truncate_utf16(&input, 12), input);

        let truncated = truncate_utf16(&input, 11);
        assert_eq!(truncated, "😀😀😀😀...");
        assert!(truncated.encode_utf16().count() <= 11);
    }
}
