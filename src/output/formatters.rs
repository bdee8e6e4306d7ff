//! Formatting utilities for terminal output

/// Format a word length as a circled-number badge
///
/// Accepted words are listed with their letter count in a circled glyph,
/// e.g. ④ for a four-letter word. Counts past the circled range fall back
/// to a plain `(n)`.
#[must_use]
pub fn circled(n: usize) -> String {
    match n {
        0 => "⓪".to_string(),
        1..=20 => char::from_u32(0x2460 + n as u32 - 1)
            .map_or_else(|| format!("({n})"), |c| c.to_string()),
        _ => format!("({n})"),
    }
}

/// Badge plus word, the way accepted words are listed everywhere
#[must_use]
pub fn badged_word(word: &str) -> String {
    format!("{} {}", circled(word.chars().count()), word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circled_small_counts() {
        assert_eq!(circled(1), "①");
        assert_eq!(circled(4), "④");
        assert_eq!(circled(8), "⑧");
        assert_eq!(circled(20), "⑳");
    }

    #[test]
    fn circled_zero() {
        assert_eq!(circled(0), "⓪");
    }

    #[test]
    fn circled_falls_back_past_twenty() {
        assert_eq!(circled(21), "(21)");
        assert_eq!(circled(100), "(100)");
    }

    #[test]
    fn badged_word_prefixes_length() {
        assert_eq!(badged_word("silk"), "④ silk");
        assert_eq!(badged_word("oil"), "③ oil");
    }
}
