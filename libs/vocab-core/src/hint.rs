//! Progressive hint masking for quiz answers.

/// Build a hint for `phrase` at the given reveal level.
///
/// Level 1 masks every character with underscores, revealing only the word
/// count and each word's length. Level 2 additionally reveals each word's
/// first character. Level 3 (and anything above) returns the phrase
/// verbatim. Words are whitespace-separated and rejoined with single
/// spaces. Callers clamp the level into `1..=3`; no clamping happens here.
pub fn masked_hint(phrase: &str, level: u8) -> String {
    match level {
        1 => phrase
            .split_whitespace()
            .map(|word| "_".repeat(word.chars().count()))
            .collect::<Vec<_>>()
            .join(" "),
        2 => phrase
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        let mut masked = first.to_string();
                        masked.push_str(&"_".repeat(chars.count()));
                        masked
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        _ => phrase.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_1_masks_everything() {
        assert_eq!(masked_hint("xin chào", 1), "___ ____");
        assert_eq!(masked_hint("hello", 1), "_____");
    }

    #[test]
    fn test_level_2_reveals_first_letters() {
        assert_eq!(masked_hint("xin chào", 2), "x__ c___");
        assert_eq!(masked_hint("a", 2), "a");
    }

    #[test]
    fn test_level_3_reveals_answer() {
        assert_eq!(masked_hint("xin chào", 3), "xin chào");
    }

    #[test]
    fn test_levels_above_3_reveal_answer() {
        assert_eq!(masked_hint("xin chào", 7), "xin chào");
    }

    #[test]
    fn test_multibyte_chars_count_once() {
        // "tạm" is three characters even though "ạ" is multi-byte.
        assert_eq!(masked_hint("tạm biệt", 1), "___ ____");
        assert_eq!(masked_hint("đi", 2), "đ_");
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        assert_eq!(masked_hint("xin  chào", 1), "___ ____");
    }

    #[test]
    fn test_empty_phrase() {
        assert_eq!(masked_hint("", 1), "");
        assert_eq!(masked_hint("", 2), "");
    }
}
