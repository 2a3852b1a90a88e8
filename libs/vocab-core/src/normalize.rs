//! Answer text normalization.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a phrase for comparison.
///
/// Trims surrounding whitespace, lowercases, and applies Unicode canonical
/// composition (NFC) so combining-mark sequences and precomposed characters
/// compare equal. Interior whitespace is preserved and diacritics are kept,
/// so "xin chào" and "xin chao" stay distinct.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotent() {
        for s in ["", "  Xin Chào  ", "tạm biệt", "NƯỚC", "a  b"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_case_and_outer_whitespace() {
        assert_eq!(normalize(" Xin  Chào "), normalize("xin  chào"));
        assert_eq!(normalize("HELLO"), "hello");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(normalize("xin  chào"), "xin  chào");
        assert_ne!(normalize("xin  chào"), normalize("xin chào"));
    }

    #[test]
    fn test_diacritics_matter() {
        assert_ne!(normalize("xin chào"), normalize("xin chao"));
        assert_ne!(normalize("nước"), normalize("nuoc"));
    }

    #[test]
    fn test_nfc_composes_combining_marks() {
        // "chào" typed with a combining grave accent vs. precomposed U+00E0.
        assert_eq!(normalize("cha\u{0300}o"), normalize("ch\u{00E0}o"));
    }
}
