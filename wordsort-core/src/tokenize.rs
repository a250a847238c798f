/// Delimiter between words in raw input
pub const DELIMITER: char = '-';

/// Split raw input on the hyphen delimiter, trim each segment and drop empty ones
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split(DELIMITER)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_trims() {
        assert_eq!(tokenize(" banana - Apple-10 "), vec!["banana", "Apple", "10"]);
    }

    #[test]
    fn test_drops_empty_segments() {
        assert_eq!(tokenize("a--b-"), vec!["a", "b"]);
        assert!(tokenize("   -  -  ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_keeps_internal_whitespace() {
        assert_eq!(tokenize("ice cream - cake"), vec!["ice cream", "cake"]);
    }

    #[test]
    fn test_trims_unicode_whitespace() {
        assert_eq!(tokenize("\u{3000}word\u{00a0}"), vec!["word"]);
    }
}
