use crate::noise::NoiseWords;

/// Characters tolerated only at the end of a word.
pub const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

fn is_punctuation(c: char) -> bool { PUNCTUATION.contains(&c) }

/// Turn a raw token into a keyword: lower-cased, trailing punctuation stripped.
///
/// Returns `None` when the token holds a digit, has punctuation left inside it,
/// is empty once stripped, or is a noise word.
pub fn normalize(token: &str, noise: &NoiseWords) -> Option<String> {
    if token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let lowered = token.to_lowercase();
    let word = lowered.trim_end_matches(is_punctuation);
    if word.is_empty() || word.contains(is_punctuation) || noise.contains(word) {
        return None;
    }
    Some(word.to_string())
}

/// Split document text into raw whitespace-delimited tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Query keywords are looked up trimmed and lower-cased.
pub fn query_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> NoiseWords {
        ["the", "a"].into_iter().collect()
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(normalize("end.", &noise()).as_deref(), Some("end"));
        assert_eq!(normalize("Really?!", &noise()).as_deref(), Some("really"));
        assert_eq!(normalize("sat,", &noise()).as_deref(), Some("sat"));
    }

    #[test]
    fn rejects_embedded_punctuation_and_digits() {
        assert_eq!(normalize("e.nd", &noise()), None);
        assert_eq!(normalize("what?ever", &noise()), None);
        assert_eq!(normalize("abc1", &noise()), None);
        assert_eq!(normalize("2nd.", &noise()), None);
    }

    #[test]
    fn rejects_noise_and_empty() {
        assert_eq!(normalize("The", &noise()), None);
        assert_eq!(normalize("a.", &noise()), None);
        assert_eq!(normalize("...", &noise()), None);
        assert_eq!(normalize("", &noise()), None);
    }

    #[test]
    fn other_symbols_are_kept() {
        assert_eq!(normalize("don't", &noise()).as_deref(), Some("don't"));
        assert_eq!(normalize("(word)", &noise()).as_deref(), Some("(word)"));
    }

    #[test]
    fn query_keywords_are_folded() {
        assert_eq!(query_keyword("  Rust\n"), "rust");
        assert_eq!(query_keyword("tide"), "tide");
    }

    #[test]
    fn whitespace_tokens() {
        let t: Vec<&str> = tokens("  The cat\tsat,\n cat. ").collect();
        assert_eq!(t, vec!["The", "cat", "sat,", "cat."]);
    }
}
