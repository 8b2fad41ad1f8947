/// Returns true for characters that survive cleaning: word characters
/// (alphanumeric or underscore) and the apostrophe.
#[inline]
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Normalizes raw text for tokenization.
///
/// The text is lowercased, every character that is not a word character,
/// whitespace or apostrophe becomes a space, whitespace runs are collapsed
/// to a single space and the result is trimmed.
///
/// ```
/// use shingling::text::clean_text;
///
/// assert_eq!(clean_text("  Hello,  World! It's\tme "), "hello world it's me");
/// ```
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        if is_token_char(c) {
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(c);
        } else {
            pending_space = true;
        }
    }
    cleaned
}

/// Splits raw text into lowercase word tokens.
///
/// Empty input, or input made only of punctuation and whitespace, yields no tokens.
///
/// ```
/// use shingling::text::tokenize;
///
/// assert_eq!(tokenize("Hello,  World!"), vec!["hello", "world"]);
/// assert!(tokenize(" ?! ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    whitespace_split(&clean_text(text))
        .map(str::to_owned)
        .collect()
}

/// Splits already cleaned text on whitespace, skipping empty pieces.
pub fn whitespace_split(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace())
        .filter(|&x| !x.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{clean_text, tokenize, whitespace_split};

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("Hello,  World!"), vec!["hello", "world"]);
        assert_eq!(
            tokenize("History: pt. was seen (again) on 12/03."),
            vec!["history", "pt", "was", "seen", "again", "on", "12", "03"]
        );
    }

    #[test]
    fn test_tokenize_keeps_apostrophes_and_underscores() {
        assert_eq!(tokenize("Don't use snake_case"), vec!["don't", "use", "snake_case"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("...,;!").is_empty());
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("ÜBER Straße—Café"), vec!["über", "straße", "café"]);
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("\tA  b\n\nc  "), "a b c");
        assert_eq!(clean_text("a-b"), "a b");
    }

    #[test]
    fn test_whitespace_split() {
        let tokens: Vec<&str> = whitespace_split("  local  sensitive hashing ").collect();
        assert_eq!(tokens, vec!["local", "sensitive", "hashing"]);
    }
}
