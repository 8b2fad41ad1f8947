use fxhash::FxHashSet;
use std::iter::FromIterator;

/// A read-only set of words excluded from similarity analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        StopwordSet::default()
    }

    /// Parses one stopword per line. Lines are trimmed and blank lines are skipped.
    ///
    /// ```
    /// use shingling::text::StopwordSet;
    ///
    /// let stopwords = StopwordSet::from_lines("the\r\nof\n\nand\n");
    /// assert_eq!(stopwords.len(), 3);
    /// assert!(stopwords.contains("of"));
    /// ```
    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StopwordSet {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

/// Returns the tokens not present in `stopwords`, preserving their order.
///
/// ```
/// use shingling::text::{filter_stopwords, StopwordSet};
///
/// let stopwords: StopwordSet = ["the"].into_iter().collect();
/// assert_eq!(filter_stopwords(&["the", "cat", "sat"], &stopwords), vec!["cat", "sat"]);
/// ```
pub fn filter_stopwords<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordSet) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !stopwords.contains(token))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_stopwords, StopwordSet};

    #[test]
    fn test_filter_stopwords() {
        let stopwords: StopwordSet = ["the", "a"].into_iter().collect();
        let tokens = vec!["the".to_string(), "cat".to_string(), "sat".to_string()];
        assert_eq!(filter_stopwords(&tokens, &stopwords), vec!["cat", "sat"]);
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let stopwords = StopwordSet::from_lines("of\nthe");
        let filtered = filter_stopwords(&["history", "of", "the", "present", "history"], &stopwords);
        assert_eq!(filtered, vec!["history", "present", "history"]);
    }

    #[test]
    fn test_empty_stopwords_keep_everything() {
        let filtered = filter_stopwords(&["a", "b"], &StopwordSet::new());
        assert_eq!(filtered, vec!["a", "b"]);
    }

    #[test]
    fn test_from_lines_skips_blank_lines() {
        let stopwords = StopwordSet::from_lines("\n  patient \n\nhistory\n");
        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("patient"));
        assert!(!stopwords.contains(""));
    }
}
