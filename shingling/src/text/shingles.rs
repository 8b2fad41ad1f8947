use crate::error::{Result, ShinglingError};
use fxhash::FxHashSet;
use itertools::Itertools;
use std::iter::FromIterator;

/// Separator placed between the tokens of a shingle.
pub const DEFAULT_SEPARATOR: &str = " ";

/// The set of unique shingles of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShingleSet {
    shingles: FxHashSet<String>,
}

impl ShingleSet {
    pub fn new() -> Self {
        ShingleSet::default()
    }

    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    pub fn contains(&self, shingle: &str) -> bool {
        self.shingles.contains(shingle)
    }

    /// Returns true if the shingle was not present.
    pub fn insert(&mut self, shingle: String) -> bool {
        self.shingles.insert(shingle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.shingles.iter().map(String::as_str)
    }

    /// `|self ∩ other|`, probing the larger set with the smaller one.
    pub fn intersection_len(&self, other: &ShingleSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|s| large.contains(s)).count()
    }

    /// `|self ∪ other|`
    pub fn union_len(&self, other: &ShingleSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }

    /// Adds every shingle of `other` to this set.
    pub fn union_with(&mut self, other: &ShingleSet) {
        self.shingles.extend(other.shingles.iter().cloned());
    }

    /// Consumes the set and returns its shingles in lexicographic order.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut shingles: Vec<String> = self.shingles.into_iter().collect();
        shingles.sort_unstable();
        shingles
    }
}

impl FromIterator<String> for ShingleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        ShingleSet {
            shingles: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ShingleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl IntoIterator for ShingleSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.shingles.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShingleSet {
    type Item = &'a String;
    type IntoIter = std::collections::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.shingles.iter()
    }
}

/// Builds the set of `k`-token shingles of a document, tokens joined by a single space.
///
/// A document with fewer than `k` tokens has no shingles.
///
/// ```
/// use shingling::text::build_shingles;
///
/// let shingles = build_shingles(&["the", "quick", "brown", "fox"], 2).unwrap();
/// assert_eq!(shingles.len(), 3);
/// assert!(shingles.contains("quick brown"));
/// ```
pub fn build_shingles<S: AsRef<str>>(tokens: &[S], k: usize) -> Result<ShingleSet> {
    build_shingles_with_separator(tokens, k, DEFAULT_SEPARATOR)
}

pub fn build_shingles_with_separator<S: AsRef<str>>(
    tokens: &[S],
    k: usize,
    separator: &str,
) -> Result<ShingleSet> {
    if k < 1 {
        return Err(ShinglingError::invalid("shingle_size", k));
    }
    Ok(shingle_windows(tokens, k, separator))
}

/// `k` must be at least 1.
pub(crate) fn shingle_windows<S: AsRef<str>>(tokens: &[S], k: usize, separator: &str) -> ShingleSet {
    tokens
        .windows(k)
        .map(|window| window.iter().map(AsRef::as_ref).join(separator))
        .collect()
}

/// Union of all per-document shingle sets.
pub fn universe<'a, I>(sets: I) -> ShingleSet
where
    I: IntoIterator<Item = &'a ShingleSet>,
{
    let mut all = ShingleSet::new();
    for set in sets {
        all.union_with(set);
    }
    all
}
