//! Bulk analysis of a document collection.
//!
//! A [`Corpus`] tokenizes, filters and shingles every raw document once and keeps the
//! resulting shingle sets in an arena indexed by document id (the position of the
//! document in the input). Pairwise comparisons then look sets up by id.

use crate::config::ShinglingConfig;
use crate::error::{Result, ShinglingError};
use crate::minhash::{exact_jaccard, HashFamily, MinHasher};
use crate::text::{filter_stopwords, shingle_windows, tokenize, universe, ShingleSet, StopwordSet, DEFAULT_SEPARATOR};
use fxhash::FxHashMap;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, trace};

pub struct Corpus {
    config: ShinglingConfig,
    shingle_sets: Vec<ShingleSet>,
}

/// Estimated and exact similarity of two documents of a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub doc_a: usize,
    pub doc_b: usize,
    pub estimated: f64,
    /// `None` when both documents have no shingles.
    pub exact: Option<f64>,
}

impl SimilarityReport {
    pub fn abs_error(&self) -> Option<f64> {
        self.exact.map(|exact| (self.estimated - exact).abs())
    }
}

fn document_shingles(document: &str, stopwords: &StopwordSet, k: usize) -> ShingleSet {
    let tokens = filter_stopwords(&tokenize(document), stopwords);
    shingle_windows(&tokens, k, DEFAULT_SEPARATOR)
}

impl Corpus {
    /// Validates `config`, then builds the shingle set of every document.
    ///
    /// ```
    /// use shingling::{Corpus, ShinglingConfig};
    /// use shingling::text::StopwordSet;
    ///
    /// let documents = ["The patient was seen today.", "The patient was seen yesterday."];
    /// let config = ShinglingConfig { shingle_size: 2, ..Default::default() };
    /// let corpus = Corpus::build(&documents, &StopwordSet::new(), config).unwrap();
    /// let report = corpus.compare(0, 1).unwrap();
    /// assert_eq!(report.exact, Some(0.6));
    /// ```
    pub fn build<S>(documents: &[S], stopwords: &StopwordSet, config: ShinglingConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        config.validate()?;
        let k = config.shingle_size;
        let now = Instant::now();
        let shingle_sets: Vec<ShingleSet> = if config.parallel {
            documents
                .par_iter()
                .map(|doc| document_shingles(doc.as_ref(), stopwords, k))
                .collect()
        } else {
            documents
                .iter()
                .map(|doc| document_shingles(doc.as_ref(), stopwords, k))
                .collect()
        };
        debug!(
            documents = shingle_sets.len(),
            shingle_size = k,
            parallel = config.parallel,
            elapsed_ms = now.elapsed().as_millis() as u64,
            "corpus shingled"
        );
        Ok(Corpus {
            config,
            shingle_sets,
        })
    }

    pub fn config(&self) -> &ShinglingConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.shingle_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shingle_sets.is_empty()
    }

    pub fn shingles(&self, doc: usize) -> Result<&ShingleSet> {
        self.shingle_sets
            .get(doc)
            .ok_or(ShinglingError::DocumentNotFound {
                doc,
                len: self.shingle_sets.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ShingleSet)> + '_ {
        self.shingle_sets.iter().enumerate()
    }

    pub fn shingle_sets(&self) -> &[ShingleSet] {
        &self.shingle_sets
    }

    pub fn universe(&self) -> ShingleSet {
        let all = universe(&self.shingle_sets);
        debug!(shingles = all.len(), "universe built");
        all
    }

    pub fn characteristic_matrix(&self) -> CharacteristicMatrix {
        CharacteristicMatrix::new(&self.shingle_sets)
    }

    pub fn hash_family(&self) -> Result<HashFamily> {
        self.config.hash_family()
    }

    /// Compares two documents with a fresh hash family built from the configuration.
    pub fn compare(&self, doc_a: usize, doc_b: usize) -> Result<SimilarityReport> {
        let family = self.hash_family()?;
        self.compare_with(&family, doc_a, doc_b)
    }

    /// Compares two documents with a caller supplied hash family, so that many
    /// pairs can share one family.
    pub fn compare_with(&self, family: &HashFamily, doc_a: usize, doc_b: usize) -> Result<SimilarityReport> {
        let a = self.shingles(doc_a)?;
        let b = self.shingles(doc_b)?;
        let estimated = family.compute_set_similarity(a, b);
        let exact = match exact_jaccard(a, b) {
            Ok(exact) => Some(exact),
            Err(ShinglingError::UndefinedSimilarity) => None,
            Err(e) => return Err(e),
        };
        trace!(doc_a = doc_a, doc_b = doc_b, estimated = estimated, exact = ?exact, "documents compared");
        Ok(SimilarityReport {
            doc_a,
            doc_b,
            estimated,
            exact,
        })
    }
}

/// Sparse shingle-by-document incidence matrix.
///
/// Row `i` is the `i`-th shingle of the universe in lexicographic order and lists,
/// in ascending order, the ids of the documents containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicMatrix {
    shingles: Vec<String>,
    rows: Vec<Vec<usize>>,
}

impl CharacteristicMatrix {
    pub fn new(shingle_sets: &[ShingleSet]) -> Self {
        let shingles = universe(shingle_sets).into_sorted_vec();
        let row_index: FxHashMap<&str, usize> = shingles
            .iter()
            .enumerate()
            .map(|(row, shingle)| (shingle.as_str(), row))
            .collect();
        let mut rows = vec![Vec::new(); shingles.len()];
        for (doc, set) in shingle_sets.iter().enumerate() {
            for shingle in set.iter() {
                if let Some(&row) = row_index.get(shingle) {
                    rows[row].push(doc);
                }
            }
        }
        CharacteristicMatrix { shingles, rows }
    }

    pub fn num_shingles(&self) -> usize {
        self.shingles.len()
    }

    pub fn shingle(&self, row: usize) -> Option<&str> {
        self.shingles.get(row).map(String::as_str)
    }

    pub fn documents(&self, row: usize) -> Option<&[usize]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.shingles
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::{CharacteristicMatrix, Corpus};
    use crate::config::ShinglingConfig;
    use crate::error::ShinglingError;
    use crate::text::{ShingleSet, StopwordSet};

    static DOCS: [&str; 4] = [
        "The quick brown fox jumps over the lazy dog.",
        "A quick brown fox jumped over a lazy dog!",
        "Patient presents with chest pain.",
        "!!!",
    ];

    fn config(k: usize) -> ShinglingConfig {
        ShinglingConfig { shingle_size: k, num_hashes: 256, ..Default::default() }
    }

    #[test]
    fn test_build() {
        let stopwords = StopwordSet::from_lines("the\na\n");
        let corpus = Corpus::build(&DOCS, &stopwords, config(2)).unwrap();
        assert_eq!(corpus.len(), 4);
        let first = corpus.shingles(0).unwrap();
        assert!(first.contains("quick brown"));
        assert!(first.contains("lazy dog"));
        assert!(!first.contains("the quick"));
        assert!(corpus.shingles(3).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_build_matches_serial() {
        let stopwords = StopwordSet::new();
        let serial = Corpus::build(&DOCS, &stopwords, config(2)).unwrap();
        let parallel = Corpus::build(&DOCS, &stopwords, ShinglingConfig { parallel: true, ..config(2) }).unwrap();
        assert_eq!(serial.shingle_sets(), parallel.shingle_sets());
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let result = Corpus::build(&DOCS, &StopwordSet::new(), config(0));
        assert!(matches!(result, Err(ShinglingError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_compare() {
        let stopwords = StopwordSet::from_lines("the\na\n");
        let corpus = Corpus::build(&DOCS, &stopwords, config(2)).unwrap();
        let report = corpus.compare(0, 1).unwrap();
        // {quick brown, brown fox, fox jumps, jumps over, over lazy, lazy dog}
        // {quick brown, brown fox, fox jumped, jumped over, over lazy, lazy dog}
        assert_eq!(report.exact, Some(4.0 / 8.0));
        assert!(report.abs_error().unwrap() < 0.15);

        let report = corpus.compare(0, 2).unwrap();
        assert_eq!(report.exact, Some(0.0));
    }

    #[test]
    fn test_compare_empty_documents() {
        let corpus = Corpus::build(&DOCS, &StopwordSet::new(), config(2)).unwrap();
        let report = corpus.compare(3, 3).unwrap();
        assert_eq!(report.exact, None);
        assert_eq!(report.estimated, 1.0);
        assert_eq!(report.abs_error(), None);
    }

    #[test]
    fn test_compare_unknown_document() {
        let corpus = Corpus::build(&DOCS, &StopwordSet::new(), config(2)).unwrap();
        assert_eq!(
            corpus.compare(0, 4),
            Err(ShinglingError::DocumentNotFound { doc: 4, len: 4 })
        );
    }

    #[test]
    fn test_characteristic_matrix() {
        let a: ShingleSet = ["b", "a"].into_iter().collect();
        let b: ShingleSet = ["c", "b"].into_iter().collect();
        let matrix = CharacteristicMatrix::new(&[a, b]);
        assert_eq!(matrix.num_shingles(), 3);
        let rows: Vec<(&str, &[usize])> = matrix.rows().collect();
        assert_eq!(rows, vec![("a", &[0][..]), ("b", &[0, 1][..]), ("c", &[1][..])]);
        assert_eq!(matrix.shingle(1), Some("b"));
        assert_eq!(matrix.documents(3), None);
    }

    #[test]
    fn test_universe() {
        let corpus = Corpus::build(&DOCS, &StopwordSet::new(), config(1)).unwrap();
        let universe = corpus.universe();
        assert!(universe.contains("fox"));
        assert!(universe.contains("pain"));
        assert_eq!(corpus.characteristic_matrix().num_shingles(), universe.len());
    }
}
