mod hash_family;
mod hashers;

pub use self::hash_family::{HashFamily, EMPTY_SLOT};
use self::hash_family::ShingleBytes;
pub use self::hashers::{HasherKind, Sha1Hasher};

use crate::error::{Result, ShinglingError};
use crate::text::ShingleSet;
use rayon::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

/// The ordered per-hash-function minimum values of one set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinHashSignature {
    values: Vec<u32>,
}

impl MinHashSignature {
    pub fn new(values: Vec<u32>) -> Self {
        MinHashSignature { values }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every slot holds [`EMPTY_SLOT`], i.e. the signature of an empty set.
    pub fn is_empty_set(&self) -> bool {
        self.values.iter().all(|&v| v == EMPTY_SLOT)
    }

    /// Fraction of slots on which both signatures agree.
    pub fn similarity(&self, other: &MinHashSignature) -> Result<f64> {
        if self.len() != other.len() {
            return Err(ShinglingError::SignatureLengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(compute_minhash_similarity(&self.values, &other.values))
    }

    pub fn distance(&self, other: &MinHashSignature) -> Result<f64> {
        self.similarity(other).map(|s| 1.0 - s)
    }
}

pub trait MinHasher {
    fn create_signature<T, U>(&self, iter: T) -> MinHashSignature
    where
        T: IntoIterator<Item = U>,
        U: Hash;

    fn bulk_create_signature<U>(&self, batch: &[Vec<U>]) -> Vec<MinHashSignature>
    where
        U: Hash + Sync,
        Self: Sync,
    {
        batch
            .par_iter()
            .map(|tokens| self.create_signature(tokens.iter()))
            .collect()
    }

    /// Signature of a shingle set, hashing every shingle as its raw UTF-8 bytes.
    fn create_set_signature(&self, set: &ShingleSet) -> MinHashSignature {
        self.create_signature(set.iter().map(ShingleBytes))
    }

    /// Signatures of many shingle sets, computed in parallel.
    fn bulk_create_set_signature(&self, sets: &[ShingleSet]) -> Vec<MinHashSignature>
    where
        Self: Sync,
    {
        sets.par_iter()
            .map(|set| self.create_set_signature(set))
            .collect()
    }

    fn compute_similarity<T, U>(&self, iter_1: T, iter_2: T) -> f64
    where
        T: IntoIterator<Item = U>,
        U: Hash,
    {
        compute_minhash_similarity(
            self.create_signature(iter_1).values(),
            self.create_signature(iter_2).values(),
        )
    }

    fn compute_set_similarity(&self, a: &ShingleSet, b: &ShingleSet) -> f64 {
        compute_minhash_similarity(
            self.create_set_signature(a).values(),
            self.create_set_signature(b).values(),
        )
    }
}

/// Exact Jaccard similarity of two collections of hashable items.
///
/// Fails with [`ShinglingError::UndefinedSimilarity`] when both are empty.
pub fn compute_jaccard_similarity<T, U>(iter_1: T, iter_2: T) -> Result<f64>
where
    T: IntoIterator<Item = U>,
    U: Hash + Eq,
{
    let h1 = HashSet::<U>::from_iter(iter_1);
    let h2 = HashSet::<U>::from_iter(iter_2);
    let intersection_len = h1.intersection(&h2).count();
    jaccard_ratio(intersection_len, h1.len() + h2.len() - intersection_len)
}

pub fn compute_jaccard_distance<T, U>(iter_1: T, iter_2: T) -> Result<f64>
where
    T: IntoIterator<Item = U>,
    U: Hash + Eq,
{
    compute_jaccard_similarity(iter_1, iter_2).map(|s| 1.0 - s)
}

/// Exact Jaccard similarity `|A ∩ B| / |A ∪ B|` of two shingle sets.
///
/// Two empty sets have no defined similarity and yield
/// [`ShinglingError::UndefinedSimilarity`]; one empty set against a non-empty one is `0.0`.
///
/// ```
/// use shingling::minhash::exact_jaccard;
/// use shingling::text::ShingleSet;
///
/// let a: ShingleSet = ["a", "b", "c"].into_iter().collect();
/// let b: ShingleSet = ["b", "c", "d"].into_iter().collect();
/// assert_eq!(exact_jaccard(&a, &b).unwrap(), 0.5);
/// ```
pub fn exact_jaccard(a: &ShingleSet, b: &ShingleSet) -> Result<f64> {
    let intersection_len = a.intersection_len(b);
    jaccard_ratio(intersection_len, a.len() + b.len() - intersection_len)
}

fn jaccard_ratio(intersection_len: usize, union_len: usize) -> Result<f64> {
    if union_len == 0 {
        return Err(ShinglingError::UndefinedSimilarity);
    }
    Ok(intersection_len as f64 / union_len as f64)
}

/// Estimates the Jaccard similarity of two shingle sets with `num_hashes` MinHash
/// functions drawn from `seed`.
///
/// Both signatures are computed with one [`HashFamily`]. The result is a multiple
/// of `1 / num_hashes`. Two empty sets produce identical signatures and estimate to `1.0`.
///
/// ```
/// use shingling::minhash::estimate_jaccard;
/// use shingling::text::ShingleSet;
///
/// let a: ShingleSet = ["a", "b", "c"].into_iter().collect();
/// let b: ShingleSet = ["b", "c", "d"].into_iter().collect();
/// let estimate = estimate_jaccard(&a, &b, 500, 1).unwrap();
/// assert!((estimate - 0.5).abs() < 0.15);
/// assert!(estimate_jaccard(&a, &b, 0, 1).is_err());
/// ```
pub fn estimate_jaccard(a: &ShingleSet, b: &ShingleSet, num_hashes: usize, seed: u64) -> Result<f64> {
    let family = HashFamily::new(num_hashes, seed)?;
    Ok(family.compute_set_similarity(a, b))
}

/// Calculates jaccard similarity between two minhashes
///
/// # Panics
///
/// If the signatures differ in length.
///
/// # Examples
///
/// ```
/// use shingling::minhash::compute_minhash_similarity;
///
/// let m1 = [1, 2, 3, 4, 5, 6];
/// let m2 = [1, 2, 3, 7, 5, 8];
/// assert!((compute_minhash_similarity(&m1, &m2) - 0.666) < 0.01);
///
/// ```
pub fn compute_minhash_similarity<T>(min_hashes_1: &[T], min_hashes_2: &[T]) -> f64
where
    T: Eq,
{
    assert_eq!(min_hashes_1.len(), min_hashes_2.len());
    let num_hashes = min_hashes_1.len();
    let matches: u64 = min_hashes_1
        .iter()
        .zip(min_hashes_2.iter())
        .map(|(min_hash_1, min_hash_2)| (min_hash_1 == min_hash_2) as u64)
        .sum();
    (matches as f64) / (num_hashes as f64)
}

pub fn compute_minhash_distance<T>(min_hashes_1: &[T], min_hashes_2: &[T]) -> f64
where
    T: Eq,
{
    1.0 - compute_minhash_similarity(min_hashes_1, min_hashes_2)
}

/// Returns as soon as enough slots match for the similarity to reach `threshold`.
pub fn similarity_greater_than_threshold<T>(
    min_hashes_1: &[T],
    min_hashes_2: &[T],
    threshold: f64,
) -> bool
where
    T: Eq,
{
    assert_eq!(min_hashes_1.len(), min_hashes_2.len());
    let num_hashes = min_hashes_1.len();
    let expected_matches = (num_hashes as f64 * threshold).ceil() as usize;
    let mut num_matches = 0;
    for pair in min_hashes_1.iter().zip(min_hashes_2.iter()) {
        if num_matches >= expected_matches {
            return true;
        }
        if pair.0 == pair.1 {
            num_matches += 1;
        }
    }
    num_matches >= expected_matches
}
