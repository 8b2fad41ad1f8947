use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use rayon::prelude::*;
use shingling::ShingleSet;

pub struct GeneratedPair {
    pub first: ShingleSet,
    pub second: ShingleSet,
    /// Jaccard similarity of the pair by construction.
    pub jaccard_similarity: f64,
}

/// Generates pairs of shingle sets with a known Jaccard similarity.
///
/// Every pair starts from `shingles_per_doc` distinct shingles drawn from a
/// vocabulary of `vocabulary_size`. The second set replaces `num_changes` of them
/// with shingles outside the vocabulary, so the pair has exactly
/// `(n - c) / (n + c)` similarity.
pub struct PairGenerator {
    pub jaccard_similarity: f64,
    pub shingles_per_doc: usize,
    pub vocabulary_size: usize,
    pub num_pairs: usize,
    pub seed: u64,
}

impl PairGenerator {

    pub fn new(jaccard_similarity: f64, shingles_per_doc: usize,
               vocabulary_size: usize, num_pairs: usize, seed: u64) -> Self {
        PairGenerator {
            jaccard_similarity,
            shingles_per_doc,
            vocabulary_size: vocabulary_size.max(shingles_per_doc),
            num_pairs,
            seed,
        }
    }

    pub fn generate(&self) -> Vec<GeneratedPair> {
        let num_changes = self.num_changes();
        (0..self.num_pairs)
            .into_par_iter()
            .map(|i| self.generate_pair(i, num_changes))
            .collect()
    }

    /// Computes the maximum number of elements changed in a given set
    /// that would result in an a jaccard similarity greater than required.
    fn num_changes(&self) -> usize {
        let mut k = 1;
        let n = self.shingles_per_doc as f64;
        while k <= self.shingles_per_doc && (n - k as f64) / (n + k as f64) > self.jaccard_similarity {
            k = k + 1
        }
        k - 1
    }

    fn generate_pair(&self, pair_id: usize, num_changes: usize) -> GeneratedPair {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(pair_id as u64));
        let picked: Vec<usize> = sample(&mut rng, self.vocabulary_size, self.shingles_per_doc).into_vec();
        let shingle = |id: usize| format!("w{} w{}", id, id + 1);

        let first: ShingleSet = picked.iter().map(|&id| shingle(id)).collect();
        let second: ShingleSet = picked.iter()
            .skip(num_changes)
            .map(|&id| shingle(id))
            .chain((0..num_changes).map(|j| format!("new{} {}", pair_id, j)))
            .collect();

        let n = self.shingles_per_doc as f64;
        let c = num_changes as f64;
        GeneratedPair {
            first,
            second,
            jaccard_similarity: (n - c) / (n + c),
        }
    }
}
