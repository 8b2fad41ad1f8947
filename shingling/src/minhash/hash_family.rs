use crate::error::{Result, ShinglingError};
use crate::minhash::hashers::HasherKind;
use crate::minhash::{MinHashSignature, MinHasher};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::hash::{BuildHasher, Hash, Hasher};

const MERSENNE_PRIME_61: u64 = (1 << 61) - 1;
const MAX_HASH: u64 = u32::MAX as u64;

/// Value of every signature slot of an empty set.
pub const EMPTY_SLOT: u32 = u32::MAX;

/// Hashes a shingle as its UTF-8 bytes, without the terminator `str::hash` appends.
pub(crate) struct ShingleBytes<'a>(pub(crate) &'a str);

impl Hash for ShingleBytes<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.0.as_bytes());
    }
}

/// A family of `num_hashes` seeded permutations `h_j(x) = ((a_j * x + b_j) mod p) & (2^32 - 1)`
/// applied on top of a base hash `B`.
///
/// Signatures are only comparable when they come from the same family, so one
/// `HashFamily` must be built per comparison and used for both sets.
///
/// ```
/// use shingling::minhash::{HashFamily, MinHasher};
///
/// let family = HashFamily::new(128, 1).unwrap();
/// let s1 = family.create_signature(["a b", "b c", "c d"]);
/// let s2 = family.create_signature(["a b", "b c", "c e"]);
/// assert_eq!(s1.len(), 128);
/// assert!(s1.similarity(&s2).unwrap() > 0.2);
/// ```
#[derive(Clone, Debug)]
pub struct HashFamily<B = HasherKind> {
    build_hasher: B,
    a: Vec<u64>,
    b: Vec<u64>,
    seed: u64,
}

impl HashFamily<HasherKind> {
    pub fn new(num_hashes: usize, seed: u64) -> Result<Self> {
        HashFamily::with_hasher(num_hashes, seed, HasherKind::default())
    }
}

impl<B: BuildHasher> HashFamily<B> {
    pub fn with_hasher(num_hashes: usize, seed: u64, build_hasher: B) -> Result<Self> {
        if num_hashes < 1 {
            return Err(ShinglingError::invalid("num_hashes", num_hashes));
        }
        let mut rng = Pcg64::seed_from_u64(seed);
        let rand_range1 = Uniform::from(1..MERSENNE_PRIME_61);
        let rand_range2 = Uniform::from(0..MERSENNE_PRIME_61);
        let a = (0..num_hashes)
            .map(|_| rand_range1.sample(&mut rng))
            .collect();
        let b = (0..num_hashes)
            .map(|_| rand_range2.sample(&mut rng))
            .collect();
        Ok(HashFamily {
            build_hasher,
            a,
            b,
            seed,
        })
    }

    /// Returns the number of hash functions, which is the signature length.
    pub fn num_hashes(&self) -> usize {
        self.a.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn base_hash<U: Hash>(&self, item: U) -> u64 {
        let mut hasher = self.build_hasher.build_hasher();
        item.hash(&mut hasher);
        hasher.finish() & MAX_HASH
    }
}

impl<B: BuildHasher> MinHasher for HashFamily<B> {
    fn create_signature<T, U>(&self, iter: T) -> MinHashSignature
    where
        T: IntoIterator<Item = U>,
        U: Hash,
    {
        let hashes: Vec<u64> = iter
            .into_iter()
            .map(|item| self.base_hash(item))
            .collect();

        let values = self
            .a
            .iter()
            .zip(self.b.iter())
            .map(|(a, b)| {
                hashes
                    .iter()
                    .map(|hash| {
                        let x = hash.wrapping_mul(*a).wrapping_add(*b);
                        ((x % MERSENNE_PRIME_61) & MAX_HASH) as u32
                    })
                    .min()
                    .unwrap_or(EMPTY_SLOT)
            })
            .collect();
        MinHashSignature::new(values)
    }
}
