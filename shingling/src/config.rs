//! Run configuration for a corpus analysis.
//!
//! The configuration is plain data: it is validated once, before any document is
//! shingled or hashed, and read-only afterwards.

use crate::error::{Result, ShinglingError};
use crate::minhash::{HashFamily, HasherKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SHINGLE_SIZE: usize = 3;
pub const DEFAULT_NUM_HASHES: usize = 500;
pub const DEFAULT_SEED: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShinglingConfig {
    /// Number of tokens per shingle (`k`).
    pub shingle_size: usize,
    /// Number of MinHash functions, which is the signature length.
    pub num_hashes: usize,
    /// Seed of the MinHash permutations. Equal seeds give comparable signatures.
    pub seed: u64,
    pub hasher: HasherKind,
    /// Shingle documents with rayon.
    pub parallel: bool,
}

impl Default for ShinglingConfig {
    fn default() -> Self {
        Self {
            shingle_size: DEFAULT_SHINGLE_SIZE,
            num_hashes: DEFAULT_NUM_HASHES,
            seed: DEFAULT_SEED,
            hasher: HasherKind::default(),
            parallel: false,
        }
    }
}

impl ShinglingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.shingle_size < 1 {
            return Err(ShinglingError::invalid("shingle_size", self.shingle_size));
        }
        if self.num_hashes < 1 {
            return Err(ShinglingError::invalid("num_hashes", self.num_hashes));
        }
        Ok(())
    }

    /// Builds the MinHash family described by this configuration.
    pub fn hash_family(&self) -> Result<HashFamily> {
        HashFamily::with_hasher(self.num_hashes, self.seed, self.hasher)
    }
}
