use thiserror::Error;

/// Errors returned by shingling, Jaccard and MinHash operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShinglingError {
    /// A size parameter is out of its valid range (`shingle_size` or `num_hashes` below 1).
    #[error("invalid configuration: {parameter} must be >= 1 (got {value})")]
    InvalidConfiguration { parameter: &'static str, value: usize },

    /// Jaccard similarity of two empty sets has no defined value.
    #[error("jaccard similarity is undefined for two empty sets")]
    UndefinedSimilarity,

    #[error("signature length mismatch: {left} vs {right}")]
    SignatureLengthMismatch { left: usize, right: usize },

    #[error("document {doc} not found in a corpus of {len} documents")]
    DocumentNotFound { doc: usize, len: usize },

    #[error("unsupported hasher [{0}]. Supported hashers [sha1, sip, sea, fnv]")]
    UnsupportedHasher(String),
}

pub type Result<T> = std::result::Result<T, ShinglingError>;

impl ShinglingError {
    pub(crate) fn invalid(parameter: &'static str, value: usize) -> Self {
        ShinglingError::InvalidConfiguration { parameter, value }
    }
}
