use crate::error::ShinglingError;
use fnv::FnvHasher;
use seahash::SeaHasher;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use siphasher::sip::SipHasher;
use std::fmt;
use std::hash::{BuildHasher, Hasher};
use std::str::FromStr;

/// Base hash applied to each shingle before the seeded permutations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    /// SHA-1, first four digest bytes read as a little endian integer. Shingle
    /// sets feed it the raw UTF-8 bytes of each shingle.
    #[default]
    Sha1,
    /// SipHash-2-4 with fixed keys.
    Sip,
    Sea,
    /// FNV-1a
    Fnv,
}

impl HasherKind {
    pub fn new_hasher(&self) -> Box<dyn Hasher> {
        match self {
            HasherKind::Sha1 => Box::new(Sha1Hasher::new()),
            HasherKind::Sip => Box::new(SipHasher::new_with_keys(1, 2)),
            HasherKind::Sea => Box::new(SeaHasher::new()),
            HasherKind::Fnv => Box::new(FnvHasher::default()),
        }
    }
}

impl BuildHasher for HasherKind {
    type Hasher = Box<dyn Hasher>;

    fn build_hasher(&self) -> Self::Hasher {
        self.new_hasher()
    }
}

impl FromStr for HasherKind {
    type Err = ShinglingError;

    fn from_str(input: &str) -> Result<HasherKind, ShinglingError> {
        match input.to_lowercase().as_str() {
            "sha1" => Ok(HasherKind::Sha1),
            "sip" => Ok(HasherKind::Sip),
            "sea" => Ok(HasherKind::Sea),
            "fnv" => Ok(HasherKind::Fnv),
            _ => Err(ShinglingError::UnsupportedHasher(input.to_string())),
        }
    }
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HasherKind::Sha1 => "sha1",
            HasherKind::Sip => "sip",
            HasherKind::Sea => "sea",
            HasherKind::Fnv => "fnv",
        };
        f.write_str(name)
    }
}

/// Buffers written bytes and digests them with SHA-1 on `finish`.
#[derive(Default)]
pub struct Sha1Hasher {
    bytes: Vec<u8>,
}

impl Sha1Hasher {
    pub fn new() -> Self {
        Sha1Hasher { bytes: Vec::new() }
    }
}

impl Hasher for Sha1Hasher {
    fn finish(&self) -> u64 {
        let digest = Sha1::digest(self.bytes.as_slice());
        u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]) as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}
