//! Hashing capability used by `CardinalityEstimator` to map values into 64-bit hashes.
//!
//! Any `Fn(&[u8]) -> u64` can be used as a hasher, which is handy for tests with fixed hashes.

use std::hash::{BuildHasher, Hasher};
use std::io::Cursor;

use murmur3::murmur3_x64_128;

/// Map value bytes into a well-distributed 64-bit hash
pub trait ValueHasher {
    fn hash_bytes(&self, bytes: &[u8]) -> u64;
}

impl<F> ValueHasher for F
where
    F: Fn(&[u8]) -> u64,
{
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        self(bytes)
    }
}

/// Default hasher: low 64 bits of 128-bit MurmurHash3 (x64 variant, seed 0),
/// i.e. its first 8 output bytes packed little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3Hasher;

impl ValueHasher for Murmur3Hasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        // infallible: `Cursor` over a slice never returns an I/O error
        murmur3_x64_128(&mut Cursor::new(bytes), 0)
            .map(|h| h as u64)
            .expect("reading from in-memory slice never fails")
    }
}

/// WyHash hasher with configurable seed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WyHasher {
    seed: u64,
}

impl WyHasher {
    /// Create `WyHasher` hashing with `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl ValueHasher for WyHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        wyhash::wyhash(bytes, self.seed)
    }
}

/// Adapter for any `std::hash::BuildHasher` (e.g. `BuildHasherDefault<WyHash>`).
///
/// Bytes are fed through `Hasher::write`, so no length prefix is hashed.
#[derive(Debug, Clone, Default)]
pub struct StdBuildHasher<B>(pub B);

impl<B: BuildHasher> ValueHasher for StdBuildHasher<B> {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut hasher = self.0.build_hasher();
        hasher.write(bytes);
        hasher.finish()
    }
}
