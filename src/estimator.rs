//! Cardinality estimator allows to estimate number of distinct values
//! in the stream or dataset and is defined with two parameters:
//! - `precision`: precision parameter in [4..25] range, which defines
//!   number of bits to use for HyperLogLog register indices (`M = 2^precision` registers).
//! - `max_sparse_set_size`: capacity of the write buffer batching sparse insertions.
//!
//! # Data-structure design rationale
//!
//! ## Low memory footprint
//! Estimator starts with the sparse representation, which stores only observed
//! `(index, rank)` pairs at a finer 25-bit precision. Once the sparse list holds `6 * M` entries
//! it is promoted to the dense representation of `M` one-byte registers. Promotion is one-way.
//!
//! ## Low latency
//! - Sparse insertions are appended to an unsorted write buffer and merged into the
//!   sorted sparse list in batches of `max_sparse_set_size` entries.
//! - Dense insertions are a single register max-update.
//!
//! ## High accuracy
//! - For small cardinality range linear counting over `2^25` sparse registers
//!   is very accurate (within hash collisions chance).
//! - For large cardinality range HyperLogLog++ is used with empirical bias correction.
//!   - Expected error:
//!     P = 10: 1.04 / sqrt(2^10) = 3.25%
//!     P = 12: 1.04 / sqrt(2^12) = 1.62%
//!     P = 14: 1.04 / sqrt(2^14) = 0.81%
//!     P = 18: 1.04 / sqrt(2^18) = 0.20%
//!
//! # Thread safety
//! `add` and `cardinality` both require `&mut self` (estimating a sparse estimator merges its
//! write buffer), so sharing an estimator between threads requires an exclusive lock.

use std::fmt::{Debug, Formatter};

use tracing::debug;

use crate::encoding::SPARSE_PRECISION;
use crate::error::{EstimatorError, Result};
use crate::hasher::{Murmur3Hasher, ValueHasher};
use crate::representation::{Representation, RepresentationKind, RepresentationTrait};
use crate::sparse::Sparse;

/// Lowest supported precision
pub const MIN_PRECISION: u8 = 4;
/// Highest supported precision
pub const MAX_PRECISION: u8 = SPARSE_PRECISION;
/// Precision used by `Config::default`
pub const DEFAULT_PRECISION: u8 = 14;
/// Write buffer capacity used by `Config::default`
pub const DEFAULT_MAX_SPARSE_SET_SIZE: usize = 1024;

/// Parameters of `CardinalityEstimator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of bits used for dense register indices, in [4..25] range
    pub precision: u8,
    /// Capacity of the sparse write buffer
    pub max_sparse_set_size: usize,
}

impl Config {
    /// Create unvalidated `Config`, see `validate`
    pub fn new(precision: u8, max_sparse_set_size: usize) -> Self {
        Self {
            precision,
            max_sparse_set_size,
        }
    }

    /// Check that parameters are within supported ranges
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(EstimatorError::InvalidPrecision(self.precision));
        }
        if self.max_sparse_set_size == 0 {
            return Err(EstimatorError::InvalidWriteBufferCapacity(
                self.max_sparse_set_size,
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, DEFAULT_MAX_SPARSE_SET_SIZE)
    }
}

#[derive(Clone)]
pub struct CardinalityEstimator<H = Murmur3Hasher> {
    config: Config,
    representation: Representation,
    hasher: H,
}

impl CardinalityEstimator<Murmur3Hasher> {
    /// Creates new instance of `CardinalityEstimator` using the default MurmurHash3 hasher
    pub fn new(precision: u8, max_sparse_set_size: usize) -> Result<Self> {
        Self::with_hasher(precision, max_sparse_set_size, Murmur3Hasher)
    }

    /// Creates new instance of `CardinalityEstimator` from `config`
    pub fn from_config(config: Config) -> Result<Self> {
        Self::from_config_with_hasher(config, Murmur3Hasher)
    }
}

impl<H: ValueHasher> CardinalityEstimator<H> {
    /// Creates new instance of `CardinalityEstimator` with custom `hasher`
    pub fn with_hasher(precision: u8, max_sparse_set_size: usize, hasher: H) -> Result<Self> {
        Self::from_config_with_hasher(Config::new(precision, max_sparse_set_size), hasher)
    }

    /// Creates new instance of `CardinalityEstimator` from `config` with custom `hasher`
    pub fn from_config_with_hasher(config: Config, hasher: H) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, hasher))
    }

    /// Build estimator from already validated `config`
    fn build(config: Config, hasher: H) -> Self {
        Self {
            config,
            representation: Sparse::new(config.precision, config.max_sparse_set_size).into(),
            hasher,
        }
    }

    /// Insert a value into `CardinalityEstimator`
    #[inline]
    pub fn add<T: AsRef<[u8]> + ?Sized>(&mut self, value: &T) {
        let hash = self.hasher.hash_bytes(value.as_ref());
        self.add_hash(hash);
    }

    /// Insert hash into `CardinalityEstimator`
    #[inline]
    pub fn add_hash(&mut self, hash: u64) {
        if self.representation.insert_hash(hash) {
            self.promote();
        }
    }

    /// Return cardinality estimate.
    ///
    /// May merge the sparse write buffer, but never promotes the estimator to dense representation.
    #[inline]
    pub fn cardinality(&mut self) -> f64 {
        self.representation.flush();
        self.representation.estimate()
    }

    /// Convert sparse representation into dense representation
    fn promote(&mut self) {
        if let Representation::Sparse(sparse) = &mut self.representation {
            let dense = sparse.to_dense();
            debug!(
                precision = self.config.precision,
                entries = sparse.len(),
                "promoting sparse representation to dense"
            );
            self.representation = dense.into();
        }
    }

    /// Return representation type of `CardinalityEstimator`
    #[inline]
    pub fn representation(&self) -> RepresentationKind {
        self.representation.kind()
    }

    /// Return precision of `CardinalityEstimator`
    #[inline]
    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    /// Return capacity of the sparse write buffer
    #[inline]
    pub fn max_sparse_set_size(&self) -> usize {
        self.config.max_sparse_set_size
    }

    /// Return `Config` the estimator was created from
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return memory size of `CardinalityEstimator`
    pub fn size_of(&self) -> usize {
        std::mem::size_of::<Self>() - std::mem::size_of::<Representation>()
            + self.representation.size_of()
    }
}

impl<H: ValueHasher + Default> Default for CardinalityEstimator<H> {
    fn default() -> Self {
        Self::build(Config::default(), H::default())
    }
}

impl<H> Debug for CardinalityEstimator<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ {} }}", self.representation.to_string())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    /// Hasher returning the first 8 value bytes as little-endian hash
    fn identity(bytes: &[u8]) -> u64 {
        let mut buf = [0u8; 8];
        buf[..bytes.len().min(8)].copy_from_slice(&bytes[..bytes.len().min(8)]);
        u64::from_le_bytes(buf)
    }

    fn dense_registers<H>(e: &CardinalityEstimator<H>) -> &[u8] {
        match &e.representation {
            Representation::Dense(dense) => dense.registers(),
            Representation::Sparse(_) => panic!("estimator is not dense"),
        }
    }

    #[test_case(0 => Err(EstimatorError::InvalidPrecision(0)))]
    #[test_case(3 => Err(EstimatorError::InvalidPrecision(3)))]
    #[test_case(4 => Ok(RepresentationKind::Sparse))]
    #[test_case(14 => Ok(RepresentationKind::Sparse))]
    #[test_case(25 => Ok(RepresentationKind::Sparse))]
    #[test_case(26 => Err(EstimatorError::InvalidPrecision(26)))]
    #[test_case(255 => Err(EstimatorError::InvalidPrecision(255)))]
    fn test_new(precision: u8) -> Result<RepresentationKind> {
        CardinalityEstimator::new(precision, 16).map(|e| e.representation())
    }

    #[test]
    fn test_new_all_valid_precisions() {
        for p in MIN_PRECISION..=MAX_PRECISION {
            let mut e = CardinalityEstimator::new(p, 128).unwrap();
            assert_eq!(e.precision(), p);
            assert_eq!(e.cardinality(), 0.0);
        }
    }

    #[test]
    fn test_new_zero_write_buffer() {
        assert_eq!(
            CardinalityEstimator::new(12, 0).unwrap_err(),
            EstimatorError::InvalidWriteBufferCapacity(0)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EstimatorError::InvalidPrecision(3).to_string(),
            "invalid precision 3, must be in [4..25] range"
        );
    }

    #[test]
    fn test_default() {
        let e = CardinalityEstimator::<Murmur3Hasher>::default();
        assert_eq!(e.config(), &Config::default());
        assert_eq!(e.precision(), DEFAULT_PRECISION);
        assert_eq!(e.max_sparse_set_size(), DEFAULT_MAX_SPARSE_SET_SIZE);
    }

    #[test]
    fn test_insert() {
        let mut e = CardinalityEstimator::new(12, 64).unwrap();

        // Ensure initial estimate is 0.
        assert_eq!(e.cardinality(), 0.0);

        // Insert a test item and validate estimate.
        e.add("test item 1");
        assert_eq!(e.cardinality().round(), 1.0);

        // Re-insert the same item, estimate should remain the same.
        e.add("test item 1");
        assert_eq!(e.cardinality().round(), 1.0);

        // Insert a new distinct item, estimate should increase.
        e.add("test item 2");
        assert_eq!(e.cardinality().round(), 2.0);
    }

    #[test_case(RepresentationKind::Sparse, 10)]
    #[test_case(RepresentationKind::Dense, 2000)]
    fn test_duplicates_do_not_change_estimate(kind: RepresentationKind, n: usize) {
        let mut once = CardinalityEstimator::new(6, 32).unwrap();
        let mut many = CardinalityEstimator::new(6, 32).unwrap();
        for i in 0..n {
            let item = format!("item{i}");
            once.add(&item);
            for _ in 0..5 {
                many.add(&item);
            }
        }
        assert_eq!(once.representation(), kind);
        assert_eq!(many.representation(), kind);
        assert!((once.cardinality() - many.cardinality()).abs() < 1e-9);
    }

    #[test]
    fn test_promotion_is_one_way() {
        // p = 4: promotion once 96 sparse entries are merged
        let mut e = CardinalityEstimator::with_hasher(4, 8, identity).unwrap();
        for i in 0..95u64 {
            e.add_hash(i << 39);
        }
        assert_eq!(e.cardinality().round(), 95.0);
        assert_eq!(e.representation(), RepresentationKind::Sparse);

        // pending entries that would fill the sparse list are not merged on read
        for i in 95..102u64 {
            e.add_hash(i << 39);
            assert_eq!(e.representation(), RepresentationKind::Sparse);
            assert_eq!(e.cardinality().round(), (i + 1) as f64);
        }
        // eighth buffered entry triggers the merge
        e.add_hash(102 << 39);
        assert_eq!(e.representation(), RepresentationKind::Dense);

        for i in 0..1000u64 {
            e.add(&i.to_le_bytes());
            e.cardinality();
            assert_eq!(e.representation(), RepresentationKind::Dense);
        }
    }

    #[test]
    fn test_promotion_preserves_registers() {
        let mut e = CardinalityEstimator::with_hasher(4, 8, identity).unwrap();
        // index 3, rank 61 and index 5, rank 1
        e.add_hash(0x3000_0000_0000_0000);
        e.add_hash(0x5800_0000_0000_0000);
        for i in 0..200u64 {
            e.add_hash((i << 39) | 0x00f0_0000_0000_0000);
        }
        assert_eq!(e.representation(), RepresentationKind::Dense);
        let registers = dense_registers(&e);
        assert_eq!(registers[3], 61);
        assert_eq!(registers[5], 1);
        assert!(registers.iter().all(|&r| r <= 61));
    }

    #[test]
    fn test_fixed_hashes_through_value_hasher() {
        let mut e = CardinalityEstimator::with_hasher(10, 4, identity).unwrap();
        e.add(&1u64.to_le_bytes());
        e.add(&2u64.to_le_bytes());
        e.add(&1u64.to_le_bytes());
        // both hashes land into sparse index 0: distinct values collide
        assert_eq!(e.cardinality().round(), 1.0);

        e.add(&(1u64 << 63).to_le_bytes());
        assert_eq!(e.cardinality().round(), 2.0);
    }

    #[test_case(4, 10_000)]
    #[test_case(8, 10_000)]
    #[test_case(12, 100_000)]
    fn test_register_bound_after_promotion(p: u8, n: usize) {
        let mut e = CardinalityEstimator::new(p, 256).unwrap();
        for i in 0..n {
            e.add(&i.to_le_bytes());
        }
        assert_eq!(e.representation(), RepresentationKind::Dense);
        let max_rank = 64 - p + 1;
        assert!(dense_registers(&e).iter().all(|&r| r <= max_rank));
    }

    #[test]
    fn test_debug() {
        let mut e = CardinalityEstimator::new(12, 64).unwrap();
        assert!(format!("{:?}", e).starts_with("{ representation: Sparse, estimate: 0, size: "));

        e.add("a");
        e.add("b");
        // pending write buffer entries are included without merging them
        assert!(format!("{:?}", e).starts_with("{ representation: Sparse, estimate: 2, size: "));

        for i in 0..100_000u32 {
            e.add(&i.to_le_bytes());
        }
        assert!(format!("{:?}", e).starts_with("{ representation: Dense, estimate: "));
    }

    #[test]
    fn test_size_of() {
        let mut e = CardinalityEstimator::new(10, 64).unwrap();
        let empty = e.size_of();
        for i in 0..100u32 {
            e.add(&i.to_le_bytes());
        }
        assert!(e.size_of() > empty);

        for i in 0..10_000u32 {
            e.add(&i.to_le_bytes());
        }
        assert_eq!(e.representation(), RepresentationKind::Dense);
        assert!(e.size_of() >= 1 << 10);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut e = CardinalityEstimator::new(12, 16).unwrap();
        for i in 0..100u32 {
            e.add(&i.to_le_bytes());
        }
        let mut cloned = e.clone();
        for i in 100..200u32 {
            cloned.add(&i.to_le_bytes());
        }
        assert_eq!(e.cardinality().round(), 100.0);
        assert_eq!(cloned.cardinality().round(), 200.0);
    }
}
