//! `hll-estimator` is a Rust crate designed to estimate the number of distinct values in a stream or dataset in an efficient manner.
//!
//! This library uses HyperLogLog++ with a sparse representation for low cardinalities, which is promoted
//! to a dense register array once it grows, and empirical bias correction for the dense estimate.
//!
//! ```
//! use hll_estimator::CardinalityEstimator;
//!
//! let mut estimator = CardinalityEstimator::new(14, 1024)?;
//! for i in 0..10_000 {
//!     estimator.add(&format!("a{i}"));
//! }
//! let estimate = estimator.cardinality();
//! assert!((estimate - 10_000.0).abs() < 500.0);
//! # Ok::<(), hll_estimator::EstimatorError>(())
//! ```
pub mod bias;
mod dense;
pub mod encoding;
pub mod error;
pub mod estimator;
pub mod hasher;
mod representation;
#[cfg(feature = "with_serde")]
mod serde;
mod sparse;

pub use error::{EstimatorError, Result};
pub use estimator::{CardinalityEstimator, Config};
pub use hasher::{Murmur3Hasher, StdBuildHasher, ValueHasher, WyHasher};
pub use representation::RepresentationKind;
