//! ## Dense representation
//! Allows to estimate large cardinality once the sparse representation can no longer hold
//! its entries compactly. This representation is a HyperLogLog++ array of `M = 2^P` registers,
//! each one storing in a byte the maximum rank observed for its register index.
//!
//! [Original HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)
//!
//! Estimate is computed as:
//! - raw harmonic mean estimate `E = alpha * M^2 / sum(2^-register)`
//! - empirical bias correction `E' = E - bias(E)` when `E < 5 * M`
//! - linear counting `H = M * ln(M / V)` when `V` registers are still zero
//!   and `H` is below the precision's threshold, `E'` otherwise

use std::mem::size_of;

use tracing::trace;

use crate::bias::{bias, threshold};
use crate::encoding::{decode_sparse, dense_index_and_rank};
use crate::representation::{RepresentationKind, RepresentationTrait};

/// Dense representation container
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Dense {
    precision: u8,
    alpha: f64,
    registers: Vec<u8>,
}

impl Dense {
    /// Create new `Dense` representation with all registers set to zero
    pub(crate) fn new(p: u8) -> Self {
        let m = 1usize << p;
        Self {
            precision: p,
            alpha: alpha(m),
            registers: vec![0; m],
        }
    }

    /// Create new `Dense` representation from sorted sparse entries
    pub(crate) fn from_sparse(p: u8, entries: &[u32]) -> Self {
        let mut dense = Self::new(p);
        for &h in entries {
            let (idx, rank) = decode_sparse(h, p);
            dense.update_rank(idx, rank);
        }
        dense
    }

    /// Set register `idx` to `new_rank` if it is larger than the current one
    #[inline]
    fn update_rank(&mut self, idx: u32, new_rank: u8) {
        let rank = &mut self.registers[idx as usize];
        if new_rank > *rank {
            *rank = new_rank;
        }
    }

    #[cfg(test)]
    pub(crate) fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Return harmonic sum of registers and number of registers set to zero
    #[inline]
    fn sum_and_zeros(&self) -> (f64, usize) {
        self.registers
            .iter()
            .fold((0.0, 0), |(sum, zeros), &rank| {
                (
                    sum + (-f64::from(rank)).exp2(),
                    zeros + usize::from(rank == 0),
                )
            })
    }
}

impl RepresentationTrait for Dense {
    #[inline]
    fn insert_hash(&mut self, hash: u64) -> bool {
        let (idx, rank) = dense_index_and_rank(hash, self.precision);
        self.update_rank(idx, rank);
        false
    }

    #[inline]
    fn flush(&mut self) {}

    /// Return cardinality estimate of `Dense` representation
    fn estimate(&self) -> f64 {
        let m = self.registers.len() as f64;
        let (sum, zeros) = self.sum_and_zeros();

        let raw = self.alpha * m * m / sum;
        let corrected = if raw < 5.0 * m {
            (raw - bias(raw, self.precision)).max(0.0)
        } else {
            raw
        };

        if zeros != 0 {
            let lc = linear_counting(m, zeros as f64);
            if lc <= threshold(self.precision) {
                trace!(raw, zeros, lc, "dense estimate: linear counting");
                return lc;
            }
        }

        trace!(raw, corrected, zeros, "dense estimate: harmonic mean");
        corrected
    }

    fn size_of(&self) -> usize {
        size_of::<Self>() + self.registers.capacity()
    }

    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Dense
    }
}

/// Parameter for bias correction
#[inline]
pub(crate) fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}

/// Linear counting estimate for `m` buckets out of which `v` are empty
#[inline]
pub(crate) fn linear_counting(m: f64, v: f64) -> f64 {
    m * (m / v).ln()
}
