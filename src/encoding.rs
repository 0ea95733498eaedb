//! ## Bit and hash encoding
//!
//! A 64-bit hash is split into a register index taken from its top bits and a rank
//! computed from the remaining low bits (1 + number of leading zeros).
//!
//! Sparse entries use a fixed finer precision of 25 bits and are packed into `u32`:
//! - 7..31 bits    - store 25-bit register index
//! - 0 bit         - set when the `25 - P` index bits below the `P`-bit index are all zero
//! - 1..6 bits     - store rank of the remaining 39 hash bits (only when 0 bit is set)
//!
//! When the flag is clear the rank at `P`-bit precision can be recovered from the
//! low bits of the 25-bit index itself, so no rank needs to be stored.

/// Precision used for sparse register indices
pub const SPARSE_PRECISION: u8 = 25;

/// Number of low entry bits used for flag and rank
const INDEX_OFFSET: u32 = 7;
/// Mask used for extracting stored rank (6 bits)
const RANK_MASK: u32 = 0x3f;

/// Extract inclusive bit range `[low, high]` of `hash`, with bit 63 being the most significant.
#[inline]
pub fn slice_bits(hash: u64, high: u8, low: u8) -> u64 {
    debug_assert!(high < 64 && low <= high);
    let width = u32::from(high - low) + 1;
    let shifted = hash >> low;
    if width == 64 {
        shifted
    } else {
        shifted & ((1u64 << width) - 1)
    }
}

/// Return `1 + leading zeros of w`, or `64` when `w` is zero.
#[inline]
pub fn leading_run_length(w: u64) -> u8 {
    if w == 0 {
        64
    } else {
        w.leading_zeros() as u8 + 1
    }
}

/// Return register index and rank at precision `p` as computed by the dense update path.
#[inline]
pub fn dense_index_and_rank(hash: u64, p: u8) -> (u32, u8) {
    let index = slice_bits(hash, 63, 64 - p) as u32;
    let w = hash << p;
    let rank = if w == 0 {
        64 - p + 1
    } else {
        leading_run_length(w)
    };
    (index, rank)
}

/// Encode `hash` into a sparse entry at 25-bit precision for an estimator of precision `p`.
#[inline]
pub fn encode_sparse(hash: u64, p: u8) -> u32 {
    let idx = slice_bits(hash, 63, 64 - SPARSE_PRECISION) as u32;
    let between = if p < SPARSE_PRECISION {
        slice_bits(hash, 63 - p, 64 - SPARSE_PRECISION)
    } else {
        0
    };

    if between != 0 {
        return idx << INDEX_OFFSET;
    }

    let w = hash << SPARSE_PRECISION;
    let rank = if w == 0 {
        64 - SPARSE_PRECISION + 1
    } else {
        leading_run_length(w)
    };
    (idx << INDEX_OFFSET) | (u32::from(rank) << 1) | 1
}

/// Decode sparse entry into register index and rank at precision `p`.
#[inline]
pub fn decode_sparse(entry: u32, p: u8) -> (u32, u8) {
    let extra = SPARSE_PRECISION - p;
    let idx = sparse_index(entry);
    let index = idx >> extra;

    if entry & 1 == 1 {
        let rank = ((entry >> 1) & RANK_MASK) as u8;
        return (index, rank + extra);
    }

    // flag is clear only when p < 25 and the extra index bits are non-zero
    let low = idx & ((1u32 << extra) - 1);
    let rank = (low << (32 - u32::from(extra))).leading_zeros() as u8 + 1;
    (index, rank)
}

/// Return 25-bit register index of sparse entry
#[inline]
pub fn sparse_index(entry: u32) -> u32 {
    entry >> INDEX_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    #[test_case(0xffff_ffff_ffff_ffff, 63, 0 => 0xffff_ffff_ffff_ffff)]
    #[test_case(0xf000_0000_0000_0000, 63, 60 => 0xf)]
    #[test_case(0x8000_0000_0000_0001, 63, 63 => 1)]
    #[test_case(0x8000_0000_0000_0001, 0, 0 => 1)]
    #[test_case(0x0000_0000_00ff_0000, 23, 16 => 0xff)]
    #[test_case(0x0000_0000_00ff_0000, 15, 0 => 0)]
    #[test_case(0x1234_5678_9abc_def0, 31, 0 => 0x9abc_def0)]
    fn test_slice_bits(hash: u64, high: u8, low: u8) -> u64 {
        slice_bits(hash, high, low)
    }

    #[test_case(0 => 64)]
    #[test_case(1 => 64)]
    #[test_case(0x8000_0000_0000_0000 => 1)]
    #[test_case(0x4000_0000_0000_0000 => 2)]
    #[test_case(0x0000_0001_0000_0000 => 32)]
    fn test_leading_run_length(w: u64) -> u8 {
        leading_run_length(w)
    }

    #[test_case(0, 4 => (0, 61))]
    #[test_case(u64::MAX, 4 => (15, 1))]
    #[test_case(0x0800_0000_0000_0000, 4 => (0, 1))]
    #[test_case(0x0400_0000_0000_0000, 4 => (0, 2))]
    #[test_case(0xf000_0000_0000_0000, 4 => (15, 61))]
    #[test_case(0xf000_0000_0000_0001, 4 => (15, 60))]
    #[test_case(0, 25 => (0, 40))]
    #[test_case(0x0000_0040_0000_0000, 25 => (0, 1))]
    fn test_dense_index_and_rank(hash: u64, p: u8) -> (u32, u8) {
        dense_index_and_rank(hash, p)
    }

    #[test]
    fn test_encode_sparse_flag() {
        // bits between 4-bit and 25-bit precision are non-zero: no rank stored
        let entry = encode_sparse(0x0800_0000_0000_0000, 4);
        assert_eq!(entry & 1, 0);
        assert_eq!(entry & (RANK_MASK << 1), 0);

        // bits between are all zero: rank of remaining 39 bits is stored
        let entry = encode_sparse(0xf000_0000_0000_0001, 4);
        assert_eq!(entry & 1, 1);
        assert_eq!((entry >> 1) & RANK_MASK, 39);
        assert_eq!(sparse_index(entry), 0xf << 21);

        // all 39 low bits are zero: sentinel rank
        let entry = encode_sparse(0xf000_0000_0000_0000, 4);
        assert_eq!((entry >> 1) & RANK_MASK, 40);
    }

    #[test]
    fn test_encode_sparse_precision_25_always_stores_rank() {
        let mut rng = StdRng::seed_from_u64(25);
        for _ in 0..1000 {
            let entry = encode_sparse(rng.gen(), SPARSE_PRECISION);
            assert_eq!(entry & 1, 1);
        }
    }

    #[test_case(4)]
    #[test_case(5)]
    #[test_case(10)]
    #[test_case(12)]
    #[test_case(14)]
    #[test_case(18)]
    #[test_case(24)]
    #[test_case(25)]
    fn test_decode_matches_dense_for_edge_hashes(p: u8) {
        let mut hashes = vec![0u64, 1, u64::MAX, u64::MAX << p, 1 << 38, 1 << 39];
        for bit in 0..64 {
            hashes.push(1 << bit);
            hashes.push((1 << bit) | (u64::MAX << (64 - p)));
        }
        for hash in hashes {
            assert_eq!(
                decode_sparse(encode_sparse(hash, p), p),
                dense_index_and_rank(hash, p),
                "hash = {hash:#018x}, p = {p}"
            );
        }
    }

    #[test]
    fn test_decode_matches_dense_for_random_hashes() {
        let mut rng = StdRng::seed_from_u64(12345);
        for p in 4..=25 {
            for _ in 0..10_000 {
                // skew towards long zero runs so both entry formats are exercised
                let hash: u64 = rng.gen::<u64>() >> rng.gen_range(0..64);
                let hash = hash.rotate_left(rng.gen_range(0..64));
                assert_eq!(
                    decode_sparse(encode_sparse(hash, p), p),
                    dense_index_and_rank(hash, p),
                    "hash = {hash:#018x}, p = {p}"
                );
            }
        }
    }
}
