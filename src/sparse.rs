//! ## Sparse representation
//! Allows to estimate cardinality in `[0..N]` range, where `N` is based on `P` (at most `6 * 2^P`
//! distinct 25-bit register indices).
//!
//! Hashes are encoded into `u32` sparse entries (see `encoding` module) and appended to a small
//! unsorted write buffer (`temp_set`). Once the write buffer is full it is sorted and merged into
//! the sorted and deduplicated `sparse_list`, keeping the larger rank for equal register indices.
//! Cardinality is estimated with linear counting over `2^25` registers.

use std::mem::size_of;

use tracing::trace;

use crate::dense::{linear_counting, Dense};
use crate::encoding::{encode_sparse, sparse_index, SPARSE_PRECISION};
use crate::representation::{RepresentationKind, RepresentationTrait};

/// Number of registers at sparse precision
pub(crate) const M2: usize = 1 << SPARSE_PRECISION;

/// Capacity-bounded collection of sparse entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SparseList {
    data: Vec<u32>,
    capacity: usize,
}

impl SparseList {
    /// Create new empty `SparseList` with given `capacity`
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Append entry without sorting.
    /// Returns true when the list has reached its capacity.
    #[inline]
    pub(crate) fn add(&mut self, entry: u32) -> bool {
        self.data.push(entry);
        self.is_full()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return entries stored in `SparseList`
    #[inline]
    pub(crate) fn data(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    pub(crate) fn sort(&mut self) {
        self.data.sort_unstable();
    }

    #[inline]
    fn is_sorted(&self) -> bool {
        self.data.windows(2).all(|w| w[0] <= w[1])
    }

    /// Merge `other` into `self`, keeping the entry with the larger rank for equal register indices.
    ///
    /// `self` must be sorted and deduplicated (it is, when it only grows through `merge`),
    /// `other` is sorted in place and may contain duplicates.
    pub(crate) fn merge(&mut self, other: &mut SparseList) {
        if other.is_empty() {
            return;
        }
        other.data.sort_unstable();

        let (lhs, rhs) = (&self.data, &other.data);
        let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() && j < rhs.len() {
            if lhs[i] <= rhs[j] {
                push_max(&mut merged, lhs[i]);
                i += 1;
            } else {
                push_max(&mut merged, rhs[j]);
                j += 1;
            }
        }
        lhs[i..]
            .iter()
            .chain(&rhs[j..])
            .for_each(|&h| push_max(&mut merged, h));

        self.data = merged;
    }

    /// Return heap memory size of `SparseList`
    pub(crate) fn heap_size(&self) -> usize {
        size_of::<u32>() * self.data.capacity()
    }
}

/// Append `entry` to sorted `merged`, replacing the last entry if both share a register index.
///
/// Entries sharing a register index also share the flag bit, so the larger entry
/// holds the larger rank.
#[inline]
fn push_max(merged: &mut Vec<u32>, entry: u32) {
    match merged.last_mut() {
        Some(last) if sparse_index(*last) == sparse_index(entry) => *last = (*last).max(entry),
        _ => merged.push(entry),
    }
}

/// Count distinct sparse indices across two sorted entry slices without merging them.
fn count_distinct_indices(lhs: &[u32], rhs: &[u32]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    let mut last = None;
    while i < lhs.len() || j < rhs.len() {
        let entry = if j == rhs.len() || (i < lhs.len() && lhs[i] <= rhs[j]) {
            i += 1;
            lhs[i - 1]
        } else {
            j += 1;
            rhs[j - 1]
        };
        let index = sparse_index(entry);
        if last != Some(index) {
            count += 1;
            last = Some(index);
        }
    }
    count
}

/// Sparse representation container
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sparse {
    precision: u8,
    temp_set: SparseList,
    sparse_list: SparseList,
}

impl Sparse {
    /// Create new empty `Sparse` representation for precision `p`
    pub(crate) fn new(p: u8, max_sparse_set_size: usize) -> Self {
        // more than `M2` distinct sparse indices cannot exist
        let capacity = (6 << p).min(M2);
        Self {
            precision: p,
            temp_set: SparseList::new(max_sparse_set_size),
            sparse_list: SparseList::new(capacity),
        }
    }

    /// Merge write buffer into sparse list.
    fn merge_temp_set(&mut self) {
        if self.temp_set.is_empty() {
            return;
        }
        let pending = self.temp_set.len();
        self.sparse_list.merge(&mut self.temp_set);
        self.temp_set.clear();
        trace!(
            pending,
            len = self.sparse_list.len(),
            capacity = self.sparse_list.capacity(),
            "merged sparse write buffer"
        );
    }

    /// Convert into dense representation, including entries pending in the write buffer
    pub(crate) fn to_dense(&mut self) -> Dense {
        self.merge_temp_set();
        Dense::from_sparse(self.precision, self.sparse_list.data())
    }

    /// Return number of distinct sparse indices including pending write buffer entries.
    ///
    /// Allocates only when the write buffer has not been sorted by `flush`.
    fn distinct_len(&self) -> usize {
        if self.temp_set.is_empty() {
            return self.sparse_list.len();
        }
        if self.temp_set.is_sorted() {
            return count_distinct_indices(self.sparse_list.data(), self.temp_set.data());
        }
        let mut pending = self.temp_set.data().to_vec();
        pending.sort_unstable();
        count_distinct_indices(self.sparse_list.data(), &pending)
    }

    /// Return number of entries in sparse list
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.sparse_list.len()
    }

    #[cfg(test)]
    pub(crate) fn sparse_list(&self) -> &SparseList {
        &self.sparse_list
    }

    #[cfg(test)]
    pub(crate) fn temp_set(&self) -> &SparseList {
        &self.temp_set
    }
}

impl RepresentationTrait for Sparse {
    /// Insert hash into write buffer, merging it into sparse list once full.
    #[inline]
    fn insert_hash(&mut self, hash: u64) -> bool {
        if self.temp_set.add(encode_sparse(hash, self.precision)) {
            self.merge_temp_set();
            return self.sparse_list.is_full();
        }
        false
    }

    /// Merge write buffer unless the merged sparse list could reach its capacity.
    /// Such a merge is left to `insert_hash`, which is the only place promotion happens,
    /// and the write buffer is only sorted in place.
    #[inline]
    fn flush(&mut self) {
        if self.sparse_list.len() + self.temp_set.len() < self.sparse_list.capacity() {
            self.merge_temp_set();
        } else {
            self.temp_set.sort();
        }
    }

    /// Return linear counting estimate over sparse precision registers
    #[inline]
    fn estimate(&self) -> f64 {
        let len = self.distinct_len();
        linear_counting(M2 as f64, (M2 - len) as f64)
    }

    fn size_of(&self) -> usize {
        size_of::<Self>() + self.temp_set.heap_size() + self.sparse_list.heap_size()
    }

    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Sparse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode_sparse;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn list_of(capacity: usize, entries: &[u32]) -> SparseList {
        let mut list = SparseList::new(capacity);
        entries.iter().for_each(|&h| {
            list.add(h);
        });
        list
    }

    #[test]
    fn test_add_reports_full() {
        let mut list = SparseList::new(3);
        assert!(!list.add(1 << 7));
        assert!(!list.add(2 << 7));
        assert!(list.add(3 << 7));
        assert!(list.is_full());
        assert_eq!(list.len(), 3);

        list.clear();
        assert!(list.is_empty());
        assert!(!list.is_full());
        assert_eq!(list.capacity(), 3);
    }

    #[test_case(&[], &[] => Vec::<u32>::new(); "both empty")]
    #[test_case(&[], &[3 << 7, 1 << 7, 2 << 7] => vec![1 << 7, 2 << 7, 3 << 7]; "sorts incoming")]
    #[test_case(&[1 << 7], &[1 << 7, 1 << 7] => vec![1 << 7]; "drops duplicates")]
    #[test_case(&[(5 << 7) | (3 << 1) | 1], &[(5 << 7) | (9 << 1) | 1] => vec![(5 << 7) | (9 << 1) | 1]; "incoming rank wins")]
    #[test_case(&[(5 << 7) | (9 << 1) | 1], &[(5 << 7) | (3 << 1) | 1] => vec![(5 << 7) | (9 << 1) | 1]; "existing rank wins")]
    #[test_case(&[1 << 7, 4 << 7], &[2 << 7, 3 << 7, 5 << 7] => vec![1 << 7, 2 << 7, 3 << 7, 4 << 7, 5 << 7]; "interleaves")]
    fn test_merge(existing: &[u32], incoming: &[u32]) -> Vec<u32> {
        let mut list = SparseList::new(16);
        list.merge(&mut list_of(16, existing));
        list.merge(&mut list_of(16, incoming));
        list.data().to_vec()
    }

    #[test]
    fn test_merge_never_decreases_rank() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = 10;
        let mut list = SparseList::new(usize::MAX);
        for _ in 0..50 {
            let mut buffer = SparseList::new(256);
            for _ in 0..256 {
                // narrow index range to force collisions
                let hash = (rng.gen::<u64>() & 0x0000_00ff_ffff_ffff) | (rng.gen_range(0..64u64) << 56);
                buffer.add(encode_sparse(hash, p));
            }

            let before: Vec<(u32, u8)> = list.data().iter().map(|&h| decode_sparse(h, p)).collect();
            let before_entries = list.data().to_vec();
            list.merge(&mut buffer);

            // sorted, one entry per sparse index
            assert!(list.data().windows(2).all(|w| sparse_index(w[0]) < sparse_index(w[1])));
            for (entry, (index, rank)) in before_entries.iter().zip(before) {
                let merged = list
                    .data()
                    .iter()
                    .find(|&&h| sparse_index(h) == sparse_index(*entry))
                    .expect("merged list lost an index");
                let (merged_index, merged_rank) = decode_sparse(*merged, p);
                assert_eq!(merged_index, index);
                assert!(merged_rank >= rank);
            }
        }
    }

    #[test]
    fn test_sparse_merges_when_write_buffer_full() {
        let mut sparse = Sparse::new(4, 4);
        for i in 0..3u64 {
            assert!(!sparse.insert_hash(i << 40));
        }
        assert_eq!(sparse.temp_set().len(), 3);
        assert_eq!(sparse.sparse_list().len(), 0);

        assert!(!sparse.insert_hash(3 << 40));
        assert_eq!(sparse.temp_set().len(), 0);
        assert_eq!(sparse.sparse_list().len(), 4);
    }

    #[test]
    fn test_sparse_requests_promotion_at_capacity() {
        // p = 4: sparse list capacity is 6 * 16 = 96
        let mut sparse = Sparse::new(4, 8);
        let mut promote = false;
        let mut inserted = 0u64;
        while !promote {
            promote = sparse.insert_hash(inserted << 39);
            inserted += 1;
        }
        assert_eq!(inserted, 96);
        assert_eq!(sparse.sparse_list().len(), 96);
    }

    #[test]
    fn test_estimate_includes_pending_entries() {
        let mut sparse = Sparse::new(12, 1000);
        assert_eq!(sparse.estimate(), 0.0);
        for i in 0..10u64 {
            sparse.insert_hash(i << 39);
        }
        assert_eq!(sparse.sparse_list().len(), 0);
        let pending = sparse.estimate();
        sparse.flush();
        assert_eq!(sparse.sparse_list().len(), 10);
        assert_eq!(sparse.estimate(), pending);
        assert!((pending - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_flush_never_fills_sparse_list() {
        // p = 4: sparse list capacity is 96
        let mut sparse = Sparse::new(4, 64);
        for i in 0..60u64 {
            sparse.insert_hash(i << 39);
        }
        sparse.flush();
        assert_eq!(sparse.sparse_list().len(), 60);

        for i in 60..96u64 {
            sparse.insert_hash(i << 39);
        }
        sparse.flush();
        assert_eq!(sparse.sparse_list().len(), 60);
        assert_eq!(sparse.temp_set().len(), 36);
        assert!((sparse.estimate() - 96.0).abs() < 0.01);
    }

    #[test_case(&[], &[] => 0; "both empty")]
    #[test_case(&[1 << 7, 2 << 7], &[] => 2; "list only")]
    #[test_case(&[], &[1 << 7, 1 << 7, 3 << 7] => 2; "buffer duplicates")]
    #[test_case(&[1 << 7, 4 << 7], &[(1 << 7) | (5 << 1) | 1, 2 << 7, 4 << 7, 9 << 7] => 4; "shared indices")]
    fn test_count_distinct_indices(list: &[u32], buffer: &[u32]) -> usize {
        count_distinct_indices(list, buffer)
    }

    #[test]
    fn test_flush_sorts_buffer_for_distinct_len() {
        // write buffer larger than the sparse list capacity of 96 keeps everything pending
        let mut sparse = Sparse::new(4, 1000);
        let mut rng = StdRng::seed_from_u64(11);
        let mut expected = SparseList::new(usize::MAX);
        for _ in 0..500 {
            // 7-bit index range forces duplicates
            let hash = rng.gen_range(0..128u64) << 39;
            sparse.insert_hash(hash);
            expected.merge(&mut list_of(1, &[encode_sparse(hash, 4)]));
        }
        assert!(!sparse.temp_set().is_sorted());
        let unsorted = sparse.distinct_len();

        sparse.flush();
        assert_eq!(sparse.sparse_list().len(), 0);
        assert!(sparse.temp_set().is_sorted());
        assert_eq!(sparse.distinct_len(), unsorted);
        assert_eq!(sparse.distinct_len(), expected.len());
    }

    #[test]
    fn test_to_dense_includes_pending_entries() {
        let mut sparse = Sparse::new(4, 100);
        sparse.insert_hash(0x1000_0000_0000_0000);
        let dense = sparse.to_dense();
        assert_eq!(sparse.len(), 1);
        assert_eq!(dense.registers()[1], 61);
        assert_eq!(dense.registers().iter().filter(|&&r| r != 0).count(), 1);
    }
}
