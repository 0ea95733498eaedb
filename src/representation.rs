use enum_dispatch::enum_dispatch;

use crate::dense::Dense;
use crate::sparse::Sparse;

/// Representation types supported by `CardinalityEstimator`
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch]
pub(crate) enum Representation {
    Sparse(Sparse),
    Dense(Dense),
}

/// Representation trait which must be implemented by all representations.
#[enum_dispatch(Representation)]
pub(crate) trait RepresentationTrait {
    /// Insert hash, returning true when the representation must be promoted to dense.
    fn insert_hash(&mut self, hash: u64) -> bool;
    /// Fold pending writes where this cannot trigger a promotion.
    fn flush(&mut self);
    fn estimate(&self) -> f64;
    fn size_of(&self) -> usize;
    fn kind(&self) -> RepresentationKind;
    fn to_string(&self) -> String {
        format!(
            "representation: {:?}, estimate: {:.0}, size: {}",
            self.kind(),
            self.estimate(),
            self.size_of()
        )
    }
}

/// Representation type of `CardinalityEstimator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
    Sparse,
    Dense,
}
