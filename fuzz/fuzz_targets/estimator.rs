#![no_main]

use hll_estimator::encoding::{decode_sparse, dense_index_and_rank, encode_sparse};
use hll_estimator::{CardinalityEstimator, RepresentationKind};
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let precision = 4 + data[0] % 22;
    let max_sparse_set_size = 1 + usize::from(data[1]);
    let data = &data[2..];

    let mut estimator = CardinalityEstimator::new(precision, max_sparse_set_size).unwrap();
    let mut promoted = false;
    for chunk in data.chunks(4) {
        estimator.add(chunk);

        let hash = wyhash(chunk, 0);
        let (index, rank) = dense_index_and_rank(hash, precision);
        assert_eq!(decode_sparse(encode_sparse(hash, precision), precision), (index, rank));
        assert!(rank >= 1 && rank <= 65 - precision);

        let estimate = estimator.cardinality();
        assert!(estimate.is_finite() && estimate >= 0.0);
        assert!(estimator.size_of() > 0);

        match estimator.representation() {
            RepresentationKind::Dense => promoted = true,
            RepresentationKind::Sparse => assert!(!promoted, "dense estimator went back to sparse"),
        }
    }
});
