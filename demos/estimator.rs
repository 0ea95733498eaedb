use hll_estimator::{CardinalityEstimator, WyHasher};

fn main() {
    let mut estimator = CardinalityEstimator::new(14, 1024).unwrap();
    for i in 0..10 {
        estimator.add(&format!("user-{i}"));
    }
    println!(
        "estimate = {:.0} ({:?})",
        estimator.cardinality(),
        estimator.representation()
    );

    for i in 0..100_000 {
        estimator.add(&format!("user-{i}"));
    }
    println!(
        "estimate = {:.0} ({:?})",
        estimator.cardinality(),
        estimator.representation()
    );
    println!("{:?}", estimator);

    let mut seeded = CardinalityEstimator::with_hasher(10, 256, WyHasher::with_seed(42)).unwrap();
    for i in 0..5_000u64 {
        seeded.add(&i.to_le_bytes());
    }
    println!("wyhash estimate = {:.0}", seeded.cardinality());
}
