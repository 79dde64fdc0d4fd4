//! Integration tests for the public hamclust-core API.

use hamclust_core::{
    BitVector, ExecutionStrategy, HamclustBuilder, HamclustError, HamclustErrorCode,
    VectorSource, VectorSourceError, VectorSourceErrorCode,
};

use rstest::rstest;

struct SliceSource {
    name: &'static str,
    width: usize,
    vectors: Vec<BitVector>,
}

impl SliceSource {
    fn from_labels(width: usize, labels: &[&str]) -> Self {
        let vectors = labels
            .iter()
            .map(|label| BitVector::parse(label, width).expect("label must parse"))
            .collect();
        Self {
            name: "slice",
            width,
            vectors,
        }
    }
}

impl VectorSource for SliceSource {
    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn name(&self) -> &str {
        self.name
    }

    fn width(&self) -> usize {
        self.width
    }

    fn vector(&self, index: usize) -> Result<BitVector, VectorSourceError> {
        self.vectors
            .get(index)
            .cloned()
            .ok_or(VectorSourceError::OutOfBounds { index })
    }
}

#[rstest]
#[case::duplicates(&["000", "000"], 1, 1)]
#[case::single_flip(&["000", "001"], 2, 1)]
#[case::double_flip(&["000", "011"], 2, 1)]
#[case::separated(&["000", "111"], 2, 2)]
#[case::chain(&["000", "001", "011", "111"], 4, 1)]
#[case::empty(&[], 0, 0)]
fn run_reports_expected_cluster_count(
    #[case] labels: &[&str],
    #[case] distinct: usize,
    #[case] clusters: usize,
) {
    let source = SliceSource::from_labels(3, labels);
    let hamclust = HamclustBuilder::new()
        .with_width(3)
        .build()
        .expect("builder must succeed");

    let report = hamclust.run(&source).expect("run must succeed");
    assert_eq!(report.distinct_vectors(), distinct);
    assert_eq!(report.cluster_count(), clusters);
}

#[test]
fn run_rejects_vectors_of_the_wrong_width() {
    let source = SliceSource::from_labels(4, &["0000", "0001"]);
    let hamclust = HamclustBuilder::new()
        .with_width(3)
        .build()
        .expect("builder must succeed");

    let err = hamclust.run(&source).expect_err("width mismatch must fail");
    assert!(matches!(
        err,
        HamclustError::WidthMismatch {
            index: 0,
            expected: 3,
            got: 4,
            ..
        }
    ));
    assert_eq!(err.code(), HamclustErrorCode::WidthMismatch);
}

#[test]
fn run_surfaces_source_failures_with_codes() {
    // The source advertises one more row than it can deliver.
    struct TruncatedSource(SliceSource);

    impl VectorSource for TruncatedSource {
        fn len(&self) -> usize {
            self.0.len() + 1
        }

        fn name(&self) -> &str {
            self.0.name()
        }

        fn width(&self) -> usize {
            self.0.width()
        }

        fn vector(&self, index: usize) -> Result<BitVector, VectorSourceError> {
            self.0.vector(index)
        }
    }

    let source = TruncatedSource(SliceSource::from_labels(3, &["000"]));
    let hamclust = HamclustBuilder::new()
        .with_width(3)
        .build()
        .expect("builder must succeed");

    let err = hamclust.run(&source).expect_err("short source must fail");
    assert_eq!(err.code(), HamclustErrorCode::SourceFailure);
    match err {
        HamclustError::Source { data_source, error } => {
            assert_eq!(data_source.as_ref(), "slice");
            assert_eq!(error.code(), VectorSourceErrorCode::OutOfBounds);
            assert_eq!(error.code().as_str(), "VECTOR_SOURCE_OUT_OF_BOUNDS");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn builder_rejects_zero_width() {
    let err = HamclustBuilder::new()
        .with_width(0)
        .build()
        .expect_err("zero width must fail");
    assert!(matches!(err, HamclustError::InvalidWidth { got: 0 }));
    assert_eq!(err.code().as_str(), "HAMCLUST_INVALID_WIDTH");
}

#[test]
fn builder_rejects_zero_separation() {
    let err = HamclustBuilder::new()
        .with_separation(0)
        .build()
        .expect_err("zero separation must fail");
    assert!(matches!(err, HamclustError::InvalidSeparation { got: 0 }));
}

#[test]
fn separation_one_counts_distinct_vectors() {
    let source = SliceSource::from_labels(3, &["000", "001", "001"]);
    let hamclust = HamclustBuilder::new()
        .with_width(3)
        .with_separation(1)
        .build()
        .expect("builder must succeed");

    let report = hamclust.run(&source).expect("run must succeed");
    assert_eq!(report.tree_edges(), 0);
    assert_eq!(report.cluster_count(), 2);
}

#[test]
fn wider_vectors_cluster_at_the_reference_width() {
    // Two code words at distance 2 plus one isolated word, at L = 24.
    let labels = [
        "000000000000000000000000",
        "000000000000000000000011",
        "111111111111000000000000",
    ];
    let source = SliceSource::from_labels(24, &labels);
    let hamclust = HamclustBuilder::new().build().expect("builder must succeed");

    let report = hamclust.run(&source).expect("run must succeed");
    assert_eq!(report.cluster_count(), 2);
}

#[cfg(not(feature = "parallel"))]
#[test]
fn parallel_strategy_is_unavailable_without_the_feature() {
    let source = SliceSource::from_labels(3, &["000"]);
    let hamclust = HamclustBuilder::new()
        .with_width(3)
        .with_execution_strategy(ExecutionStrategy::Parallel)
        .build()
        .expect("builder must succeed");

    let err = hamclust.run(&source).expect_err("backend must be missing");
    assert!(matches!(
        err,
        HamclustError::BackendUnavailable {
            requested: ExecutionStrategy::Parallel
        }
    ));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_strategy_matches_sequential_counts() {
    let labels = ["0000", "0001", "0011", "1111", "1100", "0110"];
    let source = SliceSource::from_labels(4, &labels);

    let sequential = HamclustBuilder::new()
        .with_width(4)
        .with_execution_strategy(ExecutionStrategy::Sequential)
        .build()
        .expect("builder must succeed")
        .run(&source)
        .expect("sequential run must succeed");
    let parallel = HamclustBuilder::new()
        .with_width(4)
        .with_execution_strategy(ExecutionStrategy::Parallel)
        .build()
        .expect("builder must succeed")
        .run(&source)
        .expect("parallel run must succeed");

    assert_eq!(sequential.cluster_count(), parallel.cluster_count());
}
