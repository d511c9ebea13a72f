//! Stream generator properties: determinism, index bias and clean replays.

use proptest::prelude::*;
use seqcheck::{
    generate_string, index_range, Candidate, DifferentialTester, Operation, OperationReader,
    PlainSink, StreamGenerator,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: the same seed always yields the same text.
    #[test]
    fn prop_generation_is_deterministic(ops in 0u32..400, seed: u64) {
        prop_assert_eq!(generate_string(ops, seed), generate_string(ops, seed));
    }

    /// Property: exactly `ops` lines are written.
    #[test]
    fn prop_generation_line_count(ops in 0u32..400, seed: u64) {
        prop_assert_eq!(generate_string(ops, seed).lines().count(), ops as usize);
    }

    /// Property: every index lies within a quarter of the length past either end.
    #[test]
    fn prop_indices_within_bias(ops in 1u32..400, seed: u64) {
        let mut generator = StreamGenerator::new(ops, seed);
        loop {
            let size = generator.current_size();
            let Some(op) = generator.next() else { break };
            if let Some(index) = op.index() {
                let (lower, upper) = index_range(size);
                prop_assert!(lower <= index && index <= upper, "{} with size {}", op, size);
            }
            if let Some(value) = op.value() {
                prop_assert!((0..i64::from(ops)).contains(&value));
            }
        }
    }

    /// Property: generated streams replay clean against both lists.
    #[test]
    fn prop_generated_streams_replay_clean(ops in 0u32..500, seed: u64) {
        let text = generate_string(ops, seed);
        for candidate in [Candidate::ArrayList, Candidate::LinkedList] {
            let mut tester = DifferentialTester::for_candidate(candidate, None);
            let mut sink = PlainSink::new(Vec::new());
            let report = tester.run(OperationReader::new(text.as_bytes()), &mut sink).unwrap();
            prop_assert!(report.is_clean());
        }
    }
}

#[test]
fn test_index_range_bounds() {
    for size in 0..200usize {
        let (lower, upper) = index_range(size);
        assert!(lower <= 0);
        assert!(upper >= size as i64);
        assert_eq!(upper - size as i64, -lower);
    }
}

#[test]
fn test_scenario_d_large_stream_is_reproducible() {
    let text = generate_string(100_000, 42);
    assert_eq!(text.lines().count(), 100_000);
    assert_eq!(text, generate_string(100_000, 42));
    assert_ne!(text, generate_string(100_000, 43));

    for candidate in [Candidate::ArrayList, Candidate::LinkedList] {
        let mut tester = DifferentialTester::for_candidate(candidate, None);
        let mut sink = PlainSink::new(Vec::new());
        let report = tester
            .run(OperationReader::new(text.as_bytes()), &mut sink)
            .unwrap();
        assert_eq!(report.operations, 100_000);
        assert!(report.is_clean(), "{} diverged", candidate);
        assert!(sink.into_inner().is_empty());
    }
}

#[test]
fn test_generator_mix_covers_every_kind() {
    let ops: Vec<Operation> = StreamGenerator::new(2_000, 9).collect();
    for keyword in ["add", "remove", "get", "set", "size"] {
        assert!(
            ops.iter().any(|op| op.keyword() == keyword),
            "no {} drawn",
            keyword
        );
    }
}
