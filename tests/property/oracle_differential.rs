//! Differential testing: each list against the `Vec` oracle.
//!
//! If both implementations give the same outcome for every operation and end
//! with the same contents, the list is correct on that sequence.

use super::common::apply_all;
use super::operations_strategy;
use proptest::prelude::*;
use seqcheck::{
    ArrayList, DifferentialTester, IndexedSequence, LinkedList, OperationReader, PlainSink,
    Value, VecOracle,
};

// ============================================================================
// OUTCOME AGREEMENT
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the array list matches the oracle on every operation.
    #[test]
    fn prop_array_list_matches_oracle(ops in operations_strategy(200)) {
        let mut oracle = VecOracle::<Value>::new();
        let mut array = ArrayList::<Value>::new();
        for op in &ops {
            prop_assert_eq!(op.apply(&mut array), op.apply(&mut oracle), "op {}", op);
        }
        prop_assert_eq!(array.contents(), oracle.as_slice().to_vec());
    }

    /// Property: the linked list matches the oracle on every operation.
    #[test]
    fn prop_linked_list_matches_oracle(ops in operations_strategy(200)) {
        let mut oracle = VecOracle::<Value>::new();
        let mut linked = LinkedList::<Value>::new();
        for op in &ops {
            prop_assert_eq!(op.apply(&mut linked), op.apply(&mut oracle), "op {}", op);
        }
        prop_assert_eq!(linked.contents(), oracle.as_slice().to_vec());
    }

    /// Property: capped lists agree with each other, including on allocation failures.
    #[test]
    fn prop_capped_lists_agree(ops in operations_strategy(200), cap in 0usize..12) {
        let mut array = ArrayList::<Value>::with_max_len(cap);
        let mut linked = LinkedList::<Value>::with_max_len(cap);
        let a = apply_all(&mut array, &ops);
        let l = apply_all(&mut linked, &ops);
        prop_assert_eq!(a, l);
        prop_assert!(array.size() <= cap);
        prop_assert_eq!(array.contents(), linked.contents());
    }
}

// ============================================================================
// TESTER AGREEMENT
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a rendered stream replays without mismatches for both lists.
    #[test]
    fn prop_rendered_stream_replays_clean(ops in operations_strategy(100)) {
        let mut text = Vec::new();
        seqcheck::write_stream(&mut text, &ops).unwrap();

        for candidate in seqcheck::Candidate::ALL {
            let mut tester = DifferentialTester::for_candidate(candidate, None);
            let mut sink = PlainSink::new(Vec::new());
            let report = tester.run(OperationReader::new(text.as_slice()), &mut sink).unwrap();
            prop_assert!(report.is_clean(), "{} diverged", candidate);
            prop_assert_eq!(report.operations, ops.len());
        }
    }
}
