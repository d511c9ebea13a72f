// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for both list implementations against the `Vec` oracle.
//!
//! The fuzzer drives arbitrary operation sequences, optionally under a
//! length cap. Outcomes must match the oracle (or each other, when capped)
//! and the structural validators must pass after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqcheck::{
    validate_array_list, validate_linked_list, ArrayList, IndexedSequence, LinkedList,
    Operation, Value, VecOracle,
};

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Add(i8, i64),
    Remove(i8),
    Get(i8),
    Set(i8, i64),
    Size,
}

impl FuzzOp {
    /// Small indices so most operations land in range.
    fn to_operation(&self) -> Operation {
        match *self {
            FuzzOp::Add(index, value) => Operation::Add { index: index.into(), value },
            FuzzOp::Remove(index) => Operation::Remove { index: index.into() },
            FuzzOp::Get(index) => Operation::Get { index: index.into() },
            FuzzOp::Set(index, value) => Operation::Set { index: index.into(), value },
            FuzzOp::Size => Operation::Size,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct ListInput {
    cap: Option<u8>,
    ops: Vec<FuzzOp>,
}

fuzz_target!(|input: ListInput| {
    let (mut array, mut linked) = match input.cap {
        Some(cap) => (
            ArrayList::<Value>::with_max_len(cap.into()),
            LinkedList::<Value>::with_max_len(cap.into()),
        ),
        None => (ArrayList::new(), LinkedList::new()),
    };
    let mut oracle = VecOracle::<Value>::new();

    for fuzz_op in input.ops.iter().take(1024) {
        let op = fuzz_op.to_operation();
        let a = op.apply(&mut array);
        let l = op.apply(&mut linked);
        assert_eq!(a, l, "array and linked disagree on {}", op);

        if input.cap.is_none() {
            let o = op.apply(&mut oracle);
            assert_eq!(a, o, "lists disagree with oracle on {}", op);
        }

        validate_array_list(&array).expect("array list structure");
        validate_linked_list(&linked).expect("linked list structure");
    }

    assert_eq!(array.contents(), linked.contents());
    if input.cap.is_none() {
        assert_eq!(array.contents(), oracle.as_slice());
    }
});
