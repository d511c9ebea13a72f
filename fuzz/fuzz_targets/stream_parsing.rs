// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the operation stream parser.
//!
//! Streams come from files anyone can edit. The reader must reject garbage
//! with a `ParseError`, never panic, and stop at the first bad line.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqcheck::{write_stream, OperationReader};

fuzz_target!(|data: &[u8]| {
    let mut reader = OperationReader::new(data);
    let mut parsed = Vec::new();
    let mut last_line = 0;

    for item in reader.by_ref() {
        match item {
            Ok((line, op)) => {
                // Lines are 1-based and strictly increasing.
                assert!(line > last_line, "line {} after {}", line, last_line);
                last_line = line;
                parsed.push(op);
            }
            Err(err) => {
                assert!(err.line > last_line, "error line {} after {}", err.line, last_line);
                break;
            }
        }
    }

    // Nothing is yielded after an error or end of input.
    assert!(reader.next().is_none());

    // Whatever parsed renders back to text that parses to the same operations.
    let mut text = Vec::new();
    write_stream(&mut text, &parsed).expect("writing to a Vec cannot fail");
    let reparsed: Vec<_> = OperationReader::new(text.as_slice())
        .map(|item| item.expect("rendered operations must parse").1)
        .collect();
    assert_eq!(parsed, reparsed);
});
