// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural validators and runtime contracts.
//!
//! Two complementary approaches to catching bugs in the list implementations:
//!
//! 1. **Validators** (`validate_array_list`, `validate_linked_list`) that walk
//!    the whole structure and return an `InvariantError` describing the first
//!    broken invariant. Tests and fuzz targets call them after every operation.
//!
//! 2. **Runtime contracts** that panic in debug builds when a local invariant
//!    is violated right after a mutation. O(1) per call, so they stay on for
//!    the long replay tests.
//!
//! Use both. The contracts pinpoint the mutation that broke things. The
//! validators catch damage the local checks can't see.

mod types;
pub mod contracts;

pub use types::*;
