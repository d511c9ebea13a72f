//! Differential testing of indexed-sequence implementations.
//!
//! Two hand-written lists, a contiguous `ArrayList` and a sentinel-bounded
//! `LinkedList`, implement the same [`IndexedSequence`] contract as a trusted
//! `Vec`-backed oracle. A seeded generator writes operation streams that lean
//! on the index boundaries; the tester replays a stream against oracle and
//! candidate in lockstep and reports every line where they disagree.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  text  ┌───────────────┐      ┌──────────────────────┐
//! │ generator.rs │───────▶│ operation.rs  │─────▶│      tester.rs       │
//! │ (seeded RNG, │ stream │ (parse, write)│      │ oracle ⇄ candidate   │
//! │  size track) │        └───────────────┘      │ compare, report      │
//! └──────────────┘                               └──────────────────────┘
//!        │                                          │            │
//!        ▼                                          ▼            ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ sequence.rs: IndexedSequence, SequenceError, Outcome                │
//! │   array_list.rs    linked_list.rs    oracle.rs                      │
//! └─────────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ verify/: structural validators + debug-build contracts              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use seqcheck::{Candidate, DifferentialTester, OperationReader, PlainSink};
//!
//! let stream = seqcheck::generate_string(1_000, 42);
//! let mut sink = PlainSink::new(Vec::new());
//! let report = DifferentialTester::for_candidate(Candidate::LinkedList, None)
//!     .run(OperationReader::new(stream.as_bytes()), &mut sink)
//!     .unwrap();
//! assert!(report.is_clean());
//! ```

// Module declarations
pub mod array_list;
pub mod error;
pub mod generator;
pub mod linked_list;
pub mod operation;
pub mod oracle;
pub mod run;
pub mod sequence;
pub mod tester;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use array_list::{grown_capacity, ArrayList};
pub use error::Error;
pub use generator::{generate_string, index_range, GenerationSummary, StreamGenerator};
pub use linked_list::{LinkedList, NodeId};
pub use operation::{write_stream, Operation, OperationReader, ParseError, ParseErrorKind, Value};
pub use oracle::VecOracle;
pub use run::{generate_file, replay_file, ReplayOptions};
pub use sequence::{element_index, insert_index, Index, IndexedSequence, Outcome, SequenceError};
pub use tester::{
    write_trace, Candidate, DifferentialTester, Mismatch, PlainSink, ReplaySink, ReplayState,
    Report,
};
pub use verify::{validate_array_list, validate_linked_list, InvariantError};
