//! File-level replays through `generate_file` and `replay_file`.

use seqcheck::{
    generate_file, generate_string, replay_file, Candidate, Error, Outcome, ParseErrorKind,
    PlainSink, ReplayOptions,
};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// GENERATION
// ============================================================================

#[test]
fn test_generated_file_matches_in_memory_stream() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stream.txt");

    let summary = generate_file(&path, 500, 1234).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, generate_string(500, 1234));
    assert_eq!(
        summary.adds + summary.removes + summary.gets + summary.sets + summary.sizes,
        500
    );
}

#[test]
fn test_generate_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stream.txt");
    fs::write(&path, "x".repeat(100_000)).unwrap();

    generate_file(&path, 3, 5).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("stream.txt");
    let err = generate_file(&path, 10, 1).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_zero_operations_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    let summary = generate_file(&path, 0, 1).unwrap();
    assert_eq!(summary.operations, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    let mut sink = PlainSink::new(Vec::new());
    let report = replay_file(&path, Candidate::LinkedList, ReplayOptions::default(), &mut sink)
        .unwrap();
    assert_eq!(report.operations, 0);
    assert!(report.is_clean());
}

// ============================================================================
// REPLAY
// ============================================================================

#[test]
fn test_replay_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut sink = PlainSink::new(Vec::new());
    let err = replay_file(
        &dir.path().join("absent.txt"),
        Candidate::ArrayList,
        ReplayOptions::default(),
        &mut sink,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_malformed_line_stops_replay() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "add 0 1\nget 0\npush 3\nget 0\n").unwrap();

    let mut sink = PlainSink::new(Vec::new());
    let options = ReplayOptions {
        trace: true,
        max_len: None,
    };
    let err = replay_file(&path, Candidate::ArrayList, options, &mut sink).unwrap_err();
    match err {
        Error::Parse(parse) => {
            assert_eq!(parse.line, 3);
            assert_eq!(parse.kind, ParseErrorKind::UnknownOperation("push".to_string()));
        }
        other => panic!("expected parse error, got {}", other),
    }

    // Lines before the bad one were traced; the one after was never read.
    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert!(out.contains("<2> [0]"));
    assert!(!out.contains("<4>"));
}

#[test]
fn test_capped_candidate_reports_alloc_failures() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grow.txt");
    fs::write(&path, "add 0 1\nadd 1 2\nadd 2 3\nsize\n").unwrap();

    let mut sink = PlainSink::new(Vec::new());
    let options = ReplayOptions {
        trace: false,
        max_len: Some(2),
    };
    let report = replay_file(&path, Candidate::LinkedList, options, &mut sink).unwrap();

    assert_eq!(report.mismatch_count(), 2);
    assert_eq!(report.mismatches[0].line, 3);
    assert_eq!(report.mismatches[0].oracle, Outcome::Success(None));
    assert_eq!(report.mismatches[0].candidate, Outcome::AllocationError);
    assert_eq!(report.mismatches[1].candidate, Outcome::Success(Some(2)));
    assert!(!report.contents_match);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert!(out.contains("MISMATCH <        3>:"));
    assert!(out.contains("test = ALLOC_FAIL"));
}

#[test]
fn test_trace_output_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trace.txt");
    fs::write(&path, "add 0 5\nadd 1 7\nsize\n").unwrap();

    let mut sink = PlainSink::new(Vec::new());
    let options = ReplayOptions {
        trace: true,
        max_len: None,
    };
    replay_file(&path, Candidate::ArrayList, options, &mut sink).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert!(out.contains("<3> [0]\t5\t5\t\n<3> [1]\t7\t7\t\n-----\n\n"));
    assert!(!out.contains("***"));
}
