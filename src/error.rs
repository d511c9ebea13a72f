// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run-level failures.
//!
//! Everything here is fatal: the command prints the message and exits
//! nonzero. Per-operation failures never become an `Error`; they are
//! `SequenceError`s folded into outcomes. Candidate/oracle disagreements are
//! not errors at all.

use crate::operation::ParseError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    /// Opening, reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// Writing diagnostics failed.
    Output(io::Error),
    /// A stream line was malformed or unreadable.
    Parse(ParseError),
    /// The JSON report could not be produced.
    Json(serde_json::Error),
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::Output(source) => write!(f, "Failed to write diagnostics: {}", source),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Json(err) => write!(f, "Failed to serialize report: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } | Error::Output(source) => Some(source),
            Error::Parse(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
