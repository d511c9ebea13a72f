// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operations and the text stream they are persisted in.
//!
//! # Wire format
//!
//! One operation per line, whitespace-separated tokens:
//!
//! ```text
//!    add        -2        17
//! remove         0
//!    get         4
//!    set         1       903
//!   size
//! ```
//!
//! Column padding is cosmetic. The writer right-aligns keywords to 6 columns
//! and operands to 9; the reader accepts any amount of whitespace. Blank lines
//! are skipped but still advance the line counter, so diagnostics always name
//! the physical line.
//!
//! Reading is lazy: [`OperationReader`] parses one line per `next()`, which is
//! what lets a replay stop at a malformed line without touching the lines
//! after it.

use crate::sequence::{Index, IndexedSequence, Outcome};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead};

/// Payload type carried by operation streams.
pub type Value = i64;

/// One step of an operation stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { index: Index, value: Value },
    Remove { index: Index },
    Get { index: Index },
    Set { index: Index, value: Value },
    Size,
}

impl Operation {
    /// Stream keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
            Operation::Get { .. } => "get",
            Operation::Set { .. } => "set",
            Operation::Size => "size",
        }
    }

    pub fn index(&self) -> Option<Index> {
        match *self {
            Operation::Add { index, .. }
            | Operation::Remove { index }
            | Operation::Get { index }
            | Operation::Set { index, .. } => Some(index),
            Operation::Size => None,
        }
    }

    pub fn value(&self) -> Option<Value> {
        match *self {
            Operation::Add { value, .. } | Operation::Set { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Whether a successful application can change the list's size.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Operation::Add { .. } | Operation::Remove { .. })
    }

    /// Apply to a list and capture what happened.
    ///
    /// `Size` observes the length as its value; `Get`, `Set` and `Remove`
    /// carry the element they read or displaced; `Add` carries nothing.
    pub fn apply(&self, list: &mut dyn IndexedSequence<Value>) -> Outcome<Value> {
        match *self {
            Operation::Add { index, value } => Outcome::from_unit(list.add(index, value)),
            Operation::Remove { index } => Outcome::from_result(list.remove(index)),
            Operation::Get { index } => Outcome::from_result(list.get(index).copied()),
            Operation::Set { index, value } => Outcome::from_result(list.set(index, value)),
            Operation::Size => {
                Outcome::Success(Some(Value::try_from(list.size()).unwrap_or(Value::MAX)))
            }
        }
    }

    /// Parse one non-blank line. `line` is only used for error reporting.
    pub fn parse(text: &str, line: usize) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();
        let keyword = tokens.next().ok_or(ParseError {
            line,
            kind: ParseErrorKind::Empty,
        })?;

        let mut operand = |name: &'static str| -> Result<i64, ParseError> {
            let token = tokens.next().ok_or(ParseError {
                line,
                kind: ParseErrorKind::MissingOperand { operand: name },
            })?;
            token.parse::<i64>().map_err(|_| ParseError {
                line,
                kind: ParseErrorKind::InvalidInteger {
                    operand: name,
                    token: token.to_string(),
                },
            })
        };

        let op = match keyword {
            "add" => {
                let index = operand("index")?;
                let value = operand("value")?;
                Operation::Add { index, value }
            }
            "remove" => Operation::Remove {
                index: operand("index")?,
            },
            "get" => Operation::Get {
                index: operand("index")?,
            },
            "set" => {
                let index = operand("index")?;
                let value = operand("value")?;
                Operation::Set { index, value }
            }
            "size" => Operation::Size,
            other => {
                return Err(ParseError {
                    line,
                    kind: ParseErrorKind::UnknownOperation(other.to_string()),
                })
            }
        };

        if let Some(extra) = tokens.next() {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::TrailingToken(extra.to_string()),
            });
        }
        Ok(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::Add { index, value } | Operation::Set { index, value } => {
                write!(f, "{:>6} {:>9} {:>9}", self.keyword(), index, value)
            }
            Operation::Remove { index } | Operation::Get { index } => {
                write!(f, "{:>6} {:>9}", self.keyword(), index)
            }
            Operation::Size => write!(f, "{:>6}", self.keyword()),
        }
    }
}

/// Why a stream line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Keyword is not one of add/remove/get/set/size.
    UnknownOperation(String),
    /// Line ended before a required operand.
    MissingOperand { operand: &'static str },
    /// Operand is not a 64-bit signed integer.
    InvalidInteger { operand: &'static str, token: String },
    /// Tokens left over after a complete operation.
    TrailingToken(String),
    /// No tokens at all.
    Empty,
    /// The underlying reader failed.
    Unreadable(String),
}

/// A malformed or unreadable stream line. Always fatal to a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based physical line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownOperation(op) => {
                write!(f, "Invalid operation {} at line {}", op, self.line)
            }
            ParseErrorKind::MissingOperand { operand } => {
                write!(f, "Missing {} on line {}", operand, self.line)
            }
            ParseErrorKind::InvalidInteger { operand, token } => write!(
                f,
                "Could not read integer {} '{}' on line {}",
                operand, token, self.line
            ),
            ParseErrorKind::TrailingToken(token) => {
                write!(f, "Unexpected token '{}' on line {}", token, self.line)
            }
            ParseErrorKind::Empty => write!(f, "Empty operation on line {}", self.line),
            ParseErrorKind::Unreadable(msg) => {
                write!(f, "Could not read line {}: {}", self.line, msg)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Lazy line-by-line parser over any buffered reader.
///
/// Yields `(line_number, operation)` pairs. After the first error it yields
/// nothing more.
pub struct OperationReader<R> {
    input: R,
    line: usize,
    buf: String,
    failed: bool,
}

impl<R: BufRead> OperationReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            buf: String::new(),
            failed: false,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for OperationReader<R> {
    type Item = Result<(usize, Operation), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buf.clear();
            match self.input.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    if self.buf.trim().is_empty() {
                        continue;
                    }
                    let parsed = Operation::parse(&self.buf, self.line);
                    self.failed = parsed.is_err();
                    return Some(parsed.map(|op| (self.line, op)));
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(ParseError {
                        line: self.line + 1,
                        kind: ParseErrorKind::Unreadable(err.to_string()),
                    }));
                }
            }
        }
    }
}

/// Write operations one per line.
pub fn write_stream<'a, W, I>(out: &mut W, ops: I) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Operation>,
{
    for op in ops {
        writeln!(out, "{}", op)?;
    }
    Ok(())
}
