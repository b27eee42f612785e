// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Syntax errors and the per-parse error collector.

use std::fmt;

use gar_ast::{Position, SourceFile};
use thiserror::Error;
use tracing::trace;

/// Number of errors a parse unit may hold before the next one aborts it.
pub const MAX_ERRORS: usize = 10;

/// A syntax error at a resolved source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pos}: {message}")]
pub struct ParseError {
    pub pos: Position,
    pub message: String,
}

/// The ordered errors of one parse unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<ParseError>);

impl ErrorList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&ParseError> {
        self.0.first()
    }

    /// Messages without positions, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Raised when a parse unit holds too many errors to be worth continuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("too many errors")]
pub struct Bailout;

pub type PResult<T> = Result<T, Bailout>;

/// Collects the errors of one parse unit.
pub(crate) struct Errors {
    file: SourceFile,
    list: Vec<ParseError>,
    /// Every report, including the ones dropped as same-line noise.
    reported: usize,
    /// Offset of the most recent report.
    last_offset: usize,
}

impl Errors {
    pub fn new(file: SourceFile) -> Self {
        Self { file, list: Vec::new(), reported: 0, last_offset: 0 }
    }

    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Record an error at `offset`.
    ///
    /// A second error on the line of the previous one is dropped. Once more
    /// than `MAX_ERRORS` are held, nothing more is recorded and the parse
    /// unit is abandoned.
    pub fn record(&mut self, offset: usize, message: impl Into<String>) -> PResult<()> {
        let pos = self.file.position(offset);
        self.reported += 1;
        self.last_offset = offset;

        if self.list.last().is_some_and(|last| last.pos.line == pos.line) {
            trace!(line = pos.line, "dropping error on an already reported line");
            return Ok(());
        }
        if self.list.len() > MAX_ERRORS {
            return Err(Bailout);
        }
        self.list.push(ParseError { pos, message: message.into() });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn last_offset(&self) -> usize {
        self.last_offset
    }

    pub fn into_list(self) -> ErrorList {
        ErrorList(self.list)
    }
}
