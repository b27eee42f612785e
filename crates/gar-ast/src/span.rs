// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Source location tracking.

use std::fmt;

/// A span in the source code, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub fn point(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Span covering `self` through `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// Precomputed line-start offsets for O(log n) byte-offset → line:col lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    /// Byte offset of the start of each line. line_starts[0] is always 0.
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map by scanning source for newlines. O(n).
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        LineMap { line_starts }
    }

    /// Convert byte offset to (line, col), both 1-based. O(log n).
    pub fn offset_to_line_col(&self, offset: usize) -> (u32, u32) {
        let offset = offset as u32;
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line = (line_idx + 1) as u32;
        let col = offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }
}

/// A parse unit: its display name plus the line table of its text.
///
/// This is the position service the parser reports through. Offsets are
/// resolved lazily, only when an error is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    len: usize,
    lines: LineMap,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        Self {
            name: name.into(),
            len: source.len(),
            lines: LineMap::new(source),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the source text in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve a byte offset to a renderable position. Offsets past the end
    /// clamp to the end of the file.
    pub fn position(&self, offset: usize) -> Position {
        let (line, column) = self.lines.offset_to_line_col(offset.min(self.len));
        Position {
            filename: self.name.clone(),
            offset,
            line,
            column,
        }
    }
}

/// A resolved source position. Renders as `file:line:col`, or `line:col`
/// when the unit has no name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub filename: String,
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filename.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.filename, self.line, self.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        let lm = LineMap::new("");
        assert_eq!(lm.offset_to_line_col(0), (1, 1));
        assert_eq!(lm.line_count(), 1);
    }

    #[test]
    fn multi_line() {
        let src = "abc\ndef\nghi";
        let lm = LineMap::new(src);
        assert_eq!(lm.line_count(), 3);
        assert_eq!(lm.offset_to_line_col(0), (1, 1)); // 'a'
        assert_eq!(lm.offset_to_line_col(2), (1, 3)); // 'c'
        assert_eq!(lm.offset_to_line_col(4), (2, 1)); // 'd'
        assert_eq!(lm.offset_to_line_col(8), (3, 1)); // 'g'
    }

    #[test]
    fn offset_at_newline() {
        let lm = LineMap::new("ab\ncd\n");
        // Offset 2 is the '\n', which still belongs to line 1
        assert_eq!(lm.offset_to_line_col(2), (1, 3));
        assert_eq!(lm.offset_to_line_col(3), (2, 1));
    }

    #[test]
    fn position_display() {
        let file = SourceFile::new("<test>", "module abc\nfunc foo() {");
        assert_eq!(file.position(11).to_string(), "<test>:2:1");
        assert_eq!(file.position(0).to_string(), "<test>:1:1");

        let anon = SourceFile::new("", "x");
        assert_eq!(anon.position(0).to_string(), "1:1");
    }

    #[test]
    fn position_past_end_clamps() {
        let file = SourceFile::new("f", "ab");
        let pos = file.position(10);
        assert_eq!((pos.line, pos.column), (1, 3));
    }

    #[test]
    fn span_to_covers_both() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 2);
        assert_eq!(a.to(b), Span::new(1, 6));
    }
}
