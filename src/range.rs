//! Source ranges expressed as byte offsets and row/column positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A row/column position (both 0-indexed, as tree-sitter reports them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl From<tree_sitter::Point> for Position {
    fn from(point: tree_sitter::Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

/// Half-open span over the source, tracked in bytes and in row/column pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Start byte offset (inclusive).
    pub start_byte: usize,
    /// End byte offset (exclusive).
    pub end_byte: usize,
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range covering a tree-sitter node.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start: node.start_position().into(),
            end: node.end_position().into(),
        }
    }

    /// Move the start of the range back to an earlier point.
    ///
    /// Points after the current start are ignored so the range never shrinks.
    pub fn widen_start(&mut self, start_byte: usize, start: Position) {
        if start_byte < self.start_byte {
            self.start_byte = start_byte;
            self.start = start;
        }
    }

    /// Slice the source text covered by this range.
    ///
    /// Returns an empty string when the range falls outside `source` or does
    /// not sit on UTF-8 boundaries.
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a str {
        source
            .get(self.start_byte..self.end_byte)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.end_byte - self.start_byte
    }

    pub fn is_empty(&self) -> bool {
        self.start_byte == self.end_byte
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.row, self.start.column, self.end.row, self.end.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Range {
        Range {
            start_byte: 7,
            end_byte: 18,
            start: Position { row: 1, column: 0 },
            end: Position { row: 1, column: 11 },
        }
    }

    #[test]
    fn test_display_uses_row_column_pairs() {
        assert_eq!(sample().to_string(), "1:0-1:11");
    }

    #[test]
    fn test_widen_start_moves_backward_only() {
        let mut range = sample();
        range.widen_start(0, Position { row: 0, column: 0 });
        assert_eq!(range.start_byte, 0);
        assert_eq!(range.start, Position { row: 0, column: 0 });
        assert_eq!(range.end_byte, 18);

        range.widen_start(5, Position { row: 0, column: 5 });
        assert_eq!(range.start_byte, 0, "widening forward must be ignored");
    }

    #[test]
    fn test_text_slices_source() {
        let source = b"// doc\nfunc F() {}";
        assert_eq!(sample().text(source), "func F() {}");
        assert_eq!(sample().len(), 11);
    }

    #[test]
    fn test_text_out_of_bounds_is_empty() {
        let range = Range {
            end_byte: 100,
            ..sample()
        };
        assert_eq!(range.text(b"short"), "");
    }
}
