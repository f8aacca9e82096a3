//! Source-location records attached to every AST node.
//!
//! `SrcLoc` is pure value data: it is copied freely, never shared, and never
//! participates in structural equality (see [`crate::node::StructuralEq`]).

use std::fmt;

/// A half-open span of source text, identified by file plus start/end
/// line/column pairs.
///
/// Lines and columns are 1-based, matching the convention of the external
/// parser that constructs these. [`SrcLoc::unknown`] is the placeholder used
/// for synthesized nodes (e.g. the transient default swapped in during
/// [`crate::node::replace_with`]) that never reach a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SrcLoc {
    pub file: u32,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl SrcLoc {
    pub fn new(file: u32, start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        SrcLoc {
            file,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Placeholder location carrying no diagnostic information.
    pub fn unknown() -> Self {
        Self::default()
    }
}

impl fmt::Display for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}:{}",
            self.file, self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_default() {
        assert_eq!(SrcLoc::unknown(), SrcLoc::default());
    }

    #[test]
    fn distinct_locations_are_not_equal() {
        let a = SrcLoc::new(0, 1, 1, 1, 5);
        let b = SrcLoc::new(0, 2, 1, 2, 5);
        assert_ne!(a, b);
    }
}
