//! Source location tracking

/// A byte range in the source text, plus the 1-based line where it starts.
///
/// The byte range drives rendered diagnostics; the line number drives the
/// plain-text error format (`[Línea N] Error: ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Union of two spans; keeps the earlier start line
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
        }
    }
}
