// File: crates/grid-core/src/select.rs
// Summary: Row/column selectors normalized into contiguous index spans.

use std::ops::Range;

/// Position within a row or column sequence, counted from either end.
/// `Back(0)` is the last element, `Back(1)` the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Index {
    Front(usize),
    Back(usize),
}

impl Index {
    pub const FIRST: Index = Index::Front(0);
    pub const LAST: Index = Index::Back(0);

    /// Absolute position for a sequence of `len`, or `None` when it falls before the start.
    fn position(self, len: usize) -> Option<usize> {
        match self {
            Index::Front(i) => Some(i),
            Index::Back(i) => len.checked_sub(i + 1),
        }
    }
}

/// Which rows (or columns) of a grid an operation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    /// Exactly one row/column.
    Single(Index),
    /// Half-open span `start..end`; `end: None` runs to the end.
    Span { start: Index, end: Option<Index> },
}

impl Selector {
    pub fn first() -> Self { Selector::Single(Index::FIRST) }

    pub fn last() -> Self { Selector::Single(Index::LAST) }

    pub fn all_but_first() -> Self { Selector::Span { start: Index::Front(1), end: None } }

    pub fn all_but_last() -> Self { Selector::Span { start: Index::FIRST, end: Some(Index::LAST) } }

    /// Canonical span for a sequence of `len` elements.
    ///
    /// Bounds are clamped to `0..len`; a `Single` index outside the sequence yields an
    /// empty span rather than touching a neighbour.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        match *self {
            Selector::All => 0..len,
            Selector::Single(index) => match index.position(len) {
                Some(i) if i < len => i..i + 1,
                _ => len..len,
            },
            Selector::Span { start, end } => {
                let start = start.position(len).unwrap_or(0).min(len);
                let end = match end {
                    None => len,
                    Some(e) => e.position(len).unwrap_or(0).min(len),
                };
                start..end.max(start)
            }
        }
    }
}

impl From<Index> for Selector {
    fn from(index: Index) -> Self { Selector::Single(index) }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self { Selector::Single(Index::Front(i)) }
}

impl From<Range<usize>> for Selector {
    fn from(r: Range<usize>) -> Self {
        Selector::Span { start: Index::Front(r.start), end: Some(Index::Front(r.end)) }
    }
}
