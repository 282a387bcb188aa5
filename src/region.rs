//! Row and column ranges spanning the full orthogonal extent.
//!
//! [`RowRange`] and [`ColumnRange`] share the containment and
//! intersection contract of [`Range`] through [`GridRegion`]; one axis
//! is conceptually unbounded, so intersecting with a finite range
//! substitutes that range's bound on the unbounded axis.

use serde::{Deserialize, Serialize};

use crate::range::Range;

/// The containment/intersection capability shared by the closed set of
/// region variants (`Range`, `RowRange`, `ColumnRange`).
pub trait GridRegion {
    fn contains(&self, row: i32, col: i32) -> bool;
    fn spans_row(&self, row: i32) -> bool;
    fn spans_col(&self, col: i32) -> bool;

    /// Overlap with a finite range, as an ordered finite `Range`.
    fn intersection(&self, other: &Range) -> Option<Range>;
}

impl GridRegion for Range {
    fn contains(&self, row: i32, col: i32) -> bool {
        Range::contains(self, row, col)
    }

    fn spans_row(&self, row: i32) -> bool {
        Range::spans_row(self, row)
    }

    fn spans_col(&self, col: i32) -> bool {
        Range::spans_col(self, col)
    }

    fn intersection(&self, other: &Range) -> Option<Range> {
        self.get_intersection(other).map(|r| r.ordered())
    }
}

/// A band of whole rows, spanning every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    row_start: i32,
    row_end: i32,
}

impl RowRange {
    /// Reversed bounds are accepted and behave the same as ordered ones.
    pub fn new(row_start: i32, row_end: i32) -> Self {
        Self { row_start, row_end }
    }

    fn row_bounds(&self) -> (i32, i32) {
        (
            self.row_start.min(self.row_end),
            self.row_start.max(self.row_end),
        )
    }
}

impl GridRegion for RowRange {
    fn contains(&self, row: i32, _col: i32) -> bool {
        self.spans_row(row)
    }

    fn spans_row(&self, row: i32) -> bool {
        let (lo, hi) = self.row_bounds();
        row >= lo && row <= hi
    }

    fn spans_col(&self, _col: i32) -> bool {
        true
    }

    fn intersection(&self, other: &Range) -> Option<Range> {
        let (lo, hi) = self.row_bounds();
        let o = other.ordered();

        let row0 = lo.max(o.start().row);
        let row1 = hi.min(o.end().row);
        if row0 > row1 {
            return None;
        }
        // The column axis is unbounded here, so the finite range's
        // column bounds carry over unchanged.
        Some(Range::new(row0, row1, o.start().col, o.end().col))
    }
}

/// A band of whole columns, spanning every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    col_start: i32,
    col_end: i32,
}

impl ColumnRange {
    /// Reversed bounds are accepted and behave the same as ordered ones.
    pub fn new(col_start: i32, col_end: i32) -> Self {
        Self { col_start, col_end }
    }

    fn col_bounds(&self) -> (i32, i32) {
        (
            self.col_start.min(self.col_end),
            self.col_start.max(self.col_end),
        )
    }
}

impl GridRegion for ColumnRange {
    fn contains(&self, _row: i32, col: i32) -> bool {
        self.spans_col(col)
    }

    fn spans_row(&self, _row: i32) -> bool {
        true
    }

    fn spans_col(&self, col: i32) -> bool {
        let (lo, hi) = self.col_bounds();
        col >= lo && col <= hi
    }

    fn intersection(&self, other: &Range) -> Option<Range> {
        let (lo, hi) = self.col_bounds();
        let o = other.ordered();

        let col0 = lo.max(o.start().col);
        let col1 = hi.min(o.end().col);
        if col0 > col1 {
            return None;
        }
        Some(Range::new(o.start().row, o.end().row, col0, col1))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::CellPosition;

    #[test]
    fn test_column_range_contains_any_row() {
        let range = ColumnRange::new(1, 3);
        assert!(range.contains(100, 1));
        assert!(range.contains(100, 2));
        assert!(range.contains(100, 3));
        assert!(!range.contains(100, 4));
    }

    #[test]
    fn test_backwards_column_range_contains() {
        let range = ColumnRange::new(3, 1);
        assert!(range.contains(100, 1));
        assert!(range.contains(100, 2));
        assert!(range.contains(100, 3));
    }

    #[test]
    fn test_column_intersection_with_contained_range() {
        let fixed = Range::new(0, 2, 0, 2);
        let cols = ColumnRange::new(0, 10);
        assert_eq!(cols.intersection(&fixed), Some(fixed));
    }

    #[test]
    fn test_column_intersection_clips_to_column_bounds() {
        let fixed = Range::new(0, 2, -1, 11);
        let cols = ColumnRange::new(0, 10);
        let i = cols.intersection(&fixed).unwrap();
        assert_eq!(i.start(), CellPosition::new(0, 0));
        assert_eq!(i.end(), CellPosition::new(2, 10));
    }

    #[test]
    fn test_column_intersection_outside_returns_none() {
        let fixed = Range::new(0, 2, 5, 8);
        let cols = ColumnRange::new(0, 3);
        assert_eq!(cols.intersection(&fixed), None);
    }

    #[test]
    fn test_row_range_contains_any_col() {
        let range = RowRange::new(2, 4);
        assert!(range.contains(2, 999));
        assert!(range.contains(4, -5));
        assert!(!range.contains(5, 0));
    }

    #[test]
    fn test_row_intersection_clips_to_row_bounds() {
        let fixed = Range::new(-3, 7, 1, 2);
        let rows = RowRange::new(0, 4);
        let i = rows.intersection(&fixed).unwrap();
        assert_eq!(i.start(), CellPosition::new(0, 1));
        assert_eq!(i.end(), CellPosition::new(4, 2));
    }

    #[test]
    fn test_finite_range_through_trait() {
        let range = Range::new(2, 0, 2, 0);
        let other = Range::new(1, 5, 1, 5);
        // Trait-level intersection is always ordered.
        let i = GridRegion::intersection(&range, &other).unwrap();
        assert_eq!(i.start(), CellPosition::new(1, 1));
        assert_eq!(i.end(), CellPosition::new(2, 2));
    }
}
