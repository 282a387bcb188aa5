//! Directional rectangular cell ranges.
//!
//! A [`Range`] keeps which corner was the anchor of the gesture that
//! created it: `start` is the anchor, `end` is the live corner, and the
//! direction signs are recomputed from `end - start` on every mutation.
//! The ordered form (start <= end per axis) is what containment,
//! intersection and equality work on; the directional form is what
//! drag-extend works on.

use serde::{Deserialize, Serialize};

use crate::types::CellPosition;

/// A directional rectangular region over the grid, inclusive on both
/// ends and never smaller than one cell.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
pub struct Range {
    start: CellPosition,
    end: CellPosition,
    row_dir: i32,
    col_dir: i32,
}

impl Range {
    /// Create a range from row bounds then column bounds. Reversed
    /// bounds produce a backwards range anchored at `row_start` /
    /// `col_start`.
    pub fn new(row_start: i32, row_end: i32, col_start: i32, col_end: i32) -> Self {
        let mut range = Self {
            start: CellPosition::new(row_start, col_start),
            end: CellPosition::new(row_end, col_end),
            row_dir: 1,
            col_dir: 1,
        };
        range.recompute_dirs();
        range
    }

    /// Create a single-cell range.
    pub fn single(row: i32, col: i32) -> Self {
        Self::new(row, row, col, col)
    }

    pub fn start(&self) -> CellPosition {
        self.start
    }

    pub fn end(&self) -> CellPosition {
        self.end
    }

    pub fn row_dir(&self) -> i32 {
        self.row_dir
    }

    pub fn col_dir(&self) -> i32 {
        self.col_dir
    }

    pub fn height(&self) -> i32 {
        (self.end.row - self.start.row).abs() + 1
    }

    pub fn width(&self) -> i32 {
        (self.end.col - self.start.col).abs() + 1
    }

    pub fn area(&self) -> i64 {
        i64::from(self.height()) * i64::from(self.width())
    }

    /// True iff the coordinate lies within the ordered bounding box.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.spans_row(row) && self.spans_col(col)
    }

    /// Axis-only containment: whether the range's row span covers `row`.
    pub fn spans_row(&self, row: i32) -> bool {
        row >= self.start.row.min(self.end.row) && row <= self.start.row.max(self.end.row)
    }

    /// Axis-only containment: whether the range's column span covers `col`.
    pub fn spans_col(&self, col: i32) -> bool {
        col >= self.start.col.min(self.end.col) && col <= self.start.col.max(self.end.col)
    }

    /// Compute the overlap rectangle with `other`, or `None` if the
    /// ordered rectangles do not overlap on either axis.
    ///
    /// The result covers the same ordered cells whichever range the
    /// method is invoked on, but its anchor corner follows the calling
    /// range's direction signs.
    pub fn get_intersection(&self, other: &Range) -> Option<Range> {
        let a = self.ordered();
        let b = other.ordered();

        let row0 = a.start.row.max(b.start.row);
        let row1 = a.end.row.min(b.end.row);
        let col0 = a.start.col.max(b.start.col);
        let col1 = a.end.col.min(b.end.col);

        if row0 > row1 || col0 > col1 {
            return None;
        }

        let mut overlap = Range::new(row0, row1, col0, col1);
        overlap.set_order(self.row_dir, self.col_dir);
        Some(overlap)
    }

    /// Decompose `self` minus its intersection with `other` into the
    /// minimal set of disjoint ordered rectangles.
    ///
    /// The cut is clipped to this range's bounds first, then up to four
    /// bands are emitted: a top band and a bottom band spanning the full
    /// width, plus left and right bands restricted to the cut's row
    /// span. With no intersection the whole ordered range comes back.
    pub fn break_around(&self, other: &Range) -> Vec<Range> {
        let me = self.ordered();
        let Some(cut) = self.get_intersection(other).map(|c| c.ordered()) else {
            return vec![me];
        };

        let mut pieces = Vec::new();

        if cut.start.row > me.start.row {
            pieces.push(Range::new(
                me.start.row,
                cut.start.row - 1,
                me.start.col,
                me.end.col,
            ));
        }
        if cut.end.row < me.end.row {
            pieces.push(Range::new(
                cut.end.row + 1,
                me.end.row,
                me.start.col,
                me.end.col,
            ));
        }
        if cut.start.col > me.start.col {
            pieces.push(Range::new(
                cut.start.row,
                cut.end.row,
                me.start.col,
                cut.start.col - 1,
            ));
        }
        if cut.end.col < me.end.col {
            pieces.push(Range::new(
                cut.start.row,
                cut.end.row,
                cut.end.col + 1,
                me.end.col,
            ));
        }

        pieces
    }

    /// Move only the end position, recomputing the direction signs.
    /// Used for the live drag; may flip an axis when dragging back past
    /// the anchor.
    pub fn extend_to(&mut self, row: i32, col: i32) {
        self.end = CellPosition::new(row, col);
        self.recompute_dirs();
    }

    /// Clamp both endpoints into `bounds`' ordered rectangle, in place.
    pub fn constrain(&mut self, bounds: &Range) {
        let b = bounds.ordered();
        self.start.row = self.start.row.clamp(b.start.row, b.end.row);
        self.start.col = self.start.col.clamp(b.start.col, b.end.col);
        self.end.row = self.end.row.clamp(b.start.row, b.end.row);
        self.end.col = self.end.col.clamp(b.start.col, b.end.col);
        self.recompute_dirs();
    }

    /// Rewrite the endpoints so the ordered rectangle is unchanged and
    /// the anchor corner matches the requested direction signs.
    pub fn set_order(&mut self, row_dir: i32, col_dir: i32) {
        let (row0, row1) = (
            self.start.row.min(self.end.row),
            self.start.row.max(self.end.row),
        );
        let (col0, col1) = (
            self.start.col.min(self.end.col),
            self.start.col.max(self.end.col),
        );

        if row_dir >= 0 {
            self.start.row = row0;
            self.end.row = row1;
        } else {
            self.start.row = row1;
            self.end.row = row0;
        }
        if col_dir >= 0 {
            self.start.col = col0;
            self.end.col = col1;
        } else {
            self.start.col = col1;
            self.end.col = col0;
        }
        self.recompute_dirs();
    }

    /// Copy with the direction normalized to (+1, +1).
    pub fn ordered(&self) -> Range {
        let mut copy = *self;
        copy.set_order(1, 1);
        copy
    }

    /// Iterate the range's cells row-major along its own direction: a
    /// backwards range enumerates from its own start corner toward its
    /// own end corner.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            range: *self,
            row: self.start.row,
            col: self.start.col,
            done: false,
        }
    }

    fn recompute_dirs(&mut self) {
        self.row_dir = if self.end.row < self.start.row { -1 } else { 1 };
        self.col_dir = if self.end.col < self.start.col { -1 } else { 1 };
    }
}

/// Two ranges are equal iff their ordered forms coincide, regardless of
/// which corner anchors them.
impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        let a = self.ordered();
        let b = other.ordered();
        a.start == b.start && a.end == b.end
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = CellPosition;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy, restartable cursor over a range's cells.
#[derive(Debug, Clone)]
pub struct RangeIter {
    range: Range,
    row: i32,
    col: i32,
    done: bool,
}

impl Iterator for RangeIter {
    type Item = CellPosition;

    fn next(&mut self) -> Option<CellPosition> {
        if self.done {
            return None;
        }
        let item = CellPosition::new(self.row, self.col);

        if self.col == self.range.end.col {
            if self.row == self.range.end.row {
                self.done = true;
            } else {
                self.col = self.range.start.col;
                self.row += self.range.row_dir;
            }
        } else {
            self.col += self.range.col_dir;
        }

        Some(item)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_wrap,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_single_cell_range_has_unit_size() {
        let range = Range::single(10, 11);
        assert_eq!(range.start(), CellPosition::new(10, 11));
        assert_eq!(range.end(), CellPosition::new(10, 11));
        assert_eq!(range.width(), 1);
        assert_eq!(range.height(), 1);
        assert_eq!(range.area(), 1);
    }

    #[test]
    fn test_new_keeps_given_corners() {
        let range = Range::new(1, 2, 3, 4);
        assert_eq!(range.start(), CellPosition::new(1, 3));
        assert_eq!(range.end(), CellPosition::new(2, 4));
        assert_eq!(range.row_dir(), 1);
        assert_eq!(range.col_dir(), 1);
    }

    #[test]
    fn test_backwards_range_keeps_given_corners() {
        let range = Range::new(2, 1, 4, 3);
        assert_eq!(range.start(), CellPosition::new(2, 4));
        assert_eq!(range.end(), CellPosition::new(1, 3));
        assert_eq!(range.row_dir(), -1);
        assert_eq!(range.col_dir(), -1);
    }

    #[test]
    fn test_width_height_area() {
        let range = Range::new(1, 4, 2, 7);
        assert_eq!(range.height(), 4);
        assert_eq!(range.width(), 6);
        assert_eq!(range.area(), 24);

        let backwards = Range::new(4, 1, 7, 2);
        assert_eq!(backwards.height(), 4);
        assert_eq!(backwards.width(), 6);
        assert_eq!(backwards.area(), 24);
    }

    #[test]
    fn test_contains() {
        let range = Range::new(0, 2, 0, 2);
        assert!(range.contains(0, 0));
        assert!(range.contains(1, 1));
        assert!(range.contains(2, 2));
        assert!(!range.contains(0, 5));
        assert!(!range.contains(10, 10));
        assert!(!range.contains(-1, 0));
    }

    #[test]
    fn test_spans_row_and_col() {
        let range = Range::new(1, 5, 7, 12);
        assert!(range.spans_row(3));
        assert!(!range.spans_row(8));
        assert!(range.spans_col(8));
        assert!(!range.spans_col(3));
    }

    #[test]
    fn test_constrain_to_smaller_range() {
        let mut large = Range::new(0, 5, 1, 6);
        let small = Range::new(2, 4, 3, 5);
        large.constrain(&small);
        assert_eq!(large.start(), small.start());
        assert_eq!(large.end(), small.end());
    }

    #[test]
    fn test_constrain_to_larger_range_is_noop() {
        let large = Range::new(0, 5, 1, 6);
        let mut small = Range::new(2, 4, 3, 5);
        small.constrain(&large);
        assert_eq!(small.start(), CellPosition::new(2, 3));
        assert_eq!(small.end(), CellPosition::new(4, 5));
    }

    #[test]
    fn test_iteration_moves_row_major() {
        let range = Range::new(0, 2, 0, 2);
        let posns: Vec<_> = range.iter().collect();
        assert_eq!(posns.len() as i64, range.area());
        assert_eq!(posns[0], CellPosition::new(0, 0));
        assert_eq!(posns[2], CellPosition::new(0, 2));
        assert_eq!(posns[3], CellPosition::new(1, 0));
    }

    #[test]
    fn test_backwards_iteration_moves_in_reverse_dir() {
        let range = Range::new(2, 0, 2, 0);
        let posns: Vec<_> = range.iter().collect();
        assert_eq!(posns.len() as i64, range.area());
        assert_eq!(posns[0], CellPosition::new(2, 2));
        assert_eq!(posns[2], CellPosition::new(2, 0));
        assert_eq!(posns[3], CellPosition::new(1, 2));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let range = Range::new(0, 1, 0, 1);
        assert_eq!(range.iter().count(), 4);
        assert_eq!(range.iter().count(), 4);
    }

    #[test]
    fn test_copy_preserves_direction_ordered_normalizes() {
        let range = Range::new(5, 7, 2, 8);
        let copy = range;
        assert_eq!(copy.start(), CellPosition::new(5, 2));
        assert_eq!(copy.end(), CellPosition::new(7, 8));

        let reversed = Range::new(7, 5, 8, 2);
        let ordered = reversed.ordered();
        assert_eq!(ordered.start(), CellPosition::new(5, 2));
        assert_eq!(ordered.end(), CellPosition::new(7, 8));
        assert_eq!(ordered.area(), reversed.area());
    }

    #[test]
    fn test_intersection_with_contained_range() {
        let large = Range::new(0, 3, 0, 3);
        let small = Range::new(1, 2, 1, 2);
        assert_eq!(large.get_intersection(&small), Some(small));
    }

    #[test]
    fn test_intersection_with_contained_backwards_range() {
        let large = Range::new(0, 3, 0, 3);
        let small = Range::new(2, 1, 2, 1);
        assert_eq!(large.get_intersection(&small), Some(small.ordered()));
    }

    #[test]
    fn test_intersection_outside_returns_none() {
        let r1 = Range::single(0, 0);
        let r2 = Range::single(1, 1);
        assert_eq!(r1.get_intersection(&r2), None);
    }

    #[test]
    fn test_intersection_partial_overlap() {
        let r1 = Range::new(0, 2, 0, 2);
        let r2 = Range::new(1, 1, 2, 3);
        assert_eq!(r1.get_intersection(&r2), Some(Range::new(1, 1, 2, 2)));
    }

    #[test]
    fn test_intersection_preserves_calling_anchor() {
        let backwards = Range::new(2, 0, 2, 0);
        let forwards = Range::new(0, 10, 0, 10);
        let i1 = backwards.get_intersection(&forwards).unwrap();
        let i2 = forwards.get_intersection(&backwards).unwrap();
        assert_eq!(i1.start(), backwards.start());
        assert_eq!(i2.start(), forwards.start());
        // Equal as ordered rectangles regardless of anchor.
        assert_eq!(i1, i2);
    }

    #[test]
    fn test_extend_that_flips_direction() {
        let mut range = Range::new(1, 2, 1, 2);
        range.extend_to(0, 0);
        assert_eq!(range.end(), CellPosition::new(0, 0));
        assert_eq!(range.start(), CellPosition::new(1, 1));
        assert_eq!(range.row_dir(), -1);
        assert_eq!(range.col_dir(), -1);
    }

    #[test]
    fn test_set_reverse_order_swaps_corners() {
        let mut range = Range::new(0, 1, 0, 1);
        range.set_order(-1, -1);
        assert_eq!(range.start(), CellPosition::new(1, 1));
        assert_eq!(range.end(), CellPosition::new(0, 0));
    }

    #[test]
    fn test_set_same_order_keeps_corners() {
        let reversed = Range::new(5, 1, 1, 1);
        let mut copy = reversed;
        copy.set_order(reversed.row_dir(), reversed.col_dir());
        assert_eq!(copy.start(), reversed.start());
        assert_eq!(copy.end(), reversed.end());

        let forwards = Range::new(1, 5, 1, 1);
        let mut copy = forwards;
        copy.set_order(forwards.row_dir(), forwards.col_dir());
        assert_eq!(copy.start(), forwards.start());
        assert_eq!(copy.end(), forwards.end());
    }

    #[test]
    fn test_set_order_then_extend() {
        let range = Range::single(1, 1);
        let larger = Range::new(0, 10, 0, 10);
        let mut intersect = range.get_intersection(&larger).unwrap();
        assert_eq!(intersect, range);

        intersect.extend_to(1, 2);
        let intersect = larger.get_intersection(&intersect).unwrap();
        assert_eq!(intersect.start(), range.start());
        assert_eq!(intersect.end(), CellPosition::new(1, 2));
    }

    // Break a 3x3 range around various cuts; expectations mirror the
    // piece counts of every cut position (edge, middle, across, off-grid).
    #[test_case(0, 0, 0, 0, 2; "cut on top left corner")]
    #[test_case(2, 2, 2, 2, 2; "cut on bottom right corner")]
    #[test_case(1, 1, 1, 1, 4; "cut in middle")]
    #[test_case(1, 1, -5, 5, 2; "cut across full width")]
    #[test_case(-1, 1, -5, 5, 1; "cut across top overlapping outside")]
    #[test_case(10, 2, -5, 5, 1; "cut across bottom overlapping outside")]
    #[test_case(-10, 10, 1, 5, 1; "cut across right overlapping outside")]
    #[test_case(1, 1, 1, 5, 3; "cut through middle to right edge")]
    fn test_break_around(r0: i32, r1: i32, c0: i32, c1: i32, n_expected: usize) {
        for base in [Range::new(0, 2, 0, 2), Range::new(2, 0, 2, 0)] {
            let cut = Range::new(r0, r1, c0, c1);
            let pieces = base.break_around(&cut);
            assert_eq!(pieces.len(), n_expected);

            let cut_area = base.get_intersection(&cut).map_or(0, |i| i.area());
            let total: i64 = pieces.iter().map(Range::area).sum();
            assert_eq!(total, base.area() - cut_area);

            // No piece may overlap the cut, or any other piece.
            for (i, piece) in pieces.iter().enumerate() {
                assert_eq!(piece.get_intersection(&cut), None);
                for other in pieces.iter().skip(i + 1) {
                    assert_eq!(piece.get_intersection(other), None);
                }
            }
        }
    }

    #[test]
    fn test_break_around_disjoint_returns_whole_range() {
        let base = Range::new(2, 0, 2, 0);
        let pieces = base.break_around(&Range::single(10, 10));
        assert_eq!(pieces, vec![base.ordered()]);
    }

    #[test]
    fn test_equality_ignores_direction() {
        assert_eq!(Range::new(0, 2, 0, 2), Range::new(2, 0, 2, 0));
        assert_ne!(Range::new(0, 2, 0, 2), Range::new(0, 1, 0, 2));
    }
}
