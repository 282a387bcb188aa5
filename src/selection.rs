//! Multi-range selection state machine.
//!
//! Driven by the UI layers: pointer-down begins a selecting gesture,
//! pointer-move updates the provisional range, pointer-up commits it.
//! Operations invoked in the wrong state are no-ops, never errors;
//! human input timing is inherently racy and callers are expected to
//! be defensive.

use serde::{Deserialize, Serialize};

use crate::range::Range;
use crate::sheet::Grid;
use crate::types::CellPosition;

/// How the in-flight gesture extends: per cell, or pinned to whole
/// rows / columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Cell,
    Row,
    Column,
}

/// The active selection: committed ranges in insertion order (last is
/// the most recent), at most one provisional selecting range, and the
/// active input position.
#[derive(Debug)]
pub struct Selection {
    ranges: Vec<Range>,
    selecting: Option<(Range, SelectionMode)>,
    active_position: CellPosition,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self {
            ranges: Vec::new(),
            selecting: None,
            active_position: CellPosition::invalid(),
        }
    }

    /// Committed ranges, in insertion order.
    pub fn selections(&self) -> &[Range] {
        &self.ranges
    }

    /// The provisional range of an in-flight gesture, if any.
    pub fn selecting_range(&self) -> Option<&Range> {
        self.selecting.as_ref().map(|(range, _)| range)
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting.is_some()
    }

    /// The active input position, flagged invalid when nothing is
    /// committed.
    pub fn position_of_first_cell(&self) -> CellPosition {
        if self.ranges.is_empty() {
            return CellPosition::invalid();
        }
        self.active_position
    }

    /// Whether the coordinate lies in any committed range.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.ranges.iter().any(|r| r.contains(row, col))
    }

    /// Start a cell-mode gesture anchored at the coordinate. Unless
    /// `additive`, the committed ranges are cleared first.
    pub fn begin_selecting_cell(&mut self, row: i32, col: i32, additive: bool) {
        self.begin(Range::single(row, col), SelectionMode::Cell, additive);
        self.active_position = CellPosition::new(row, col);
    }

    /// Start a row-mode gesture covering the whole row.
    pub fn begin_selecting_row(&mut self, grid: &dyn Grid, row: i32, additive: bool) {
        let range = Range::new(row, row, 0, grid.num_cols() - 1);
        self.begin(range, SelectionMode::Row, additive);
        self.active_position = CellPosition::new(row, 0);
    }

    /// Start a column-mode gesture covering the whole column.
    pub fn begin_selecting_col(&mut self, grid: &dyn Grid, col: i32, additive: bool) {
        let range = Range::new(0, grid.num_rows() - 1, col, col);
        self.begin(range, SelectionMode::Column, additive);
        self.active_position = CellPosition::new(0, col);
    }

    /// Extend the provisional range toward the coordinate, per its
    /// mode: cell mode extends to the exact coordinate, row/column
    /// modes only along the unpinned axis. No-op when idle.
    pub fn update_selecting_end_position(&mut self, grid: &dyn Grid, row: i32, col: i32) {
        let Some((range, mode)) = self.selecting.as_mut() else {
            return;
        };
        match mode {
            SelectionMode::Cell => range.extend_to(row, col),
            SelectionMode::Row => range.extend_to(row, grid.num_cols() - 1),
            SelectionMode::Column => range.extend_to(grid.num_rows() - 1, col),
        }
    }

    /// Commit the provisional range. The active input position moves to
    /// the committed range's end corner (the cell the drag finished
    /// on). No-op when idle.
    pub fn end_selecting(&mut self) {
        if let Some((range, _)) = self.selecting.take() {
            self.active_position = range.end();
            self.ranges.push(range);
        }
    }

    /// Discard the provisional range without committing, e.g. when an
    /// edit pre-empts the drag.
    pub fn cancel_selecting(&mut self) {
        self.selecting = None;
    }

    /// Extend the last committed range's end toward the coordinate
    /// (shift-click). No-op when nothing is committed.
    pub fn extend_selection(&mut self, row: i32, col: i32) {
        if let Some(last) = self.ranges.last_mut() {
            last.extend_to(row, col);
        }
    }

    /// Empty the committed ranges.
    pub fn clear_selections(&mut self) {
        self.ranges.clear();
    }

    /// Move the active input position by the delta, clamped to the
    /// grid. Inside a committed range only the position moves;
    /// otherwise the whole selection is replaced by a single-cell range
    /// at the new position. Cancels any in-flight gesture.
    pub fn move_selection(&mut self, grid: &dyn Grid, d_row: i32, d_col: i32) {
        self.cancel_selecting();
        if self.ranges.is_empty() || !self.active_position.is_valid() {
            return;
        }

        let row = (self.active_position.row + d_row).clamp(0, (grid.num_rows() - 1).max(0));
        let col = (self.active_position.col + d_col).clamp(0, (grid.num_cols() - 1).max(0));

        if !self.contains(row, col) {
            self.ranges.clear();
            self.ranges.push(Range::single(row, col));
        }
        self.active_position = CellPosition::new(row, col);
    }

    fn begin(&mut self, range: Range, mode: SelectionMode, additive: bool) {
        if !additive {
            self.ranges.clear();
        }
        self.selecting = Some((range, mode));
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::sheet::Sheet;

    #[test]
    fn test_gesture_commits_one_range() {
        let grid = Sheet::new(10, 10);
        let mut sel = Selection::new();

        sel.begin_selecting_cell(1, 1, false);
        assert!(sel.is_selecting());
        sel.update_selecting_end_position(&grid, 3, 3);
        sel.end_selecting();

        assert!(!sel.is_selecting());
        assert_eq!(sel.selections(), &[Range::new(1, 3, 1, 3)]);
    }

    #[test]
    fn test_update_while_idle_is_noop() {
        let grid = Sheet::new(10, 10);
        let mut sel = Selection::new();
        sel.update_selecting_end_position(&grid, 3, 3);
        sel.end_selecting();
        assert!(sel.selections().is_empty());
    }

    #[test]
    fn test_cancel_discards_provisional_range() {
        let mut sel = Selection::new();
        sel.begin_selecting_cell(1, 1, false);
        sel.cancel_selecting();
        sel.end_selecting();
        assert!(sel.selections().is_empty());
        assert!(!sel.position_of_first_cell().is_valid());
    }

    #[test]
    fn test_non_additive_begin_clears_committed() {
        let mut sel = Selection::new();
        sel.begin_selecting_cell(0, 0, false);
        sel.end_selecting();
        sel.begin_selecting_cell(5, 5, false);
        assert!(sel.selections().is_empty());
        sel.end_selecting();
        assert_eq!(sel.selections(), &[Range::single(5, 5)]);
    }

    #[test]
    fn test_additive_begin_keeps_committed() {
        let mut sel = Selection::new();
        sel.begin_selecting_cell(0, 0, false);
        sel.end_selecting();
        sel.begin_selecting_cell(5, 5, true);
        sel.end_selecting();
        assert_eq!(
            sel.selections(),
            &[Range::single(0, 0), Range::single(5, 5)]
        );
    }

    #[test]
    fn test_row_mode_pins_columns_to_grid_extent() {
        let grid = Sheet::new(4, 6);
        let mut sel = Selection::new();
        sel.begin_selecting_row(&grid, 1, false);
        sel.update_selecting_end_position(&grid, 2, 3);
        sel.end_selecting();
        assert_eq!(sel.selections(), &[Range::new(1, 2, 0, 5)]);
    }

    #[test]
    fn test_column_mode_pins_rows_to_grid_extent() {
        let grid = Sheet::new(4, 6);
        let mut sel = Selection::new();
        sel.begin_selecting_col(&grid, 2, false);
        sel.update_selecting_end_position(&grid, 1, 4);
        sel.end_selecting();
        assert_eq!(sel.selections(), &[Range::new(0, 3, 2, 4)]);
    }

    #[test]
    fn test_extend_selection_grows_last_range() {
        let mut sel = Selection::new();
        sel.begin_selecting_cell(1, 1, false);
        sel.end_selecting();
        sel.extend_selection(3, 2);
        assert_eq!(sel.selections(), &[Range::new(1, 3, 1, 2)]);
    }

    #[test]
    fn test_move_within_committed_range_keeps_selection() {
        let grid = Sheet::new(10, 10);
        let mut sel = Selection::new();
        sel.begin_selecting_cell(1, 1, false);
        sel.update_selecting_end_position(&grid, 3, 3);
        sel.end_selecting();

        // Active position is the drag end (3, 3); moving up stays inside.
        sel.move_selection(&grid, -1, 0);
        assert_eq!(sel.selections(), &[Range::new(1, 3, 1, 3)]);
        assert_eq!(sel.position_of_first_cell(), CellPosition::new(2, 3));
    }

    #[test]
    fn test_move_outside_replaces_with_single_cell() {
        let grid = Sheet::new(10, 10);
        let mut sel = Selection::new();
        sel.begin_selecting_cell(1, 1, false);
        sel.update_selecting_end_position(&grid, 3, 3);
        sel.end_selecting();

        sel.move_selection(&grid, 1, 0);
        assert_eq!(sel.selections(), &[Range::single(4, 3)]);
        assert_eq!(sel.position_of_first_cell(), CellPosition::new(4, 3));
    }

    #[test]
    fn test_move_clamps_to_grid() {
        let grid = Sheet::new(3, 3);
        let mut sel = Selection::new();
        sel.begin_selecting_cell(0, 0, false);
        sel.end_selecting();
        sel.move_selection(&grid, -1, -1);
        assert_eq!(sel.position_of_first_cell(), CellPosition::new(0, 0));
    }

    #[test]
    fn test_first_cell_invalid_with_no_committed_range() {
        let sel = Selection::new();
        assert!(!sel.position_of_first_cell().is_valid());
    }

    #[test]
    fn test_clear_selections() {
        let mut sel = Selection::new();
        sel.begin_selecting_cell(0, 0, false);
        sel.end_selecting();
        sel.clear_selections();
        assert!(sel.selections().is_empty());
        assert!(!sel.position_of_first_cell().is_valid());
    }
}
