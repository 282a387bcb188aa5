//! Clear the cells covered by a set of ranges.

use crate::commands::Command;
use crate::range::Range;
use crate::sheet::Grid;
use crate::types::{CellPosition, CellValue};

/// Empties every writable cell covered by the given ranges.
///
/// Execute captures each prior value before clearing it, so undo
/// restores the captured values verbatim rather than resetting to a
/// default; repeated undo/redo is lossless. Read-only cells are left
/// alone.
pub struct ClearCellsCommand {
    ranges: Vec<Range>,
    restore: Vec<(CellPosition, CellValue)>,
}

impl ClearCellsCommand {
    pub fn new(ranges: Vec<Range>) -> Self {
        Self {
            ranges,
            restore: Vec::new(),
        }
    }

    pub fn single(range: Range) -> Self {
        Self::new(vec![range])
    }
}

impl Command for ClearCellsCommand {
    fn name(&self) -> &str {
        "clear-cells"
    }

    fn execute(&mut self, grid: &mut dyn Grid) -> bool {
        self.restore.clear();
        let bounds = grid.region();

        for range in &self.ranges {
            let Some(clipped) = range.get_intersection(&bounds) else {
                continue;
            };
            for pos in &clipped.ordered() {
                let Some(cell) = grid.cell(pos.row, pos.col) else {
                    continue;
                };
                if cell.is_read_only() {
                    continue;
                }
                let prior = cell.value().clone();
                if grid.try_set_value(pos.row, pos.col, CellValue::Empty) {
                    self.restore.push((pos, prior));
                }
            }
        }

        !self.restore.is_empty()
    }

    fn undo(&mut self, grid: &mut dyn Grid) -> bool {
        // Reverse order: with overlapping ranges a cell may have been
        // captured twice, and the first capture must win.
        let mut ok = true;
        for (pos, value) in self.restore.iter().rev() {
            if !grid.try_set_value(pos.row, pos.col, value.clone()) {
                ok = false;
            }
        }
        ok
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::sheet::Sheet;

    #[test]
    fn test_clear_then_undo_restores_values() {
        let mut sheet = Sheet::new(3, 3);
        assert!(sheet.try_set_cell_value(0, 0, "a"));
        assert!(sheet.try_set_cell_value(1, 1, 7));

        let mut cmd = ClearCellsCommand::single(Range::new(0, 2, 0, 2));
        assert!(cmd.execute(&mut sheet));
        assert!(sheet.cell_value(0, 0).is_empty());
        assert!(sheet.cell_value(1, 1).is_empty());

        assert!(cmd.undo(&mut sheet));
        assert_eq!(sheet.cell_value(0, 0).as_text(), Some("a"));
        assert_eq!(sheet.cell_value(1, 1).as_number(), Some(7.0));
    }

    #[test]
    fn test_clear_skips_read_only_cells() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.try_set_cell_value(0, 0, 1));
        sheet.set_read_only(0, 0, true).unwrap();
        assert!(sheet.try_set_cell_value(0, 1, 2));

        let mut cmd = ClearCellsCommand::single(Range::new(0, 1, 0, 1));
        assert!(cmd.execute(&mut sheet));
        assert_eq!(sheet.cell_value(0, 0).as_number(), Some(1.0));
        assert!(sheet.cell_value(0, 1).is_empty());
    }

    #[test]
    fn test_clear_with_every_cell_read_only_is_refused() {
        let mut sheet = Sheet::new(1, 2);
        sheet.set_read_only(0, 0, true).unwrap();
        sheet.set_read_only(0, 1, true).unwrap();

        let mut cmd = ClearCellsCommand::single(Range::new(0, 0, 0, 1));
        assert!(!cmd.execute(&mut sheet));
    }

    #[test]
    fn test_ranges_are_clipped_to_grid() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.try_set_cell_value(1, 1, 5));

        let mut cmd = ClearCellsCommand::single(Range::new(-10, 10, -10, 10));
        assert!(cmd.execute(&mut sheet));
        assert!(sheet.cell_value(1, 1).is_empty());
    }

    #[test]
    fn test_overlapping_ranges_undo_restores_first_capture() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.try_set_cell_value(0, 0, 9));

        let mut cmd =
            ClearCellsCommand::new(vec![Range::single(0, 0), Range::new(0, 1, 0, 1)]);
        assert!(cmd.execute(&mut sheet));
        assert!(cmd.undo(&mut sheet));
        assert_eq!(sheet.cell_value(0, 0).as_number(), Some(9.0));
    }
}
