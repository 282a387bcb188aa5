//! The grid collaborator: the minimal cell-access contract the core
//! consumes, plus the dense in-memory sheet that backs it.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::range::Range;
use crate::types::{Cell, CellValue};

/// The capability set the core needs from a grid of cells.
///
/// The rendering/input layers own richer grid state; everything in this
/// crate reads and writes through this contract only.
pub trait Grid {
    fn num_rows(&self) -> i32;
    fn num_cols(&self) -> i32;

    /// The cell at the coordinate, or `None` when out of bounds.
    fn cell(&self, row: i32, col: i32) -> Option<&Cell>;

    /// Set a cell's value, returning whether the grid accepted it
    /// (false when out of bounds or the cell refuses, e.g. read-only).
    fn try_set_value(&mut self, row: i32, col: i32, value: CellValue) -> bool;

    /// The range covering the whole grid. Degenerate when the grid is
    /// empty; containment tests then fail for every coordinate.
    fn region(&self) -> Range {
        Range::new(0, self.num_rows() - 1, 0, self.num_cols() - 1)
    }
}

/// A dense in-memory grid of cells, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    num_rows: i32,
    num_cols: i32,
    cells: Vec<Cell>,
}

impl Sheet {
    pub fn new(num_rows: i32, num_cols: i32) -> Self {
        let num_rows = num_rows.max(0);
        let num_cols = num_cols.max(0);
        let count = usize::try_from(num_rows)
            .unwrap_or(0)
            .saturating_mul(usize::try_from(num_cols).unwrap_or(0));
        Self {
            num_rows,
            num_cols,
            cells: vec![Cell::default(); count],
        }
    }

    /// Set a cell's value, reporting why the mutation was refused.
    pub fn set_cell_value(&mut self, row: i32, col: i32, value: CellValue) -> Result<()> {
        let idx = self
            .index(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?;
        let cell = self
            .cells
            .get_mut(idx)
            .ok_or(GridError::OutOfBounds { row, col })?;
        if cell.try_set_value(value) {
            Ok(())
        } else {
            Err(GridError::ReadOnly { row, col })
        }
    }

    /// Boolean wrapper over [`Sheet::set_cell_value`].
    pub fn try_set_cell_value(&mut self, row: i32, col: i32, value: impl Into<CellValue>) -> bool {
        self.set_cell_value(row, col, value.into()).is_ok()
    }

    /// Mark a cell read-only (or writable again).
    pub fn set_read_only(&mut self, row: i32, col: i32, read_only: bool) -> Result<()> {
        let idx = self
            .index(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?;
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.set_read_only(read_only);
        }
        Ok(())
    }

    /// The value at the coordinate; `Empty` when out of bounds.
    pub fn cell_value(&self, row: i32, col: i32) -> CellValue {
        self.cell(row, col)
            .map(|c| c.value().clone())
            .unwrap_or_default()
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.num_rows || col >= self.num_cols {
            return None;
        }
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let cols = usize::try_from(self.num_cols).ok()?;
        Some(row * cols + col)
    }
}

impl Grid for Sheet {
    fn num_rows(&self) -> i32 {
        self.num_rows
    }

    fn num_cols(&self) -> i32 {
        self.num_cols
    }

    fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        let idx = self.index(row, col)?;
        self.cells.get(idx)
    }

    fn try_set_value(&mut self, row: i32, col: i32, value: CellValue) -> bool {
        self.set_cell_value(row, col, value).is_ok()
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
    use crate::types::CellPosition;

    #[test]
    fn test_new_sheet_is_empty() {
        let sheet = Sheet::new(2, 3);
        assert_eq!(sheet.num_rows(), 2);
        assert_eq!(sheet.num_cols(), 3);
        for pos in &sheet.region() {
            assert!(sheet.cell_value(pos.row, pos.col).is_empty());
        }
    }

    #[test]
    fn test_set_and_read_back() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.try_set_cell_value(0, 1, 42));
        assert_eq!(sheet.cell_value(0, 1).as_number(), Some(42.0));
    }

    #[test]
    fn test_out_of_bounds_is_refused() {
        let mut sheet = Sheet::new(2, 2);
        assert!(!sheet.try_set_cell_value(2, 0, 1));
        assert!(!sheet.try_set_cell_value(0, -1, 1));
        assert!(matches!(
            sheet.set_cell_value(5, 5, CellValue::Empty),
            Err(GridError::OutOfBounds { row: 5, col: 5 })
        ));
        assert!(sheet.cell(2, 0).is_none());
    }

    #[test]
    fn test_read_only_cell_is_refused() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set_read_only(1, 1, true).unwrap();
        assert!(matches!(
            sheet.set_cell_value(1, 1, CellValue::Number(1.0)),
            Err(GridError::ReadOnly { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_region_covers_whole_sheet() {
        let sheet = Sheet::new(3, 4);
        let region = sheet.region();
        assert_eq!(region.start(), CellPosition::new(0, 0));
        assert_eq!(region.end(), CellPosition::new(2, 3));
        assert_eq!(region.area(), 12);
    }
}
