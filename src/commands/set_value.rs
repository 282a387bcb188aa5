//! Set a single cell's value.

use crate::commands::Command;
use crate::sheet::Grid;
use crate::types::CellValue;

/// Sets one cell's value, capturing the prior value for undo.
///
/// This is the command behind accepting a cell edit: raw user input
/// goes through [`CellValue::from_input`] via [`Self::from_input`].
pub struct SetCellValueCommand {
    row: i32,
    col: i32,
    value: CellValue,
    prior: Option<CellValue>,
}

impl SetCellValueCommand {
    pub fn new(row: i32, col: i32, value: CellValue) -> Self {
        Self {
            row,
            col,
            value,
            prior: None,
        }
    }

    /// Build from raw user input, detecting the value type the same
    /// way the edit overlay does.
    pub fn from_input(row: i32, col: i32, input: &str) -> Self {
        Self::new(row, col, CellValue::from_input(input))
    }
}

impl Command for SetCellValueCommand {
    fn name(&self) -> &str {
        "set-cell-value"
    }

    fn execute(&mut self, grid: &mut dyn Grid) -> bool {
        let Some(cell) = grid.cell(self.row, self.col) else {
            return false;
        };
        let prior = cell.value().clone();
        if !grid.try_set_value(self.row, self.col, self.value.clone()) {
            return false;
        }
        self.prior = Some(prior);
        true
    }

    fn undo(&mut self, grid: &mut dyn Grid) -> bool {
        match self.prior.clone() {
            Some(prior) => grid.try_set_value(self.row, self.col, prior),
            None => false,
        }
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
    fn test_set_then_undo_round_trip() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.try_set_cell_value(0, 0, "before"));

        let mut cmd = SetCellValueCommand::from_input(0, 0, "42");
        assert!(cmd.execute(&mut sheet));
        assert_eq!(sheet.cell_value(0, 0).as_number(), Some(42.0));

        assert!(cmd.undo(&mut sheet));
        assert_eq!(sheet.cell_value(0, 0).as_text(), Some("before"));
    }

    #[test]
    fn test_set_out_of_bounds_is_refused() {
        let mut sheet = Sheet::new(2, 2);
        let mut cmd = SetCellValueCommand::new(5, 5, CellValue::Number(1.0));
        assert!(!cmd.execute(&mut sheet));
    }

    #[test]
    fn test_set_read_only_cell_is_refused() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set_read_only(0, 0, true).unwrap();
        let mut cmd = SetCellValueCommand::new(0, 0, CellValue::Number(1.0));
        assert!(!cmd.execute(&mut sheet));
        // Nothing was captured, so undo also refuses.
        assert!(!cmd.undo(&mut sheet));
    }
}
