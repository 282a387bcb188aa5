//! Tests for the command manager's linear undo/redo discipline.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use gridsheet::{
        CellValue, ClearCellsCommand, CommandManager, Grid, Range, SetCellValueCommand, Sheet,
    };

    /// A 3x3 sheet with every cell holding its row-major index.
    fn numbered_sheet() -> Sheet {
        let mut sheet = Sheet::new(3, 3);
        for r in 0..3 {
            for c in 0..3 {
                assert!(sheet.try_set_cell_value(r, c, r * 3 + c));
            }
        }
        sheet
    }

    /// Cell-for-cell snapshot via the serde model.
    fn snapshot(sheet: &Sheet) -> serde_json::Value {
        serde_json::to_value(sheet).unwrap()
    }

    #[test]
    fn test_n_undos_restore_pre_execution_state() {
        let mut manager = CommandManager::new(numbered_sheet());
        let before = snapshot(manager.sheet());

        assert!(manager.execute_command(Box::new(SetCellValueCommand::from_input(0, 0, "x"))));
        assert!(manager
            .execute_command(Box::new(ClearCellsCommand::single(Range::new(1, 2, 0, 2)))));
        assert!(manager.execute_command(Box::new(SetCellValueCommand::new(
            2,
            2,
            CellValue::Bool(true)
        ))));
        let after = snapshot(manager.sheet());
        assert_ne!(before, after);

        assert!(manager.undo());
        assert!(manager.undo());
        assert!(manager.undo());
        assert!(!manager.undo());
        assert_eq!(snapshot(manager.sheet()), before);

        // Redo walks back to the post-execution state.
        assert!(manager.redo());
        assert!(manager.redo());
        assert!(manager.redo());
        assert!(!manager.redo());
        assert_eq!(snapshot(manager.sheet()), after);
    }

    #[test]
    fn test_new_command_invalidates_redo_branch() {
        let mut manager = CommandManager::new(numbered_sheet());

        assert!(manager.execute_command(Box::new(SetCellValueCommand::from_input(0, 0, "a"))));
        assert!(manager.undo());
        assert!(manager.can_redo());

        assert!(manager.execute_command(Box::new(SetCellValueCommand::from_input(0, 1, "b"))));
        assert!(!manager.can_redo());
        assert!(!manager.redo());
    }

    #[test]
    fn test_refused_command_leaves_history_unchanged() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set_read_only(0, 0, true).unwrap();
        let mut manager = CommandManager::new(sheet);

        assert!(!manager.execute_command(Box::new(SetCellValueCommand::from_input(0, 0, "x"))));
        assert!(!manager.can_undo());
    }

    #[test]
    fn test_set_sheet_clears_both_stacks() {
        let mut manager = CommandManager::new(numbered_sheet());
        assert!(manager.execute_command(Box::new(SetCellValueCommand::from_input(0, 0, "x"))));
        assert!(manager.undo());
        assert!(manager.can_redo());

        manager.set_sheet(Sheet::new(5, 5));
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
        assert!(!manager.undo());
        assert!(!manager.redo());
        assert_eq!(manager.sheet().num_rows(), 5);
    }

    #[test]
    fn test_clear_history_keeps_sheet_state() {
        let mut manager = CommandManager::new(numbered_sheet());
        assert!(manager.execute_command(Box::new(SetCellValueCommand::from_input(0, 0, "x"))));
        manager.clear_history();
        assert!(!manager.undo());
        assert_eq!(manager.sheet().cell_value(0, 0).as_text(), Some("x"));
    }

    #[test]
    fn test_history_limit_evicts_oldest() {
        let mut manager = CommandManager::new(numbered_sheet());
        manager.set_history_limit(Some(2));

        for input in ["a", "b", "c"] {
            assert!(manager
                .execute_command(Box::new(SetCellValueCommand::from_input(0, 0, input))));
        }

        // Only the two most recent commands are undoable.
        assert!(manager.undo());
        assert!(manager.undo());
        assert!(!manager.undo());
        assert_eq!(manager.sheet().cell_value(0, 0).as_text(), Some("a"));
    }

    #[test]
    fn test_repeated_undo_redo_is_lossless() {
        let mut manager = CommandManager::new(numbered_sheet());
        let before = snapshot(manager.sheet());

        assert!(manager
            .execute_command(Box::new(ClearCellsCommand::single(Range::new(0, 2, 0, 2)))));
        let after = snapshot(manager.sheet());

        for _ in 0..3 {
            assert!(manager.undo());
            assert_eq!(snapshot(manager.sheet()), before);
            assert!(manager.redo());
            assert_eq!(snapshot(manager.sheet()), after);
        }
    }

    #[test]
    fn test_clear_preserves_read_only_cells_across_undo() {
        let mut sheet = numbered_sheet();
        sheet.set_read_only(1, 1, true).unwrap();
        let mut manager = CommandManager::new(sheet);

        assert!(manager
            .execute_command(Box::new(ClearCellsCommand::single(Range::new(0, 2, 0, 2)))));
        assert_eq!(manager.sheet().cell_value(1, 1).as_number(), Some(4.0));
        assert!(manager.sheet().cell_value(0, 0).is_empty());

        assert!(manager.undo());
        assert_eq!(manager.sheet().cell_value(0, 0).as_number(), Some(0.0));
        assert_eq!(manager.sheet().cell_value(1, 1).as_number(), Some(4.0));
    }
}
