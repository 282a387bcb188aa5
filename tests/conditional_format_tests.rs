//! Scenario tests for conditional-format evaluation against a live
//! sheet, including interplay with undoable commands.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use gridsheet::{
        ClearCellsCommand, CommandManager, ConditionalFormat, ConditionalFormatManager, Format,
        Grid, Range, Sheet,
    };

    const RED: &str = "#ff0000";

    fn non_negative_red() -> ConditionalFormat {
        ConditionalFormat::new(
            |cell| cell.value().as_number().is_some_and(|v| v >= 0.0),
            |_| Format::with_background(RED),
        )
    }

    #[test]
    fn test_whole_sheet_rule_follows_value_changes() {
        let mut sheet = Sheet::new(2, 2);
        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply("g0"));

        assert!(sheet.try_set_cell_value(0, 0, -1));
        assert_eq!(cm.calculate_format(&sheet, 0, 0), None);

        assert!(sheet.try_set_cell_value(0, 0, 1));
        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(format.background_color.as_deref(), Some(RED));
    }

    #[test]
    fn test_matching_set_is_recomputed_per_call() {
        let mut sheet = Sheet::new(2, 2);
        // Background is the count of non-empty cells under the rule.
        let cf = ConditionalFormat::with_matches(
            |cell| !cell.value().is_empty(),
            |_, cells| Format::with_background(cells.len().to_string()),
        );
        let mut cm = ConditionalFormatManager::new();
        cm.register("count", cf);
        assert!(cm.apply("count"));

        assert!(sheet.try_set_cell_value(0, 0, 1));
        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(format.background_color.as_deref(), Some("1"));

        assert!(sheet.try_set_cell_value(1, 1, 2));
        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(format.background_color.as_deref(), Some("2"));
    }

    #[test]
    fn test_format_reflects_undo_of_clear() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.try_set_cell_value(0, 0, 1));
        let mut manager = CommandManager::new(sheet);

        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply("g0"));
        assert!(cm.calculate_format(manager.sheet(), 0, 0).is_some());

        // Clearing empties the cell, so the numeric predicate no longer
        // matches; undo brings the format back.
        assert!(manager
            .execute_command(Box::new(ClearCellsCommand::single(Range::single(0, 0)))));
        assert_eq!(cm.calculate_format(manager.sheet(), 0, 0), None);

        assert!(manager.undo());
        assert!(cm.calculate_format(manager.sheet(), 0, 0).is_some());
    }

    #[test]
    fn test_rule_applies_only_inside_its_ranges() {
        let mut sheet = Sheet::new(4, 4);
        for pos in &sheet.region() {
            assert!(sheet.try_set_cell_value(pos.row, pos.col, 1));
        }

        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply_to(
            "g0",
            &[Range::new(0, 1, 0, 1), Range::new(3, 3, 0, 3)]
        ));

        assert!(cm.calculate_format(&sheet, 0, 0).is_some());
        assert!(cm.calculate_format(&sheet, 3, 2).is_some());
        assert_eq!(cm.calculate_format(&sheet, 2, 2), None);
    }

    #[test]
    fn test_out_of_bounds_cell_has_no_format() {
        let sheet = Sheet::new(2, 2);
        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply("g0"));
        assert_eq!(cm.calculate_format(&sheet, 5, 5), None);
    }

    #[test]
    fn test_matching_set_spans_all_applied_ranges() {
        let mut sheet = Sheet::new(3, 3);
        assert!(sheet.try_set_cell_value(0, 0, 1));
        assert!(sheet.try_set_cell_value(2, 2, 1));

        let cf = ConditionalFormat::with_matches(
            |cell| !cell.value().is_empty(),
            |_, cells| Format::with_background(cells.len().to_string()),
        );
        let mut cm = ConditionalFormatManager::new();
        cm.register("count", cf);
        // Overlapping ranges must not double-count cells.
        assert!(cm.apply_to(
            "count",
            &[Range::new(0, 2, 0, 2), Range::new(0, 0, 0, 0)]
        ));

        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(format.background_color.as_deref(), Some("2"));
    }
}
