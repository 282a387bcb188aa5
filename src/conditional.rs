//! Conditional formatting: named rules evaluated per cell on demand.
//!
//! A rule is a predicate over a single cell plus a format producer.
//! Rules are applied to regions (explicit ranges or the whole sheet)
//! and the merged format for any cell is computed on request, so the
//! result always reflects current cell values; nothing is cached.

use crate::range::Range;
use crate::sheet::Grid;
use crate::types::{Cell, Format};

/// Predicate deciding whether a rule applies to a cell.
pub type Predicate = Box<dyn Fn(&Cell) -> bool>;

/// How a rule produces its format once the predicate accepts.
pub enum FormatProducer {
    /// Looks only at the cell itself.
    PerCell(Box<dyn Fn(&Cell) -> Format>),
    /// Also receives every cell currently matching the rule across its
    /// applied regions, freshly recomputed per call.
    WithMatches(Box<dyn Fn(&Cell, &[&Cell]) -> Format>),
}

/// A named conditional-format rule: predicate + format producer.
pub struct ConditionalFormat {
    predicate: Predicate,
    producer: FormatProducer,
}

impl ConditionalFormat {
    /// Rule whose format depends only on the cell itself.
    pub fn new<P, F>(predicate: P, producer: F) -> Self
    where
        P: Fn(&Cell) -> bool + 'static,
        F: Fn(&Cell) -> Format + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            producer: FormatProducer::PerCell(Box::new(producer)),
        }
    }

    /// Rule whose format also depends on the full set of matching
    /// cells (e.g. scales computed over the applied regions).
    pub fn with_matches<P, F>(predicate: P, producer: F) -> Self
    where
        P: Fn(&Cell) -> bool + 'static,
        F: Fn(&Cell, &[&Cell]) -> Format + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            producer: FormatProducer::WithMatches(Box::new(producer)),
        }
    }
}

/// Where an applied rule is in force.
#[derive(Debug, Clone)]
enum AppliedRegion {
    WholeSheet,
    Cells(Range),
}

impl AppliedRegion {
    fn contains(&self, grid: &dyn Grid, row: i32, col: i32) -> bool {
        match self {
            Self::WholeSheet => grid.region().contains(row, col),
            Self::Cells(range) => range.contains(row, col),
        }
    }

    fn clipped(&self, grid: &dyn Grid) -> Option<Range> {
        match self {
            Self::WholeSheet => Some(grid.region()),
            Self::Cells(range) => range.get_intersection(&grid.region()),
        }
    }
}

struct RuleEntry {
    name: String,
    rule: ConditionalFormat,
    applied: Vec<AppliedRegion>,
}

/// Registers named rules, records which regions they cover, and
/// computes the merged presentation format for any cell on demand.
#[derive(Default)]
pub struct ConditionalFormatManager {
    // Registration order is the merge order: later rules override
    // earlier ones per attribute.
    rules: Vec<RuleEntry>,
}

impl ConditionalFormatManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `rule` under `name`. Re-registering an existing name
    /// replaces the rule in place, keeping its registration position
    /// and its applied regions.
    pub fn register(&mut self, name: &str, rule: ConditionalFormat) {
        if let Some(entry) = self.rules.iter_mut().find(|e| e.name == name) {
            entry.rule = rule;
        } else {
            self.rules.push(RuleEntry {
                name: name.to_string(),
                rule,
                applied: Vec::new(),
            });
        }
    }

    /// Put the named rule in force over the whole sheet. Returns false
    /// for an unknown name.
    pub fn apply(&mut self, name: &str) -> bool {
        self.push_region(name, AppliedRegion::WholeSheet)
    }

    /// Put the named rule in force over the given ranges, in addition
    /// to any regions it already covers.
    pub fn apply_to(&mut self, name: &str, ranges: &[Range]) -> bool {
        let Some(entry) = self.rules.iter_mut().find(|e| e.name == name) else {
            return false;
        };
        entry
            .applied
            .extend(ranges.iter().map(|r| AppliedRegion::Cells(*r)));
        true
    }

    fn push_region(&mut self, name: &str, region: AppliedRegion) -> bool {
        let Some(entry) = self.rules.iter_mut().find(|e| e.name == name) else {
            return false;
        };
        entry.applied.push(region);
        true
    }

    /// Compute the merged format for the cell, walking applied rules in
    /// registration order; later matches override earlier ones per
    /// attribute. `None` when no rule matches.
    pub fn calculate_format(&self, grid: &dyn Grid, row: i32, col: i32) -> Option<Format> {
        let cell = grid.cell(row, col)?;
        let mut merged: Option<Format> = None;

        for entry in &self.rules {
            if !entry.applied.iter().any(|a| a.contains(grid, row, col)) {
                continue;
            }
            if !(entry.rule.predicate)(cell) {
                continue;
            }

            let format = match &entry.rule.producer {
                FormatProducer::PerCell(produce) => produce(cell),
                FormatProducer::WithMatches(produce) => {
                    let matches = entry.matching_cells(grid);
                    produce(cell, &matches)
                }
            };

            match merged.as_mut() {
                Some(acc) => acc.merge_from(&format),
                None => merged = Some(format),
            }
        }

        merged
    }
}

impl RuleEntry {
    /// Every cell in the rule's applied regions whose value currently
    /// passes the predicate. Overlapping regions contribute each cell
    /// once.
    fn matching_cells<'g>(&self, grid: &'g dyn Grid) -> Vec<&'g Cell> {
        let mut seen = std::collections::HashSet::new();
        let mut matches = Vec::new();

        for region in &self.applied {
            let Some(clipped) = region.clipped(grid) else {
                continue;
            };
            for pos in &clipped.ordered() {
                if !seen.insert((pos.row, pos.col)) {
                    continue;
                }
                if let Some(cell) = grid.cell(pos.row, pos.col) {
                    if (self.rule.predicate)(cell) {
                        matches.push(cell);
                    }
                }
            }
        }

        matches
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::sheet::Sheet;

    fn non_negative_red() -> ConditionalFormat {
        ConditionalFormat::new(
            |cell| cell.value().as_number().is_some_and(|v| v >= 0.0),
            |_| Format::with_background("#ff0000"),
        )
    }

    #[test]
    fn test_whole_sheet_rule_tracks_cell_value() {
        let mut sheet = Sheet::new(2, 2);
        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply("g0"));

        assert!(sheet.try_set_cell_value(0, 0, -1));
        assert_eq!(cm.calculate_format(&sheet, 0, 0), None);

        assert!(sheet.try_set_cell_value(0, 0, 1));
        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(format.background_color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_with_matches_receives_all_matching_cells() {
        let sheet = Sheet::new(2, 2);
        let mut cm = ConditionalFormatManager::new();
        // Background becomes the count of cells subject to the rule.
        let cf = ConditionalFormat::with_matches(
            |_| true,
            |_, cells| Format::with_background(cells.len().to_string()),
        );
        cm.register("count", cf);
        assert!(cm.apply("count"));

        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(
            format.background_color.as_deref(),
            Some(sheet.region().area().to_string().as_str())
        );
    }

    #[test]
    fn test_apply_unknown_name_is_refused() {
        let mut cm = ConditionalFormatManager::new();
        assert!(!cm.apply("missing"));
        assert!(!cm.apply_to("missing", &[Range::single(0, 0)]));
    }

    #[test]
    fn test_rule_scoped_to_range() {
        let mut sheet = Sheet::new(3, 3);
        assert!(sheet.try_set_cell_value(0, 0, 1));
        assert!(sheet.try_set_cell_value(2, 2, 1));

        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply_to("g0", &[Range::new(0, 1, 0, 1)]));

        assert!(cm.calculate_format(&sheet, 0, 0).is_some());
        assert_eq!(cm.calculate_format(&sheet, 2, 2), None);
    }

    #[test]
    fn test_later_rule_wins_per_attribute() {
        let mut sheet = Sheet::new(1, 1);
        assert!(sheet.try_set_cell_value(0, 0, 1));

        let mut cm = ConditionalFormatManager::new();
        cm.register("red", non_negative_red());
        cm.register(
            "bold",
            ConditionalFormat::new(
                |_| true,
                |_| Format {
                    font_weight: Some("bold".to_string()),
                    ..Format::default()
                },
            ),
        );
        cm.register(
            "green",
            ConditionalFormat::new(|_| true, |_| Format::with_background("#00ff00")),
        );
        assert!(cm.apply("red"));
        assert!(cm.apply("bold"));
        assert!(cm.apply("green"));

        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        // Last-registered background wins; earlier font weight survives.
        assert_eq!(format.background_color.as_deref(), Some("#00ff00"));
        assert_eq!(format.font_weight.as_deref(), Some("bold"));
    }

    #[test]
    fn test_reregister_replaces_rule_keeps_regions() {
        let mut sheet = Sheet::new(1, 1);
        assert!(sheet.try_set_cell_value(0, 0, 1));

        let mut cm = ConditionalFormatManager::new();
        cm.register("g0", non_negative_red());
        assert!(cm.apply("g0"));
        cm.register(
            "g0",
            ConditionalFormat::new(|_| true, |_| Format::with_background("#0000ff")),
        );

        let format = cm.calculate_format(&sheet, 0, 0).unwrap();
        assert_eq!(format.background_color.as_deref(), Some("#0000ff"));
    }
}
