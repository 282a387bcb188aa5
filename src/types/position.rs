//! Cell coordinates.

use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate pair.
///
/// Coordinates are signed: callers legitimately probe positions outside
/// the grid (e.g. containment checks at `(-1, 0)`), and ranges may be
/// built with out-of-grid bounds before being clipped.
///
/// The invalid sentinel (`CellPosition::invalid()`) represents "no
/// usable input target", e.g. when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: i32,
    pub col: i32,
}

impl CellPosition {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The sentinel position signalling "no input target".
    pub fn invalid() -> Self {
        Self {
            row: i32::MIN,
            col: i32::MIN,
        }
    }

    /// Whether this position is a usable coordinate (not the sentinel).
    pub fn is_valid(&self) -> bool {
        self.row != i32::MIN && self.col != i32::MIN
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel() {
        let pos = CellPosition::invalid();
        assert!(!pos.is_valid());
        assert!(CellPosition::new(0, 0).is_valid());
        assert!(CellPosition::new(-1, 5).is_valid());
    }
}
