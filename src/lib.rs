//! gridsheet - the logical core of an interactive datasheet
//!
//! The geometric and stateful model behind a grid/spreadsheet widget:
//! - Directional cell ranges: containment, intersection, set-difference
//!   decomposition, drag-extend (`range`, `region`)
//! - Multi-range selection with the interactive selecting gesture
//!   (`selection`)
//! - Undoable command execution against the grid (`commands`)
//! - Conditional formatting evaluated per cell on demand (`conditional`)
//!
//! Rendering, event transport and clipboard interop are deliberately
//! not here; UI glue drives this core through the `Grid` contract and
//! the operations above, one call at a time on a single thread.
//!
//! # Example
//!
//! ```
//! use gridsheet::{ClearCellsCommand, CommandManager, Range, Sheet};
//!
//! let mut sheet = Sheet::new(4, 4);
//! assert!(sheet.try_set_cell_value(0, 0, "hello"));
//!
//! let mut manager = CommandManager::new(sheet);
//! manager.execute_command(Box::new(ClearCellsCommand::single(Range::single(0, 0))));
//! assert!(manager.sheet().cell_value(0, 0).is_empty());
//!
//! manager.undo();
//! assert_eq!(manager.sheet().cell_value(0, 0).as_text(), Some("hello"));
//! ```

pub mod commands;
pub mod conditional;
pub mod error;
pub mod range;
pub mod region;
pub mod selection;
pub mod sheet;
pub mod types;

pub use commands::{ClearCellsCommand, Command, CommandManager, SetCellValueCommand};
pub use conditional::{ConditionalFormat, ConditionalFormatManager, FormatProducer};
pub use error::{GridError, Result};
pub use range::{Range, RangeIter};
pub use region::{ColumnRange, GridRegion, RowRange};
pub use selection::{Selection, SelectionMode};
pub use sheet::{Grid, Sheet};
pub use types::{Cell, CellPosition, CellValue, Format};
