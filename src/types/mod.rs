//! Shared data-model types.

pub mod cell;
pub mod format;
pub mod position;

pub use cell::{Cell, CellValue};
pub use format::Format;
pub use position::CellPosition;
