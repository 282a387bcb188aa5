//! Reversible grid mutations and the undo/redo manager.
//!
//! A [`Command`] is a named unit of mutation with an inverse. The
//! [`CommandManager`] applies commands against the sheet it owns and
//! keeps the standard linear-undo discipline: an applied stack, a redo
//! stack, and any fresh action invalidating the redo branch.

pub mod clear_cells;
pub mod set_value;

pub use clear_cells::ClearCellsCommand;
pub use set_value::SetCellValueCommand;

use crate::sheet::{Grid, Sheet};

/// A reversible unit of grid mutation.
///
/// Both operations report refusal through their return value: `false`
/// means the grid was left untouched (e.g. every target cell was
/// read-only), and the manager keeps its history unchanged.
pub trait Command {
    fn name(&self) -> &str;

    fn execute(&mut self, grid: &mut dyn Grid) -> bool;

    fn undo(&mut self, grid: &mut dyn Grid) -> bool;
}

/// Executes, undoes and redoes commands against the sheet it owns.
pub struct CommandManager {
    sheet: Sheet,
    applied: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    history_limit: Option<usize>,
}

impl CommandManager {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            applied: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: None,
        }
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Direct mutable access to the sheet. Mutations made this way are
    /// not undoable; route through commands for anything user-facing.
    pub fn sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheet
    }

    /// Cap the applied history; pushing past the cap evicts the oldest
    /// entry. `None` (the default) keeps history unbounded.
    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history_limit = limit;
        self.trim_history();
    }

    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Execute a command. On success it joins the applied history and
    /// the redo branch is invalidated; on refusal history is unchanged.
    pub fn execute_command(&mut self, mut command: Box<dyn Command>) -> bool {
        if !command.execute(&mut self.sheet) {
            return false;
        }
        self.redo_stack.clear();
        self.applied.push(command);
        self.trim_history();
        true
    }

    /// Undo the most recent applied command. Returns false when the
    /// history is empty or the command refuses; a refusing command is
    /// dropped rather than re-pushed, so a corrupt entry cannot wedge
    /// the loop.
    pub fn undo(&mut self) -> bool {
        let Some(mut command) = self.applied.pop() else {
            return false;
        };
        if !command.undo(&mut self.sheet) {
            return false;
        }
        self.redo_stack.push(command);
        true
    }

    /// Re-execute the most recently undone command.
    pub fn redo(&mut self) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        if !command.execute(&mut self.sheet) {
            return false;
        }
        self.applied.push(command);
        true
    }

    /// Swap in a new target sheet. Prior commands' undo state referred
    /// to the old grid, so both stacks are emptied.
    pub fn set_sheet(&mut self, sheet: Sheet) {
        self.sheet = sheet;
        self.clear_history();
    }

    pub fn clear_history(&mut self) {
        self.applied.clear();
        self.redo_stack.clear();
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            while self.applied.len() > limit {
                self.applied.remove(0);
            }
        }
    }
}
