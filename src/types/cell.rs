//! Cell values and the cell capability surface.

use serde::{Deserialize, Serialize};

/// The value held by a single cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// No value (a cleared or never-written cell).
    #[default]
    Empty,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Detect the appropriate value for raw user input.
    ///
    /// - Empty (after trimming) → `Empty`
    /// - "true"/"false" (case-insensitive) → `Bool`
    /// - Parseable as f64 → `Number`
    /// - Otherwise → `Text`
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return Self::Number(n);
        }

        Self::Text(trimmed.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A single grid cell: a value plus the read-only flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    value: CellValue,
    read_only: bool,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            read_only: false,
        }
    }

    pub fn read_only(value: CellValue) -> Self {
        Self {
            value,
            read_only: true,
        }
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Set the cell's value, returning whether the cell accepted it.
    ///
    /// A read-only cell refuses every mutation.
    pub fn try_set_value(&mut self, value: CellValue) -> bool {
        if self.read_only {
            return false;
        }
        self.value = value;
        true
    }
}
