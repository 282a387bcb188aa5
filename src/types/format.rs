//! Presentation attributes produced by conditional formatting.

use serde::{Deserialize, Serialize};

/// A set of presentation attributes for one cell.
///
/// Every attribute is optional; merging formats overwrites only the
/// attributes the later format actually sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub background_color: Option<String>,
    pub foreground_color: Option<String>,
    pub font_weight: Option<String>,
}

impl Format {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn with_foreground(color: impl Into<String>) -> Self {
        Self {
            foreground_color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Overlay `other` onto this format: attributes set in `other`
    /// replace ours, unset attributes leave ours untouched.
    pub fn merge_from(&mut self, other: &Format) {
        if other.background_color.is_some() {
            self.background_color.clone_from(&other.background_color);
        }
        if other.foreground_color.is_some() {
            self.foreground_color.clone_from(&other.foreground_color);
        }
        if other.font_weight.is_some() {
            self.font_weight.clone_from(&other.font_weight);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overwrites_only_set_attributes() {
        let mut base = Format {
            background_color: Some("#ff0000".to_string()),
            foreground_color: Some("#000000".to_string()),
            font_weight: None,
        };
        let over = Format {
            background_color: Some("#00ff00".to_string()),
            foreground_color: None,
            font_weight: Some("bold".to_string()),
        };
        base.merge_from(&over);

        assert_eq!(base.background_color.as_deref(), Some("#00ff00"));
        assert_eq!(base.foreground_color.as_deref(), Some("#000000"));
        assert_eq!(base.font_weight.as_deref(), Some("bold"));
    }
}
