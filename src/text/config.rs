//! Configuration for rendering validation reports.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When to emit ANSI color in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChoice {
    /// Color when the output stream is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Resolve against whether the target stream is a terminal.
    pub fn use_color(self, is_tty: bool) -> bool {
        match self {
            Self::Auto => is_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Configuration for validation reports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    /// Widest snippet line shown before truncating with `...` (default: 80)
    pub snippet_width: usize,
    /// Columns a tab expands to in snippets (default: 4)
    pub tab_width: usize,
    /// Color mode (default: auto)
    pub color: ColorChoice,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            snippet_width: 80,
            tab_width: 4,
            color: ColorChoice::Auto,
        }
    }
}

impl ReportConfig {
    /// Configuration for plain, uncolored output.
    pub fn plain() -> Self {
        Self {
            color: ColorChoice::Never,
            ..Self::default()
        }
    }

    /// Set the snippet width. Values below 8 are raised to 8.
    pub fn with_snippet_width(mut self, width: usize) -> Self {
        self.snippet_width = width.max(8);
        self
    }

    /// Set the tab width.
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    /// Set the color mode.
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}
