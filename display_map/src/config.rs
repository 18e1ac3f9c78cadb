//! Wrapping configuration.
//!
//! Deserializes from the `[wrap]` table of a config file:
//!
//! ```toml
//! [wrap]
//! mode = "fixed_column"
//! column = 80
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;

/// How model lines are split into view lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Every model line is exactly one view line.
    #[default]
    None,
    /// Lines wrap once they exceed [`WrapConfig::column`] characters.
    FixedColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapConfig {
    pub mode: WrapMode,

    /// Column budget per view line. Ignored when `mode` is [`WrapMode::None`].
    #[serde(default = "default_wrap_column")]
    pub column: u32,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            mode: WrapMode::default(),
            column: default_wrap_column(),
        }
    }
}

fn default_wrap_column() -> u32 {
    80
}

impl WrapConfig {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn fixed_column(column: u32) -> Self {
        Self {
            mode: WrapMode::FixedColumn,
            column,
        }
    }

    /// Reject configurations that cannot produce a layout.
    pub fn validate(&self) -> Result<()> {
        if self.mode == WrapMode::FixedColumn && self.column == 0 {
            return Err(Error::InvalidWrapColumn {
                column: self.column,
            });
        }
        Ok(())
    }

    /// Column budget actually applied, `None` when lines never wrap.
    pub(crate) fn budget(&self) -> Option<u32> {
        match self.mode {
            WrapMode::None => None,
            WrapMode::FixedColumn => Some(self.column),
        }
    }
}
