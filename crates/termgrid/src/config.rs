//! Declarative table options.
//!
//! Style, HTML title mode and column alignments can be kept in a YAML or
//! JSON document and applied to any table:
//!
//! ```rust
//! use termgrid::{row, Align, Style, Table, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! style: unicode
//! align:
//!   1: right
//! "#).unwrap();
//! assert_eq!(config.style, Some(Style::Unicode));
//! assert_eq!(config.align.get(&1), Some(&Align::Right));
//!
//! let mut table = Table::new();
//! table.add_row(row!["ken", 1234]).apply_config(&config);
//! assert_eq!(table.style(), Style::Unicode);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::Align;
use crate::error::TableError;
use crate::style::{HtmlTitleMode, Style};

/// Options that can be applied to a [`Table`](crate::Table).
///
/// Missing fields leave the table's current setting alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub style: Option<Style>,
    pub html_title_mode: Option<HtmlTitleMode>,
    /// Column index (0-based) to alignment.
    pub align: BTreeMap<usize, Align>,
}

impl TableConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes this configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, TableError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a configuration from JSON. Column keys are strings
    /// (`{"align": {"1": "right"}}`).
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }
}
