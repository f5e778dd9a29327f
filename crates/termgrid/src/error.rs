//! Error type for table configuration.
//!
//! Rendering itself cannot fail. Errors only surface when a style, title mode
//! or alignment is selected by name, or when a configuration file is parsed.

/// Error returned when a table option cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The style name is not one of ascii, unicode, markdown or html.
    #[error("unknown table style '{0}' (expected ascii, unicode, markdown or html)")]
    UnknownStyle(String),

    /// The HTML title mode is not one of caption or th-span.
    #[error("unknown HTML title mode '{0}' (expected caption or th-span)")]
    UnknownTitleMode(String),

    /// The alignment is not one of left, right or center.
    #[error("unknown alignment '{0}' (expected left, right or center)")]
    UnknownAlign(String),

    /// A configuration document could not be parsed.
    #[error("invalid table configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}
