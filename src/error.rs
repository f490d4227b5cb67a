use thiserror::Error;

use crate::host::ElementId;

/// Rejected window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {option} axis specifier {value:?}: expected up to two of 'x' and 'y'")]
    InvalidAxes { option: &'static str, value: String },
    #[error("{option} must be positive when resizing is enabled (got {value})")]
    NonPositiveZoneSize { option: &'static str, value: i32 },
    #[error("resizing is enabled but no resize cursor class prefix was configured")]
    MissingCursorClass,
    #[error("{dimension}: minimum {min} exceeds maximum {max}")]
    InvertedBounds {
        dimension: &'static str,
        min: i32,
        max: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("window is missing its required {part} element (class {class:?})")]
    MissingElement { part: &'static str, class: String },
    #[error("element {0:?} is not part of the host tree")]
    UnknownElement(ElementId),
    #[error("window has been closed")]
    Closed,
}
