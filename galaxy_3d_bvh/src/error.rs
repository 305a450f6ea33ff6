//! Error types for the Galaxy3D BVH
//!
//! Geometry in this crate is validated once, when a bounding box is built.
//! Every other operation is total, so these errors only surface from the
//! `AABB` constructors.

use std::fmt;
use crate::log::LogSeverity;

/// Result type for Galaxy3D BVH operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D BVH errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A bounding box has `min > max` on at least one axis
    InvertedBounds(String),

    /// A bounding box has a NaN or infinite component
    NonFiniteBounds(String),

    /// A bounding box was requested from zero points
    EmptyPointSet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvertedBounds(msg) => write!(f, "Inverted bounds: {}", msg),
            Error::NonFiniteBounds(msg) => write!(f, "Non-finite bounds: {}", msg),
            Error::EmptyPointSet => write!(f, "Cannot build bounds from an empty point set"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error before handing it back to the caller.
///
/// All constructor failures go through here so a rejected box always leaves
/// an ERROR entry in the log. The entry carries the file:line of the call
/// site, not of this helper.
#[track_caller]
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    let location = std::panic::Location::caller();
    crate::log::log_detailed(
        LogSeverity::Error,
        source,
        error.to_string(),
        location.file(),
        location.line(),
    );
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
