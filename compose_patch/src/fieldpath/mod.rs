//! Field-path access to hierarchical documents.
//!
//! Patches address values with strings such as `spec.parameters.size`,
//! `spec.ports[0]` or `metadata.annotations[example.org/owner]`. The engine
//! only relies on the [`FieldPathAccess`] capability; the implementation for
//! [`serde_json::Value`] is provided so documents can be patched directly.
//!
//! Path grammar:
//! - segments are separated by `.`;
//! - `[N]` selects element `N` of a list;
//! - `[key]` selects a field whose name contains dots or brackets.

mod error;
mod paved;
mod segments;

pub use error::FieldPathError;
pub use paved::MAX_LIST_PADDING;
pub use segments::{Segment, parse};

use serde_json::Value;

/// Read and write values at field paths.
pub trait FieldPathAccess {
    /// Returns a copy of the value stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldPathError::NotFound`] when nothing is stored at `path`,
    /// and [`FieldPathError::InvalidPath`] when `path` cannot be parsed.
    fn get_value(&self, path: &str) -> Result<Value, FieldPathError>;

    /// Stores `value` at `path`, creating intermediate containers as needed.
    ///
    /// # Errors
    ///
    /// Returns [`FieldPathError::InvalidPath`] when `path` cannot be parsed or
    /// indexes too far past the end of a list, and
    /// [`FieldPathError::TypeMismatch`] when an existing value along the path
    /// has the wrong shape.
    fn set_value(&mut self, path: &str, value: Value) -> Result<(), FieldPathError>;
}
