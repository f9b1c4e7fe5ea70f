//! Error handling for BoardKit
//!
//! Interactive operations (pan, zoom, resize) absorb their faults and never
//! surface an error to the caller. The only explicit fallible geometry
//! operation is matrix inversion. Configuration and view storage errors
//! live in `boardkit-settings`.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by affine operations that have no defined result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The matrix has a zero determinant and cannot be inverted
    #[error("Matrix is not invertible (determinant {determinant})")]
    SingularMatrix {
        /// The determinant that made inversion impossible.
        determinant: f64,
    },

    /// A coordinate or factor was NaN or infinite
    #[error("Non-finite value for {what}")]
    NonFinite {
        /// Name of the offending quantity.
        what: String,
    },
}
