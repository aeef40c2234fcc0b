//! Recoverable drawing failures.
//!
//! A `DrawError` never aborts a run: the generator logs it, keeps whatever
//! was painted so far and still writes the icon.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A shape whose far corner lies before its near corner.
    #[error("invalid geometry: ({x0}, {y0}) -> ({x1}, {y1})")]
    InvalidGeometry { x0: i64, y0: i64, x1: i64, y1: i64 },

    /// The canvas has no pixels to paint.
    #[error("canvas is empty")]
    EmptyCanvas,
}
