//! Simulation errors.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: u64 },

    #[error("coordinate ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Pop on an empty frontier index.
    #[error("frontier index is empty")]
    FrontierEmpty,

    /// The frontier drained while the fill was still running. Always a bug
    /// in neighbor propagation, never a recoverable condition.
    #[error("frontier exhausted after filling {filled} cells")]
    FrontierExhausted { filled: usize },

    /// Two engine variants disagreed on identically-seeded output.
    #[error("grid variants disagree: {0:?}")]
    InconsistentGrids(Vec<String>),
}
