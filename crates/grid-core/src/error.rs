// File: crates/grid-core/src/error.rs
// Summary: Configuration error taxonomy raised while building a grid figure.

use thiserror::Error;

/// Which axis (or page dimension) a configuration problem refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Every way the supplied parameters can fail to describe a valid figure.
///
/// All of these except `ShapeMismatch` are caller mistakes detected before any
/// panel is created. `ShapeMismatch` means a canvas or caller handed over a grid
/// that does not match the scales.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("grid needs at least one row and one column (got {nrows}x{ncols})")]
    EmptyGrid { nrows: usize, ncols: usize },

    #[error("no {axis} scales supplied")]
    EmptyScales { axis: Axis },

    #[error("scale '{label}' needs at least 2 ticks, got {count}")]
    TooFewTicks { label: String, count: usize },

    #[error("scale '{label}' has a non-finite tick at position {index}")]
    NonFiniteTick { label: String, index: usize },

    #[error("scale '{label}' ticks are not strictly monotonic at position {index}")]
    NonMonotonicTicks { label: String, index: usize },

    #[error("invalid {name}: {value}")]
    InvalidLength { name: &'static str, value: f64 },

    #[error("{axis} layout does not fit: margins and gaps need {required} mm but only {available} mm available")]
    DoesNotFit { axis: Axis, available: f64, required: f64 },

    #[error("{given} column titles supplied for {ncols} columns")]
    TooManyTitles { given: usize, ncols: usize },

    #[error("panel grid is {got:?} (rows, cols) but the scales describe {expected:?}")]
    ShapeMismatch { expected: (usize, usize), got: (usize, usize) },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
