//! Error types for table construction and evaluation.
//!
//! Construction errors are raised once, when a table is built from caller
//! data; evaluation errors are raised per query and leave the table untouched.

use core::fmt;

use num_traits::{Float, NumCast};
use thiserror::Error;

/// Which axis of a table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// The abscissa of a 1D table, or the column axis of a 2D table
    X,
    /// The row axis of a 2D table
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("x"),
            AxisKind::Y => f.write_str("y"),
        }
    }
}

/// Detail of an inconsistent input shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// An axis has fewer than the two points needed to span an interval.
    #[error("{axis} axis has {got} points, need at least 2")]
    TooFewPoints {
        /// Offending axis
        axis: AxisKind,
        /// Number of points provided
        got: usize,
    },

    /// Axis and value sequences of a 1D table differ in length.
    #[error("axis has {axis_len} points but {values_len} values were given")]
    LengthMismatch { axis_len: usize, values_len: usize },

    /// Number of grid rows differs from the length of the y axis.
    #[error("grid has {rows} rows, expected {expected} to match the y axis")]
    RowCount { rows: usize, expected: usize },

    /// A grid row differs in length from the x axis.
    #[error("grid row {row} has {got} columns, expected {expected} to match the x axis")]
    RowLength {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// A flat row-major grid does not hold exactly one value per grid point.
    #[error("flat grid has {got} values, expected {expected}")]
    FlatLength { got: usize, expected: usize },
}

/// Errors raised while building a table.
///
/// A table is either fully built or not built at all; no partially
/// validated table is ever returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Input lengths are inconsistent with each other or too short.
    #[error("invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),

    /// An axis is not strictly ascending (ties and inversions alike).
    #[error("{axis} axis is not strictly ascending at index {index}")]
    UnsortedAxis {
        /// Offending axis
        axis: AxisKind,
        /// Index of the first coordinate that is not greater than its predecessor
        index: usize,
    },
}

/// Errors raised while evaluating a table.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvaluationError {
    /// The query lies outside the covered range of a table built
    /// with extrapolation disabled.
    #[error("extrapolation disallowed: {axis} = {loc} is outside [{min}, {max}]")]
    ExtrapolationDisallowed {
        /// Axis on which the query fell outside
        axis: AxisKind,
        /// The query coordinate
        loc: f64,
        /// First coordinate of the axis
        min: f64,
        /// Last coordinate of the axis
        max: f64,
    },

    /// Batch inputs and output storage differ in length.
    #[error("length mismatch: {inputs} query points for {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
}

impl EvaluationError {
    pub(crate) fn outside<T: Float>(axis: AxisKind, loc: T, min: T, max: T) -> Self {
        let wide = |v: T| <f64 as NumCast>::from(v).unwrap_or(f64::NAN);
        EvaluationError::ExtrapolationDisallowed {
            axis,
            loc: wide(loc),
            min: wide(min),
            max: wide(max),
        }
    }
}
