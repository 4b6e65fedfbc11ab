//! Piecewise-linear interpolation/extrapolation over a single axis.
//!
//! ```rust
//! use interptab::LinearTable;
//!
//! let table = LinearTable::new(&[1.0, 2.0, 4.0], &[10.0, 20.0, 0.0], true).unwrap();
//!
//! assert_eq!(table.evaluate(1.5).unwrap(), 15.0);
//! assert_eq!(table.evaluate(3.0).unwrap(), 10.0);
//! // Outside the axis, the edge segment is extended
//! assert_eq!(table.evaluate(0.0).unwrap(), 0.0);
//! ```

#[cfg(feature = "std")]
use alloc::vec::Vec;
use alloc::boxed::Box;

use num_traits::Float;
use tracing::debug;

use crate::axis::Axis;
use crate::error::{AxisKind, ConstructionError, EvaluationError, ShapeError};

/// A one-dimensional lookup table with linear interpolation between
/// points and, optionally, linear extrapolation beyond the end points.
///
/// Segment slopes are precomputed on construction, so each evaluation is
/// a bisection search plus one multiply-add.
///
/// Operation Complexity
/// * O(N) construction and storage
/// * O(log2(N)) per evaluation, interpolating or extrapolating
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTable<T> {
    axis: Axis<T>,
    values: Box<[T]>,
    /// `slopes[k]` is the slope of the segment from `axis[k]` to `axis[k + 1]`
    slopes: Box<[T]>,
    extrapolate: bool,
}

impl<T: Float> LinearTable<T> {
    /// Build a table from paired coordinates and values, copying both.
    ///
    /// With `extrapolate` unset, queries outside `[axis[0], axis[N - 1]]`
    /// are rejected instead of extending the edge segments.
    ///
    /// # Errors
    /// * `InvalidShape` if `axis` and `values` differ in length
    /// * `InvalidShape` if there are fewer than 2 points
    /// * `UnsortedAxis` if `axis` is not strictly ascending
    pub fn new(axis: &[T], values: &[T], extrapolate: bool) -> Result<Self, ConstructionError> {
        let table = Self::build(axis, values, extrapolate);
        match &table {
            Ok(t) => debug!(points = t.len(), extrapolate, "built linear table"),
            Err(e) => debug!(error = %e, "rejected linear table"),
        }
        table
    }

    fn build(axis: &[T], values: &[T], extrapolate: bool) -> Result<Self, ConstructionError> {
        if axis.len() != values.len() {
            return Err(ShapeError::LengthMismatch {
                axis_len: axis.len(),
                values_len: values.len(),
            }
            .into());
        }
        let axis = Axis::new(axis, AxisKind::X)?;

        let slopes = axis
            .as_slice()
            .windows(2)
            .zip(values.windows(2))
            .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
            .collect();

        Ok(Self {
            axis,
            values: values.into(),
            slopes,
            extrapolate,
        })
    }

    /// Evaluate the table at `x`.
    ///
    /// # Errors
    /// * `ExtrapolationDisallowed` if `x` is outside the axis (or NaN) and
    ///   the table was built without extrapolation
    #[inline]
    pub fn evaluate(&self, x: T) -> Result<T, EvaluationError> {
        let i = self.axis.check(x, self.extrapolate)?;
        let (x0, _) = self.axis.interval(i);
        Ok(self.values[i] + self.slopes[i] * (x - x0))
    }

    /// Evaluate the table at each of `xs`, writing into `out`.
    ///
    /// Stops at the first point that fails; earlier entries of `out` are
    /// already written at that point.
    ///
    /// # Errors
    /// * `LengthMismatch` if `xs` and `out` differ in length
    /// * `ExtrapolationDisallowed` as for [`evaluate`](Self::evaluate)
    pub fn evaluate_into(&self, xs: &[T], out: &mut [T]) -> Result<(), EvaluationError> {
        if xs.len() != out.len() {
            return Err(EvaluationError::LengthMismatch {
                inputs: xs.len(),
                outputs: out.len(),
            });
        }

        for (o, &x) in out.iter_mut().zip(xs) {
            *o = self.evaluate(x)?;
        }

        Ok(())
    }

    /// Evaluate the table at each of `xs`, allocating for the output values
    /// for convenience.
    #[cfg(feature = "std")]
    pub fn evaluate_all(&self, xs: &[T]) -> Result<Vec<T>, EvaluationError> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Whether `x` lies within the axis, end points included.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.axis.first() && x <= self.axis.last()
    }

    /// First and last axis coordinates.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.axis.first(), self.axis.last())
    }

    #[inline]
    pub fn axis(&self) -> &[T] {
        self.axis.as_slice()
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }

    #[inline]
    pub fn extrapolates(&self) -> bool {
        self.extrapolate
    }

    /// Number of points; always at least 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    /// Always false for a constructed table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }
}
