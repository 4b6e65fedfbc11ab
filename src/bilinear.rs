//! Bilinear interpolation/extrapolation on a rectilinear 2D grid.
//!
//! ```rust
//! use interptab::BilinearTable;
//!
//! // Define a grid
//! let x = [1.0_f64, 2.0, 3.0];
//! let y = [1.0_f64, 2.0, 3.0];
//!
//! // One row per y coordinate, one column per x coordinate: z = x * y
//! let z = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [3.0, 6.0, 9.0]];
//!
//! let table = BilinearTable::new(&x, &y, &z, true).unwrap();
//! assert_eq!(table.evaluate(2.0, 2.0).unwrap(), 4.0);
//! assert_eq!(table.evaluate(1.5, 2.5).unwrap(), 3.75);
//! // Extrapolated from the corner cell
//! assert_eq!(table.evaluate(0.0, 0.0).unwrap(), 0.0);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean

#[cfg(feature = "std")]
use alloc::vec::Vec;
use alloc::boxed::Box;

use num_traits::Float;
use tracing::debug;

use crate::axis::Axis;
use crate::error::{AxisKind, ConstructionError, EvaluationError, ShapeError};

/// A two-dimensional lookup table with bilinear interpolation inside each
/// grid cell and, optionally, extrapolation of the edge cells beyond the grid.
///
/// Values are stored flat in row-major order: row `j` holds the values at
/// `y_axis[j]`, and column `i` within it the value at `x_axis[i]`.
///
/// Operation Complexity
/// * O(M*N) construction and storage
/// * O(log2(M) + log2(N)) per evaluation, interpolating or extrapolating
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearTable<T> {
    x_axis: Axis<T>,
    y_axis: Axis<T>,
    /// Size M*N, `values[j * M + i]` is the value at `(x_axis[i], y_axis[j])`
    values: Box<[T]>,
    extrapolate: bool,
}

impl<T: Float> BilinearTable<T> {
    /// Build a table from two axes and a grid holding one row per `y_axis`
    /// coordinate, each with one value per `x_axis` coordinate.
    ///
    /// Rows may be anything that views as a slice, so `Vec<Vec<T>>`,
    /// `[[T; M]; N]` and `&[&[T]]` all work.
    ///
    /// # Errors
    /// * `InvalidShape` if either axis has fewer than 2 points
    /// * `InvalidShape` if the number of rows differs from `y_axis.len()`,
    ///   or any row length differs from `x_axis.len()`
    /// * `UnsortedAxis` if either axis is not strictly ascending
    pub fn new<R: AsRef<[T]>>(
        x_axis: &[T],
        y_axis: &[T],
        grid: &[R],
        extrapolate: bool,
    ) -> Result<Self, ConstructionError> {
        let table = Self::build(x_axis, y_axis, grid, extrapolate);
        Self::trace(&table);
        table
    }

    /// Build a table from two axes and a flat row-major grid of
    /// `x_axis.len() * y_axis.len()` values.
    ///
    /// # Errors
    /// * `InvalidShape` if either axis has fewer than 2 points, or
    ///   `values` does not hold exactly one value per grid point
    /// * `UnsortedAxis` if either axis is not strictly ascending
    pub fn from_flat(
        x_axis: &[T],
        y_axis: &[T],
        values: &[T],
        extrapolate: bool,
    ) -> Result<Self, ConstructionError> {
        let table = Self::build_flat(x_axis, y_axis, values, extrapolate);
        Self::trace(&table);
        table
    }

    fn trace(table: &Result<Self, ConstructionError>) {
        match table {
            Ok(t) => {
                let (rows, cols) = t.shape();
                debug!(rows, cols, extrapolate = t.extrapolate, "built bilinear table");
            }
            Err(e) => debug!(error = %e, "rejected bilinear table"),
        }
    }

    fn build<R: AsRef<[T]>>(
        x_axis: &[T],
        y_axis: &[T],
        grid: &[R],
        extrapolate: bool,
    ) -> Result<Self, ConstructionError> {
        check_points(x_axis, y_axis)?;

        if grid.len() != y_axis.len() {
            return Err(ShapeError::RowCount {
                rows: grid.len(),
                expected: y_axis.len(),
            }
            .into());
        }
        if let Some((row, r)) = grid
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != x_axis.len())
        {
            return Err(ShapeError::RowLength {
                row,
                got: r.as_ref().len(),
                expected: x_axis.len(),
            }
            .into());
        }

        let x_axis = Axis::new(x_axis, AxisKind::X)?;
        let y_axis = Axis::new(y_axis, AxisKind::Y)?;
        let values = grid
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();

        Ok(Self {
            x_axis,
            y_axis,
            values,
            extrapolate,
        })
    }

    fn build_flat(
        x_axis: &[T],
        y_axis: &[T],
        values: &[T],
        extrapolate: bool,
    ) -> Result<Self, ConstructionError> {
        check_points(x_axis, y_axis)?;

        let expected = x_axis.len() * y_axis.len();
        if values.len() != expected {
            return Err(ShapeError::FlatLength {
                got: values.len(),
                expected,
            }
            .into());
        }

        Ok(Self {
            x_axis: Axis::new(x_axis, AxisKind::X)?,
            y_axis: Axis::new(y_axis, AxisKind::Y)?,
            values: values.into(),
            extrapolate,
        })
    }

    /// Evaluate the table at `(x, y)`.
    ///
    /// Outside the grid, the nearest edge cell's bilinear surface is
    /// extended independently along each axis that is out of range.
    ///
    /// # Errors
    /// * `ExtrapolationDisallowed` if either coordinate is outside its axis
    ///   (or NaN) and the table was built without extrapolation; `x` is
    ///   checked first
    #[inline]
    pub fn evaluate(&self, x: T, y: T) -> Result<T, EvaluationError> {
        let i = self.x_axis.check(x, self.extrapolate)?;
        let j = self.y_axis.check(y, self.extrapolate)?;

        let (x1, x2) = self.x_axis.interval(i);
        let (y1, y2) = self.y_axis.interval(j);

        // Cell corners: z21 is one step along x from z11, z12 one step along y
        let m = self.x_axis.len();
        let lo = j * m + i;
        let hi = lo + m;
        let (z11, z21) = (self.values[lo], self.values[lo + 1]);
        let (z12, z22) = (self.values[hi], self.values[hi + 1]);

        let num = z11 * (x2 - x) * (y2 - y)
            + z21 * (x - x1) * (y2 - y)
            + z12 * (x2 - x) * (y - y1)
            + z22 * (x - x1) * (y - y1);

        Ok(num / ((x2 - x1) * (y2 - y1)))
    }

    /// Evaluate the table at each of the paired points `(xs[k], ys[k])`,
    /// writing into `out`.
    ///
    /// Stops at the first point that fails; earlier entries of `out` are
    /// already written at that point.
    ///
    /// # Errors
    /// * `LengthMismatch` if `xs`, `ys` and `out` are not all the same length
    /// * `ExtrapolationDisallowed` as for [`evaluate`](Self::evaluate)
    pub fn evaluate_into(&self, xs: &[T], ys: &[T], out: &mut [T]) -> Result<(), EvaluationError> {
        if xs.len() != ys.len() {
            return Err(EvaluationError::LengthMismatch {
                inputs: xs.len(),
                outputs: ys.len(),
            });
        }
        if xs.len() != out.len() {
            return Err(EvaluationError::LengthMismatch {
                inputs: xs.len(),
                outputs: out.len(),
            });
        }

        for ((o, &x), &y) in out.iter_mut().zip(xs).zip(ys) {
            *o = self.evaluate(x, y)?;
        }

        Ok(())
    }

    /// Evaluate the table at each of the paired points `(xs[k], ys[k])`,
    /// allocating for the output values for convenience.
    ///
    /// # Errors
    /// * `LengthMismatch` if `xs` and `ys` differ in length
    /// * `ExtrapolationDisallowed` as for [`evaluate`](Self::evaluate)
    #[cfg(feature = "std")]
    pub fn evaluate_all(&self, xs: &[T], ys: &[T]) -> Result<Vec<T>, EvaluationError> {
        if xs.len() != ys.len() {
            return Err(EvaluationError::LengthMismatch {
                inputs: xs.len(),
                outputs: ys.len(),
            });
        }

        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| self.evaluate(x, y))
            .collect()
    }

    /// Whether `(x, y)` lies within the grid, edges included.
    #[inline]
    pub fn contains(&self, x: T, y: T) -> bool {
        let ((x0, x1), (y0, y1)) = self.domain();
        x >= x0 && x <= x1 && y >= y0 && y <= y1
    }

    /// First and last coordinates of the x and y axes.
    #[inline]
    pub fn domain(&self) -> ((T, T), (T, T)) {
        (
            (self.x_axis.first(), self.x_axis.last()),
            (self.y_axis.first(), self.y_axis.last()),
        )
    }

    #[inline]
    pub fn x_axis(&self) -> &[T] {
        self.x_axis.as_slice()
    }

    #[inline]
    pub fn y_axis(&self) -> &[T] {
        self.y_axis.as_slice()
    }

    /// All values, flat in row-major order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Values along row `j`, at `y_axis[j]`, or `None` past the last row.
    #[inline]
    pub fn row(&self, j: usize) -> Option<&[T]> {
        let m = self.x_axis.len();
        self.values.get(j.checked_mul(m)?..)?.get(..m)
    }

    /// Number of (rows, columns), i.e. (`y_axis.len()`, `x_axis.len()`).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.y_axis.len(), self.x_axis.len())
    }

    #[inline]
    pub fn extrapolates(&self) -> bool {
        self.extrapolate
    }
}

/// Both axes must span at least one interval before anything else is checked.
fn check_points<T>(x_axis: &[T], y_axis: &[T]) -> Result<(), ShapeError> {
    for (axis, coords) in [(AxisKind::X, x_axis), (AxisKind::Y, y_axis)] {
        if coords.len() < 2 {
            return Err(ShapeError::TooFewPoints {
                axis,
                got: coords.len(),
            });
        }
    }
    Ok(())
}
