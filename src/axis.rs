//! Strictly ascending coordinate axes and the interval search shared by
//! the linear and bilinear tables.

use alloc::boxed::Box;
use core::cmp::Ordering;

use num_traits::Float;

use crate::error::{AxisKind, ConstructionError, EvaluationError, ShapeError};

/// Extrapolation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Leftmost insertion point of `loc` in the ascending slice `coords`:
/// the smallest `j` such that `coords[j] >= loc`, or `coords.len()` if
/// every coordinate is below `loc`.
///
/// A NaN `loc` compares false against everything and lands at `0`.
#[inline]
pub fn bisect_left<T: Float>(coords: &[T], loc: T) -> usize {
    let (mut lo, mut hi) = (0, coords.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if coords[mid] < loc {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// A validated axis of at least two strictly ascending coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis<T> {
    coords: Box<[T]>,
    kind: AxisKind,
}

impl<T: Float> Axis<T> {
    /// Copy `coords` into a new axis.
    ///
    /// # Errors
    /// * `InvalidShape` if there are fewer than 2 coordinates
    /// * `UnsortedAxis` if any coordinate is not strictly greater than the
    ///   one before it; NaN coordinates are never ordered and fail here too
    pub fn new(coords: &[T], kind: AxisKind) -> Result<Self, ConstructionError> {
        if coords.len() < 2 {
            return Err(ShapeError::TooFewPoints {
                axis: kind,
                got: coords.len(),
            }
            .into());
        }

        let unsorted = coords
            .windows(2)
            .position(|w| (w[1] - w[0]).partial_cmp(&T::zero()) != Some(Ordering::Greater));
        if let Some(k) = unsorted {
            return Err(ConstructionError::UnsortedAxis {
                axis: kind,
                index: k + 1,
            });
        }

        Ok(Self {
            coords: coords.into(),
            kind,
        })
    }

    /// Get the index of the lower corner of the grid interval used for `loc`,
    /// along with whether `loc` lies outside the axis.
    ///
    /// The index is bisect-left minus one, clipped to `[0, len - 2]` so that
    /// `i + 1` is always a valid coordinate. Both end coordinates count as
    /// inside; NaN reports `OutsideLow`.
    #[inline]
    pub fn locate(&self, loc: T) -> (usize, Extrap) {
        let n = self.coords.len();
        let i = bisect_left(&self.coords, loc).saturating_sub(1).min(n - 2);

        let extrap = match loc {
            x if x > self.last() => Extrap::OutsideHigh,
            x if x >= self.first() => Extrap::Inside,
            _ => Extrap::OutsideLow,
        };

        (i, extrap)
    }

    /// Locate `loc`, rejecting points outside the axis unless `extrapolate` is set.
    #[inline]
    pub fn check(&self, loc: T, extrapolate: bool) -> Result<usize, EvaluationError> {
        match self.locate(loc) {
            (i, Extrap::Inside) => Ok(i),
            (i, _) if extrapolate => Ok(i),
            _ => Err(EvaluationError::outside(
                self.kind,
                loc,
                self.first(),
                self.last(),
            )),
        }
    }

    /// Coordinates bounding interval `i`.
    #[inline]
    pub fn interval(&self, i: usize) -> (T, T) {
        (self.coords[i], self.coords[i + 1])
    }

    #[inline]
    pub fn first(&self) -> T {
        self.coords[0]
    }

    #[inline]
    pub fn last(&self) -> T {
        self.coords[self.coords.len() - 1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    /// Number of coordinates; always at least 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false for a constructed axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::{bisect_left, Axis, Extrap};
    use crate::error::{AxisKind, ConstructionError, EvaluationError, ShapeError};
    use crate::testing::{ascending, rng_fixed_seed};

    #[test]
    fn test_bisect_left_boundaries() {
        let xs = [1.0_f64, 2.0, 3.4, 5.8, 6.0, 8.0];

        assert_eq!(bisect_left(&xs, 0.0), 0);
        assert_eq!(bisect_left(&xs, 1.0), 0); // ties go left
        assert_eq!(bisect_left(&xs, 1.5), 1);
        assert_eq!(bisect_left(&xs, 3.4), 2);
        assert_eq!(bisect_left(&xs, 7.9), 5);
        assert_eq!(bisect_left(&xs, 8.0), 5);
        assert_eq!(bisect_left(&xs, 8.1), 6);
        assert_eq!(bisect_left(&xs, f64::NAN), 0);
        assert_eq!(bisect_left::<f64>(&[], 1.0), 0);
    }

    /// Compare against the reference definition on random data
    #[test]
    fn test_bisect_left_matches_partition_point() {
        let mut rng = rng_fixed_seed();
        let xs = ascending(&mut rng, 97, -10.0, 10.0);
        let locs = ascending(&mut rng, 301, -12.0, 12.0);

        for &loc in locs.iter().chain(xs.iter()) {
            assert_eq!(bisect_left(&xs, loc), xs.partition_point(|&v| v < loc));
        }
    }

    #[test]
    fn test_too_few_points() {
        for coords in [&[][..], &[1.0][..]] {
            assert_eq!(
                Axis::new(coords, AxisKind::Y),
                Err(ConstructionError::InvalidShape(ShapeError::TooFewPoints {
                    axis: AxisKind::Y,
                    got: coords.len(),
                }))
            );
        }
    }

    #[test]
    fn test_unsorted() {
        for (coords, index) in [
            ([1.0, 2.0, 1.0], 2),
            ([2.0, 1.0, 2.0], 1),
            ([1.0, 2.0, 2.0], 2),
            ([1.0, 1.0, 2.0], 1),
            ([1.0, f64::NAN, 2.0], 1),
        ] {
            assert_eq!(
                Axis::new(&coords, AxisKind::X),
                Err(ConstructionError::UnsortedAxis {
                    axis: AxisKind::X,
                    index,
                })
            );
        }
    }

    /// Every branch of the lower-corner selection: below, at the first point,
    /// interior, at an interior point, at the last point, above, and NaN
    #[test]
    fn test_locate() {
        let axis = Axis::new(&[0.0, 1.0, 2.0, 3.0], AxisKind::X).unwrap();

        assert_eq!(axis.locate(-5.0), (0, Extrap::OutsideLow));
        assert_eq!(axis.locate(0.0), (0, Extrap::Inside));
        assert_eq!(axis.locate(0.5), (0, Extrap::Inside));
        assert_eq!(axis.locate(1.0), (0, Extrap::Inside));
        assert_eq!(axis.locate(1.5), (1, Extrap::Inside));
        assert_eq!(axis.locate(3.0), (2, Extrap::Inside));
        assert_eq!(axis.locate(9.0), (2, Extrap::OutsideHigh));
        assert_eq!(axis.locate(f64::NAN), (0, Extrap::OutsideLow));
    }

    #[test]
    fn test_check_policy() {
        let axis = Axis::new(&[1.0, 3.0], AxisKind::Y).unwrap();

        assert_eq!(axis.check(1.0, false), Ok(0));
        assert_eq!(axis.check(3.0, false), Ok(0));
        assert_eq!(axis.check(4.0, true), Ok(0));
        assert_eq!(
            axis.check(4.0, false),
            Err(EvaluationError::ExtrapolationDisallowed {
                axis: AxisKind::Y,
                loc: 4.0,
                min: 1.0,
                max: 3.0,
            })
        );
        assert!(axis.check(f64::NAN, false).is_err());
    }

    #[test]
    fn test_accessors() {
        let axis = Axis::new(&[1.0_f32, 2.0, 4.0], AxisKind::X).unwrap();

        assert_eq!(axis.first(), 1.0);
        assert_eq!(axis.last(), 4.0);
        assert_eq!(axis.interval(1), (2.0, 4.0));
        assert_eq!(axis.len(), 3);
        assert!(!axis.is_empty());
        assert_eq!(axis.kind(), AxisKind::X);
        assert_eq!(axis.as_slice(), &[1.0, 2.0, 4.0]);
    }
}
