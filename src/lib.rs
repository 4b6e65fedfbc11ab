//! Table-lookup interpolation/extrapolation over strictly ascending axes,
//! no-std compatible (with `alloc`).
//!
//! Two sibling methods are provided:
//!
//! | Table                | Storage   | Construction | Interp. / Extrap. Cost          |
//! |----------------------|-----------|--------------|---------------------------------|
//! | [`LinearTable`]      | O(N)      | O(N)         | log2(N)                         |
//! | [`BilinearTable`]    | O(M*N)    | O(M*N)       | log2(M) + log2(N)               |
//!
//! Tables copy their inputs, validate them once, and are immutable afterwards,
//! so a table can be shared between threads and evaluated concurrently
//! without synchronization.
//!
//! Each table is built either extrapolating, where queries outside the axes
//! extend the edge segment or cell linearly, or not, where such queries are
//! rejected with [`EvaluationError::ExtrapolationDisallowed`]. Queries exactly
//! on the first or last coordinate of an axis are always inside.
//!
//! # Example: Linear
//! ```rust
//! use interptab::LinearTable;
//!
//! let x = [1.0_f64, 2.0, 3.4, 5.8, 6.0, 8.0];
//! let v = [2.0_f64, 4.0, 5.8, 4.3, 4.0, 6.0];
//!
//! let table = LinearTable::new(&x, &v, true).unwrap();
//! assert!((table.evaluate(2.7).unwrap() - 4.9).abs() < 1e-12);
//! assert!((table.evaluate(10.0).unwrap() - 8.0).abs() < 1e-12);
//!
//! let bounded = LinearTable::new(&x, &v, false).unwrap();
//! assert!(bounded.evaluate(10.0).is_err());
//! ```
//!
//! # Example: Bilinear
//! ```rust
//! use interptab::BilinearTable;
//!
//! let x = [1.0_f64, 2.0, 3.0];
//! let y = [1.0_f64, 2.0, 3.0];
//! let z = vec![
//!     vec![1.0, 2.0, 3.0], // y = 1
//!     vec![2.0, 4.0, 6.0], // y = 2
//!     vec![3.0, 6.0, 9.0], // y = 3
//! ];
//!
//! let table = BilinearTable::new(&x, &y, &z, true).unwrap();
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! table.evaluate_into(&[1.5, 4.0], &[2.5, 4.0], &mut out).unwrap();
//! assert_eq!(out, [3.75, 16.0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod axis;
pub use axis::{bisect_left, Axis, Extrap};

pub mod error;
pub use error::{AxisKind, ConstructionError, EvaluationError, ShapeError};

pub mod linear;
pub use linear::LinearTable;

pub mod bilinear;
pub use bilinear::BilinearTable;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
