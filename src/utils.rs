//! Convenience methods for building axes and grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint, which is reproduced exactly.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let cast = |k: usize| T::from(k).unwrap_or_else(T::nan);
            let dx = (stop - start) / cast(last);
            (0..n)
                .map(|i| if i == last { stop } else { start + cast(i) * dx })
                .collect()
        }
    }
}

/// Generates every `(x, y)` pair, x-major: (x0, y0), (x0, y1), ..., (x1, y0), ...
pub fn meshgrid<T>(x: &[T], y: &[T]) -> Vec<(T, T)>
where
    T: Float,
{
    x.iter()
        .copied()
        .cartesian_product(y.iter().copied())
        .collect()
}

/// Samples `f` on the grid spanned by two axes, one row per `y` coordinate,
/// in the layout expected by [`BilinearTable::new`](crate::BilinearTable::new).
pub fn tabulate<T, F>(x: &[T], y: &[T], f: F) -> Vec<Vec<T>>
where
    T: Float,
    F: Fn(T, T) -> T,
{
    y.iter()
        .map(|&yj| x.iter().map(|&xi| f(xi, yj)).collect())
        .collect()
}

#[cfg(test)]
mod test {
    use super::{linspace, meshgrid, tabulate};

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0_f64, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0_f64, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(-1.0_f64, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let x = linspace(-3.25_f64, 314.0, 77);
        assert_eq!(x.len(), 77);
        assert_eq!(x[76], 314.0);
        (0..76).for_each(|i| assert!(x[i + 1] > x[i]));
    }

    #[test]
    fn test_meshgrid_order() {
        let grid = meshgrid(&[1.0_f64, 2.0], &[10.0, 20.0, 30.0]);
        assert_eq!(
            grid,
            vec![
                (1.0, 10.0),
                (1.0, 20.0),
                (1.0, 30.0),
                (2.0, 10.0),
                (2.0, 20.0),
                (2.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_tabulate_rows_follow_y() {
        let z = tabulate(&[1.0_f64, 2.0, 3.0], &[10.0, 20.0], |x, y| x + y);
        assert_eq!(z, vec![vec![11.0, 12.0, 13.0], vec![21.0, 22.0, 23.0]]);
    }
}
