//! Sign-change search over a grid of candidate points.

use num_traits::Float;

/// Scan consecutive grid points for a sign change of `f`.
///
/// Returns the first adjacent pair `(x_i, x_{i+1})` where `f` changes sign
/// (or hits zero exactly at `x_{i+1}`). Non-finite evaluations break the
/// chain: a pair is only reported when both endpoints are finite.
///
/// # Arguments
///
/// * `f` - Function to scan
/// * `grid` - Candidate points, expected in increasing order
///
/// # Example
///
/// ```
/// use viability_core::math::solvers::find_sign_change;
///
/// let grid = [0.0, 0.5, 1.0, 1.5, 2.0];
/// let bracket = find_sign_change(|x: f64| x * x - 2.0, &grid);
/// assert_eq!(bracket, Some((1.0, 1.5)));
/// ```
pub fn find_sign_change<T, F>(f: F, grid: &[T]) -> Option<(T, T)>
where
    T: Float,
    F: Fn(T) -> T,
{
    let mut previous: Option<(T, T)> = None;

    for &x in grid {
        let fx = f(x);
        if !fx.is_finite() {
            previous = None;
            continue;
        }
        if let Some((px, pfx)) = previous {
            if pfx == T::zero() {
                return Some((px, px));
            }
            if fx == T::zero() || (pfx < T::zero()) != (fx < T::zero()) {
                return Some((px, x));
            }
        }
        previous = Some((x, fx));
    }

    match previous {
        Some((px, pfx)) if pfx == T::zero() => Some((px, px)),
        _ => None,
    }
}

/// Evenly spaced grid of `points` values from `start` to `end` inclusive.
///
/// Returns an empty vector when `points == 0` and `[start]` when `points == 1`.
pub fn linear_grid<T: Float>(start: T, end: T, points: usize) -> Vec<T> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let steps = T::from(n - 1).unwrap_or_else(T::one);
            let width = (end - start) / steps;
            (0..n)
                .map(|i| start + width * T::from(i).unwrap_or_else(T::zero))
                .collect()
        }
    }
}
