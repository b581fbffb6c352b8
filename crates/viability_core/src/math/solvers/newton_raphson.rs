//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)`. Converges quadratically near a
/// simple root but may wander off when started far from it, so callers that
/// need a guaranteed answer pair it with [`BrentSolver`](super::BrentSolver).
///
/// # Example
///
/// ```
/// use viability_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Find a root of `f` using explicit derivative `f_prime`, starting at `x0`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - `|f(x)| < tolerance` or the last step was below tolerance
    /// * `Err(SolverError::DerivativeNearZero)` - flat spot reached
    /// * `Err(SolverError::NumericalInstability)` - iterate became non-finite
    /// * `Err(SolverError::MaxIterationsExceeded)` - no convergence
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let tol = self.config.tolerance;
        let epsilon = T::from(1e-30).unwrap_or_else(T::min_positive_value);
        let mut x = x0;

        for _ in 0..self.config.max_iterations {
            let fx = f(x);
            if !fx.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "function value is not finite".to_string(),
                ));
            }
            if fx.abs() < tol {
                return Ok(x);
            }

            let dfx = f_prime(x);
            if dfx.abs() < epsilon || !dfx.is_finite() {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            let step = fx / dfx;
            let next = x - step;
            if !next.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            if step.abs() <= tol * T::one().max(next.abs()) {
                return Ok(next);
            }
            x = next;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
