//! Root-finding solvers for discounted cash-flow equations.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//! - [`find_sign_change`]: Grid scan that produces a bracket for [`BrentSolver`]
//!
//! ## Configuration
//!
//! Both solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use viability_core::math::solvers::{
//!     find_sign_change, linear_grid, BrentSolver, SolverConfig,
//! };
//!
//! // -1000 now, +600 in each of the next two years
//! let npv = |r: f64| -1000.0 + 600.0 / (1.0 + r) + 600.0 / (1.0 + r).powi(2);
//!
//! let grid = linear_grid(-0.9, 1.0, 20);
//! let (lo, hi) = find_sign_change(npv, &grid).unwrap();
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//! let irr = solver.find_root(npv, lo, hi).unwrap();
//! assert!((irr - 0.1307).abs() < 1e-4);
//! ```

mod bracket;
mod brent;
mod config;
mod newton_raphson;

pub use bracket::{find_sign_change, linear_grid};
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
