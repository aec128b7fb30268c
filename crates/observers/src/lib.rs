//! Reusable observers for the methopt solvers.
//!
//! The solvers take any [`Observer`] by value, so the recorders here hand out
//! short-lived observer closures that borrow them mutably. The recorded data
//! stays with the caller once the run ends.
//!
//! - [`Trajectory`] — records every iterate together with its objective value
//! - [`IterationCounter`] — counts the iterations a run performed
//!
//! # Example
//!
//! ```rust
//! use methopt_observers::Trajectory;
//! use methopt_solvers::gradient_descent::{self, Config};
//!
//! let f = |x: &[f64; 1]| (x[0] - 3.0).powi(2) + 8.0;
//! let grad = |x: &[f64; 1]| [2.0 * (x[0] - 3.0)];
//!
//! let mut trajectory = Trajectory::new(&f);
//! gradient_descent::minimize_named(
//!     &f,
//!     &grad,
//!     [-6.0],
//!     "divide_step",
//!     &Config::default(),
//!     trajectory.recorder(),
//! )?;
//!
//! assert_eq!(trajectory.first(), Some(&([-6.0], 89.0)));
//! # Ok::<(), methopt_solvers::Error>(())
//! ```
//!
//! [`Observer`]: methopt_core::Observer

mod counter;
mod trajectory;

pub use counter::IterationCounter;
pub use trajectory::Trajectory;
