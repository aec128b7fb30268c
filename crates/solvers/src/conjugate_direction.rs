//! Conjugate-direction minimization.
//!
//! # Algorithms
//!
//! - [`quadratic`] — exact solver for `f(x) = ½xᵀQx + bᵀx` with a symmetric
//!   positive-definite `Q`; finishes in at most `N` updates up to rounding
//! - [`nonlinear`] — the same idea for a general smooth objective, choosing
//!   each step with an inner line search and restarting from the antigradient
//!   whenever the conjugation coefficient would turn negative
//!
//! # Observer Events
//!
//! Both solvers report the starting point as iteration 0 and every updated
//! point afterwards. An observer error aborts the run and is returned as
//! [`Error::Observer`](crate::Error::Observer).

mod config;

pub mod nonlinear;
pub mod quadratic;


pub use config::{NonlinearConfig, QuadraticConfig};
