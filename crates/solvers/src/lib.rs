//! Unconstrained minimization solvers.
//!
//! Every solver takes the objective and its derivatives as capabilities from
//! [`methopt_core`], runs a synchronous iteration loop, and reports each
//! iterate to an [`Observer`].
//!
//! # Solvers
//!
//! - [`one_dimensional`] — dichotomy, golden section and Fibonacci search over
//!   a bracket of a unimodal scalar function
//! - [`step`] — step-size strategies used by gradient descent
//! - [`gradient_descent`] — steepest descent with a pluggable step strategy
//! - [`conjugate_direction`] — exact solver for quadratics and a nonlinear
//!   conjugate-direction method
//! - [`newton`] — damped Newton's method
//!
//! [`Observer`]: methopt_core::Observer

mod error;
mod observe;
mod solution;

pub mod conjugate_direction;
pub mod gradient_descent;
pub mod newton;
pub mod one_dimensional;
pub mod step;

pub use error::{ConfigError, Error};
pub use solution::{Solution, Status};
