//! Step-size strategies for gradient descent.
//!
//! A [`StepStrategy`] picks the step for the update `x - step * ∇f(x)` from
//! the current point, the previous step and the iteration number. Strategies
//! capture the objective, its gradient and a tolerance at construction and
//! keep no state between calls, so one instance can serve many runs.
//!
//! # Strategies
//!
//! - [`DivideStep`] — halves the previous step until the objective decreases
//! - [`DichotomyStep`], [`GoldenSectionStep`], [`FibonacciStep`] — minimize
//!   the objective along the antigradient with a [one-dimensional search]
//!
//! [one-dimensional search]: crate::one_dimensional

mod bracketed;
mod divide_step;
mod shrink;

pub use bracketed::{
    Bracketed, BracketedConfig, DichotomyStep, FibonacciStep, GoldenSectionStep,
};
pub use divide_step::DivideStep;
pub use shrink::shrink;

/// Chooses the step size of a gradient descent iteration.
///
/// Implementations must return a non-negative step.
pub trait StepStrategy<const N: usize> {
    /// Returns the step to take from `x`.
    ///
    /// `iter` is the index of the current iteration, starting at 0.
    fn step(&self, x: &[f64; N], prev_step: f64, iter: usize) -> f64;
}
