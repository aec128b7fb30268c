use methopt_core::{Gradient, Objective, linalg};

use super::{StepStrategy, shrink};

/// Steps along the antigradient, halving the previous step until the
/// objective decreases.
///
/// Every 100th iteration the previous step is first multiplied by 256.
/// See [`shrink`] for the exact rule.
#[derive(Debug)]
pub struct DivideStep<'a, F, G> {
    f: &'a F,
    grad: &'a G,
    eps: f64,
}

impl<'a, F, G> DivideStep<'a, F, G> {
    /// Default lower bound on the step.
    pub const DEFAULT_EPS: f64 = 1e-7;

    /// Creates the strategy with the default lower bound.
    #[must_use]
    pub fn new(f: &'a F, grad: &'a G) -> Self {
        Self::with_eps(f, grad, Self::DEFAULT_EPS)
    }

    /// Creates the strategy, halving no further than `eps`.
    #[must_use]
    pub fn with_eps(f: &'a F, grad: &'a G, eps: f64) -> Self {
        Self { f, grad, eps }
    }

    /// Returns the lower bound on the step.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }
}

impl<const N: usize, F, G> StepStrategy<N> for DivideStep<'_, F, G>
where
    F: Objective<N>,
    G: Gradient<N>,
{
    fn step(&self, x: &[f64; N], prev_step: f64, iter: usize) -> f64 {
        let direction = linalg::neg(&self.grad.gradient(x));
        shrink(self.f, x, &direction, prev_step, iter, self.eps)
    }
}
