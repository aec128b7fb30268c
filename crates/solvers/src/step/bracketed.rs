use methopt_core::{Gradient, Objective, linalg};

use crate::{
    ConfigError,
    error::positive,
    one_dimensional::{self, Dichotomy, Fibonacci, GoldenSection, LineSearch},
};

use super::StepStrategy;

/// Configuration for the bracketed step strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketedConfig {
    max_step: f64,
    search: one_dimensional::Config,
}

impl BracketedConfig {
    /// Creates a config searching steps in `[0, max_step]` with the default
    /// budget of 10 sub-iterations and `eps = 1e-7`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step` is not finite and positive.
    pub fn new(max_step: f64) -> Result<Self, ConfigError> {
        Self::with_search(max_step, 10, 1e-7)
    }

    /// Creates a config with an explicit sub-iteration budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step` or `eps` is not finite and positive.
    pub fn with_search(max_step: f64, max_iters: usize, eps: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_step: positive(max_step, ConfigError::MaxStep)?,
            search: one_dimensional::Config::new(max_iters, eps)?,
        })
    }

    /// Returns the upper end of the searched step interval.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Returns the config passed to the one-dimensional search.
    #[must_use]
    pub fn search(&self) -> &one_dimensional::Config {
        &self.search
    }
}

/// Picks the step by minimizing `g(t) = f(x - t * ∇f(x))` over `[0, max_step]`.
///
/// The previous step and the iteration number are ignored.
#[derive(Debug)]
pub struct Bracketed<'a, F, G, S> {
    f: &'a F,
    grad: &'a G,
    search: S,
    config: BracketedConfig,
}

/// Bracketed strategy using [`Dichotomy`].
pub type DichotomyStep<'a, F, G> = Bracketed<'a, F, G, Dichotomy>;

/// Bracketed strategy using [`GoldenSection`].
pub type GoldenSectionStep<'a, F, G> = Bracketed<'a, F, G, GoldenSection>;

/// Bracketed strategy using [`Fibonacci`].
pub type FibonacciStep<'a, F, G> = Bracketed<'a, F, G, Fibonacci>;

impl<'a, F, G, S> Bracketed<'a, F, G, S> {
    /// Creates the strategy around an arbitrary search.
    #[must_use]
    pub fn with_search(f: &'a F, grad: &'a G, search: S, config: &BracketedConfig) -> Self {
        Self {
            f,
            grad,
            search,
            config: *config,
        }
    }

    /// Returns the strategy's config.
    #[must_use]
    pub fn config(&self) -> &BracketedConfig {
        &self.config
    }
}

impl<'a, F, G> Bracketed<'a, F, G, Dichotomy> {
    /// Creates a dichotomy step strategy.
    #[must_use]
    pub fn new(f: &'a F, grad: &'a G, config: &BracketedConfig) -> Self {
        Self::with_search(f, grad, Dichotomy, config)
    }
}

impl<'a, F, G> Bracketed<'a, F, G, GoldenSection> {
    /// Creates a golden section step strategy.
    #[must_use]
    pub fn new(f: &'a F, grad: &'a G, config: &BracketedConfig) -> Self {
        Self::with_search(f, grad, GoldenSection, config)
    }
}

impl<'a, F, G> Bracketed<'a, F, G, Fibonacci> {
    /// Creates a Fibonacci step strategy.
    ///
    /// The Fibonacci table is built once here, sized by the sub-iteration budget.
    #[must_use]
    pub fn new(f: &'a F, grad: &'a G, config: &BracketedConfig) -> Self {
        let search = Fibonacci::new(config.search().max_iters());
        Self::with_search(f, grad, search, config)
    }
}

impl<const N: usize, F, G, S> StepStrategy<N> for Bracketed<'_, F, G, S>
where
    F: Objective<N>,
    G: Gradient<N>,
    S: LineSearch,
{
    fn step(&self, x: &[f64; N], _prev_step: f64, _iter: usize) -> f64 {
        let grad = self.grad.gradient(x);
        let along = |t: f64| self.f.value(&linalg::add_scaled(x, -t, &grad));

        let solution = self
            .search
            .search(along, [0.0, self.config.max_step], &self.config.search);

        // The probes can straddle zero by the perturbation offset.
        solution.x.max(0.0)
    }
}
