use crate::{ConfigError, conjugate_direction::QuadraticConfig, error::positive};

/// Configuration for Newton's method.
///
/// Iterations are counted from 1, so at most `max_iters - 1` Newton steps
/// are taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    eps: f64,
    initial_step: f64,
    quadratic: QuadraticConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            eps: 1e-7,
            initial_step: 1.0,
            quadratic: QuadraticConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `eps` bounds both the change in objective value that ends the run and
    /// the smallest damping factor tried.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive.
    pub fn new(max_iters: usize, eps: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iters,
            eps: positive(eps, ConfigError::Eps)?,
            ..Self::default()
        })
    }

    /// Returns the config with a different damping factor for the first step.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive.
    pub fn with_initial_step(self, initial_step: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            initial_step: positive(initial_step, ConfigError::InitialStep)?,
            ..self
        })
    }

    /// Returns the config with a different solver for the Newton subproblem.
    #[must_use]
    pub fn with_quadratic(self, quadratic: QuadraticConfig) -> Self {
        Self { quadratic, ..self }
    }

    /// Returns the iteration limit.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the damping factor tried first.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the config of the quadratic subproblem solver.
    #[must_use]
    pub fn quadratic(&self) -> &QuadraticConfig {
        &self.quadratic
    }
}
