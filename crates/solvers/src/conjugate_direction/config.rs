use crate::{ConfigError, error::positive, gradient_descent};

/// Configuration for the quadratic conjugate-direction solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticConfig {
    max_iters: usize,
    eps: f64,
}

impl Default for QuadraticConfig {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            eps: 1e-10,
        }
    }
}

impl QuadraticConfig {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive.
    pub fn new(max_iters: usize, eps: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iters,
            eps: positive(eps, ConfigError::Eps)?,
        })
    }

    /// Returns the maximum number of updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the direction norm below which the solver stops.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }
}

/// Configuration for the nonlinear conjugate-direction solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonlinearConfig {
    max_iters: usize,
    eps: f64,
    line_search: gradient_descent::Config,
}

impl Default for NonlinearConfig {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            eps: 1e-7,
            line_search: gradient_descent::Config::from_valid(1000, 1e-9),
        }
    }
}

impl NonlinearConfig {
    /// Creates a new config with a validated tolerance and the default line
    /// search.
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

    /// Returns the config with a different inner line search.
    #[must_use]
    pub fn with_line_search(self, line_search: gradient_descent::Config) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the gradient norm below which the solver stops.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the config of the gradient descent run along each direction.
    #[must_use]
    pub fn line_search(&self) -> &gradient_descent::Config {
        &self.line_search
    }
}
