use crate::{ConfigError, error::positive};

/// Configuration shared by the one-dimensional searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    eps: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            eps: 1e-7,
        }
    }
}

impl Config {
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

    /// Returns the maximum number of narrowing iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the target half-width of the final bracket.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }
}
