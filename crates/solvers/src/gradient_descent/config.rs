use std::{fmt, str::FromStr};

use crate::{ConfigError, error::positive};

use super::StoppingCriterion;

/// Configuration for gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    eps: f64,
    initial_step: f64,
    criterion: StoppingCriterion,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_valid(1000, 1e-7)
    }
}

impl Config {
    /// Builds a config from a tolerance already known to be positive.
    pub(crate) const fn from_valid(max_iters: usize, eps: f64) -> Self {
        Self {
            max_iters,
            eps,
            initial_step: 1.0,
            criterion: StoppingCriterion::ArgumentMargin,
        }
    }

    /// Creates a new config with a validated tolerance.
    ///
    /// The initial step defaults to 1 and the criterion to
    /// [`StoppingCriterion::ArgumentMargin`].
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

    /// Returns the config with a different stopping criterion.
    #[must_use]
    pub fn with_criterion(self, criterion: StoppingCriterion) -> Self {
        Self { criterion, ..self }
    }

    /// Returns the config with a different step for the first iteration.
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

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance used by the stopping criterion.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the step passed to the strategy on the first iteration.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the stopping criterion.
    #[must_use]
    pub fn criterion(&self) -> StoppingCriterion {
        self.criterion
    }
}

/// Step strategies that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyName {
    /// `"divide_step"`: [`DivideStep`](crate::step::DivideStep) with its default bound.
    DivideStep,
}

impl FromStr for StrategyName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "divide_step" => Ok(Self::DivideStep),
            _ => Err(ConfigError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideStep => f.write_str("divide_step"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_name_round_trips_through_display() {
        let name = StrategyName::DivideStep;

        assert_eq!(name.to_string(), "divide_step");
        assert_eq!(name.to_string().parse::<StrategyName>(), Ok(name));
    }

    #[test]
    fn rejects_unknown_strategy_name() {
        assert_eq!(
            "halve_step".parse::<StrategyName>(),
            Err(ConfigError::UnknownStrategy("halve_step".into()))
        );
    }
}
