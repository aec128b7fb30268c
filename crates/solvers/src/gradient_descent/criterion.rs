use std::{fmt, str::FromStr};

use methopt_core::{Objective, linalg};

use crate::ConfigError;

/// When gradient descent stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoppingCriterion {
    /// Stop when `‖x - x_new‖ < eps`.
    #[default]
    ArgumentMargin,

    /// Stop when `|f(x) - f(x_new)| < eps`.
    ///
    /// On a plateau where the gradient vanishes this can trigger far from
    /// the minimum.
    FunctionMargin,

    /// Never stop early; always run the full iteration budget.
    NIterations,
}

impl StoppingCriterion {
    /// Returns the criterion's name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ArgumentMargin => "argument_margin",
            Self::FunctionMargin => "function_margin",
            Self::NIterations => "n_iterations",
        }
    }

    /// Returns whether the step from `x` to `next` is small enough to stop.
    pub(super) fn is_met<const N: usize, F>(
        self,
        f: &F,
        x: &[f64; N],
        next: &[f64; N],
        eps: f64,
    ) -> bool
    where
        F: Objective<N>,
    {
        match self {
            Self::ArgumentMargin => linalg::norm(&linalg::sub(x, next)) < eps,
            Self::FunctionMargin => (f.value(x) - f.value(next)).abs() < eps,
            Self::NIterations => false,
        }
    }
}

impl FromStr for StoppingCriterion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argument_margin" => Ok(Self::ArgumentMargin),
            "function_margin" => Ok(Self::FunctionMargin),
            "n_iterations" => Ok(Self::NIterations),
            _ => Err(ConfigError::UnknownStoppingCriterion(s.to_owned())),
        }
    }
}

impl fmt::Display for StoppingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
