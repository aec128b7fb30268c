use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur when building a solver config.
///
/// These are raised before any iteration runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("max_step must be finite and positive")]
    MaxStep,

    #[error("unknown step adjustment strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown stopping criterion: {0}")]
    UnknownStoppingCriterion(String),
}

/// Errors that can occur while running a solver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("observer failed")]
    Observer(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn observer(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Observer(Box::new(err))
    }
}

/// Checks that a tolerance or step is finite and positive.
pub(crate) fn positive(value: f64, err: ConfigError) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err)
    }
}
