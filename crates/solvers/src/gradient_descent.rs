//! Gradient descent for multivariate minimization.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration asks a [`StepStrategy`] for a step and
//! forms the candidate `x_new = x - step * ∇f(x)`. If the configured
//! [`StoppingCriterion`] holds between `x` and `x_new` the run stops and
//! returns `x`; otherwise `x_new` becomes the next iterate.
//!
//! # Observer Events
//!
//! The observer receives one [`Iteration`] per iteration, carrying the
//! current point before the step is taken. Iteration indices start at 0.
//! An observer error aborts the run and is returned as [`Error::Observer`].
//!
//! [`StepStrategy`]: crate::step::StepStrategy
//! [`Iteration`]: methopt_core::Iteration

mod config;
mod criterion;

#[cfg(test)]
mod tests;

pub use config::{Config, StrategyName};
pub use criterion::StoppingCriterion;

use std::error::Error as StdError;

use methopt_core::{Gradient, Iteration, Objective, Observer, linalg};

use crate::{Error, Solution, Status, observe::notify, step::DivideStep, step::StepStrategy};

/// Minimizes `f` by gradient descent with the given step strategy.
///
/// # Errors
///
/// Returns [`Error::Observer`] if the observer fails.
pub fn minimize<const N: usize, F, G, S, Obs>(
    f: &F,
    grad: &G,
    x0: [f64; N],
    strategy: &S,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    G: Gradient<N>,
    S: StepStrategy<N>,
    Obs: Observer<Iteration<N>>,
    Obs::Error: StdError + Send + Sync + 'static,
{
    let mut x = x0;
    let mut prev_step = config.initial_step();

    for iter in 0..config.max_iters() {
        notify(&mut observer, iter, &x)?;

        let step = strategy.step(&x, prev_step, iter);
        let next = linalg::add_scaled(&x, -step, &grad.gradient(&x));

        if config.criterion().is_met(f, &x, &next, config.eps()) {
            log::debug!("gradient descent converged after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x,
                objective: f.value(&x),
                iters: iter,
            });
        }

        prev_step = step;
        x = next;
    }

    log::debug!(
        "gradient descent stopped at the iteration limit ({})",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective: f.value(&x),
        iters: config.max_iters(),
    })
}

/// Minimizes `f` by gradient descent without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// This function does not currently fail; the `Result` mirrors [`minimize`].
pub fn minimize_unobserved<const N: usize, F, G, S>(
    f: &F,
    grad: &G,
    x0: [f64; N],
    strategy: &S,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    G: Gradient<N>,
    S: StepStrategy<N>,
{
    minimize(f, grad, x0, strategy, config, ())
}

/// Minimizes `f` by gradient descent with a strategy chosen by name.
///
/// The name is resolved before any iteration runs; see [`StrategyName`] for
/// the accepted names.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the name is unknown, or
/// [`Error::Observer`] if the observer fails.
pub fn minimize_named<const N: usize, F, G, Obs>(
    f: &F,
    grad: &G,
    x0: [f64; N],
    strategy: &str,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    G: Gradient<N>,
    Obs: Observer<Iteration<N>>,
    Obs::Error: StdError + Send + Sync + 'static,
{
    match strategy.parse::<StrategyName>()? {
        StrategyName::DivideStep => {
            minimize(f, grad, x0, &DivideStep::new(f, grad), config, observer)
        }
    }
}
