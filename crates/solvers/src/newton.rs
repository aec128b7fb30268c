//! Damped Newton's method.
//!
//! # Algorithm
//!
//! Each iteration materializes the Hessian `H` and gradient `g` at the
//! current point and minimizes the local model `ψ(d) = ½dᵀHd + gᵀd` with the
//! [quadratic conjugate-direction solver](crate::conjugate_direction::quadratic),
//! giving a direction `d`. The step along `d` is damped with
//! [`step::shrink`] until the objective no longer increases, and the run stops
//! once two consecutive objective values differ by less than `eps`.
//!
//! The quadratic subproblem is always started from the original `x0`, not
//! from the current point. Both converge to the same direction for a
//! positive-definite `H`; the start only affects rounding.
//!
//! # Observer Events
//!
//! The observer receives `x0` as iteration 0 and each accepted point after
//! that. An observer error aborts the run and is returned as
//! [`Error::Observer`].

mod config;


pub use config::Config;

use std::error::Error as StdError;

use methopt_core::{Gradient, Hessian, Iteration, Objective, Observer, linalg};

use crate::{Error, Solution, Status, conjugate_direction::quadratic, observe::notify, step};

/// Minimizes `f` by damped Newton's method.
///
/// `hessian` must stay positive definite along the directions the solver
/// visits; this is not checked.
///
/// # Errors
///
/// Returns [`Error::Observer`] if the observer fails.
pub fn minimize<const N: usize, F, H, G, Obs>(
    f: &F,
    hessian: &H,
    grad: &G,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    H: Hessian<N>,
    G: Gradient<N>,
    Obs: Observer<Iteration<N>>,
    Obs::Error: StdError + Send + Sync + 'static,
{
    notify(&mut observer, 0, &x0)?;

    let mut x = x0;
    let mut fx = f.value(&x0);
    let mut prev_step = config.initial_step();

    for iter in 1..config.max_iters() {
        let h = hessian.hessian(&x);
        let g = grad.gradient(&x);
        let direction = quadratic::minimize_unobserved(&h, &g, x0, config.quadratic())?.x;

        let step = step::shrink(f, &x, &direction, prev_step, iter, config.eps());
        let next = linalg::add_scaled(&x, step, &direction);
        notify(&mut observer, iter, &next)?;

        let f_next = f.value(&next);
        if (fx - f_next).abs() < config.eps() {
            log::debug!("newton converged after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x: next,
                objective: f_next,
                iters: iter,
            });
        }

        x = next;
        fx = f_next;
        prev_step = step;
    }

    log::debug!("newton stopped at the iteration limit ({})", config.max_iters());
    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective: fx,
        iters: config.max_iters().saturating_sub(1),
    })
}

/// Minimizes `f` by damped Newton's method without observer support.
///
/// # Errors
///
/// This function does not currently fail; the `Result` mirrors [`minimize`].
pub fn minimize_unobserved<const N: usize, F, H, G>(
    f: &F,
    hessian: &H,
    grad: &G,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    H: Hessian<N>,
    G: Gradient<N>,
{
    minimize(f, hessian, grad, x0, config, ())
}
