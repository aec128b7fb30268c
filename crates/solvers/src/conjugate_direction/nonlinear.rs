//! Nonlinear conjugate-direction solver.

use std::error::Error as StdError;

use methopt_core::{Gradient, Iteration, Objective, Observer, linalg};

use crate::{Error, Solution, Status, gradient_descent, observe::notify, step::DivideStep};

use super::NonlinearConfig;

/// Minimizes `f` by nonlinear conjugate directions.
///
/// Starting from the antigradient, each iteration picks the step `t`
/// minimizing `ψ(t) = f(x + t·p̂)` along the unit direction `p̂ = p / ‖p‖` by
/// gradient descent from `t = 0`, moves to `x + t·p̂`, and builds the next
/// direction `p = w + y·p` from the new antigradient `w` with
///
/// ```text
/// y = max(0, (w - w_prev)·w / (w·w))
/// ```
///
/// Clamping `y` at zero restarts the method from the antigradient. The run
/// converges once `‖∇f(x)‖ < config.eps()`.
///
/// # Errors
///
/// Returns [`Error::Observer`] if the observer fails.
pub fn minimize<const N: usize, F, G, Obs>(
    f: &F,
    grad: &G,
    x0: [f64; N],
    config: &NonlinearConfig,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    G: Gradient<N>,
    Obs: Observer<Iteration<N>>,
    Obs::Error: StdError + Send + Sync + 'static,
{
    notify(&mut observer, 0, &x0)?;

    let mut x = x0;
    let mut w = linalg::neg(&grad.gradient(&x0));
    let mut p = w;

    if linalg::norm(&w) < config.eps() {
        log::debug!("nonlinear conjugate directions: starting point is stationary");
        return Ok(converged(f, x, 0));
    }

    for iter in 1..=config.max_iters() {
        let length = linalg::norm(&p);
        let unit = p.map(|pi| pi / length);
        let t = line_minimum(f, grad, &x, &unit, config.line_search())?;
        x = linalg::add_scaled(&x, t, &unit);
        notify(&mut observer, iter, &x)?;

        let w_next = linalg::neg(&grad.gradient(&x));
        if linalg::norm(&w_next) < config.eps() {
            log::debug!("nonlinear conjugate directions converged after {iter} iterations");
            return Ok(converged(f, x, iter));
        }

        p = next_direction(&w, &w_next, &p);
        w = w_next;
    }

    log::debug!(
        "nonlinear conjugate directions stopped at the iteration limit ({})",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective: f.value(&x),
        iters: config.max_iters(),
    })
}

/// Minimizes `f` by nonlinear conjugate directions without observer support.
///
/// # Errors
///
/// This function does not currently fail; the `Result` mirrors [`minimize`].
pub fn minimize_unobserved<const N: usize, F, G>(
    f: &F,
    grad: &G,
    x0: [f64; N],
    config: &NonlinearConfig,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    G: Gradient<N>,
{
    minimize(f, grad, x0, config, ())
}

fn converged<const N: usize, F: Objective<N>>(f: &F, x: [f64; N], iters: usize) -> Solution<N> {
    Solution {
        status: Status::Converged,
        x,
        objective: f.value(&x),
        iters,
    }
}

/// Returns `w + y·p` with the clamped coefficient
/// `y = max(0, (w - w_prev)·w / (w·w))`.
///
/// A zero coefficient drops the old direction, restarting from the
/// antigradient `w`.
fn next_direction<const N: usize>(w_prev: &[f64; N], w: &[f64; N], p: &[f64; N]) -> [f64; N] {
    let y = linalg::dot(&linalg::sub(w, w_prev), w) / linalg::dot(w, w);
    linalg::add_scaled(w, y.max(0.0), p)
}

/// Returns the distance along the unit vector `p` minimizing `f(x + t·p)`,
/// found by gradient descent on `t`.
///
/// Callers pass a unit `p`, so the line search tolerance bounds the move
/// in `x` whatever the length of the conjugate direction.
fn line_minimum<const N: usize, F, G>(
    f: &F,
    grad: &G,
    x: &[f64; N],
    p: &[f64; N],
    config: &gradient_descent::Config,
) -> Result<f64, Error>
where
    F: Objective<N>,
    G: Gradient<N>,
{
    let psi = |t: &[f64; 1]| f.value(&linalg::add_scaled(x, t[0], p));
    let dpsi = |t: &[f64; 1]| {
        let along = linalg::add_scaled(x, t[0], p);
        [linalg::dot(&grad.gradient(&along), p)]
    };

    let strategy = DivideStep::new(&psi, &dpsi);
    let solution = gradient_descent::minimize_unobserved(&psi, &dpsi, [0.0], &strategy, config)?;

    Ok(solution.x[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_conjugate_term_when_coefficient_is_positive() {
        // (w - w_prev)·w / (w·w) = (1·2) / 4 = 0.5
        let next = next_direction(&[1.0, 0.0], &[2.0, 0.0], &[1.0, 1.0]);
        assert_eq!(next, [2.5, 0.5]);
    }

    #[test]
    fn restarts_from_antigradient_when_coefficient_is_negative() {
        // (w - w_prev)·w / (w·w) = (-0.9·0.1) / 0.01 = -9
        let w = [0.1, 0.0];
        let next = next_direction(&[1.0, 0.0], &w, &[5.0, 5.0]);
        assert_eq!(next, w);
    }
}
