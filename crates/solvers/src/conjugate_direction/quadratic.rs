//! Exact conjugate-direction solver for quadratic objectives.

use std::error::Error as StdError;

use methopt_core::{Iteration, Observer, linalg};

use crate::{Error, Solution, Status, observe::notify};

use super::QuadraticConfig;

/// Minimizes `f(x) = ½xᵀQx + bᵀx`.
///
/// Each update moves along a direction `Q`-conjugate to all earlier ones by
/// the exact step `h = (w·p) / (Qp·p)`, where `w = -(Qx + b)` is the
/// residual. The run converges once the direction norm drops below
/// `config.eps()`, at most `N` updates after the start for a
/// positive-definite `Q`.
///
/// `q` must be symmetric and positive definite along every direction the
/// solver visits; this is not checked.
///
/// If `b` is the zero vector, `b` itself is returned without iterating.
/// That is the minimizer only when `Q` is positive definite.
///
/// # Errors
///
/// Returns [`Error::Observer`] if the observer fails.
pub fn minimize<const N: usize, Obs>(
    q: &[[f64; N]; N],
    b: &[f64; N],
    x0: [f64; N],
    config: &QuadraticConfig,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    Obs: Observer<Iteration<N>>,
    Obs::Error: StdError + Send + Sync + 'static,
{
    notify(&mut observer, 0, &x0)?;

    let objective =
        |x: &[f64; N]| 0.5 * linalg::dot(&linalg::mat_vec(q, x), x) + linalg::dot(b, x);

    if b.iter().all(|&bi| bi == 0.0) {
        log::debug!("quadratic conjugate directions: zero linear term, returning it");
        return Ok(Solution {
            status: Status::Converged,
            x: *b,
            objective: objective(b),
            iters: 0,
        });
    }

    let mut x = x0;
    let mut w = linalg::sub(&linalg::neg(&linalg::mat_vec(q, &x0)), b);
    let mut p = w;

    for iter in 0..config.max_iters() {
        if linalg::norm(&p) < config.eps() {
            log::debug!("quadratic conjugate directions converged after {iter} updates");
            return Ok(Solution {
                status: Status::Converged,
                x,
                objective: objective(&x),
                iters: iter,
            });
        }

        let qp = linalg::mat_vec(q, &p);
        let h = linalg::dot(&w, &p) / linalg::dot(&qp, &p);
        x = linalg::add_scaled(&x, h, &p);
        notify(&mut observer, iter + 1, &x)?;

        w = linalg::add_scaled(&w, -h, &qp);
        let y = linalg::dot(&qp, &w) / linalg::dot(&qp, &p);
        p = linalg::add_scaled(&w, -y, &p);
    }

    log::debug!(
        "quadratic conjugate directions stopped at the iteration limit ({})",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective: objective(&x),
        iters: config.max_iters(),
    })
}

/// Minimizes `f(x) = ½xᵀQx + bᵀx` without observer support.
///
/// # Errors
///
/// This function does not currently fail; the `Result` mirrors [`minimize`].
pub fn minimize_unobserved<const N: usize>(
    q: &[[f64; N]; N],
    b: &[f64; N],
    x0: [f64; N],
    config: &QuadraticConfig,
) -> Result<Solution<N>, Error> {
    minimize(q, b, x0, config, ())
}
