use methopt_core::{Objective, linalg};

/// Every this many iterations the starting step is enlarged.
const GROWTH_PERIOD: usize = 100;

/// Factor applied to the previous step on growth iterations.
const GROWTH_FACTOR: f64 = 256.0;

/// Halves a step along a fixed direction until the objective decreases.
///
/// Starts from `prev_step`, or from `256 * prev_step` when `iter` is a
/// multiple of 100, and halves it while `f(x + step * direction) >= f(x)` and
/// `step > eps`. The periodic growth lets a run recover from a step that has
/// become too small.
///
/// If no decreasing step is found the last step tried, just under `eps`, is
/// returned; this is not treated as a failure.
pub fn shrink<const N: usize, F>(
    f: &F,
    x: &[f64; N],
    direction: &[f64; N],
    prev_step: f64,
    iter: usize,
    eps: f64,
) -> f64
where
    F: Objective<N>,
{
    let mut step = if iter % GROWTH_PERIOD == 0 {
        prev_step * GROWTH_FACTOR
    } else {
        prev_step
    };

    let fx = f.value(x);
    while f.value(&linalg::add_scaled(x, step, direction)) >= fx && step > eps {
        step /= 2.0;
    }

    step
}
