//! Dichotomy search.
//!
//! Each iteration evaluates `f` at `mid - 1e-8` and `mid + 1e-8` and discards
//! the half on the side of the larger value, so the bracket roughly halves
//! per iteration at the cost of two evaluations.

use super::{Config, SIGMA, Solution, counter::Counter, ordered};

/// Finds the minimizer of a unimodal `f` on `bracket` by dichotomy.
///
/// Stops once the bracket width is at most `2 * eps` or after
/// `max_iters` iterations.
pub fn minimize<F>(f: F, bracket: [f64; 2], config: &Config) -> Solution
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = ordered(bracket);
    let mut eval = Counter::new(f);
    let mut iters = 0;

    while b - a > 2.0 * config.eps() && iters < config.max_iters() {
        let mid = 0.5 * (a + b);
        let left = mid - SIGMA;
        let right = mid + SIGMA;

        if eval.call(left) < eval.call(right) {
            b = right;
        } else {
            a = left;
        }
        iters += 1;
    }

    Solution {
        x: 0.5 * (a + b),
        iters,
        evals: eval.evals(),
    }
}
