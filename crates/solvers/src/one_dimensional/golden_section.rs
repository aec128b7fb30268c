//! Golden section search.
//!
//! Maintains two interior points positioned by the golden ratio, compares
//! their values, and shrinks the bracket toward the smaller one. One interior
//! point survives every shrink, so each iteration costs a single evaluation.
//! Equal values end the search immediately.

mod bracket;

use super::{Config, Known, Solution, counter::Counter};

use bracket::GoldenBracket;

/// Finds the minimizer of a unimodal `f` on `bracket` by golden section.
///
/// Stops once the bracket width is at most `2 * eps`, after `max_iters`
/// iterations, or when both interior values tie.
pub fn minimize<F>(f: F, bracket: [f64; 2], config: &Config) -> Solution
where
    F: Fn(f64) -> f64,
{
    let mut bracket = GoldenBracket::new(bracket);
    let mut eval = Counter::new(f);
    let mut known = Known::Left(eval.call(bracket.inner_left));
    let mut iters = 0;

    while bracket.width() > 2.0 * config.eps() && iters < config.max_iters() {
        iters += 1;

        let (left, right) = match known {
            Known::Left(left) => (left, eval.call(bracket.inner_right)),
            Known::Right(right) => (eval.call(bracket.inner_left), right),
        };

        if left < right {
            // Old inner_left becomes the new inner_right.
            bracket.shrink_right();
            known = Known::Right(left);
        } else if left > right {
            // Old inner_right becomes the new inner_left.
            bracket.shrink_left();
            known = Known::Left(right);
        } else {
            break;
        }
    }

    Solution {
        x: bracket.midpoint(),
        iters,
        evals: eval.evals(),
    }
}
