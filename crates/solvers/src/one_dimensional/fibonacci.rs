//! Fibonacci search.
//!
//! The number of steps `n` is chosen up front as the smallest table index
//! with `2 * |b - a| < eps * F(n)`. The interior points then sit at
//! Fibonacci-ratio positions and, as in golden section search, one of them
//! is reused each step. A last probe at `1e-8` past the surviving interior
//! point settles which half of the final bracket to keep.

use super::{Config, Known, SIGMA, Solution, counter::Counter, ordered};

/// Largest supported number of steps.
///
/// Beyond this the ratios of consecutive entries no longer differ in `f64`.
pub const MAX_STEPS: usize = 52;

/// Fibonacci numbers `F(0) = F(1) = 1, F(k) = F(k-1) + F(k-2)`, built bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciTable {
    values: Vec<u64>,
}

impl FibonacciTable {
    /// Builds the table for up to `max_steps` steps.
    ///
    /// `max_steps` is clamped to `2..=MAX_STEPS`.
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        let steps = max_steps.clamp(2, MAX_STEPS);
        let mut values = vec![1; steps + 1];
        for k in 2..=steps {
            values[k] = values[k - 1] + values[k - 2];
        }
        Self { values }
    }

    /// Returns the number of steps the table covers.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns `F(k)`.
    ///
    /// # Panics
    ///
    /// Panics if `k > self.max_steps()`.
    #[must_use]
    pub fn get(&self, k: usize) -> u64 {
        self.values[k]
    }

    /// Returns `F(num) / F(den)`.
    #[allow(clippy::cast_precision_loss)]
    fn ratio(&self, num: usize, den: usize) -> f64 {
        self.values[num] as f64 / self.values[den] as f64
    }

    /// Smallest index `n <= max_steps` with `2 * width < eps * F(n)`, by binary search.
    ///
    /// Returns `max_steps` when no entry is large enough.
    #[allow(clippy::cast_precision_loss)]
    fn steps_for(&self, width: f64, eps: f64, max_steps: usize) -> usize {
        let mut left = 0;
        let mut right = max_steps;
        while right - left > 1 {
            let mid = (left + right) / 2;
            if 2.0 * width < eps * self.values[mid] as f64 {
                right = mid;
            } else {
                left = mid;
            }
        }
        right
    }
}

/// Finds the minimizer of a unimodal `f` on `bracket` by Fibonacci search.
///
/// The step budget is `config.max_iters()`, further capped by the table size.
pub fn minimize<F>(f: F, bracket: [f64; 2], config: &Config, table: &FibonacciTable) -> Solution
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = ordered(bracket);
    let max_steps = config.max_iters().clamp(2, table.max_steps());
    let n = table.steps_for(b - a, config.eps(), max_steps).max(2);

    let width = b - a;
    let mut x1 = a + table.ratio(n - 2, n) * width;
    let mut x2 = a + table.ratio(n - 1, n) * width;

    let mut eval = Counter::new(f);
    let mut known = Known::Left(eval.call(x1));
    let mut iters = 1;

    while iters + 2 < n {
        let (f1, f2) = match known {
            Known::Left(f1) => (f1, eval.call(x2)),
            Known::Right(f2) => (eval.call(x1), f2),
        };

        if f1 < f2 {
            b = x2;
            x2 = x1;
            known = Known::Right(f1);
            x1 = a + table.ratio(n - iters - 2, n - iters) * (b - a);
        } else {
            a = x1;
            x1 = x2;
            known = Known::Left(f2);
            x2 = a + table.ratio(n - iters - 1, n - iters) * (b - a);
        }
        iters += 1;
    }

    let probe = x1 + SIGMA;
    if eval.call(x1) < eval.call(probe) {
        b = probe;
    }

    Solution {
        x: 0.5 * (a + b),
        iters,
        evals: eval.evals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_built_bottom_up() {
        let table = FibonacciTable::new(10);

        assert_eq!(table.max_steps(), 10);
        let values: Vec<u64> = (0..=10).map(|k| table.get(k)).collect();
        assert_eq!(values, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn table_size_is_capped() {
        let table = FibonacciTable::new(1000);

        assert_eq!(table.max_steps(), MAX_STEPS);
        assert_eq!(table.get(MAX_STEPS), 53_316_291_173);
    }

    #[test]
    fn tiny_table_still_supports_a_search() {
        let table = FibonacciTable::new(0);
        assert_eq!(table.max_steps(), 2);
    }

    #[test]
    fn steps_for_picks_smallest_sufficient_index() {
        let table = FibonacciTable::new(20);

        // Need F(n) > 2 * 10 / 0.5 = 40, so F(9) = 55.
        assert_eq!(table.steps_for(10.0, 0.5, 20), 9);

        // Nothing in the table is large enough.
        assert_eq!(table.steps_for(1e9, 1e-9, 20), 20);
    }
}
