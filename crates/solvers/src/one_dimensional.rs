//! Bracket searches for the minimum of a unimodal scalar function.
//!
//! # Algorithms
//!
//! All three methods shrink a bracket `[a, b]` known to contain the minimizer
//! and return its midpoint once the width is at most `2 * eps`:
//!
//! - [`dichotomy`] — evaluates two points straddling the midpoint and halves
//!   the bracket; two evaluations per iteration
//! - [`golden_section`] — keeps two interior points at golden-ratio positions
//!   and reuses one of them; one evaluation per iteration
//! - [`fibonacci`] — like golden section with Fibonacci ratios, running a
//!   number of steps fixed up front from `eps` and the bracket width
//!
//! Every search reports the iterations performed and the number of function
//! evaluations, so methods can be compared on equal terms.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: a function with several minima in the bracket
//!   may yield any of them
//! - **Perturbation floor**: dichotomy and the final Fibonacci step probe at a
//!   fixed offset of `1e-8`, so tolerances below that gain nothing
//! - **Finite bracket**: the bounds are not validated; a non-finite bound
//!   yields a non-finite result

mod config;
mod counter;
mod solution;

pub mod dichotomy;
pub mod fibonacci;
pub mod golden_section;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use fibonacci::FibonacciTable;
pub use solution::Solution;

/// Offset used to probe either side of a point.
const SIGMA: f64 = 1e-8;

/// A one-dimensional search method.
///
/// Lets callers such as the bracketed step strategies be written once for
/// every method.
pub trait LineSearch {
    /// Searches `bracket` for the minimizer of `f`.
    fn search<F>(&self, f: F, bracket: [f64; 2], config: &Config) -> Solution
    where
        F: Fn(f64) -> f64;
}

/// Dichotomy search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dichotomy;

/// Golden section search.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldenSection;

/// Fibonacci search with its precomputed table.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    table: FibonacciTable,
}

impl Fibonacci {
    /// Creates a Fibonacci search able to run up to `max_steps` steps.
    ///
    /// `max_steps` is capped at [`fibonacci::MAX_STEPS`].
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self {
            table: FibonacciTable::new(max_steps),
        }
    }

    /// Returns the table used by this search.
    #[must_use]
    pub fn table(&self) -> &FibonacciTable {
        &self.table
    }
}

impl LineSearch for Dichotomy {
    fn search<F>(&self, f: F, bracket: [f64; 2], config: &Config) -> Solution
    where
        F: Fn(f64) -> f64,
    {
        dichotomy::minimize(f, bracket, config)
    }
}

impl LineSearch for GoldenSection {
    fn search<F>(&self, f: F, bracket: [f64; 2], config: &Config) -> Solution
    where
        F: Fn(f64) -> f64,
    {
        golden_section::minimize(f, bracket, config)
    }
}

impl LineSearch for Fibonacci {
    fn search<F>(&self, f: F, bracket: [f64; 2], config: &Config) -> Solution
    where
        F: Fn(f64) -> f64,
    {
        fibonacci::minimize(f, bracket, config, &self.table)
    }
}

/// Returns the bracket bounds in ascending order.
fn ordered(bracket: [f64; 2]) -> (f64, f64) {
    let [a, b] = bracket;
    if a <= b { (a, b) } else { (b, a) }
}

/// Which interior point's value is carried over to the next iteration.
#[derive(Debug, Clone, Copy)]
enum Known {
    Left(f64),
    Right(f64),
}
