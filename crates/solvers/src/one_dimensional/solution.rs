/// The result of a one-dimensional search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Midpoint of the final bracket.
    pub x: f64,

    /// Number of narrowing iterations performed.
    pub iters: usize,

    /// Number of function evaluations.
    pub evals: usize,
}
