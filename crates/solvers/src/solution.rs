/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the solver's termination test.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// This is also the normal outcome of a gradient descent run that is
    /// configured to never stop early.
    MaxIters,
}

/// The result of a multivariate minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of iterations performed.
    pub iters: usize,
}
