/// Wraps a scalar function and counts its evaluations.
pub(super) struct Counter<F> {
    f: F,
    evals: usize,
}

impl<F: Fn(f64) -> f64> Counter<F> {
    pub(super) fn new(f: F) -> Self {
        Self { f, evals: 0 }
    }

    pub(super) fn call(&mut self, x: f64) -> f64 {
        self.evals += 1;
        (self.f)(x)
    }

    pub(super) fn evals(&self) -> usize {
        self.evals
    }
}
