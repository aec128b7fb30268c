use std::convert::Infallible;

use methopt_core::Iteration;

/// Counts the iterations reported by a run.
///
/// Solvers report the starting point as iteration 0, so a run that took `k`
/// steps produces `k + 1` events and a highest index of `k`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationCounter {
    events: usize,
    last: Option<usize>,
}

impl IterationCounter {
    /// Creates a counter that has seen no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an observer that counts each reported iteration.
    pub fn counter<const N: usize>(
        &mut self,
    ) -> impl FnMut(&Iteration<N>) -> Result<(), Infallible> + '_ {
        move |event: &Iteration<N>| {
            self.events += 1;
            self.last = Some(event.iter);
            Ok(())
        }
    }

    /// Returns the number of events observed.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }

    /// Returns the index of the last iteration observed, or 0 if none was.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.last.unwrap_or(0)
    }

    /// Forgets every observed event.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
