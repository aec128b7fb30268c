use std::convert::Infallible;

/// Receives solver events as a synchronous side channel.
///
/// Observers let callers record or inspect a solver's progress without
/// changing its API. They cannot steer the iteration: the only influence an
/// observer has is failing, which aborts the run and surfaces the error to
/// the caller unchanged.
///
/// Closures returning `Result<(), E>` automatically implement `Observer`,
/// and a built-in impl for `()` provides a no-op observer.
pub trait Observer<E> {
    /// The error that aborts the run.
    type Error;

    /// Observes a solver event.
    ///
    /// # Errors
    ///
    /// Returns an error to abort the solver.
    fn observe(&mut self, event: &E) -> Result<(), Self::Error>;
}

/// Blanket implementation for observer closures.
impl<E, F, Err> Observer<E> for F
where
    F: FnMut(&E) -> Result<(), Err>,
{
    type Error = Err;

    fn observe(&mut self, event: &E) -> Result<(), Err> {
        self(event)
    }
}

/// A no-op observer that never fails.
impl<E> Observer<E> for () {
    type Error = Infallible;

    fn observe(&mut self, _event: &E) -> Result<(), Infallible> {
        Ok(())
    }
}

/// The event emitted once per solver iteration.
///
/// `iter` starts at 0 and increases by one with every event of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration<const N: usize> {
    /// Iteration index.
    pub iter: usize,

    /// The iterate.
    pub x: [f64; N],
}

impl<const N: usize> Iteration<N> {
    /// Creates a new iteration event.
    #[must_use]
    pub fn new(iter: usize, x: [f64; N]) -> Self {
        Self { iter, x }
    }
}
