use std::convert::Infallible;

use methopt_core::{Iteration, Objective};

/// Records the iterates of a run with their objective values.
///
/// Entries are appended in the order the solver reports them, so the first
/// entry is always `(x0, f(x0))`.
#[derive(Debug)]
pub struct Trajectory<'a, F, const N: usize> {
    f: &'a F,
    entries: Vec<([f64; N], f64)>,
}

impl<'a, F, const N: usize> Trajectory<'a, F, N>
where
    F: Objective<N>,
{
    /// Creates an empty trajectory that evaluates `f` at every recorded point.
    #[must_use]
    pub fn new(f: &'a F) -> Self {
        Self {
            f,
            entries: Vec::new(),
        }
    }

    /// Returns an observer that appends each reported iterate.
    pub fn recorder(&mut self) -> impl FnMut(&Iteration<N>) -> Result<(), Infallible> + '_ {
        move |event: &Iteration<N>| {
            self.entries.push((event.x, self.f.value(&event.x)));
            Ok(())
        }
    }

    /// Returns the recorded `(point, value)` pairs.
    #[must_use]
    pub fn entries(&self) -> &[([f64; N], f64)] {
        &self.entries
    }

    /// Returns an iterator over the recorded points.
    pub fn points(&self) -> impl Iterator<Item = &[f64; N]> {
        self.entries.iter().map(|(x, _)| x)
    }

    /// Returns an iterator over the recorded objective values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, fx)| fx)
    }

    /// Returns the first entry, if any.
    #[must_use]
    pub fn first(&self) -> Option<&([f64; N], f64)> {
        self.entries.first()
    }

    /// Returns the last entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&([f64; N], f64)> {
        self.entries.last()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the trajectory, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<([f64; N], f64)> {
        self.entries
    }
}
