use std::error::Error as StdError;

use methopt_core::{Iteration, Observer};

use crate::Error;

/// Reports an iterate to the observer, turning its failure into [`Error::Observer`].
pub(crate) fn notify<const N: usize, Obs>(
    observer: &mut Obs,
    iter: usize,
    x: &[f64; N],
) -> Result<(), Error>
where
    Obs: Observer<Iteration<N>>,
    Obs::Error: StdError + Send + Sync + 'static,
{
    log::trace!("iteration {iter}: x = {x:?}");
    observer
        .observe(&Iteration::new(iter, *x))
        .map_err(Error::observer)
}
