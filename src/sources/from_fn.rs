use crate::buffered::Buffered;
use crate::pull::Pull;

/// Producer backed by a zero-argument pull function
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    pull_fn: F,
}

impl<F, T> Pull for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;
    type Collection = Vec<T>;

    fn pull(&mut self) -> Option<T> {
        (self.pull_fn)()
    }
}

/// Create a cursor that calls `pull_fn` for each value
///
/// The function is not called again after it first returns `None`.
pub fn from_fn<F, T>(pull_fn: F) -> Buffered<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Buffered::new(FromFn { pull_fn })
}
