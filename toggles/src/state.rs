use std::sync::{Arc, RwLock};

/// Shared value cell with interior mutability.
///
/// `State<T>` is cheap to clone; clones observe the same value. A poisoned
/// lock is recovered rather than propagated, since the cell only ever holds
/// plain values.
///
/// # Example
///
/// ```
/// use toggles::State;
///
/// let checked = State::new(false);
/// let shared = checked.clone();
/// shared.set(true);
/// assert!(checked.get());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.replace(value);
    }

    /// Set a new value, returning the previous one
    pub fn replace(&self, value: T) -> T {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, value)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
