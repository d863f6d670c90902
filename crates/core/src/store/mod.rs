//! Generation-guarded view-state stores.
//!
//! Each screen owns one [`ScreenStore`] holding its snapshot behind a
//! mutex. Writes go through closures, so concurrent enrichment tasks
//! apply whole updates atomically and never interleave partial writes to
//! the same item.
//!
//! A monotonically increasing generation tracks screen lifetime: a load
//! captures the generation at entry, and [`ScreenStore::apply`] drops
//! any write carrying a generation older than the current one. Late
//! responses from an abandoned screen visit are discarded instead of
//! clobbering the next visit's state.

use std::sync::{Mutex, MutexGuard};

struct Inner<S> {
    generation: u64,
    state: S,
}

/// One screen's snapshot plus the generation counter guarding it.
pub struct ScreenStore<S> {
    inner: Mutex<Inner<S>>,
}

impl<S: Default> ScreenStore<S> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                state: S::default(),
            }),
        }
    }

    /// Reset the snapshot for a fresh screen visit.
    ///
    /// Bumps the generation and returns it; writes tagged with any older
    /// generation become no-ops from here on.
    pub fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = S::default();
        inner.generation
    }
}

impl<S> ScreenStore<S> {
    /// The generation of the current screen visit.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Apply a write tagged with the visit it belongs to.
    ///
    /// Returns false (and leaves the state untouched) when the store has
    /// been reset since `generation` was captured.
    pub fn apply<F>(&self, generation: u64, f: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }
        f(&mut inner.state);
        true
    }

    /// Apply a write unconditionally, against whatever visit is current.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        let mut inner = self.lock();
        f(&mut inner.state);
    }

    /// Clone out the current snapshot.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.lock().state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: Default> Default for ScreenStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default, PartialEq, Debug)]
    struct Counter {
        value: i32,
    }

    #[test]
    fn test_begin_bumps_generation_and_resets_state() {
        let store: ScreenStore<Counter> = ScreenStore::new();
        let gen1 = store.begin();
        assert!(store.apply(gen1, |s| s.value = 5));
        assert_eq!(store.snapshot().value, 5);

        let gen2 = store.begin();
        assert!(gen2 > gen1);
        assert_eq!(store.snapshot().value, 0);
    }

    #[test]
    fn test_stale_apply_is_noop() {
        let store: ScreenStore<Counter> = ScreenStore::new();
        let stale = store.begin();
        store.begin();

        assert!(!store.apply(stale, |s| s.value = 99));
        assert_eq!(store.snapshot().value, 0);
    }

    #[test]
    fn test_update_applies_to_current_visit() {
        let store: ScreenStore<Counter> = ScreenStore::new();
        store.begin();
        store.update(|s| s.value += 1);
        store.update(|s| s.value += 1);
        assert_eq!(store.snapshot().value, 2);
    }
}
