//! Owned release handles for listeners and auth observers.
//!
//! Every registration (auth observer, `resize`, document `mousedown`) hands
//! back a [`Subscription`]. Dropping it, or calling [`Subscription::release`],
//! runs the matching teardown exactly once.

use std::fmt;

pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release (registration was skipped or failed).
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Run the teardown now. Later calls (and the eventual drop) are no-ops.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn release_runs_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut sub = Subscription::new(move || counter.set(counter.get() + 1));

        sub.release();
        sub.release();
        drop(sub);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_releases() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        {
            let sub = Subscription::new(move || flag.set(true));
            assert!(sub.is_active());
        }
        assert!(released.get());
    }

    #[test]
    fn inert_is_inactive() {
        let mut sub = Subscription::inert();
        assert!(!sub.is_active());
        sub.release();
    }
}
