//! Scoped ownership of pending callbacks.
//!
//! Animation frames, intervals and timeouts are all "register, get a handle,
//! cancel by handle". [`Scoped`] owns at most one such handle and cancels it
//! when dropped, so a component that stores its loop in a `Scoped` cannot
//! leak a callback against a detached canvas.

/// Something that can cancel a pending callback by handle.
pub trait Scheduler {
    /// Opaque registration handle.
    type Handle;

    /// Cancel a pending registration. Cancelling a handle whose callback
    /// already ran must be harmless.
    fn cancel(&self, handle: Self::Handle);
}

/// Owns the single pending registration of one loop.
pub struct Scoped<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Scoped<S> {
    /// Empty scope; nothing pending yet.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Record the handle of the next callback.
    ///
    /// Used from inside the callback when it re-arms itself: the previous
    /// handle has just fired, so it is replaced without cancellation.
    pub fn rearm(&mut self, handle: S::Handle) {
        self.pending = Some(handle);
    }

    /// Record a handle, cancelling whatever was pending before.
    pub fn replace(&mut self, handle: S::Handle) {
        if let Some(previous) = self.pending.replace(handle) {
            self.scheduler.cancel(previous);
        }
    }

    /// Cancel the pending registration, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Whether a registration is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<S: Scheduler> Drop for Scoped<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Log(Rc<RefCell<Vec<u32>>>);

    impl Scheduler for Log {
        type Handle = u32;

        fn cancel(&self, handle: u32) {
            self.0.borrow_mut().push(handle);
        }
    }

    #[test]
    fn drop_cancels_pending_once() {
        let log = Log::default();
        {
            let mut scope = Scoped::new(log.clone());
            scope.rearm(1);
            scope.rearm(2);
            assert!(scope.is_pending());
        }
        assert_eq!(*log.0.borrow(), vec![2]);
    }

    #[test]
    fn replace_cancels_previous() {
        let log = Log::default();
        let mut scope = Scoped::new(log.clone());
        scope.replace(1);
        scope.replace(2);
        scope.cancel();
        scope.cancel();
        drop(scope);
        assert_eq!(*log.0.borrow(), vec![1, 2]);
    }

    #[test]
    fn empty_scope_cancels_nothing() {
        let log = Log::default();
        drop(Scoped::new(log.clone()));
        assert!(log.0.borrow().is_empty());
    }
}
