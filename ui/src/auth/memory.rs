//! Single-threaded provider that keeps the session in memory.
//!
//! The web and desktop shells use it for the demo login flow; tests use it as
//! a spy (`subscriber_count`, `fail_next_sign_out`).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;
use futures_util::FutureExt;

use super::{AuthCallback, AuthError, AuthProvider, AuthUser};
use crate::core::subscription::Subscription;

type Observer = Rc<dyn Fn(Option<AuthUser>)>;

#[derive(Default)]
struct Inner {
    user: Option<AuthUser>,
    observers: Vec<(u64, Observer)>,
    next_id: u64,
    fail_next_sign_out: Option<String>,
}

#[derive(Clone, Default)]
pub struct InMemoryAuth {
    inner: Rc<RefCell<Inner>>,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `display_name` and notify observers.
    pub fn sign_in(&self, display_name: &str) -> AuthUser {
        let user = AuthUser {
            uid: uuid::Uuid::new_v4().to_string(),
            display_name: Some(display_name.trim().to_string()).filter(|n| !n.is_empty()),
            email: None,
        };
        tracing::debug!(uid = %user.uid, "in-memory sign-in");
        set_user(&self.inner, Some(user.clone()));
        user
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.inner.borrow().user.clone()
    }

    /// Make the next `sign_out` call resolve to an error.
    pub fn fail_next_sign_out(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().fail_next_sign_out = Some(reason.into());
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl AuthProvider for InMemoryAuth {
    fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let observer: Observer = Rc::from(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, observer.clone()));
            (id, inner.user.clone())
        };

        observer(current);

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().observers.retain(|(oid, _)| *oid != id);
            }
        })
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        let inner = self.inner.clone();
        async move {
            let failure = inner.borrow_mut().fail_next_sign_out.take();
            if let Some(reason) = failure {
                return Err(AuthError::SignOut(reason));
            }
            set_user(&inner, None);
            Ok(())
        }
        .boxed_local()
    }
}

/// Store the new identity, then notify with no borrow held so observers may
/// call back into the provider.
fn set_user(inner: &Rc<RefCell<Inner>>, user: Option<AuthUser>) {
    let observers: Vec<Observer> = {
        let mut guard = inner.borrow_mut();
        guard.user = user.clone();
        guard.observers.iter().map(|(_, o)| o.clone()).collect()
    };
    for observer in observers {
        observer(user.clone());
    }
}
