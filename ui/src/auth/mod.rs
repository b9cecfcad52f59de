//! Authentication contract consumed by the navbar.
//!
//! The navbar only needs two things from an identity service: a way to observe
//! sign-in state and a way to end the session. Providers are injected as an
//! [`AuthHandle`] prop rather than reached through a global, so shells and
//! tests can swap in whatever backend they like.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::core::subscription::Subscription;

mod memory;
pub use memory::InMemoryAuth;

/// Identity reported by the provider while someone is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
        }
    }

    /// Best human-readable name available.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("sign-out failed: {0}")]
    SignOut(String),
    #[error("authentication service unavailable")]
    Unavailable,
}

/// Observer callback handed to [`AuthProvider::subscribe`].
pub type AuthCallback = Box<dyn Fn(Option<AuthUser>)>;

pub trait AuthProvider {
    /// Observe sign-in state. The callback fires once with the current user
    /// and again on every change until the returned subscription is released.
    fn subscribe(&self, callback: AuthCallback) -> Subscription;

    /// End the current session.
    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>>;
}

/// Shared, cheaply cloneable provider reference usable as a component prop.
#[derive(Clone)]
pub struct AuthHandle(Rc<dyn AuthProvider>);

impl AuthHandle {
    pub fn new(provider: impl AuthProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn from_rc(provider: Rc<dyn AuthProvider>) -> Self {
        Self(provider)
    }
}

impl Deref for AuthHandle {
    type Target = dyn AuthProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AuthHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthHandle(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_display_name_then_email() {
        let mut user = AuthUser::new("u-1");
        assert_eq!(user.label(), "u-1");

        user.email = Some("ada@example.com".into());
        assert_eq!(user.label(), "ada@example.com");

        user.display_name = Some("Ada".into());
        assert_eq!(user.label(), "Ada");
    }

    #[test]
    fn handles_compare_by_identity() {
        let auth = InMemoryAuth::new();
        let a = AuthHandle::new(auth.clone());
        let b = a.clone();
        let c = AuthHandle::new(auth);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
