//! Scoped registration of every listener the navbar needs.

use std::rc::Rc;

use super::state::NavEvent;
use crate::auth::AuthProvider;
use crate::core::subscription::Subscription;
use crate::host::HostEvents;

/// Sink that folds an event into whatever holds the navbar state.
pub type NavDispatch = Rc<dyn Fn(NavEvent)>;

/// The auth observer, the document pointer listener and the resize listener,
/// acquired together and released together.
#[derive(Debug)]
pub struct NavbarSession {
    auth: Subscription,
    pointer: Subscription,
    resize: Subscription,
}

impl NavbarSession {
    pub fn acquire(auth: &dyn AuthProvider, host: &dyn HostEvents, dispatch: NavDispatch) -> Self {
        let on_auth = dispatch.clone();
        let auth = auth.subscribe(Box::new(move |user| on_auth(NavEvent::AuthChanged(user))));

        let on_press = dispatch.clone();
        let pointer = host.on_pointer_down(Box::new(move || on_press(NavEvent::DocumentPointerDown)));

        let resize = host.on_resize(Box::new(move |width| dispatch(NavEvent::Resized(width))));

        tracing::debug!("navbar listeners registered");
        Self {
            auth,
            pointer,
            resize,
        }
    }

    pub fn is_active(&self) -> bool {
        self.auth.is_active() && self.pointer.is_active() && self.resize.is_active()
    }

    pub fn release(&mut self) {
        if !(self.auth.is_active() || self.pointer.is_active() || self.resize.is_active()) {
            return;
        }
        self.auth.release();
        self.pointer.release();
        self.resize.release();
        tracing::debug!("navbar listeners released");
    }
}

impl Drop for NavbarSession {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::InMemoryAuth;
    use crate::host::ManualEvents;
    use crate::navbar::NavbarState;
    use std::cell::RefCell;

    fn state_sink() -> (Rc<RefCell<NavbarState>>, NavDispatch) {
        let state = Rc::new(RefCell::new(NavbarState::new()));
        let target = state.clone();
        (state, Rc::new(move |event: NavEvent| target.borrow_mut().apply(event)))
    }

    #[test]
    fn acquire_registers_three_listeners() {
        let auth = InMemoryAuth::new();
        let host = ManualEvents::new();
        let (_state, dispatch) = state_sink();

        let session = NavbarSession::acquire(&auth, &host, dispatch);

        assert!(session.is_active());
        assert_eq!(auth.subscriber_count(), 1);
        assert_eq!(host.resize_listener_count(), 1);
        assert_eq!(host.pointer_listener_count(), 1);
    }

    #[test]
    fn release_frees_everything_once() {
        let auth = InMemoryAuth::new();
        let host = ManualEvents::new();
        let (_state, dispatch) = state_sink();

        let mut session = NavbarSession::acquire(&auth, &host, dispatch);
        session.release();
        session.release();

        assert!(!session.is_active());
        assert_eq!(auth.subscriber_count(), 0);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn remounting_does_not_accumulate_resize_listeners() {
        let auth = InMemoryAuth::new();
        let host = ManualEvents::new();

        for _ in 0..3 {
            let (_state, dispatch) = state_sink();
            let _session = NavbarSession::acquire(&auth, &host, dispatch);
            assert_eq!(host.resize_listener_count(), 1);
        }
        assert_eq!(host.resize_listener_count(), 0);
    }
}
