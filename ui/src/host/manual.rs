//! Host event hub driven explicitly by the embedding shell.
//!
//! Native shells forward window resizes and app-level pointer presses into
//! it; tests use it to simulate a browser.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{HostEvents, PointerListener, ResizeListener};
use crate::core::subscription::Subscription;

#[derive(Default)]
struct Registry {
    width: Option<f64>,
    next_id: u64,
    resize: Vec<(u64, Rc<RefCell<ResizeListener>>)>,
    pointer: Vec<(u64, Rc<RefCell<PointerListener>>)>,
}

impl Registry {
    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Clone, Default)]
pub struct ManualEvents {
    registry: Rc<RefCell<Registry>>,
}

impl ManualEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: f64) -> Self {
        let events = Self::default();
        events.registry.borrow_mut().width = Some(width);
        events
    }

    pub fn dispatch_resize(&self, width: f64) {
        let listeners: Vec<_> = {
            let mut registry = self.registry.borrow_mut();
            registry.width = Some(width);
            registry.resize.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            (listener.borrow_mut())(width);
        }
    }

    pub fn dispatch_pointer_down(&self) {
        let listeners: Vec<_> = self
            .registry
            .borrow()
            .pointer
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            (listener.borrow_mut())();
        }
    }

    pub fn resize_listener_count(&self) -> usize {
        self.registry.borrow().resize.len()
    }

    pub fn pointer_listener_count(&self) -> usize {
        self.registry.borrow().pointer.len()
    }

    pub fn listener_count(&self) -> usize {
        self.resize_listener_count() + self.pointer_listener_count()
    }
}

impl HostEvents for ManualEvents {
    fn viewport_width(&self) -> Option<f64> {
        self.registry.borrow().width
    }

    fn on_resize(&self, listener: ResizeListener) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.take_id();
            registry.resize.push((id, Rc::new(RefCell::new(listener))));
            id
        };
        let weak = Rc::downgrade(&self.registry);
        Subscription::new(move || remove(&weak, |r| r.resize.retain(|(lid, _)| *lid != id)))
    }

    fn on_pointer_down(&self, listener: PointerListener) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.take_id();
            registry.pointer.push((id, Rc::new(RefCell::new(listener))));
            id
        };
        let weak = Rc::downgrade(&self.registry);
        Subscription::new(move || remove(&weak, |r| r.pointer.retain(|(lid, _)| *lid != id)))
    }
}

fn remove(weak: &Weak<RefCell<Registry>>, f: impl FnOnce(&mut Registry)) {
    if let Some(registry) = weak.upgrade() {
        f(&mut registry.borrow_mut());
    }
}
