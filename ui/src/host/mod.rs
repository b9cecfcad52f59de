//! Window/document listener bindings.
//!
//! The navbar reacts to two host-level events: viewport resizes and
//! document-wide pointer presses. [`HostEvents`] abstracts where those come
//! from so the same component runs in a browser (web-sys listeners) and in
//! native shells or tests (a [`ManualEvents`] hub fed by the caller).

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::core::subscription::Subscription;

mod manual;
pub use manual::ManualEvents;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserEvents;

pub type ResizeListener = Box<dyn FnMut(f64)>;
pub type PointerListener = Box<dyn FnMut()>;

pub trait HostEvents {
    /// Current viewport width in logical pixels, when known.
    fn viewport_width(&self) -> Option<f64>;

    /// Called with the new width after every resize.
    fn on_resize(&self, listener: ResizeListener) -> Subscription;

    /// Called for every pointer/mouse press anywhere in the document, after
    /// element-level handlers have run.
    fn on_pointer_down(&self, listener: PointerListener) -> Subscription;
}

#[derive(Clone)]
pub struct HostHandle(Rc<dyn HostEvents>);

impl HostHandle {
    pub fn new(host: impl HostEvents + 'static) -> Self {
        Self(Rc::new(host))
    }

    pub fn from_rc(host: Rc<dyn HostEvents>) -> Self {
        Self(host)
    }

    /// Browser window/document listeners.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(BrowserEvents)
    }
}

impl Deref for HostHandle {
    type Target = dyn HostEvents;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostHandle(..)")
    }
}
