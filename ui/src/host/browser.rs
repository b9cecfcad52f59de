//! web-sys bindings for `window` resize and `document` mousedown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use super::{HostEvents, PointerListener, ResizeListener};
use crate::core::subscription::Subscription;

/// Listens on the real browser window and document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEvents;

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Attach `closure` to `target` for `event`; the returned subscription
/// detaches it and frees the closure.
fn listen(target: EventTarget, event: &'static str, closure: Closure<dyn FnMut(Event)>) -> Subscription {
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!(?err, event, "failed to register listener");
        return Subscription::inert();
    }
    Subscription::new(move || {
        if let Err(err) =
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, event, "failed to remove listener");
        }
        drop(closure);
    })
}

impl HostEvents for BrowserEvents {
    fn viewport_width(&self) -> Option<f64> {
        window_width()
    }

    fn on_resize(&self, mut listener: ResizeListener) -> Subscription {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window; resize listener not registered");
            return Subscription::inert();
        };
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Some(width) = window_width() {
                listener(width);
            }
        });
        listen(window.into(), "resize", closure)
    }

    fn on_pointer_down(&self, mut listener: PointerListener) -> Subscription {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("no document; pointer listener not registered");
            return Subscription::inert();
        };
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| listener());
        listen(document.into(), "mousedown", closure)
    }
}
