//! Browser implementation of the scrub controller's listener and timer seams.

use scrub_core::{ListenKind, Scheduler};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Callbacks installed while a session is live. Owned here for the scheduler's
/// lifetime so a handler can unregister itself while it runs.
pub struct Handlers {
    pub on_move: Closure<dyn FnMut(web::MouseEvent)>,
    pub on_release: Closure<dyn FnMut(web::MouseEvent)>,
    pub on_show: Closure<dyn FnMut()>,
}

pub struct WebScheduler {
    window: web::Window,
    root: web::EventTarget,
    handlers: Handlers,
}

impl WebScheduler {
    /// `root` receives the global listeners, normally `document.documentElement`.
    pub fn new(window: web::Window, root: web::EventTarget, handlers: Handlers) -> Self {
        Self {
            window,
            root,
            handlers,
        }
    }
}

/// Registered DOM listener; dropping it removes the listener.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    capture: bool,
}

impl ListenerGuard {
    fn attach(
        target: &web::EventTarget,
        event: &'static str,
        callback: &js_sys::Function,
        capture: bool,
    ) -> Self {
        if let Err(e) = target.add_event_listener_with_callback_and_bool(event, callback, capture) {
            log::error!("[scrub] add {} listener failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            callback: callback.clone(),
            capture,
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            &self.callback,
            self.capture,
        );
    }
}

/// Pending `setTimeout`; dropping it clears the timeout.
pub struct TimeoutGuard {
    window: web::Window,
    handle: Option<i32>,
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Scheduler for WebScheduler {
    type Listener = ListenerGuard;
    type Task = TimeoutGuard;

    fn listen(&mut self, kind: ListenKind) -> ListenerGuard {
        match kind {
            ListenKind::Release => ListenerGuard::attach(
                &self.root,
                "mouseup",
                self.handlers.on_release.as_ref().unchecked_ref(),
                false,
            ),
            ListenKind::Move => ListenerGuard::attach(
                &self.root,
                "mousemove",
                self.handlers.on_move.as_ref().unchecked_ref(),
                true,
            ),
        }
    }

    fn defer_show(&mut self, delay: Duration) -> TimeoutGuard {
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.handlers.on_show.as_ref().unchecked_ref(),
                ms,
            ) {
            Ok(h) => Some(h),
            Err(e) => {
                log::error!("[scrub] setTimeout failed; overlay will not show: {:?}", e);
                None
            }
        };
        TimeoutGuard {
            window: self.window.clone(),
            handle,
        }
    }
}
