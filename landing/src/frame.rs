//! Browser schedulers and listener guards.
//!
//! Every loop a component starts is owned by a value that cancels it on
//! drop; components park that value in a local `StoredValue` and clear it in
//! `on_cleanup`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio::schedule::{Scheduler, Scoped};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// `requestAnimationFrame` handles.
pub struct AnimationFrames;

impl Scheduler for AnimationFrames {
    type Handle = i32;

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// `setInterval` handles.
pub struct Intervals;

impl Scheduler for Intervals {
    type Handle = i32;

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// `setTimeout` handles.
pub struct Timeouts;

impl Scheduler for Timeouts {
    type Handle = i32;

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `tick(timestamp_ms)` once per animation frame until dropped.
pub struct AnimationLoop {
    _scope: Rc<RefCell<Scoped<AnimationFrames>>>,
    _callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let scope = Rc::new(RefCell::new(Scoped::new(AnimationFrames)));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let weak_scope: Weak<RefCell<Scoped<AnimationFrames>>> = Rc::downgrade(&scope);
        let weak_callback = Rc::downgrade(&callback);
        let closure = Closure::wrap(Box::new(move |now: f64| {
            tick(now);
            // Both are gone once the loop has been dropped.
            let (Some(scope), Some(callback)) = (weak_scope.upgrade(), weak_callback.upgrade())
            else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let next = callback
                .borrow()
                .as_ref()
                .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            if let Some(handle) = next {
                scope.borrow_mut().rearm(handle);
            }
        }) as Box<dyn FnMut(f64)>);

        let first = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;
        scope.borrow_mut().replace(first);
        *callback.borrow_mut() = Some(closure);

        Some(Self {
            _scope: scope,
            _callback: callback,
        })
    }
}

/// Calls `tick()` every `period_ms` until dropped.
pub struct IntervalLoop {
    _scope: Scoped<Intervals>,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalLoop {
    pub fn start(period_ms: u32, tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()?;
        let mut scope = Scoped::new(Intervals);
        scope.replace(handle);
        Some(Self {
            _scope: scope,
            _callback: callback,
        })
    }
}

/// One-shot `setTimeout` that is cancelled if dropped before it fires.
pub struct Timeout {
    _scope: Scoped<Timeouts>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn start(delay_ms: u32, fire: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut fire = Some(fire);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(fire) = fire.take() {
                fire();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;
        let mut scope = Scoped::new(Timeouts);
        scope.replace(handle);
        Some(Self {
            _scope: scope,
            _callback: callback,
        })
    }
}

/// Event listener that is removed when the guard drops.
pub struct ListenerGuard {
    target: web_sys::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: &web_sys::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Listener on `window`.
    pub fn window(kind: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::new(window.as_ref(), kind, handler)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// `performance.now()`, or 0 outside a browser.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
