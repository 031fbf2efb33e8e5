//! One-section-at-a-time 3D navigation.
//!
//! [`PerspectiveScroll`] owns a [`SectionNavigator`] and publishes a
//! [`NavigatorHandle`] in the [`ActiveNavigator`] context slot so the
//! navigation bar can jump to a section instead of scrolling the window.

use std::cell::Cell;
use std::rc::Rc;

use folio::FolioConfig;
use folio::perspective::{NavInput, NavKey, SectionNavigator};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::frame::{ListenerGuard, now_ms};

const TRANSITION: &str =
    "transform 0.8s cubic-bezier(0.4, 0, 0.2, 1), opacity 0.8s ease, filter 0.8s ease";

/// App-level slot holding the mounted navigator, so the navigation bar
/// (outside the routed view) can drive it.
#[derive(Clone, Copy)]
pub struct ActiveNavigator(pub RwSignal<Option<NavigatorHandle>>);

impl Default for ActiveNavigator {
    fn default() -> Self {
        Self(RwSignal::new(None))
    }
}

impl ActiveNavigator {
    pub fn get(&self) -> Option<NavigatorHandle> {
        self.0.get()
    }
}

/// Shared access to the active navigator.
#[derive(Clone, Copy)]
pub struct NavigatorHandle {
    navigator: RwSignal<SectionNavigator>,
    ids: StoredValue<Vec<&'static str>>,
}

impl NavigatorHandle {
    /// Feed an input; returns the new index when a transition starts.
    pub fn send(&self, input: NavInput) -> Option<usize> {
        let now = now_ms();
        self.navigator
            .try_update(|nav| nav.handle(input, now))
            .flatten()
    }

    /// Jump to the section with DOM id `id`. Unknown ids are ignored.
    pub fn go_to_id(&self, id: &str) -> bool {
        let index = self
            .ids
            .with_value(|ids| ids.iter().position(|candidate| *candidate == id));
        index.is_some_and(|i| self.send(NavInput::GoTo(i)).is_some())
    }

    /// Id of the section in front, tracked.
    pub fn current_id(&self) -> Option<&'static str> {
        let index = self.navigator.with(|nav| nav.current());
        self.ids.with_value(|ids| ids.get(index).copied())
    }
}

fn wheel(handle: NavigatorHandle) -> impl FnMut(web_sys::Event) {
    move |event| {
        let Ok(wheel) = event.dyn_into::<web_sys::WheelEvent>() else {
            return;
        };
        wheel.prevent_default();
        handle.send(NavInput::Wheel {
            delta_y: wheel.delta_y(),
        });
    }
}

fn first_touch_y(event: web_sys::Event, changed: bool) -> Option<f64> {
    let touch = event.dyn_into::<web_sys::TouchEvent>().ok()?;
    let list = if changed {
        touch.changed_touches()
    } else {
        touch.touches()
    };
    list.get(0).map(|t| t.client_y() as f64)
}

fn keydown(handle: NavigatorHandle) -> impl FnMut(web_sys::Event) {
    move |event| {
        let Ok(key) = event.dyn_into::<web_sys::KeyboardEvent>() else {
            return;
        };
        let Some(nav_key) = NavKey::from_key(&key.key()) else {
            return;
        };
        key.prevent_default();
        handle.send(NavInput::Key(nav_key));
    }
}

/// Stack of full-screen sections navigated by wheel, swipe, keys or dots.
#[component]
pub fn PerspectiveScroll(sections: Vec<(&'static str, AnyView)>) -> impl IntoView {
    let config = use_context::<FolioConfig>().unwrap_or_default();
    let ids: Vec<&'static str> = sections.iter().map(|(id, _)| *id).collect();
    let total = ids.len();
    let handle = NavigatorHandle {
        navigator: RwSignal::new(SectionNavigator::new(total, config.navigator)),
        ids: StoredValue::new(ids),
    };
    if let Some(slot) = use_context::<ActiveNavigator>() {
        slot.0.set(Some(handle));
        on_cleanup(move || slot.0.set(None));
    }

    let container = NodeRef::<leptos::html::Div>::new();
    let guards = StoredValue::new_local(Vec::<ListenerGuard>::new());

    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        let target: web_sys::EventTarget = el.into();
        let start_y = Rc::new(Cell::new(None::<f64>));

        let mut attached = Vec::new();
        attached.extend(ListenerGuard::new(&target, "wheel", wheel(handle)));
        let on_start = Rc::clone(&start_y);
        attached.extend(ListenerGuard::new(&target, "touchstart", move |event| {
            on_start.set(first_touch_y(event, false));
        }));
        attached.extend(ListenerGuard::new(&target, "touchend", move |event| {
            if let (Some(start_y), Some(end_y)) = (start_y.take(), first_touch_y(event, true)) {
                handle.send(NavInput::Swipe { start_y, end_y });
            }
        }));
        attached.extend(ListenerGuard::window("keydown", keydown(handle)));
        guards.set_value(attached);
    });
    on_cleanup(move || guards.set_value(Vec::new()));

    let layers = sections
        .into_iter()
        .enumerate()
        .map(|(index, (id, view))| {
            let style = move || {
                let depth = handle.navigator.with(|nav| nav.depth(index));
                format!(
                    "transform: {}; opacity: {}; filter: {}; z-index: {}; pointer-events: {}; transition: {TRANSITION};",
                    depth.transform(),
                    depth.opacity,
                    depth.filter(),
                    depth.z_index,
                    if depth.interactive { "auto" } else { "none" },
                )
            };
            let hidden = move || !handle.navigator.with(|nav| nav.depth(index).interactive);
            view! {
                <div class="perspective-layer" data-section=id style=style aria-hidden=move || hidden().to_string()>
                    {view}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..total)
        .map(|index| {
            view! {
                <button
                    class="perspective-dot"
                    class:active=move || handle.navigator.with(|nav| nav.current() == index)
                    aria-label=format!("Go to section {}", index + 1)
                    on:click=move |_| {
                        handle.send(NavInput::GoTo(index));
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div node_ref=container class="perspective-scroll">
            <div class="perspective-stage">{layers}</div>
            <nav class="perspective-dots" aria-label="Sections">{dots}</nav>
        </div>
    }
}
