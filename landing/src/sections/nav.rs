use folio::content::{self, PROFILE};
use folio::nav::{self, SectionProbe};
use folio::theme::{Theme, ThemeController};
use folio::FolioConfig;
use leptos::prelude::*;

use crate::browser::{self, LocalStorage};
use crate::frame::ListenerGuard;
use crate::perspective::ActiveNavigator;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Section under the probe line, from live element rects.
fn section_in_view() -> Option<&'static str> {
    let document = web_sys::window()?.document()?;
    let probes: Vec<SectionProbe<'static>> = content::NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let rect = document.get_element_by_id(item.anchor)?.get_bounding_client_rect();
            Some(SectionProbe {
                id: item.anchor,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();
    nav::active_section(&probes, nav::PROBE_LINE)
}

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_context::<FolioConfig>().unwrap_or_default();
    let slot = use_context::<ActiveNavigator>().unwrap_or_default();

    let controller = StoredValue::new_local(ThemeController::new(
        LocalStorage,
        config.theme.storage_key.clone(),
        config.theme.default,
    ));
    let theme = RwSignal::new(controller.with_value(|c| c.current()));
    Effect::new(move |_| browser::apply_theme(theme.get()));

    let toggle_theme = move |_| {
        let toggled = controller
            .try_update_value(|c| c.toggle(browser::prefers_dark()))
            .unwrap_or(Ok(Theme::Dark));
        match toggled {
            Ok(next) => theme.set(next),
            Err(err) => {
                // storage refused; still switch for this session
                let next = match theme.get_untracked().resolve(browser::prefers_dark()) {
                    Theme::Dark => Theme::Light,
                    _ => Theme::Dark,
                };
                theme.set(next);
                browser::report("theme save", Err(err));
            }
        }
    };

    let (scrolled, set_scrolled) = signal(nav::is_scrolled(scroll_y()));
    let (in_view, set_in_view) = signal(section_in_view());
    let (menu_open, set_menu_open) = signal(false);
    let scroll_guard = StoredValue::new_local(ListenerGuard::window("scroll", move |_| {
        set_scrolled.set(nav::is_scrolled(scroll_y()));
        set_in_view.set(section_in_view());
    }));
    on_cleanup(move || scroll_guard.set_value(None));

    let active = move || match slot.get() {
        Some(handle) => handle.current_id(),
        None => in_view.get(),
    };
    let go = move |anchor: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            set_menu_open.set(false);
            if let Some(handle) = slot.get_untracked() {
                ev.prevent_default();
                handle.go_to_id(anchor);
            }
        }
    };

    let links = move || {
        content::visible_nav_items()
            .map(|item| {
                view! {
                    <a
                        href=format!("/#{}", item.anchor)
                        class="nav-link"
                        class:active=move || active() == Some(item.anchor)
                        on:click=go(item.anchor)
                    >
                        {item.name}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav" class:scrolled=move || scrolled.get() || slot.get().is_some()>
            <div class="nav-inner">
                <a href="/#home" class="nav-brand" on:click=go("home")>
                    <span class="nav-logo">{PROFILE.initials}</span>
                    <span class="nav-title">{PROFILE.name}</span>
                </a>
                <div class="nav-links">
                    {links}
                    <a href="/tour" class="nav-link">"Tour"</a>
                    <button class="nav-theme" aria-label="Toggle theme" on:click=toggle_theme>
                        {move || match theme.get().resolve(browser::prefers_dark()) {
                            Theme::Dark => "☀",
                            _ => "☾",
                        }}
                    </button>
                </div>
                <button
                    class="nav-menu"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">{links}</div>
            </Show>
        </nav>
    }
}
