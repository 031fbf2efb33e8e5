//! Console greeting for visitors who open the developer tools.

use folio::algorithms::{self, Algorithm};
use folio::content::{CONTACT_LINKS, PROFILE};
use js_sys::{Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

const SAMPLE: [u32; 8] = [42, 7, 93, 18, 64, 3, 77, 29];

fn styled(text: &str, style: &str) {
    web_sys::console::log_2(&JsValue::from_str(&format!("%c{text}")), &JsValue::from_str(style));
}

fn blank() {
    web_sys::console::log_1(&JsValue::from_str(""));
}

fn banner() -> String {
    format!(
        r#"
    _    ____
   / \  / ___|
  / _ \ \___ \
 / ___ \ ___) |
/_/   \_\____/

  {}
  {}
"#,
        PROFILE.name, PROFILE.title
    )
}

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        print_banner();
        register_commands();
    });

    view! {}
}

fn print_banner() {
    styled(&banner(), "color: #3b82f6; font-family: monospace; font-size: 11px;");
    blank();
    styled("=== THINGS TO TRY ===", "color: #f59e0b; font-weight: bold;");
    styled("(o_o) folio.sort('quick')  step through a sort right here", "color: #f59e0b;");
    styled("(^_^) folio.contact()      where to find me", "color: #10b981;");
    styled("(>_<) or scroll down to the interactive demos", "color: #8b5cf6;");
    blank();
    styled("Built with Rust + Leptos, canvases painted through web-sys.", "color: #888;");
}

/// One console line per recorded frame.
fn print_sort(name: JsValue) {
    let name = name.as_string().unwrap_or_else(|| "bubble".to_string());
    let algorithm = match name.parse::<Algorithm>() {
        Ok(a) if !a.is_search() => a,
        _ => {
            styled(&format!("unknown sort `{name}`; try bubble, quick or merge"), "color: #ef4444;");
            return;
        }
    };
    let frames = algorithms::record(algorithm, &SAMPLE, 0);
    styled(
        &format!("=== {} ({}) : {} frames ===", algorithm.label(), algorithm.complexity(), frames.len()),
        "color: #3b82f6; font-weight: bold;",
    );
    for (step, frame) in frames.iter().enumerate() {
        let row = frame
            .values()
            .iter()
            .map(|v| format!("{v:>3}"))
            .collect::<Vec<_>>()
            .join("");
        styled(&format!("{step:>3} |{row}"), "color: #94a3b8; font-family: monospace;");
    }
}

fn print_contact() {
    blank();
    styled(&format!("✉ {}", PROFILE.email), "color: #3b82f6;");
    for link in CONTACT_LINKS {
        styled(&format!("{} {}", link.label, link.href), "color: #10b981;");
    }
    styled(&format!("📍 {}", PROFILE.location), "color: #888;");
}

/// `window.folio` namespace. The closures live for the page lifetime.
fn register_commands() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let namespace = Object::new();

    let sort = Closure::wrap(Box::new(print_sort) as Box<dyn Fn(JsValue)>);
    let _ = Reflect::set(&namespace, &JsValue::from_str("sort"), sort.as_ref());
    sort.forget();

    let contact = Closure::wrap(Box::new(print_contact) as Box<dyn Fn()>);
    let _ = Reflect::set(&namespace, &JsValue::from_str("contact"), contact.as_ref());
    contact.forget();

    let _ = Reflect::set(&window, &JsValue::from_str("folio"), &namespace);
}
