//! `web_sys` implementations of the folio browser traits.

use folio::resume::{self, AnalyticsHook, DownloadSurface, ResumeAsset};
use folio::theme::{Theme, ThemeStore};
use folio::{Error, Result};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn surface_err(context: &str, err: JsValue) -> Error {
    Error::Surface(format!("{context}: {}", err.as_string().unwrap_or_else(|| format!("{err:?}"))))
}

/// `window.localStorage`. Private browsing can deny access; reads then
/// return nothing and writes fail.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| Error::Surface("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| surface_err("localStorage.setItem", e))
    }
}

/// Whether the OS asks for a dark colour scheme.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Put the resolved theme class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let resolved = theme.resolve(prefers_dark());
    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    let _ = classes.add_1(resolved.as_str());
}

/// The live document.
pub struct DomSurface {
    document: web_sys::Document,
}

impl DomSurface {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl DownloadSurface for DomSurface {
    type Anchor = web_sys::HtmlAnchorElement;

    fn create_anchor(&self, href: &str, file_name: &str) -> Result<Self::Anchor> {
        let anchor = self
            .document
            .create_element("a")
            .map_err(|e| surface_err("createElement", e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| Error::Surface("createElement(a) is not an anchor".into()))?;
        anchor.set_href(href);
        anchor.set_download(file_name);
        Ok(anchor)
    }

    fn attach(&self, anchor: &Self::Anchor) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| Error::Surface("document has no body".into()))?;
        body.append_child(anchor)
            .map(|_| ())
            .map_err(|e| surface_err("appendChild", e))
    }

    fn click(&self, anchor: &Self::Anchor) -> Result<()> {
        anchor.click();
        Ok(())
    }

    fn detach(&self, anchor: &Self::Anchor) {
        anchor.remove();
    }

    fn open_tab(&self, href: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Surface("no window".into()))?;
        window
            .open_with_url_and_target(href, "_blank")
            .map(|_| ())
            .map_err(|e| surface_err("window.open", e))
    }
}

/// Google Analytics `gtag`, when the page loaded it.
pub struct Gtag {
    gtag: Function,
}

impl Gtag {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let gtag = Reflect::get(&window, &JsValue::from_str("gtag")).ok()?;
        let gtag = gtag.dyn_into::<Function>().ok()?;
        Some(Self { gtag })
    }
}

impl AnalyticsHook for Gtag {
    fn event(&self, action: &str, category: &str, label: &str, value: u32) {
        let params = Object::new();
        let _ = Reflect::set(&params, &"event_category".into(), &category.into());
        let _ = Reflect::set(&params, &"event_label".into(), &label.into());
        let _ = Reflect::set(&params, &"value".into(), &JsValue::from(value));
        let args = Array::of3(&"event".into(), &action.into(), &params);
        let _ = self.gtag.apply(&JsValue::NULL, &args);
    }
}

/// Write `text` to the clipboard, resolving once the browser accepts it.
pub async fn copy_text(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Surface("no window".into()))?;
    let pending = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(pending)
        .await
        .map(|_| ())
        .map_err(|e| surface_err("clipboard.writeText", e))
}

/// Log a failed browser action to the console.
pub fn report(action: &str, result: Result<()>) {
    if let Err(err) = result {
        web_sys::console::warn_1(&JsValue::from_str(&format!("[folio] {action} failed: {err}")));
    }
}

fn surface() -> Result<DomSurface> {
    DomSurface::new().ok_or_else(|| Error::Surface("no document".into()))
}

/// Download the resume through a synthetic anchor.
pub fn download_resume(asset: &ResumeAsset) {
    let result = surface().and_then(|surface| {
        let gtag = Gtag::detect();
        resume::download_resume(&surface, asset, gtag.as_ref().map(|g| g as &dyn AnalyticsHook))
    });
    report("resume download", result);
}

/// Open the resume in a new tab.
pub fn preview_resume(asset: &ResumeAsset) {
    report("resume preview", surface().and_then(|s| resume::preview_resume(&s, asset)));
}
