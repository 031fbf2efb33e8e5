//! Site configuration baked into the bundle from `folio.toml`.

use folio::FolioConfig;
use wasm_bindgen::JsValue;

const SITE_TOML: &str = include_str!("../folio.toml");

/// Parse the embedded config; a broken file logs and falls back to defaults.
pub fn site_config() -> FolioConfig {
    FolioConfig::from_toml_str(SITE_TOML).unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[folio] folio.toml rejected, using defaults: {err}"
        )));
        FolioConfig::default()
    })
}
