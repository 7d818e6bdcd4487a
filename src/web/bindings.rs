//! Script Library Bindings
//!
//! Constructors of the globals the server templates load: Bootstrap's
//! `bootstrap.Tooltip` and Chart.js' `Chart`.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Tooltip;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(anchor: &Element, config: &JsValue) -> Result<Chart, JsValue>;
}

/// Whether `name` is defined on the global object
pub fn has_global(name: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}
