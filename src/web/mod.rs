//! Browser Entry
//!
//! Waits for the DOM to be parsed, loads the page config and runs the
//! bootstrapper against the live document.

mod bindings;
mod dom;
pub mod services;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config::{PageConfig, CONFIG_ELEMENT_ID};
use crate::dom::PageDocument;
use crate::error::PageError;
use crate::page::{initialize_page, BootReport};

pub use services::browser_services;

/// Start the page glue. Runs the bootstrapper now if the document is already
/// parsed, otherwise once on `DOMContentLoaded`.
pub fn start() {
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("console logger already installed");
    }
    log::set_max_level(PageConfig::default().log_level);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document, page glue not started");
        return;
    };

    if dom_parsed(&document.ready_state()) {
        run(&document);
        return;
    }

    let doc = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        run(&doc);
    });
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("cannot wait for DOMContentLoaded: {}", PageError::from_js(err));
        return;
    }
    on_ready.forget();
}

/// `document.readyState` is past `"loading"`
fn dom_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn run(document: &Document) -> BootReport {
    let config = load_config(document);
    log::set_max_level(config.log_level);
    initialize_page(document, &config, &browser_services())
}

/// Inline JSON override if the page has one, defaults otherwise
fn load_config(document: &Document) -> PageConfig {
    let Some(json) = document
        .element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };

    PageConfig::from_json(&json).unwrap_or_else(|err| {
        log::warn!("#{} ignored: {}", CONFIG_ELEMENT_ID, err);
        PageConfig::default()
    })
}
