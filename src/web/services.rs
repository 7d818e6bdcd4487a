//! Browser Services
//!
//! `window.location`, `window.alert`, Bootstrap tooltips and Chart.js.

use std::rc::Rc;

use web_sys::Element;

use super::bindings::{self, Chart, Tooltip};
use crate::chart::ChartConfig;
use crate::error::PageError;
use crate::services::{ChartRenderer, Navigator, Notifier, PageServices, TooltipProvider};

pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn go_to(&self, path: &str) {
        let Some(win) = web_sys::window() else { return };
        if let Err(err) = win.location().set_href(path) {
            log::error!("navigation to {} failed: {}", path, PageError::from_js(err));
        }
    }
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn warn(&self, message: &str) {
        let Some(win) = web_sys::window() else { return };
        if let Err(err) = win.alert_with_message(message) {
            log::error!("alert failed: {}", PageError::from_js(err));
        }
    }
}

pub struct BootstrapTooltips;

impl TooltipProvider<Element> for BootstrapTooltips {
    fn attach_tooltip(&self, element: &Element) -> Result<(), PageError> {
        if !bindings::has_global("bootstrap") {
            return Err(PageError::LibraryUnavailable("bootstrap"));
        }
        Tooltip::new(element).map_err(PageError::from_js)?;
        Ok(())
    }
}

pub struct ChartJs;

impl ChartRenderer<Element> for ChartJs {
    fn render_chart(&self, anchor: &Element, config: &ChartConfig) -> Result<(), PageError> {
        if !bindings::has_global("Chart") {
            return Err(PageError::LibraryUnavailable("Chart"));
        }
        let js_config = serde_wasm_bindgen::to_value(config)
            .map_err(|e| PageError::Js(e.to_string()))?;
        Chart::new(anchor, &js_config).map_err(PageError::from_js)?;
        Ok(())
    }
}

/// Services backed by the real page
pub fn browser_services() -> PageServices<Element> {
    PageServices {
        navigator: Rc::new(LocationNavigator),
        notifier: Rc::new(AlertNotifier),
        tooltips: Rc::new(BootstrapTooltips),
        charts: Rc::new(ChartJs),
    }
}
