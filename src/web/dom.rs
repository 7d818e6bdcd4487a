//! Browser DOM
//!
//! `PageDocument` / `PageElement` over `web_sys`. Listeners are leaked with
//! `Closure::forget`; they live as long as the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{ChangeHandler, PageDocument, PageElement, SubmitEvent, SubmitHandler};
use crate::error::PageError;

impl PageDocument for Document {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        let nodes = self.query_selector_all(selector).map_err(PageError::from_js)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl PageElement for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        self.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
    }

    fn on_change(&self, handler: ChangeHandler<Self>) -> Result<(), PageError> {
        let target = self.clone();
        let on_change = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            handler(&target);
        });
        self.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(PageError::from_js)?;
        on_change.forget();
        Ok(())
    }

    fn on_submit(&self, handler: SubmitHandler) -> Result<(), PageError> {
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            let event: &dyn SubmitEvent = &ev;
            handler(event);
        });
        self.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(PageError::from_js)?;
        on_submit.forget();
        Ok(())
    }
}

impl SubmitEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}
