//! Test Doubles
//!
//! In-memory document and recording services for driving the bootstrapper
//! without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::chart::ChartConfig;
use crate::dom::{ChangeHandler, PageDocument, PageElement, SubmitEvent, SubmitHandler};
use crate::error::PageError;
use crate::services::{ChartRenderer, Navigator, Notifier, PageServices, TooltipProvider};

// ========================
// Document
// ========================

#[derive(Clone, Default)]
pub struct FakeDocument {
    elements: Rc<RefCell<Vec<FakeElement>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, element: FakeElement) -> Self {
        self.elements.borrow_mut().push(element);
        self
    }

    /// Panics if the id is absent
    pub fn element(&self, id: &str) -> FakeElement {
        self.element_by_id(id).unwrap_or_else(|| panic!("no element #{}", id))
    }
}

impl PageDocument for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .find(|el| el.attribute("id").as_deref() == Some(id))
            .cloned()
    }

    /// Supports `[name]` and `[name="value"]` only
    fn query_all(&self, selector: &str) -> Result<Vec<FakeElement>, PageError> {
        let inner = selector
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| PageError::Js(format!("unsupported selector: {}", selector)))?;

        let (name, expected) = match inner.split_once('=') {
            Some((name, value)) => (name, Some(value.trim_matches('"'))),
            None => (inner, None),
        };

        Ok(self
            .elements
            .borrow()
            .iter()
            .filter(|el| match (el.attribute(name), expected) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            })
            .cloned()
            .collect())
    }
}

// ========================
// Element
// ========================

#[derive(Clone)]
pub struct FakeElement(Rc<ElementState>);

struct ElementState {
    tag: String,
    attributes: RefCell<HashMap<String, String>>,
    value: RefCell<Option<String>>,
    change_handlers: RefCell<Vec<ChangeHandler<FakeElement>>>,
    submit_handlers: RefCell<Vec<SubmitHandler>>,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        let is_control = matches!(tag, "input" | "textarea" | "select");
        Self(Rc::new(ElementState {
            tag: tag.to_string(),
            attributes: RefCell::new(HashMap::new()),
            value: RefCell::new(is_control.then(String::new)),
            change_handlers: RefCell::new(Vec::new()),
            submit_handlers: RefCell::new(Vec::new()),
        }))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    /// Set the value without firing `change`, like script assignment
    pub fn set_value(&self, value: &str) {
        *self.0.value.borrow_mut() = Some(value.to_string());
    }

    /// Set the value and fire `change`, like a user edit
    pub fn change_value(&self, value: &str) {
        self.set_value(value);
        for handler in self.0.change_handlers.borrow().iter() {
            handler(self);
        }
    }

    /// Dispatch `submit`. Returns whether the default submission goes ahead.
    pub fn submit(&self) -> bool {
        let event = FakeSubmitEvent::default();
        for handler in self.0.submit_handlers.borrow().iter() {
            handler(&event as &dyn SubmitEvent);
        }
        !event.prevented.get()
    }
}

impl PageElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn value(&self) -> Option<String> {
        self.0.value.borrow().clone()
    }

    fn on_change(&self, handler: ChangeHandler<Self>) -> Result<(), PageError> {
        self.0.change_handlers.borrow_mut().push(handler);
        Ok(())
    }

    fn on_submit(&self, handler: SubmitHandler) -> Result<(), PageError> {
        self.0.submit_handlers.borrow_mut().push(handler);
        Ok(())
    }
}

#[derive(Default)]
struct FakeSubmitEvent {
    prevented: Cell<bool>,
}

impl SubmitEvent for FakeSubmitEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

// ========================
// Services
// ========================

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub struct RecordingTooltips {
    available: Cell<bool>,
    fail_on: RefCell<Option<String>>,
    attached: RefCell<Vec<String>>,
}

impl Default for RecordingTooltips {
    fn default() -> Self {
        Self {
            available: Cell::new(true),
            fail_on: RefCell::new(None),
            attached: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingTooltips {
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Make attaching to the element with this id throw
    pub fn fail_on(&self, id: &str) {
        *self.fail_on.borrow_mut() = Some(id.to_string());
    }

    /// Ids of elements that got a tooltip
    pub fn attached(&self) -> Vec<String> {
        self.attached.borrow().clone()
    }
}

impl TooltipProvider<FakeElement> for RecordingTooltips {
    fn attach_tooltip(&self, element: &FakeElement) -> Result<(), PageError> {
        if !self.available.get() {
            return Err(PageError::LibraryUnavailable("bootstrap"));
        }
        let id = element.id();
        if self.fail_on.borrow().as_deref() == Some(id.as_str()) {
            return Err(PageError::Js(format!("cannot attach tooltip to {}", element.tag())));
        }
        self.attached.borrow_mut().push(id);
        Ok(())
    }
}

pub struct RecordingCharts {
    available: Cell<bool>,
    rendered: RefCell<Vec<(String, ChartConfig)>>,
}

impl Default for RecordingCharts {
    fn default() -> Self {
        Self {
            available: Cell::new(true),
            rendered: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingCharts {
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// (anchor id, config) per render call
    pub fn rendered(&self) -> Vec<(String, ChartConfig)> {
        self.rendered.borrow().clone()
    }
}

impl ChartRenderer<FakeElement> for RecordingCharts {
    fn render_chart(&self, anchor: &FakeElement, config: &ChartConfig) -> Result<(), PageError> {
        if !self.available.get() {
            return Err(PageError::LibraryUnavailable("Chart"));
        }
        self.rendered.borrow_mut().push((anchor.id(), config.clone()));
        Ok(())
    }
}

/// Recording services plus the `PageServices` view over them
#[derive(Default)]
pub struct Harness {
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub tooltips: Rc<RecordingTooltips>,
    pub charts: Rc<RecordingCharts>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> PageServices<FakeElement> {
        PageServices {
            navigator: self.navigator.clone(),
            notifier: self.notifier.clone(),
            tooltips: self.tooltips.clone(),
            charts: self.charts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_all_by_attribute_value() {
        let doc = FakeDocument::new()
            .with(FakeElement::new("a").with_id("x").with_attr("data-bs-toggle", "tooltip"))
            .with(FakeElement::new("a").with_id("y").with_attr("data-bs-toggle", "modal"));

        let found = doc.query_all(r#"[data-bs-toggle="tooltip"]"#).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "x");
        assert_eq!(doc.query_all("[data-bs-toggle]").unwrap().len(), 2);
        assert!(doc.query_all(".tooltip").is_err());
    }

    #[test]
    fn test_only_controls_have_values() {
        assert_eq!(FakeElement::new("input").value(), Some(String::new()));
        assert_eq!(FakeElement::new("div").value(), None);
    }
}
