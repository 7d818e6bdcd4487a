//! DOM Abstractions
//!
//! The slice of the document the bootstrapper touches. Implemented for
//! `web_sys` types in the browser and by an in-memory fake in tests.

use crate::error::PageError;

/// Called with the control whose value changed
pub type ChangeHandler<E> = Box<dyn Fn(&E)>;

/// Called on form submit; may cancel the submission
pub type SubmitHandler = Box<dyn Fn(&dyn SubmitEvent)>;

pub trait SubmitEvent {
    /// Stop the browser's default form submission
    fn prevent_default(&self);
}

pub trait PageElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current value of a form control, `None` for anything else
    fn value(&self) -> Option<String>;

    fn on_change(&self, handler: ChangeHandler<Self>) -> Result<(), PageError>;

    fn on_submit(&self, handler: SubmitHandler) -> Result<(), PageError>;
}

pub trait PageDocument: Clone + 'static {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, PageError>;

    /// `element_by_id` that reports the missing id as an error
    fn require(&self, id: &str) -> Result<Self::Element, PageError> {
        self.element_by_id(id).ok_or_else(|| PageError::missing(format!("#{}", id)))
    }
}
