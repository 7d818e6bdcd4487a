//! Page Errors
//!
//! Everything that can stop a bootstrap step or a form submission.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("required field is empty: {field}")]
    EmptyRequiredField { field: String },

    #[error("script library not loaded: {0}")]
    LibraryUnavailable(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(String),
}

impl PageError {
    pub fn missing(target: impl Into<String>) -> Self {
        PageError::MissingElement(target.into())
    }

    /// Convert a thrown JS value, preferring `Error.message` when there is one
    pub fn from_js(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return PageError::Js(String::from(err.message()));
        }
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }

    /// Steps that end this way are expected on pages without the widget
    pub fn is_silent(&self) -> bool {
        matches!(self, PageError::MissingElement(_))
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::Config(err.to_string())
    }
}
