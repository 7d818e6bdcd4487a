//! Page Services
//!
//! Side effects the bootstrapper needs from the host page: navigation,
//! blocking user messages and the two script libraries (Bootstrap tooltips,
//! Chart.js). Injected so the binding logic runs without a browser.

use std::rc::Rc;

use crate::chart::ChartConfig;
use crate::error::PageError;

pub trait Navigator {
    /// Full page navigation to `path`
    fn go_to(&self, path: &str);
}

pub trait Notifier {
    /// Blocking message to the user
    fn warn(&self, message: &str);
}

pub trait TooltipProvider<E> {
    fn attach_tooltip(&self, element: &E) -> Result<(), PageError>;
}

pub trait ChartRenderer<E> {
    fn render_chart(&self, anchor: &E, config: &ChartConfig) -> Result<(), PageError>;
}

/// Everything `initialize_page` calls out to.
///
/// Held in `Rc` since the handlers it registers outlive bootstrap.
pub struct PageServices<E> {
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub tooltips: Rc<dyn TooltipProvider<E>>,
    pub charts: Rc<dyn ChartRenderer<E>>,
}

impl<E> Clone for PageServices<E> {
    fn clone(&self) -> Self {
        Self {
            navigator: Rc::clone(&self.navigator),
            notifier: Rc::clone(&self.notifier),
            tooltips: Rc::clone(&self.tooltips),
            charts: Rc::clone(&self.charts),
        }
    }
}
