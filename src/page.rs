//! Page Bootstrapper
//!
//! Binds widgets and form guards once the document is parsed. Every step
//! stands alone: a missing element skips its own step and nothing else.

use std::rc::Rc;

use crate::chart::ChartConfig;
use crate::config::{FormGuardConfig, MacroChartConfig, PageConfig};
use crate::dom::{PageDocument, PageElement, SubmitEvent};
use crate::error::PageError;
use crate::models::MacroBreakdown;
use crate::routes::meal_logs_url;
use crate::services::{ChartRenderer, Navigator, Notifier, PageServices, TooltipProvider};

// ========================
// Report
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    Tooltips,
    MacroChart,
    DatePicker,
    FoodSearchGuard,
    SavePlanGuard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Bound,
    Skipped(PageError),
}

/// What each step ended as after `initialize_page`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootReport {
    steps: Vec<(BootStep, StepOutcome)>,
}

impl BootReport {
    fn record<T>(&mut self, step: BootStep, result: Result<T, PageError>) {
        let outcome = match result {
            Ok(_) => {
                log::debug!("{:?} bound", step);
                StepOutcome::Bound
            }
            Err(err) if err.is_silent() => {
                log::debug!("{:?} skipped: {}", step, err);
                StepOutcome::Skipped(err)
            }
            Err(err) => {
                log::warn!("{:?} skipped: {}", step, err);
                StepOutcome::Skipped(err)
            }
        };
        self.steps.push((step, outcome));
    }

    pub fn outcome(&self, step: BootStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }

    pub fn is_bound(&self, step: BootStep) -> bool {
        matches!(self.outcome(step), Some(StepOutcome::Bound))
    }

    pub fn bound_steps(&self) -> Vec<BootStep> {
        self.steps
            .iter()
            .filter(|(_, o)| *o == StepOutcome::Bound)
            .map(|(s, _)| *s)
            .collect()
    }
}

// ========================
// Entry Point
// ========================

/// Run every bootstrap step against `document`. Never fails; skipped steps
/// are reported and logged.
pub fn initialize_page<D: PageDocument>(
    document: &D,
    config: &PageConfig,
    services: &PageServices<D::Element>,
) -> BootReport {
    let mut report = BootReport::default();

    report.record(
        BootStep::Tooltips,
        activate_tooltips(document, &config.tooltip_selector, &*services.tooltips),
    );
    report.record(
        BootStep::MacroChart,
        render_macro_chart(document, &config.macro_chart, &*services.charts),
    );
    report.record(
        BootStep::DatePicker,
        bind_date_navigation(
            document,
            &config.date_picker_id,
            &config.meal_logs_path,
            Rc::clone(&services.navigator),
        ),
    );
    report.record(
        BootStep::FoodSearchGuard,
        guard_required_field(document, &config.food_search, Rc::clone(&services.notifier)),
    );
    report.record(
        BootStep::SavePlanGuard,
        guard_required_field(document, &config.save_plan, Rc::clone(&services.notifier)),
    );

    log::info!("page initialized: {:?}", report.bound_steps());
    report
}

// ========================
// Steps
// ========================

/// Attach a tooltip to every trigger. Returns how many were attached.
pub fn activate_tooltips<D: PageDocument>(
    document: &D,
    selector: &str,
    tooltips: &dyn TooltipProvider<D::Element>,
) -> Result<usize, PageError> {
    let triggers = document.query_all(selector)?;
    if triggers.is_empty() {
        return Err(PageError::missing(selector));
    }

    let mut attached = 0;
    for trigger in &triggers {
        match tooltips.attach_tooltip(trigger) {
            Ok(()) => attached += 1,
            Err(err @ PageError::LibraryUnavailable(_)) => return Err(err),
            Err(err) => log::warn!("tooltip not attached: {}", err),
        }
    }
    log::debug!("{} of {} tooltips attached", attached, triggers.len());
    Ok(attached)
}

/// Read the macro attributes off the anchor and draw the donut
pub fn render_macro_chart<D: PageDocument>(
    document: &D,
    config: &MacroChartConfig,
    charts: &dyn ChartRenderer<D::Element>,
) -> Result<MacroBreakdown, PageError> {
    let anchor = document.require(&config.anchor_id)?;
    let macros = MacroBreakdown::from_attributes(
        anchor.attribute("data-protein").as_deref(),
        anchor.attribute("data-carbs").as_deref(),
        anchor.attribute("data-fats").as_deref(),
    );

    let chart = ChartConfig::macro_distribution(&macros, &config.title);
    charts.render_chart(&anchor, &chart)?;

    let [protein, carbs, fats] = macros.percentages();
    log::debug!(
        "macro chart rendered: protein {:.1}%, carbs {:.1}%, fats {:.1}%",
        protein,
        carbs,
        fats
    );
    Ok(macros)
}

/// Navigate to the meal-log page for whichever date the picker changes to
pub fn bind_date_navigation<D: PageDocument>(
    document: &D,
    picker_id: &str,
    meal_logs_path: &str,
    navigator: Rc<dyn Navigator>,
) -> Result<(), PageError> {
    let picker = document.require(picker_id)?;
    let path = meal_logs_path.to_string();

    picker.on_change(Box::new(move |control: &D::Element| {
        let date = control.value().unwrap_or_default();
        navigator.go_to(&meal_logs_url(&path, &date));
    }))
}

/// Cancel the form's submission while its required field is blank
pub fn guard_required_field<D: PageDocument>(
    document: &D,
    guard: &FormGuardConfig,
    notifier: Rc<dyn Notifier>,
) -> Result<(), PageError> {
    let form = document.require(&guard.form_id)?;
    let document = document.clone();
    let guard = guard.clone();

    form.on_submit(Box::new(move |event: &dyn SubmitEvent| {
        // Field is looked up on every submit
        let Some(value) = document.element_by_id(&guard.field_id).and_then(|f| f.value()) else {
            log::warn!("#{} has no field #{}, submitting unchecked", guard.form_id, guard.field_id);
            return;
        };
        if let Err(err) = check_required(&guard.field_id, &value) {
            log::debug!("#{} submit cancelled: {}", guard.form_id, err);
            event.prevent_default();
            notifier.warn(&guard.message);
        }
    }))
}

/// A required text value must have something besides whitespace
pub fn check_required(field: &str, value: &str) -> Result<(), PageError> {
    if value.trim().is_empty() {
        return Err(PageError::EmptyRequiredField { field: field.to_string() });
    }
    Ok(())
}
