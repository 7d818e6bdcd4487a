//! Page Configuration
//!
//! Element ids, paths and user messages the bootstrapper binds against.
//! Defaults match the server templates; a page can override any field by
//! embedding JSON in `<script type="application/json" id="dietAnalyzerConfig">`.

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

use crate::error::PageError;

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "dietAnalyzerConfig";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Selector for elements that get a tooltip
    pub tooltip_selector: String,
    pub macro_chart: MacroChartConfig,
    pub date_picker_id: String,
    /// Target of date-picker navigation; the date goes in the `date` parameter
    pub meal_logs_path: String,
    #[serde(deserialize_with = "food_search_guard")]
    pub food_search: FormGuardConfig,
    #[serde(deserialize_with = "save_plan_guard")]
    pub save_plan: FormGuardConfig,
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MacroChartConfig {
    pub anchor_id: String,
    pub title: String,
}

/// One required-field check on a form's submit
#[derive(Debug, Clone, PartialEq)]
pub struct FormGuardConfig {
    pub form_id: String,
    pub field_id: String,
    pub message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_string(),
            macro_chart: MacroChartConfig::default(),
            date_picker_id: "logDatePicker".to_string(),
            meal_logs_path: "/nutrition/meal-logs".to_string(),
            food_search: FormGuardConfig::food_search(),
            save_plan: FormGuardConfig::save_plan(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for MacroChartConfig {
    fn default() -> Self {
        Self {
            anchor_id: "macroChart".to_string(),
            title: "Macro Distribution".to_string(),
        }
    }
}

impl FormGuardConfig {
    pub fn new(form_id: &str, field_id: &str, message: &str) -> Self {
        Self {
            form_id: form_id.to_string(),
            field_id: field_id.to_string(),
            message: message.to_string(),
        }
    }

    pub fn food_search() -> Self {
        Self::new("foodSearchForm", "query", "Please enter a food to search for")
    }

    pub fn save_plan() -> Self {
        Self::new("savePlanForm", "plan_name", "Please enter a name for your diet plan")
    }
}

/// Inline form guard; missing fields fall back to that guard's defaults
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormGuardOverride {
    form_id: Option<String>,
    field_id: Option<String>,
    message: Option<String>,
}

impl FormGuardOverride {
    fn over(self, base: FormGuardConfig) -> FormGuardConfig {
        FormGuardConfig {
            form_id: self.form_id.unwrap_or(base.form_id),
            field_id: self.field_id.unwrap_or(base.field_id),
            message: self.message.unwrap_or(base.message),
        }
    }
}

fn food_search_guard<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FormGuardConfig, D::Error> {
    Ok(FormGuardOverride::deserialize(deserializer)?.over(FormGuardConfig::food_search()))
}

fn save_plan_guard<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FormGuardConfig, D::Error> {
    Ok(FormGuardOverride::deserialize(deserializer)?.over(FormGuardConfig::save_plan()))
}

impl PageConfig {
    /// Parse an inline override. Fields left out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }
}
