//! Macro Chart Config
//!
//! Chart.js configuration for the macro distribution donut. Serializes to the
//! exact object shape `new Chart(el, config)` expects.

use serde::Serialize;

use crate::models::MacroBreakdown;

/// Segment labels, in series order
pub const MACRO_LABELS: [&str; 3] = ["Protein", "Carbs", "Fats"];

/// Cyan-teal, green, amber
pub const MACRO_COLORS: [&str; 3] = ["#0dcaf0", "#198754", "#ffc107"];

const HOVER_OFFSET: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub hover_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

impl ChartConfig {
    /// Donut with one segment per macro, legend below, titled
    pub fn macro_distribution(macros: &MacroBreakdown, title: &str) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: MACRO_LABELS.iter().map(|l| l.to_string()).collect(),
                datasets: vec![Dataset {
                    data: macros.series().to_vec(),
                    background_color: MACRO_COLORS.iter().map(|c| c.to_string()).collect(),
                    hover_offset: HOVER_OFFSET,
                }],
            },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Legend { position: LegendPosition::Bottom },
                    title: Title { display: true, text: title.to_string() },
                },
            },
        }
    }

    /// Values of the first dataset
    pub fn series(&self) -> &[f64] {
        self.data.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }
}
