//! Diet Analyzer Page Glue
//!
//! Wires server-rendered pages to their client-side widgets:
//! - tooltips on `[data-bs-toggle="tooltip"]` triggers
//! - the macro distribution donut on `#macroChart`
//! - date picker navigation to the day's meal logs
//! - required-field guards on the food search and diet plan forms
//!
//! Binding logic is written against the `dom` and `services` traits so it runs
//! under test without a browser; `web` supplies the browser implementations.

pub mod chart;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod page;
pub mod routes;
pub mod services;
pub mod web;

#[cfg(test)]
mod testing;

pub use config::PageConfig;
pub use error::PageError;
pub use page::{initialize_page, BootReport, BootStep, StepOutcome};
pub use services::{Navigator, Notifier, PageServices};
