use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One line of the tabular export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportRow {
    pub date: jiff::civil::Date,
    pub am_base: f64,
    pub pm_base: f64,
    pub rescue_total: f64,
    /// `am_base + pm_base + rescue_total`.
    pub total: f64,
}

impl ExportRow {
    pub fn new(date: jiff::civil::Date, am_base: f64, pm_base: f64, rescue_total: f64) -> Self {
        Self {
            date,
            am_base,
            pm_base,
            rescue_total,
            total: am_base + pm_base + rescue_total,
        }
    }
}
