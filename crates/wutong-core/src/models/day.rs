use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::record::{self, HourlyRecord};
use crate::slot::HalfDay;

/// Everything recorded for one calendar date.
///
/// The manual maintenance bases live on the anchor records: slot 0 holds
/// the day base, slot 12 the night base. `None` there means no manual
/// entry; the effective base then comes from the previous day's
/// recommendation, if there is one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayState {
    pub date: jiff::civil::Date,
    pub records: Vec<HourlyRecord>,
}

impl DayState {
    pub fn new(date: jiff::civil::Date) -> Self {
        Self {
            date,
            records: record::empty_day(),
        }
    }

    pub fn manual_base(&self, half: HalfDay) -> Option<f64> {
        self.records
            .get(half.anchor_slot())
            .and_then(|r| r.maintenance_dose)
    }

    pub fn set_manual_base(&mut self, half: HalfDay, dose: Option<f64>) {
        if let Some(anchor) = self.records.get_mut(half.anchor_slot()) {
            anchor.maintenance_dose = dose;
        }
    }

    /// True once any slot carries a score or a sleep marker.
    pub fn has_recorded_score(&self) -> bool {
        self.records.iter().any(|r| r.score.is_recorded())
    }
}
