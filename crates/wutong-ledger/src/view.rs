use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wutong_core::models::record::HourlyRecord;
use wutong_core::models::resolution::Resolution;
use wutong_core::slot::HalfDay;

/// Where a day's effective maintenance base came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BaseSource {
    /// Entered by the caregiver for this date.
    Manual,
    /// Carried over from the previous day's recommendation.
    Inherited,
    /// Neither; the resolver sees 0.
    Unset,
}

/// The maintenance bases in force for a day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bases {
    pub am: f64,
    pub pm: f64,
    pub am_source: BaseSource,
    pub pm_source: BaseSource,
}

impl Bases {
    pub fn unset() -> Self {
        Self {
            am: 0.0,
            pm: 0.0,
            am_source: BaseSource::Unset,
            pm_source: BaseSource::Unset,
        }
    }

    pub fn get(&self, half: HalfDay) -> (f64, BaseSource) {
        match half {
            HalfDay::Day => (self.am, self.am_source),
            HalfDay::Night => (self.pm, self.pm_source),
        }
    }

    pub(crate) fn set(&mut self, half: HalfDay, dose: f64, source: BaseSource) {
        match half {
            HalfDay::Day => {
                self.am = dose;
                self.am_source = source;
            }
            HalfDay::Night => {
                self.pm = dose;
                self.pm_source = source;
            }
        }
    }
}

/// A day as the caregiver sees it: its records, the bases in force and
/// the recommendation for the following day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayView {
    pub date: jiff::civil::Date,
    pub records: Vec<HourlyRecord>,
    pub bases: Bases,
    pub resolution: Resolution,
}
