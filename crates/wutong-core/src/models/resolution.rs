use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::slot::HalfDay;

/// Output of resolving one day: the rescue total and the next day's
/// recommended maintenance doses.
///
/// The default value (all zeros, nothing halved) is what a day that is not
/// yet populated resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resolution {
    pub rescue_total: f64,
    /// Recommended 08:00 dose for the next day, mg.
    pub next_am_dose: u32,
    /// Recommended 20:00 dose for the next day, mg.
    pub next_pm_dose: u32,
    pub day_halved: bool,
    pub night_halved: bool,
}

impl Resolution {
    pub fn next_dose(&self, half: HalfDay) -> u32 {
        match half {
            HalfDay::Day => self.next_am_dose,
            HalfDay::Night => self.next_pm_dose,
        }
    }

    pub fn halved(&self, half: HalfDay) -> bool {
        match half {
            HalfDay::Day => self.day_halved,
            HalfDay::Night => self.night_halved,
        }
    }
}
