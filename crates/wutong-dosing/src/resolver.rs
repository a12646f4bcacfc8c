use wutong_core::models::record::{HourlyRecord, dose_or_zero};
use wutong_core::models::resolution::Resolution;
use wutong_core::slot::{HalfDay, SLOTS_PER_DAY};

use crate::normalize::normalize;
use crate::policy::PolicyConfig;

/// Resolve a day with the default policy pair (explicit rescue sum,
/// halving when no pain was recorded).
pub fn resolve(records: &[HourlyRecord], am_base: f64, pm_base: f64) -> Resolution {
    Resolver::default().resolve(records, am_base, pm_base)
}

/// Day resolver bound to a policy pair. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    pub policy: PolicyConfig,
}

impl Resolver {
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Turn a day's 24 records and its maintenance bases into the rescue
    /// total and the next day's doses.
    ///
    /// Anything other than exactly 24 records is a day that is not ready
    /// yet and resolves to all zeros.
    pub fn resolve(&self, records: &[HourlyRecord], am_base: f64, pm_base: f64) -> Resolution {
        if records.len() != SLOTS_PER_DAY {
            return Resolution::default();
        }

        let rescue_total = self.policy.rescue.rescue_total(records);
        let day_halved = self.halves(records, HalfDay::Day);
        let night_halved = self.halves(records, HalfDay::Night);

        // Both halves share one raw base; halving never compounds.
        let base_next_raw = (dose_or_zero(am_base) + dose_or_zero(pm_base) + rescue_total) / 2.0;
        let next = |halved: bool| {
            normalize(if halved {
                base_next_raw / 2.0
            } else {
                base_next_raw
            })
        };

        Resolution {
            rescue_total,
            next_am_dose: next(day_halved),
            next_pm_dose: next(night_halved),
            day_halved,
            night_halved,
        }
    }

    fn halves(&self, records: &[HourlyRecord], half: HalfDay) -> bool {
        self.policy.halving.qualifies(&records[half.slots()])
    }
}
