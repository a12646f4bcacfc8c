use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wutong_core::models::record::{HourlyRecord, dose_or_zero};
use wutong_core::models::score::PainScore;

/// Score at or above which the score-derived policy adds [`MODERATE_ESCALATION_MG`].
pub const MODERATE_PAIN: u8 = 4;
/// Score at or above which the score-derived policy adds [`SEVERE_ESCALATION_MG`].
pub const SEVERE_PAIN: u8 = 8;

pub const MODERATE_ESCALATION_MG: f64 = 10.0;
pub const SEVERE_ESCALATION_MG: f64 = 20.0;

/// How a day's rescue total is accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RescuePolicy {
    /// Sum of the rescue doses actually recorded.
    #[default]
    Explicit,
    /// Escalation derived from scores alone: +20 mg per slot scoring 8 or
    /// more, +10 mg per slot scoring 4 to 7. Recorded doses are ignored.
    ScoreDerived,
}

impl RescuePolicy {
    pub fn rescue_total(self, records: &[HourlyRecord]) -> f64 {
        match self {
            RescuePolicy::Explicit => records.iter().map(|r| dose_or_zero(r.rescue_dose)).sum(),
            RescuePolicy::ScoreDerived => records.iter().map(|r| escalation_dose(r.score)).sum(),
        }
    }
}

/// Dose added for a single slot under [`RescuePolicy::ScoreDerived`].
pub fn escalation_dose(score: PainScore) -> f64 {
    match score.value() {
        Some(n) if n >= SEVERE_PAIN => SEVERE_ESCALATION_MG,
        Some(n) if n >= MODERATE_PAIN => MODERATE_ESCALATION_MG,
        _ => 0.0,
    }
}

/// When a half-day's next dose is halved.
///
/// Every variant refuses to halve if any slot in the half scores 1 or more;
/// they differ in how much evidence of comfort they require.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HalvingPolicy {
    /// Unmeasured and asleep slots count as pain-free.
    #[default]
    NoPainRecorded,
    /// At least one slot must be an explicit 0.
    ZeroPresent,
    /// Every slot must be an explicit 0.
    AllZero,
}

impl HalvingPolicy {
    /// Whether the half-day covered by `half` qualifies for a dose reduction.
    pub fn qualifies(self, half: &[HourlyRecord]) -> bool {
        let no_pain = !half.iter().any(|r| r.score.indicates_pain());
        match self {
            HalvingPolicy::NoPainRecorded => no_pain,
            HalvingPolicy::ZeroPresent => {
                no_pain && half.iter().any(|r| r.score.is_explicit_zero())
            }
            HalvingPolicy::AllZero => half.iter().all(|r| r.score.is_explicit_zero()),
        }
    }
}

/// The policy pair a deployment runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PolicyConfig {
    #[serde(default)]
    pub rescue: RescuePolicy,
    #[serde(default)]
    pub halving: HalvingPolicy,
}
