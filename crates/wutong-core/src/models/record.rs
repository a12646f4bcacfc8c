use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::score::PainScore;
use crate::slot::{self, SLOTS_PER_DAY};

/// Drug given as a rescue dose. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DrugType {
    Morphine,
    Fentanyl,
    Other,
}

/// One hourly slot of a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourlyRecord {
    #[serde(default)]
    pub score: PainScore,
    /// Scheduled maintenance dose in mg. Only allowed at the two anchor
    /// slots (08:00 and 20:00), where it is the manual base for that half.
    #[serde(default, deserialize_with = "de_maintenance_dose")]
    pub maintenance_dose: Option<f64>,
    /// Breakthrough dose in mg given during this hour.
    #[serde(default, deserialize_with = "de_rescue_dose")]
    pub rescue_dose: f64,
    #[serde(default)]
    pub drug_type: Option<DrugType>,
    #[serde(default)]
    pub memo: String,
}

impl HourlyRecord {
    /// Check this record is acceptable for `slot`.
    pub fn validate(&self, slot: usize) -> Result<(), CoreError> {
        slot::check_slot(slot)?;
        self.score.validated()?;
        check_dose(self.rescue_dose)?;
        if let Some(dose) = self.maintenance_dose {
            check_dose(dose)?;
            if !slot::is_anchor_slot(slot) {
                return Err(CoreError::MaintenanceOffAnchor(slot));
            }
        }
        Ok(())
    }
}

/// A fresh, fully unmeasured day.
pub fn empty_day() -> Vec<HourlyRecord> {
    vec![HourlyRecord::default(); SLOTS_PER_DAY]
}

/// Lenient parse of a dose entered as text. Unparsable, negative or
/// non-finite input reads as 0.
pub fn parse_dose(text: &str) -> f64 {
    text.trim().parse::<f64>().map(dose_or_zero).unwrap_or(0.0)
}

/// Clamp a dose to a usable non-negative value; NaN and infinities read as 0.
pub fn dose_or_zero(dose: f64) -> f64 {
    if dose.is_finite() && dose > 0.0 {
        dose
    } else {
        0.0
    }
}

pub fn check_dose(dose: f64) -> Result<f64, CoreError> {
    if dose.is_finite() && dose >= 0.0 {
        Ok(dose)
    } else {
        Err(CoreError::InvalidDose(dose))
    }
}

/// Rescue dose as a number or as text; anything unreadable is 0.
fn de_rescue_dose<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().map_or(0.0, dose_or_zero),
        Value::String(s) => parse_dose(&s),
        _ => 0.0,
    })
}

/// Maintenance dose as a number or as text. Blank, unreadable, negative or
/// non-finite input means no entry.
fn de_maintenance_dose<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let dose = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(dose.filter(|d| check_dose(*d).is_ok()))
}
