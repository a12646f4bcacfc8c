use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::CoreError;

/// Top of the numeric rating scale.
pub const MAX_SCORE: u8 = 10;

/// What was observed for one hourly slot.
///
/// `Unmeasured` and `Score(0)` are deliberately distinct: the halving
/// policies treat "confirmed pain-free" and "nothing recorded" differently.
///
/// Serializes as `"unmeasured"`, `"asleep"` or `{"score": n}`. Deserializing
/// also accepts caregiver text and bare numbers, and never fails: anything
/// unreadable is `Unmeasured`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainScore {
    /// Nothing recorded, or the entry could not be read.
    #[default]
    Unmeasured,
    /// Patient asleep, no rating taken.
    Asleep,
    /// Numeric rating, 0–10.
    Score(u8),
}

impl PainScore {
    pub fn new(value: u8) -> Result<Self, CoreError> {
        PainScore::Score(value).validated()
    }

    /// Lenient parse of caregiver text input. Never fails: anything that is
    /// not a recognised sleep marker or an in-range number is `Unmeasured`.
    ///
    /// Fractional ratings are floored, which leaves every integer threshold
    /// comparison (`>= 1`, `>= 4`, `>= 8`) unchanged.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "none" | "nan" => return PainScore::Unmeasured,
            "asleep" | "sleep" | "sleeping" | "睡觉" => return PainScore::Asleep,
            _ => {}
        }

        trimmed
            .parse::<f64>()
            .map_or(PainScore::Unmeasured, PainScore::from_number)
    }

    /// Numeric rating, floored. Out of range or non-finite is `Unmeasured`.
    pub fn from_number(n: f64) -> Self {
        if n.is_finite() && (0.0..=f64::from(MAX_SCORE)).contains(&n) {
            PainScore::Score(n.floor() as u8)
        } else {
            PainScore::Unmeasured
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => PainScore::parse(text),
            Value::Number(n) => n.as_f64().map_or(PainScore::Unmeasured, PainScore::from_number),
            Value::Object(map) => match map.get("score") {
                Some(inner @ (Value::Number(_) | Value::String(_))) => PainScore::from_json(inner),
                _ => PainScore::Unmeasured,
            },
            _ => PainScore::Unmeasured,
        }
    }

    /// Reject numeric scores above [`MAX_SCORE`].
    pub fn validated(self) -> Result<Self, CoreError> {
        match self {
            PainScore::Score(n) if n > MAX_SCORE => Err(CoreError::ScoreOutOfRange(n)),
            other => Ok(other),
        }
    }

    /// Out-of-range numeric scores read as `Unmeasured`.
    pub fn sanitized(self) -> Self {
        match self {
            PainScore::Score(n) if n > MAX_SCORE => PainScore::Unmeasured,
            other => other,
        }
    }

    /// The numeric rating, if there is a usable one.
    pub fn value(self) -> Option<u8> {
        match self.sanitized() {
            PainScore::Score(n) => Some(n),
            _ => None,
        }
    }

    /// True for a sleep marker or an in-range rating.
    pub fn is_recorded(self) -> bool {
        !matches!(self.sanitized(), PainScore::Unmeasured)
    }

    pub fn is_explicit_zero(self) -> bool {
        self == PainScore::Score(0)
    }

    /// A numeric score of 1 or more.
    pub fn indicates_pain(self) -> bool {
        self.value().is_some_and(|n| n >= 1)
    }
}

impl<'de> Deserialize<'de> for PainScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(PainScore::from_json(&value))
    }
}

impl FromStr for PainScore {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PainScore::parse(s))
    }
}

impl fmt::Display for PainScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PainScore::Unmeasured => Ok(()),
            PainScore::Asleep => f.write_str("asleep"),
            PainScore::Score(n) => write!(f, "{n}"),
        }
    }
}
