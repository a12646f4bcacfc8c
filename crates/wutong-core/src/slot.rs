//! Hourly slot conventions.
//!
//! A day is 24 slots starting at 08:00: slot 0 covers 08:00–09:00 and
//! slot 23 covers 07:00–08:00 of the next calendar day.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const SLOTS_PER_DAY: usize = 24;

/// Clock hour at which slot 0 begins.
pub const FIRST_SLOT_HOUR: usize = 8;

const SLOTS_PER_HALF: usize = SLOTS_PER_DAY / 2;

/// One of the two 12-hour spans a day is split into for the halving rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HalfDay {
    /// 08:00–20:00, slots 0–11.
    Day,
    /// 20:00–08:00, slots 12–23.
    Night,
}

impl HalfDay {
    pub const ALL: [HalfDay; 2] = [HalfDay::Day, HalfDay::Night];

    pub fn slots(self) -> Range<usize> {
        match self {
            HalfDay::Day => 0..SLOTS_PER_HALF,
            HalfDay::Night => SLOTS_PER_HALF..SLOTS_PER_DAY,
        }
    }

    /// The slot at which this half's maintenance dose is given.
    pub fn anchor_slot(self) -> usize {
        self.slots().start
    }

    pub fn of(slot: usize) -> Option<HalfDay> {
        HalfDay::ALL.into_iter().find(|h| h.slots().contains(&slot))
    }
}

pub fn check_slot(slot: usize) -> Result<usize, CoreError> {
    if slot < SLOTS_PER_DAY {
        Ok(slot)
    } else {
        Err(CoreError::InvalidSlot(slot))
    }
}

pub fn is_anchor_slot(slot: usize) -> bool {
    HalfDay::ALL.iter().any(|h| h.anchor_slot() == slot)
}

/// Human-readable label for a slot, e.g. `"08:00-09:00"`.
pub fn slot_label(slot: usize) -> String {
    let start = (slot + FIRST_SLOT_HOUR) % 24;
    let end = (slot + FIRST_SLOT_HOUR + 1) % 24;
    format!("{start:02}:00-{end:02}:00")
}
