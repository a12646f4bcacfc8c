//! wutong-core
//!
//! Pure domain types for the Wutong titration assistant: hourly records,
//! pain scores, day state, and the shape of a day's resolution.
//! No I/O and no logging; this is the shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod slot;
