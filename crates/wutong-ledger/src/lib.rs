//! wutong-ledger
//!
//! Session-owned store of day records. Chains each day's recommendation
//! into the next day's bases, recomputing the chain on every read.

pub mod error;
pub mod ledger;
pub mod view;

pub use ledger::Ledger;
