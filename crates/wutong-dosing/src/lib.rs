//! wutong-dosing
//!
//! The dosage recommendation engine. Pure functions only: turns one day's
//! hourly records and maintenance bases into a rescue total and the next
//! day's recommended doses.

pub mod normalize;
pub mod policy;
pub mod resolver;

pub use normalize::normalize;
pub use policy::{HalvingPolicy, PolicyConfig, RescuePolicy};
pub use resolver::{Resolver, resolve};
