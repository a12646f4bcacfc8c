pub mod days;
pub mod export;
pub mod health;
pub mod policy;
pub mod resolve;
pub mod sessions;
