//! wutong-export
//!
//! Tabular export of a ledger: Markdown via Tera, DOCX via docx-rs.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
