use thiserror::Error;

use wutong_core::error::CoreError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] CoreError),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
