use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("slot {0} is outside the 24-hour day")]
    InvalidSlot(usize),

    #[error("pain score {0} is outside range [0, 10]")]
    ScoreOutOfRange(u8),

    #[error("maintenance dose can only be recorded at 08:00 or 20:00, not slot {0}")]
    MaintenanceOffAnchor(usize),

    #[error("invalid dose: {0}")]
    InvalidDose(f64),
}
