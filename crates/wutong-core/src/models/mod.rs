pub mod day;
pub mod export_row;
pub mod record;
pub mod resolution;
pub mod score;
