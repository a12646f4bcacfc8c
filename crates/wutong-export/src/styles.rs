use serde::{Deserialize, Serialize};

/// Document styling for DOCX exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Title shown above the table.
    pub title: String,

    /// Font for table text (e.g. "Calibri").
    pub body_font: String,

    /// Font for the title.
    pub heading_font: String,

    /// Table text size in points.
    pub body_size: usize,

    /// Title size in points.
    pub heading_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            title: "Pain and dose record".to_string(),
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading_size: 16,
        }
    }
}
