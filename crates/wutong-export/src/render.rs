use serde::Serialize;
use tera::{Context, Tera};

use wutong_core::models::export_row::ExportRow;

use crate::error::ExportError;

/// Column headings shared by every export format.
pub const HEADERS: [&str; 5] = [
    "Date",
    "AM base (mg)",
    "PM base (mg)",
    "Rescue (mg)",
    "Total (mg)",
];

const TABLE_TEMPLATE_NAME: &str = "export_table.md";

const TABLE_TEMPLATE: &str = "\
| {{ headers | join(sep=\" | \") }} |
|{% for h in headers %}---|{% endfor %}
{% for row in rows %}| {{ row.date }} | {{ row.am_base }} | {{ row.pm_base }} | {{ row.rescue_total }} | {{ row.total }} |
{% endfor %}";

/// An [`ExportRow`] with every cell already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub date: String,
    pub am_base: String,
    pub pm_base: String,
    pub rescue_total: String,
    pub total: String,
}

impl DisplayRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.date,
            &self.am_base,
            &self.pm_base,
            &self.rescue_total,
            &self.total,
        ]
    }
}

impl From<&ExportRow> for DisplayRow {
    fn from(row: &ExportRow) -> Self {
        Self {
            date: row.date.to_string(),
            am_base: format_mg(row.am_base),
            pm_base: format_mg(row.pm_base),
            rescue_total: format_mg(row.rescue_total),
            total: format_mg(row.total),
        }
    }
}

/// Whole milligrams print without a decimal point, fractions with one.
pub fn format_mg(mg: f64) -> String {
    if mg.fract() == 0.0 {
        format!("{mg:.0}")
    } else {
        format!("{mg:.1}")
    }
}

/// Render export rows as a Markdown table.
pub fn render_table(rows: &[ExportRow]) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TABLE_TEMPLATE_NAME, TABLE_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let display: Vec<DisplayRow> = rows.iter().map(DisplayRow::from).collect();
    let mut context = Context::new();
    context.insert("headers", &HEADERS);
    context.insert("rows", &display);

    let rendered = tera.render(TABLE_TEMPLATE_NAME, &context)?;
    tracing::debug!(rows = rows.len(), "export table rendered");
    Ok(rendered)
}
