use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};

use wutong_core::models::export_row::ExportRow;

use crate::error::ExportError;
use crate::render::{DisplayRow, HEADERS};
use crate::styles::DocumentStyles;

/// Generate a DOCX document holding a title and one table row per export row.
pub fn generate_docx(rows: &[ExportRow], styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut table_rows = vec![TableRow::new(
        HEADERS
            .iter()
            .map(|h| text_cell(h, styles, true))
            .collect(),
    )];

    for row in rows.iter().map(DisplayRow::from) {
        table_rows.push(TableRow::new(
            row.cells()
                .iter()
                .map(|c| text_cell(c, styles, false))
                .collect(),
        ));
    }

    let docx = Docx::new()
        .add_style(title_style(styles))
        .add_paragraph(
            Paragraph::new()
                .style("Title")
                .add_run(
                    Run::new()
                        .add_text(&styles.title)
                        .fonts(RunFonts::new().ascii(&styles.heading_font)),
                ),
        )
        .add_table(Table::new(table_rows));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(rows = rows.len(), "export document generated");
    Ok(buf.into_inner())
}

fn title_style(styles: &DocumentStyles) -> Style {
    Style::new("Title", StyleType::Paragraph)
        .name("Title")
        .size(styles.heading_size * 2) // OOXML uses half-points
}

fn text_cell(text: &str, styles: &DocumentStyles, header: bool) -> TableCell {
    let mut run = Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));
    if header {
        run = run.bold();
    }

    TableCell::new().add_paragraph(Paragraph::new().align(AlignmentType::Left).add_run(run))
}
