use jiff::civil::date;

use wutong_core::models::export_row::ExportRow;
use wutong_export::docx::generate_docx;
use wutong_export::render::{format_mg, render_table};
use wutong_export::styles::DocumentStyles;

fn sample_rows() -> Vec<ExportRow> {
    vec![
        ExportRow::new(date(2026, 3, 1), 30.0, 30.0, 10.0),
        ExportRow::new(date(2026, 3, 2), 40.0, 20.0, 2.5),
    ]
}

#[test]
fn total_is_bases_plus_rescue() {
    let row = ExportRow::new(date(2026, 3, 1), 30.0, 20.0, 15.0);
    assert_eq!(row.total, 65.0);
}

#[test]
fn milligrams_drop_trailing_zero() {
    assert_eq!(format_mg(30.0), "30");
    assert_eq!(format_mg(2.5), "2.5");
    assert_eq!(format_mg(0.0), "0");
}

#[test]
fn markdown_table_has_header_and_rows() {
    let table = render_table(&sample_rows()).unwrap();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(
        lines[0],
        "| Date | AM base (mg) | PM base (mg) | Rescue (mg) | Total (mg) |"
    );
    assert_eq!(lines[1], "|---|---|---|---|---|");
    assert_eq!(lines[2], "| 2026-03-01 | 30 | 30 | 10 | 70 |");
    assert_eq!(lines[3], "| 2026-03-02 | 40 | 20 | 2.5 | 62.5 |");
    assert_eq!(lines.len(), 4);
}

#[test]
fn empty_export_is_just_the_header() {
    let table = render_table(&[]).unwrap();
    assert_eq!(table.lines().count(), 2);
}

#[test]
fn docx_is_a_zip_archive() {
    let bytes = generate_docx(&sample_rows(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
