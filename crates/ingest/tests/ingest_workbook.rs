//! End-to-end ingestion tests over in-memory and on-disk workbooks.

use admix_ingest::{ingest, ingest_xlsx, locate, materialize, HeaderLocation, Vocabulary};
use admix_sheet::{Book, CellValue, Sheet, SheetError};
use tempfile::tempdir;

/// A workbook shaped like a typical agency export: detail sheets authored
/// before the summary sheet, a transposed mix sheet, a raw sheet with title
/// rows, formatted currency and trailing blanks.
fn agency_export() -> Book {
    let mut book = Book::new();

    book.add_sheet(
        "Q1_Raw",
        Sheet::from_data(vec![
            vec!["Q1 Campaign Performance", "", "", "", ""],
            vec!["date", "media", "campaign", "cost", "OS"],
            vec!["2024-01-01", "Facebook", "Spring", "₩1,234,567", "iOS"],
            vec!["2024-01-02", "Google", "Spring", "$2,500", "AOS"],
            vec!["", "", "", "", ""],
        ]),
    )
    .unwrap();

    book.add_sheet(
        "Facebook",
        Sheet::from_data(vec![
            vec!["date", "imp", "click"],
            vec!["2024-01-01", "10,000", "120"],
            vec!["2024-01-02", "12,000", "150"],
        ]),
    )
    .unwrap();

    book.add_sheet(
        "Google",
        Sheet::from_data(vec![
            vec!["date", "imp", "click"],
            vec!["2024-01-01", "8,000", "95"],
        ]),
    )
    .unwrap();

    // Records as columns: field names stacked down column A
    book.add_sheet(
        "Budget_Mix",
        Sheet::from_data(vec![
            vec!["media", "Facebook", "Google"],
            vec!["cost", "₩500,000", "₩300,000"],
            vec!["click", "1,200", "900"],
        ]),
    )
    .unwrap();

    book
}

#[test]
fn classifies_and_normalizes_full_workbook() {
    let vocab = Vocabulary::default();
    let result = ingest(&agency_export(), "q1_report.xlsx", &vocab);

    assert_eq!(result.file_name, "q1_report.xlsx");

    // Raw: header row found under the title row, currency cleaned, blank
    // trailing row dropped, OS column filtered out
    assert_eq!(result.raw.headers, vec!["date", "media", "campaign", "cost"]);
    assert_eq!(result.raw.rows.len(), 2);
    assert_eq!(result.raw.rows[0]["cost"], CellValue::Int(1_234_567));
    assert_eq!(result.raw.rows[1]["cost"], CellValue::Int(2500));

    // The unfiltered table keeps the OS column for raw-data export
    assert_eq!(
        result.original_raw.headers,
        vec!["date", "media", "campaign", "cost", "OS"]
    );

    // Mix sheet was column-major and got transposed before materialization
    assert_eq!(result.media_mix.headers, vec!["media", "cost", "click"]);
    assert_eq!(result.media_mix.rows.len(), 2);
    assert_eq!(result.media_mix.rows[0]["media"], CellValue::from("Facebook"));
    assert_eq!(result.media_mix.rows[0]["cost"], CellValue::Int(500_000));

    // Detail sheets are the ones authored before the mix sheet, minus raw
    let detail_names: Vec<&str> = result
        .media_detail
        .iter()
        .map(|d| d.sheet_name.as_str())
        .collect();
    assert_eq!(detail_names, vec!["Facebook", "Google"]);
    assert_eq!(result.media_detail[0].table.rows.len(), 2);
}

#[test]
fn diagnostics_record_each_heuristic_decision() {
    let vocab = Vocabulary::default();
    let result = ingest(&agency_export(), "q1_report.xlsx", &vocab);

    let mix_diag = result
        .diagnostics
        .iter()
        .find(|d| d.sheet_name == "Budget_Mix")
        .unwrap();
    assert!(mix_diag.orientation.is_transposed);
    assert!(mix_diag.orientation.horizontal_score >= 2);

    let raw_diag = result
        .diagnostics
        .iter()
        .find(|d| d.sheet_name == "Q1_Raw")
        .unwrap();
    assert!(!raw_diag.orientation.is_transposed);
    assert_eq!(raw_diag.header.row_index, 1);
}

#[test]
fn xlsx_round_trip_through_pipeline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("q1_report.xlsx");
    agency_export().save_as_xlsx(&path).unwrap();

    let vocab = Vocabulary::default();
    let result = ingest_xlsx(&path, &vocab).unwrap();

    assert_eq!(result.file_name, "q1_report.xlsx");
    assert_eq!(result.raw.rows.len(), 2);
    // Numbers written by the exporter come back as floats; cleaning passes
    // them through
    assert_eq!(result.raw.rows[0]["cost"].as_int(), Some(1_234_567));
    assert_eq!(result.media_mix.rows.len(), 2);
}

#[test]
fn undecodable_container_is_a_hard_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"\x50\x4b\x03\x04 not really a workbook").unwrap();

    let vocab = Vocabulary::default();
    assert!(matches!(
        ingest_xlsx(&path, &vocab),
        Err(SheetError::Decode(_))
    ));
}

#[test]
fn exported_raw_data_rematerializes_identically() {
    let vocab = Vocabulary::default();
    let result = ingest(&agency_export(), "q1_report.xlsx", &vocab);

    let exported = result.original_raw.to_sheet("raw_download");
    let location = locate(&exported, &vocab);
    assert_eq!(location.row_index, 0);

    let round_tripped = materialize(&exported, &location);
    assert_eq!(round_tripped, result.original_raw);
}

#[test]
fn serializes_to_report_history_shape() {
    let vocab = Vocabulary::default();
    let result = ingest(&agency_export(), "q1_report.xlsx", &vocab);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["fileName"], "q1_report.xlsx");
    assert!(json["raw"]["headers"].is_array());
    assert_eq!(json["raw"]["rows"][0]["cost"], 1_234_567);
    assert_eq!(json["mediaDetail"][0]["sheetName"], "Facebook");

    let back: admix_ingest::IngestedWorkbook = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn empty_book_degrades_to_empty_tables() {
    let vocab = Vocabulary::default();
    let result = ingest(&Book::new(), "empty.xlsx", &vocab);

    assert!(result.raw.is_empty());
    assert!(result.media_mix.is_empty());
    assert!(result.media_detail.is_empty());
}

#[test]
fn header_location_is_reusable_outside_the_pipeline() {
    let vocab = Vocabulary::default();
    let sheet = Sheet::from_data(vec![
        vec!["notes", ""],
        vec!["date", "cost"],
        vec!["1/1", "100"],
    ]);
    let location = locate(&sheet, &vocab);
    assert_eq!(
        location,
        HeaderLocation {
            row_index: 1,
            match_count: 2
        }
    );
}
