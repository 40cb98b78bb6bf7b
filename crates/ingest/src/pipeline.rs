//! The ingestion pipeline.
//!
//! Composes classification, orientation detection, header location and row
//! materialization into one pass over a decoded workbook. Heuristic
//! ambiguity degrades to documented defaults and empty tables; only a
//! workbook that cannot be decoded at all is a hard error, and that surfaces
//! from [`Book::from_xlsx`] before this module runs.

use crate::classify::{classify, SheetRole, SheetRoles};
use crate::header::{locate, HeaderLocation};
use crate::orient::{detect, OrientationDecision};
use crate::table::{materialize, NormalizedTable};
use crate::vocab::Vocabulary;
use admix_sheet::{Book, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One media-detail sheet's normalized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetailTable {
    pub sheet_name: String,
    pub table: NormalizedTable,
}

/// Per-sheet record of what the heuristics decided.
///
/// Kept on the final result so a degraded guess (no transpose evidence, a
/// defaulted header row) stays distinguishable from a confident one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDiagnostics {
    pub sheet_name: String,
    pub role: SheetRole,
    pub orientation: OrientationDecision,
    pub header: HeaderLocation,
}

/// The normalized output for one uploaded workbook.
///
/// Constructed once per file and immutable afterwards. `raw` has excluded
/// columns removed; `original_raw` keeps the full column set for raw-data
/// export. Empty tables mean "data unavailable", not failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedWorkbook {
    pub file_name: String,
    pub raw: NormalizedTable,
    pub original_raw: NormalizedTable,
    pub media_mix: NormalizedTable,
    pub media_detail: Vec<MediaDetailTable>,
    pub diagnostics: Vec<SheetDiagnostics>,
}

/// Normalize one classified sheet, recording what the heuristics decided.
///
/// An empty role name or a missing sheet yields an empty table; a usable raw
/// sheet must survive a malformed mix sheet.
fn normalize_sheet(
    book: &Book,
    sheet_name: &str,
    role: SheetRole,
    vocab: &Vocabulary,
    diagnostics: &mut Vec<SheetDiagnostics>,
) -> NormalizedTable {
    if sheet_name.is_empty() {
        return NormalizedTable::default();
    }
    let Ok(sheet) = book.get_sheet(sheet_name) else {
        return NormalizedTable::default();
    };

    let (oriented, orientation) = detect(sheet, vocab);
    let header = locate(&oriented, vocab);
    let table = materialize(&oriented, &header);

    tracing::debug!(
        sheet = sheet_name,
        ?role,
        transposed = orientation.is_transposed,
        header_row = header.row_index,
        header_matches = header.match_count,
        rows = table.rows.len(),
        "sheet normalized"
    );

    diagnostics.push(SheetDiagnostics {
        sheet_name: sheet_name.to_string(),
        role,
        orientation,
        header,
    });

    table
}

/// Ingest a decoded workbook into its normalized form.
///
/// Classifies sheet names into roles, then runs each relevant sheet through
/// orientation detection, header location and materialization. Column
/// filtering applies to the raw role only; the unfiltered table is kept as
/// `original_raw`.
#[must_use]
pub fn ingest(book: &Book, file_name: &str, vocab: &Vocabulary) -> IngestedWorkbook {
    let sheet_names: Vec<String> = book
        .sheet_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    let SheetRoles {
        raw_name,
        media_mix_name,
        media_detail_names,
    } = classify(&sheet_names);

    tracing::info!(
        file = file_name,
        sheets = sheet_names.len(),
        raw = %raw_name,
        media_mix = %media_mix_name,
        details = media_detail_names.len(),
        "ingesting workbook"
    );

    let mut diagnostics = Vec::new();

    let original_raw = normalize_sheet(book, &raw_name, SheetRole::Raw, vocab, &mut diagnostics);
    let raw = original_raw.without_columns(vocab);
    let media_mix = normalize_sheet(
        book,
        &media_mix_name,
        SheetRole::MediaMix,
        vocab,
        &mut diagnostics,
    );

    let media_detail = media_detail_names
        .iter()
        .map(|name| MediaDetailTable {
            sheet_name: name.clone(),
            table: normalize_sheet(book, name, SheetRole::MediaDetail, vocab, &mut diagnostics),
        })
        .collect();

    IngestedWorkbook {
        file_name: file_name.to_string(),
        raw,
        original_raw,
        media_mix,
        media_detail,
        diagnostics,
    }
}

/// Open an Excel file and ingest it in one call.
///
/// # Errors
///
/// Returns `SheetError::Decode` when the container cannot be decoded; no
/// partial result is possible without a matrix.
pub fn ingest_xlsx<P: AsRef<Path>>(path: P, vocab: &Vocabulary) -> Result<IngestedWorkbook> {
    let book = Book::from_xlsx(path.as_ref())?;
    let file_name = path
        .as_ref()
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    Ok(ingest(&book, &file_name, vocab))
}
