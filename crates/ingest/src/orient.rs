//! Layout-orientation detection.
//!
//! Some teams export records as columns instead of rows, with the field
//! names stacked down column A. Scoring both interpretations against the
//! header vocabulary decides whether the matrix needs a transpose before the
//! header row can be located.

use crate::vocab::Vocabulary;
use admix_sheet::Sheet;
use serde::{Deserialize, Serialize};

/// Rows scanned when scoring the row-major interpretation.
pub const VERTICAL_SCAN_ROWS: usize = 20;
/// Rows whose first cell is scanned when scoring the column-major interpretation.
pub const HORIZONTAL_SCAN_ROWS: usize = 50;
/// Minimum column-A matches before a transpose is considered. A single
/// coincidental keyword in column A must not flip the sheet.
const MIN_HORIZONTAL_MATCHES: usize = 2;

/// Diagnostic record for one orientation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientationDecision {
    pub is_transposed: bool,
    pub vertical_score: usize,
    pub horizontal_score: usize,
}

/// Score a sheet's layout and return it row-major.
///
/// The vertical score is the best distinct-keyword count over any of the
/// first [`VERTICAL_SCAN_ROWS`] rows; the horizontal score counts first-column
/// cells among the first [`HORIZONTAL_SCAN_ROWS`] rows that match at least
/// one keyword. The sheet is transposed only when the horizontal score wins
/// outright and reaches [`MIN_HORIZONTAL_MATCHES`]. An empty sheet comes back
/// unchanged with both scores at zero.
#[must_use]
pub fn detect(sheet: &Sheet, vocab: &Vocabulary) -> (Sheet, OrientationDecision) {
    let vertical_score = sheet
        .data()
        .iter()
        .take(VERTICAL_SCAN_ROWS)
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|c| c.as_str()).collect();
            vocab.count_header_matches(&cells)
        })
        .max()
        .unwrap_or(0);

    let horizontal_score = sheet
        .data()
        .iter()
        .take(HORIZONTAL_SCAN_ROWS)
        .filter(|row| {
            row.first()
                .is_some_and(|cell| vocab.matches_header(&cell.as_str()))
        })
        .count();

    let is_transposed =
        horizontal_score > vertical_score && horizontal_score >= MIN_HORIZONTAL_MATCHES;

    let decision = OrientationDecision {
        is_transposed,
        vertical_score,
        horizontal_score,
    };

    if is_transposed {
        tracing::debug!(
            sheet = sheet.name(),
            vertical_score,
            horizontal_score,
            "column-major layout detected, transposing"
        );
        (sheet.transpose(), decision)
    } else {
        (sheet.clone(), decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_sheet_untouched() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["date", "media", "cost"],
            vec!["2024-01-01", "Facebook", "1000"],
        ]);

        let (out, decision) = detect(&sheet, &vocab);
        assert!(!decision.is_transposed);
        assert_eq!(decision.vertical_score, 3);
        assert_eq!(out, sheet);
    }

    #[test]
    fn test_column_major_sheet_transposed() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["date", "2024-01-01", "2024-01-02"],
            vec!["media", "Facebook", "Google"],
            vec!["cost", "1000", "2000"],
        ]);

        let (out, decision) = detect(&sheet, &vocab);
        assert!(decision.is_transposed);
        assert_eq!(decision.horizontal_score, 3);
        assert_eq!(
            out.row(0).unwrap()[1],
            admix_sheet::CellValue::from("media")
        );
    }

    #[test]
    fn test_single_column_a_match_does_not_transpose() {
        let vocab = Vocabulary::default();
        // Column A holds one keyword-bearing cell; that alone must not flip
        // the sheet even when the vertical score is zero elsewhere
        let sheet = Sheet::from_data(vec![
            vec!["날짜", "x", "y", "z"],
            vec!["2024-01-01", "1", "2", "3"],
            vec!["2024-01-02", "4", "5", "6"],
        ]);

        let (out, decision) = detect(&sheet, &vocab);
        assert!(!decision.is_transposed);
        assert!(decision.horizontal_score < 2);
        assert_eq!(out, sheet);
    }

    #[test]
    fn test_empty_sheet() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::new();
        let (out, decision) = detect(&sheet, &vocab);
        assert!(out.is_empty());
        assert_eq!(
            decision,
            OrientationDecision {
                is_transposed: false,
                vertical_score: 0,
                horizontal_score: 0
            }
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["date", "1/1", "1/2"],
            vec!["cost", "10", "20"],
        ]);
        let first = detect(&sheet, &vocab);
        let second = detect(&sheet, &vocab);
        assert_eq!(first.1, second.1);
        assert_eq!(first.0, second.0);
    }
}
