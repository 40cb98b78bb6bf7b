//! Header-row location.
//!
//! Header rows are not always the first row: exports often open with titles,
//! date ranges or legend rows. The locator scores each candidate row by how
//! many distinct header keywords it carries and keeps the best one.

use crate::vocab::Vocabulary;
use admix_sheet::Sheet;
use serde::{Deserialize, Serialize};

/// Rows scanned when looking for the header row.
pub const HEADER_SCAN_ROWS: usize = 30;
/// A row matching this many distinct keywords is taken as the header
/// immediately, without scanning further.
const EARLY_EXIT_MATCHES: usize = 3;

/// Diagnostic record for one header-location decision.
///
/// `match_count` of zero means no keyword matched anywhere in the scanned
/// window and row 0 was assumed; downstream consumers can use that to tell
/// a degraded guess from a confident match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLocation {
    pub row_index: usize,
    pub match_count: usize,
}

/// Find the row most likely to be the header row.
///
/// Scans up to [`HEADER_SCAN_ROWS`] rows, counting distinct header keywords
/// per row. The highest-scoring row wins, ties keeping the earliest; a row
/// reaching [`EARLY_EXIT_MATCHES`] matches short-circuits the scan. With no
/// match anywhere the locator defaults to row 0.
#[must_use]
pub fn locate(sheet: &Sheet, vocab: &Vocabulary) -> HeaderLocation {
    let mut best = HeaderLocation {
        row_index: 0,
        match_count: 0,
    };

    for (index, row) in sheet.data().iter().take(HEADER_SCAN_ROWS).enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.as_str()).collect();
        let count = vocab.count_header_matches(&cells);

        if count > best.match_count {
            best = HeaderLocation {
                row_index: index,
                match_count: count,
            };
        }

        if count >= EARLY_EXIT_MATCHES {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_on_first_row() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["date", "media", "cost"],
            vec!["1/1", "Facebook", "100"],
        ]);
        let loc = locate(&sheet, &vocab);
        assert_eq!(loc.row_index, 0);
        assert_eq!(loc.match_count, 3);
    }

    #[test]
    fn test_header_below_title_rows() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["Campaign Report Q1", "", ""],
            vec!["", "", ""],
            vec!["date", "media", "cost"],
            vec!["1/1", "Facebook", "100"],
        ]);
        let loc = locate(&sheet, &vocab);
        // row 0 scores 1 ("campaign"); row 2 hits the early-exit threshold
        assert_eq!(loc.row_index, 2);
        assert_eq!(loc.match_count, 3);
    }

    #[test]
    fn test_later_stronger_row_wins_over_weak_candidate() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["date range: Jan", ""],
            vec!["일자", "비용"],
            vec!["1/1", "100"],
        ]);
        let loc = locate(&sheet, &vocab);
        // row 0 scores 1, row 1 scores 2 and never triggers early exit
        assert_eq!(loc.row_index, 1);
        assert_eq!(loc.match_count, 2);
    }

    #[test]
    fn test_tie_keeps_earliest_row() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![
            vec!["date", "x"],
            vec!["일자", "y"],
        ]);
        let loc = locate(&sheet, &vocab);
        assert_eq!(loc.row_index, 0);
        assert_eq!(loc.match_count, 1);
    }

    #[test]
    fn test_no_match_defaults_to_row_zero() {
        let vocab = Vocabulary::default();
        let sheet = Sheet::from_data(vec![vec!["a", "b"], vec!["c", "d"]]);
        let loc = locate(&sheet, &vocab);
        assert_eq!(loc.row_index, 0);
        assert_eq!(loc.match_count, 0);
    }

    #[test]
    fn test_scan_window_is_bounded() {
        let vocab = Vocabulary::default();
        let mut rows: Vec<Vec<&str>> = vec![vec!["x", "y"]; HEADER_SCAN_ROWS];
        rows.push(vec!["date", "cost"]);
        let sheet = Sheet::from_data(rows);
        let loc = locate(&sheet, &vocab);
        // the real header sits past the scan cap, so the default applies
        assert_eq!(loc.row_index, 0);
        assert_eq!(loc.match_count, 0);
    }
}
