//! Domain vocabulary backing every ingestion heuristic.
//!
//! Advertising exports name the same field many ways across teams and
//! languages, so detection works on case-insensitive substring matching
//! against a small bilingual keyword set rather than exact column names.

/// Read-only keyword sets used for header detection and column exclusion.
///
/// Passed by reference into the detectors; there is no mutation path once a
/// pipeline holds one, which keeps every heuristic deterministic for a given
/// input matrix.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    header_keywords: Vec<String>,
    exclude_column_keywords: Vec<String>,
}

/// Terms expected somewhere in a header row.
const HEADER_KEYWORDS: &[&str] = &[
    "date", "일자", "날짜", "media", "매체", "cost", "비용", "imp", "노출", "click", "광고주",
    "campaign", "캠페인",
];

/// Column-name fragments that disqualify a column from the filtered output.
const EXCLUDE_COLUMN_KEYWORDS: &[&str] = &[
    "os", "요일", "day", "week", "지면", "placement", "device", "기기", "summary", "sum",
];

impl Vocabulary {
    /// Build a vocabulary from explicit keyword sets.
    ///
    /// Keywords are lower-cased on construction; matching is substring-based.
    #[must_use]
    pub fn new<S: AsRef<str>>(header_keywords: &[S], exclude_column_keywords: &[S]) -> Self {
        Vocabulary {
            header_keywords: header_keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            exclude_column_keywords: exclude_column_keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Replace the column-exclusion set, keeping the header keywords.
    ///
    /// The exclusion list varies between export revisions, so it stays
    /// configurable where the header set does not need to be.
    #[must_use]
    pub fn with_excluded_columns<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        self.exclude_column_keywords = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
        self
    }

    /// Check whether a single cell's text matches any header keyword.
    #[must_use]
    pub fn matches_header(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.header_keywords.iter().any(|k| lower.contains(k))
    }

    /// Count distinct header keywords matched across a row of cell texts.
    ///
    /// Deduplicated by keyword, not by cell: a keyword appearing in three
    /// cells still counts once.
    #[must_use]
    pub fn count_header_matches(&self, cells: &[String]) -> usize {
        let lowered: Vec<String> = cells.iter().map(|c| c.to_lowercase()).collect();
        self.header_keywords
            .iter()
            .filter(|k| lowered.iter().any(|c| c.contains(k.as_str())))
            .count()
    }

    /// Check whether a header name hits the column-exclusion set.
    ///
    /// Fragments match only at non-alphanumeric boundaries: "os" disqualifies
    /// "OS" and "OS 구분" but not "cost".
    #[must_use]
    pub fn is_excluded_column(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.exclude_column_keywords
            .iter()
            .any(|k| contains_token(&lower, k))
    }
}

/// Substring search that rejects matches glued to ASCII alphanumerics on
/// either side.
fn contains_token(haystack: &str, fragment: &str) -> bool {
    if fragment.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(fragment) {
        let at = start + pos;
        let end = at + fragment.len();
        let before_ok = haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::new(HEADER_KEYWORDS, EXCLUDE_COLUMN_KEYWORDS)
    }
}
