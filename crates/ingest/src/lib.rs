//! Sheet ingestion and normalization engine for ad-performance workbooks
//!
//! Advertising exports arrive with no common shape: records laid out as rows
//! or as columns, header rows buried under title rows, sheet names chosen per
//! team, and cells full of human formatting ("₩1,234,567"). This crate turns
//! a decoded workbook into a small set of typed, row-oriented tables:
//!
//! 1. [`classify`] assigns each sheet a role (raw, media mix, media detail)
//!    from its name alone.
//! 2. [`detect`] scores the layout and transposes column-major sheets.
//! 3. [`locate`] finds the header row.
//! 4. [`materialize`] turns header + body rows into cleaned, field-keyed
//!    records.
//! 5. [`ingest`] composes the above per workbook and applies raw-column
//!    filtering.
//!
//! Every heuristic is a pure function over an immutable matrix; ambiguity
//! degrades to documented defaults (row 0, no transpose, empty table) and is
//! recorded in per-sheet diagnostics rather than raised as an error.
//!
//! # Examples
//!
//! ```
//! use admix_ingest::{ingest, Vocabulary};
//! use admix_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("raw", Sheet::from_data(vec![
//!     vec!["date", "media", "cost"],
//!     vec!["2024-01-01", "Facebook", "₩1,000"],
//! ])).unwrap();
//!
//! let result = ingest(&book, "export.xlsx", &Vocabulary::default());
//! assert_eq!(result.raw.rows.len(), 1);
//! ```

mod classify;
mod clean;
mod header;
mod orient;
mod pipeline;
mod table;
mod vocab;

/// Re-export sheet-role classification.
pub use classify::{classify, SheetRole, SheetRoles};
/// Re-export single-cell cleaning.
pub use clean::clean;
/// Re-export header location.
pub use header::{locate, HeaderLocation, HEADER_SCAN_ROWS};
/// Re-export orientation detection.
pub use orient::{detect, OrientationDecision, HORIZONTAL_SCAN_ROWS, VERTICAL_SCAN_ROWS};
/// Re-export the pipeline and its output types.
pub use pipeline::{ingest, ingest_xlsx, IngestedWorkbook, MediaDetailTable, SheetDiagnostics};
/// Re-export row materialization and the normalized table.
pub use table::{materialize, NormalizedTable};
/// Re-export the keyword vocabulary.
pub use vocab::Vocabulary;
