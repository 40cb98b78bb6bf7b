//! Raw workbook/sheet data model for admix
//!
//! Represents decoded spreadsheet workbooks exactly as stored: a [`Book`] is
//! an ordered map of sheet names to [`Sheet`]s, and a [`Sheet`] is a row-major
//! grid of [`CellValue`]s with `Null` marking empty cells. No interpretation
//! of the data happens here; the `admix-ingest` crate layers classification
//! and normalization on top.
//!
//! # Examples
//!
//! ## Creating a sheet from data
//!
//! ```
//! use admix_sheet::Sheet;
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["date", "media", "cost"],
//!     vec!["2024-01-01", "Facebook", "1000"],
//! ]);
//!
//! assert_eq!(sheet.row_count(), 2);
//! assert_eq!(sheet.col_count(), 3);
//! ```
//!
//! ## Loading a workbook from an Excel file
//!
//! ```no_run
//! use admix_sheet::Book;
//!
//! let book = Book::from_xlsx("campaign_export.xlsx").unwrap();
//! for name in book.sheet_names() {
//!     println!("{name}");
//! }
//! ```

mod book;
mod cell;
mod csv;
mod error;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
