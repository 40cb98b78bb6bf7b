//! Row materialization and the normalized table type.
//!
//! Once a sheet is row-major and its header row is known, the remaining rows
//! become field-keyed records: each non-empty header maps to the cleaned cell
//! beneath it. Rows with no usable value at all (the trailing blank rows most
//! exports carry) are dropped.

use crate::clean::clean;
use crate::header::HeaderLocation;
use crate::vocab::Vocabulary;
use admix_sheet::{CellValue, Sheet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered, field-keyed view of one sheet's data.
///
/// `headers` are unique and non-empty; every row's key set is a subset of
/// `headers`, in header order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<IndexMap<String, CellValue>>,
}

/// Convert a header row plus body rows into field-keyed records.
///
/// Header cells are stringified and trimmed. Positions whose header is empty
/// (or a duplicate of an earlier header) stay in place so column indices keep
/// lining up, but contribute no record key. Body rows preceding the header
/// row are ignored.
#[must_use]
pub fn materialize(sheet: &Sheet, location: &HeaderLocation) -> NormalizedTable {
    let Some(header_row) = sheet.row(location.row_index) else {
        return NormalizedTable::default();
    };

    // Positional header list; empty slots keep indices aligned
    let mut seen = Vec::new();
    let positional: Vec<String> = header_row
        .iter()
        .map(|cell| {
            let name = cell.as_str().trim().to_string();
            if name.is_empty() || seen.contains(&name) {
                String::new()
            } else {
                seen.push(name.clone());
                name
            }
        })
        .collect();

    let headers: Vec<String> = positional.iter().filter(|h| !h.is_empty()).cloned().collect();

    let rows = sheet
        .data()
        .iter()
        .skip(location.row_index + 1)
        .filter_map(|row| {
            let mut record = IndexMap::new();
            for (idx, header) in positional.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let cell = row.get(idx).cloned().unwrap_or(CellValue::Null);
                record.insert(header.clone(), clean(&cell));
            }
            if record.values().all(CellValue::is_blank) {
                None
            } else {
                Some(record)
            }
        })
        .collect();

    NormalizedTable { headers, rows }
}

impl NormalizedTable {
    /// Check whether the table holds no headers and no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Return a copy with excluded columns removed.
    ///
    /// Headers hitting the vocabulary's column-exclusion set disappear from
    /// the header list and from every record. Applied to the raw table only;
    /// callers keep the unfiltered table around for raw-data export.
    #[must_use]
    pub fn without_columns(&self, vocab: &Vocabulary) -> NormalizedTable {
        let headers: Vec<String> = self
            .headers
            .iter()
            .filter(|h| !vocab.is_excluded_column(h))
            .cloned()
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|record| {
                record
                    .iter()
                    .filter(|(key, _)| headers.contains(key))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .collect();

        NormalizedTable { headers, rows }
    }

    /// Serialize the table back into a sheet: header row first, then one row
    /// per record with columns in header order. Inverse of materialization.
    #[must_use]
    pub fn to_sheet(&self, name: &str) -> Sheet {
        let mut data: Vec<Vec<CellValue>> = Vec::with_capacity(self.rows.len() + 1);
        data.push(self.headers.iter().map(|h| CellValue::from(h.as_str())).collect());

        for record in &self.rows {
            data.push(
                self.headers
                    .iter()
                    .map(|h| record.get(h).cloned().unwrap_or(CellValue::Null))
                    .collect(),
            );
        }

        let mut sheet = Sheet::with_name(name);
        *sheet.data_mut() = data;
        sheet
    }
}
