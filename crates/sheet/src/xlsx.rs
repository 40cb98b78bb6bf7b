use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn decode_err(e: XlsxError) -> SheetError {
    SheetError::Decode(e.to_string())
}

fn write_err(e: rust_xlsxwriter::XlsxError) -> SheetError {
    SheetError::Write(e.to_string())
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        // Excel stores dates as serial days since 1899-12-30
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Book {
    /// Load a book from an Excel file, decoding every sheet.
    ///
    /// Empty cells become `CellValue::Null` so positional indices survive the
    /// decode. A container that cannot be decoded is a hard error; ingestion
    /// heuristics never run without a matrix.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::Decode` if the file is not a readable workbook.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(decode_err)?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let file_stem = path
            .as_ref()
            .file_stem()
            .map_or_else(|| "Book1".to_string(), |s| s.to_string_lossy().into_owned());
        let mut book = Book::with_name(&file_stem);

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(decode_err)?;

            let data: Vec<Vec<CellValue>> = range
                .rows()
                .map(|row| row.iter().map(data_to_cell_value).collect())
                .collect();

            let mut sheet = Sheet::with_name(&sheet_name);
            *sheet.data_mut() = data;
            book.add_sheet(&sheet_name, sheet)?;
        }

        Ok(book)
    }

    /// Get sheet names from an Excel file without loading data
    ///
    /// # Errors
    ///
    /// Returns `SheetError::Decode` if the file cannot be opened.
    pub fn xlsx_sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(decode_err)?;

        Ok(workbook.sheet_names().to_vec())
    }

    /// Save the book to an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(name).map_err(write_err)?;
            write_sheet(sheet, worksheet)?;
        }

        workbook.save(path.as_ref()).map_err(write_err)?;
        Ok(())
    }
}

impl Sheet {
    /// Save the sheet to a single-sheet Excel file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.name()).map_err(write_err)?;

        write_sheet(self, worksheet)?;

        workbook.save(path.as_ref()).map_err(write_err)?;
        Ok(())
    }
}

fn write_sheet(sheet: &Sheet, worksheet: &mut Worksheet) -> Result<()> {
    for (row_idx, row) in sheet.data().iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let row_num = u32::try_from(row_idx)
                .map_err(|_| SheetError::Write("Row index overflow".to_string()))?;
            let col_num = u16::try_from(col_idx)
                .map_err(|_| SheetError::Write("Column index overflow".to_string()))?;

            match cell {
                CellValue::Null => {} // Leave empty
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row_num, col_num, *b)
                        .map_err(write_err)?;
                }
                // Excel stores all numbers as f64; integers beyond 2^53
                // may lose precision
                CellValue::Int(i) => {
                    worksheet
                        .write_number(row_num, col_num, *i as f64)
                        .map_err(write_err)?;
                }
                CellValue::Float(f) => {
                    worksheet
                        .write_number(row_num, col_num, *f)
                        .map_err(write_err)?;
                }
                CellValue::String(s) => {
                    worksheet
                        .write_string(row_num, col_num, s)
                        .map_err(write_err)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_book_xlsx_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.xlsx");

        let mut book = Book::new();
        book.add_sheet("Raw", Sheet::from_data(vec![vec![1, 2, 3]]))
            .unwrap();
        book.add_sheet("MediaMix", Sheet::from_data(vec![vec!["a", "b"]]))
            .unwrap();

        book.save_as_xlsx(&path).unwrap();

        let loaded = Book::from_xlsx(&path).unwrap();
        assert_eq!(loaded.sheet_count(), 2);
        assert_eq!(loaded.sheet_names(), vec!["Raw", "MediaMix"]);
        assert_eq!(loaded.get_sheet("Raw").unwrap().row_count(), 1);
    }

    #[test]
    fn test_xlsx_null_cells_preserve_positions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nulls.xlsx");

        let mut sheet = Sheet::with_name("data");
        *sheet.data_mut() = vec![
            vec![
                CellValue::from("date"),
                CellValue::Null,
                CellValue::from("cost"),
            ],
            vec![CellValue::from("1/1"), CellValue::Null, CellValue::Int(100)],
        ];
        sheet.save_as_xlsx(&path).unwrap();

        let loaded = Book::from_xlsx(&path).unwrap();
        let data = loaded.get_sheet("data").unwrap();
        assert!(data.get(0, 1).unwrap().is_null());
        assert_eq!(data.get(1, 2).unwrap().as_int(), Some(100));
    }

    #[test]
    fn test_xlsx_sheet_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multi.xlsx");

        let mut book = Book::new();
        book.add_sheet("First", Sheet::from_data(vec![vec![1]]))
            .unwrap();
        book.add_sheet("Second", Sheet::from_data(vec![vec![2]]))
            .unwrap();
        book.save_as_xlsx(&path).unwrap();

        let names = Book::xlsx_sheet_names(&path).unwrap();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_decode_failure_surfaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();

        assert!(matches!(
            Book::from_xlsx(&path),
            Err(SheetError::Decode(_))
        ));
    }
}
