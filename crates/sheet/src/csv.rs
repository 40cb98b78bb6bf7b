use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl Sheet {
    /// Serialize the sheet to a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        for row in self.data() {
            let record: Vec<String> = row.iter().map(|cell| cell.as_str()).collect();
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SheetError::Write(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| SheetError::Write(e.to_string()))
    }

    /// Save the sheet to a CSV file
    pub fn save_as_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_csv_string()?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
