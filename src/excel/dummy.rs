//! Dummy dataset download and preview

use crate::error::{GuideError, GuideResult};
use crate::samples;
use crate::types::{CellValue, Table};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The built-in table sits at B2 to show that floating tables are accepted
const ORIGIN_ROW: u32 = 1;
const ORIGIN_COL: u16 = 1;

/// Where the dummy dataset bytes come from
#[derive(Debug, Clone)]
pub enum DummyDataset {
    /// Generated from the sample table
    Builtin,
    /// An existing workbook shipped as is
    File(PathBuf),
}

impl DummyDataset {
    pub fn builtin() -> Self {
        DummyDataset::Builtin
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        DummyDataset::File(path.as_ref().to_path_buf())
    }

    /// Pick the configured source, falling back to the built-in dataset
    pub fn from_source(source: Option<&Path>) -> Self {
        match source {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Workbook bytes ready to be saved
    pub fn bytes(&self) -> GuideResult<Vec<u8>> {
        match self {
            DummyDataset::Builtin => {
                debug!("building dummy dataset from sample table");
                build_workbook(&samples::dummy_dataset())
            }
            DummyDataset::File(path) => {
                debug!(path = %path.display(), "reading dummy dataset file");
                Ok(fs::read(path)?)
            }
        }
    }

    /// Write the dataset to `output_path` and return the bytes written
    pub fn write_to(&self, output_path: &Path) -> GuideResult<Vec<u8>> {
        let bytes = self.bytes()?;
        fs::write(output_path, &bytes)?;
        info!(path = %output_path.display(), size = bytes.len(), "wrote dummy dataset");
        Ok(bytes)
    }
}

/// Single-sheet workbook holding `table` as a floating table
fn build_workbook(table: &Table) -> GuideResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Sheet1")
        .map_err(|e| GuideError::Export(format!("Failed to set worksheet name: {}", e)))?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format(super::exporter::NUM_FORMAT_RUPIAH);

    for (c, name) in table.columns.iter().enumerate() {
        let col = ORIGIN_COL + c as u16;
        worksheet
            .write_string_with_format(ORIGIN_ROW, col, name, &header_format)
            .map_err(|e| GuideError::Export(format!("Failed to write header: {}", e)))?;
        worksheet
            .set_column_width(col, (table.display_len(c) + 2) as f64)
            .map_err(|e| GuideError::Export(format!("Failed to set column width: {}", e)))?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let excel_row = ORIGIN_ROW + 1 + r as u32;
        for (c, cell) in row.iter().enumerate() {
            let col = ORIGIN_COL + c as u16;
            let result = match cell {
                CellValue::Int(n) => {
                    worksheet.write_number_with_format(excel_row, col, *n as f64, &number_format)
                }
                CellValue::Float(f) => worksheet.write_number_with_format(excel_row, col, *f, &number_format),
                CellValue::Text(s) => worksheet.write_string(excel_row, col, s),
                CellValue::Empty => continue,
            };
            result.map_err(|e| GuideError::Export(format!("Failed to write cell: {}", e)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| GuideError::Export(format!("Failed to build Excel file: {}", e)))
}

/// Read the first sheet of a workbook back into a table.
///
/// The first row of the used range is taken as the header, so floating
/// tables preview the same as tables anchored at A1.
pub fn preview(bytes: &[u8]) -> GuideResult<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| GuideError::Import(format!("Failed to open Excel file: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| GuideError::Import("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| GuideError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|d| d.to_string()).collect())
        .unwrap_or_default();

    let mut table = Table::new(sheet_name, header);
    for row in rows {
        table.add_row(row.iter().map(data_to_cell).collect());
    }
    Ok(table)
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Int(*i),
        // Excel stores every number as a float
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => CellValue::Int(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}
