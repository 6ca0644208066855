//! Super button exporter: selected tables → one multi-sheet workbook

use crate::error::{GuideError, GuideResult};
use crate::format::row_minimum;
use crate::types::{CellValue, SheetStyle, Table};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Thousands-separated whole numbers
pub const NUM_FORMAT_RUPIAH: &str = "#,##0";
/// One decimal followed by a literal percent sign (values are already percents)
pub const NUM_FORMAT_PERCENT: &str = "#,##0.0\"%\"";
/// Fill for the cheapest cell of a row
pub const MINIMUM_FILL: u32 = 0xD9EAD3;

/// Padding added to the widest entry of a column
const AUTOFIT_PADDING: usize = 2;

/// Number format a column is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnNumberFormat {
    Rupiah,
    Percent,
}

impl ColumnNumberFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            ColumnNumberFormat::Rupiah => NUM_FORMAT_RUPIAH,
            ColumnNumberFormat::Percent => NUM_FORMAT_PERCENT,
        }
    }
}

/// Number format of one column of `table`, `None` for text columns
pub fn column_number_format(table: &Table, col: usize) -> Option<ColumnNumberFormat> {
    let numeric = table.dtype(col).is_numeric();
    let percent = table.columns.get(col).is_some_and(|name| name.contains('%'));

    match table.style {
        SheetStyle::HighlightRowMinimum if numeric => Some(ColumnNumberFormat::Percent),
        SheetStyle::HighlightRowMinimum => None,
        SheetStyle::Standard if percent => Some(ColumnNumberFormat::Percent),
        SheetStyle::Standard if numeric => Some(ColumnNumberFormat::Rupiah),
        SheetStyle::Standard => None,
    }
}

/// Style a body cell is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// No number format: text, or numbers in unformatted columns
    Plain,
    Rupiah,
    Percent,
    /// Percent with the minimum fill
    Minimum,
}

/// Format of every cell of one body row, `None` where the cell stays blank.
///
/// On row-minimum sheets the minimum is taken over the cells that are actually
/// written, so a blank infinite value never steals the fill.
pub fn row_formats(table: &Table, row: usize) -> Vec<Option<CellFormat>> {
    let Some(cells) = table.rows.get(row) else {
        return Vec::new();
    };
    let column_formats: Vec<Option<ColumnNumberFormat>> = (0..cells.len())
        .map(|c| column_number_format(table, c))
        .collect();

    let min = match table.style {
        SheetStyle::HighlightRowMinimum => {
            let written: Vec<CellValue> = cells
                .iter()
                .zip(&column_formats)
                .filter(|(cell, format)| format.is_some() && !is_blank(cell))
                .map(|(cell, _)| cell.clone())
                .collect();
            row_minimum(&written)
        }
        SheetStyle::Standard => None,
    };

    cells
        .iter()
        .zip(&column_formats)
        .map(|(cell, column_format)| {
            if is_blank(cell) {
                return None;
            }
            let format = match (cell.as_f64(), column_format) {
                (Some(value), Some(_)) if Some(value) == min => CellFormat::Minimum,
                (Some(_), Some(ColumnNumberFormat::Rupiah)) => CellFormat::Rupiah,
                (Some(_), Some(ColumnNumberFormat::Percent)) => CellFormat::Percent,
                _ => CellFormat::Plain,
            };
            Some(format)
        })
        .collect()
}

/// Autofit width of one column: its widest entry plus padding
pub fn column_width(table: &Table, col: usize) -> usize {
    table.display_len(col) + AUTOFIT_PADDING
}

/// Cell formats shared by every sheet of one workbook
struct SheetFormats {
    header: Format,
    rupiah: Format,
    percent: Format,
    minimum: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center),
            rupiah: Format::new().set_num_format(NUM_FORMAT_RUPIAH),
            percent: Format::new().set_num_format(NUM_FORMAT_PERCENT),
            minimum: Format::new()
                .set_num_format(NUM_FORMAT_PERCENT)
                .set_background_color(Color::RGB(MINIMUM_FILL)),
        }
    }

    fn column(&self, format: ColumnNumberFormat) -> &Format {
        match format {
            ColumnNumberFormat::Rupiah => &self.rupiah,
            ColumnNumberFormat::Percent => &self.percent,
        }
    }

    fn cell(&self, format: CellFormat) -> Option<&Format> {
        match format {
            CellFormat::Plain => None,
            CellFormat::Rupiah => Some(&self.rupiah),
            CellFormat::Percent => Some(&self.percent),
            CellFormat::Minimum => Some(&self.minimum),
        }
    }
}

/// Writes a user-chosen selection of named tables, one worksheet each
pub struct SuperButtonExporter {
    tables: Vec<Table>,
}

impl SuperButtonExporter {
    /// Create an exporter over an ordered catalogue of tables
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Names of the sheets that can be selected, in catalogue order
    pub fn sheet_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up the selected tables in selection order, first occurrence wins
    pub fn resolve(&self, selected: &[String]) -> GuideResult<Vec<&Table>> {
        if selected.is_empty() {
            return Err(GuideError::EmptySelection);
        }

        let mut resolved: Vec<&Table> = Vec::with_capacity(selected.len());
        for name in selected {
            let table = self
                .tables
                .iter()
                .find(|t| &t.name == name)
                .ok_or_else(|| GuideError::UnknownSheet(name.clone()))?;
            if !resolved.iter().any(|t| t.name == table.name) {
                resolved.push(table);
            }
        }
        Ok(resolved)
    }

    /// Build the workbook in memory
    pub fn generate(&self, selected: &[String]) -> GuideResult<Vec<u8>> {
        let tables = self.resolve(selected)?;
        let formats = SheetFormats::new();
        let mut workbook = Workbook::new();

        for table in tables {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&table.name).map_err(|e| {
                GuideError::Export(format!("Failed to set worksheet name '{}': {}", table.name, e))
            })?;

            write_header(worksheet, table, &formats)?;
            write_rows(worksheet, table, &formats)?;
            autofit_columns(worksheet, table, &formats)?;

            info!(sheet = %table.name, rows = table.row_count(), "wrote sheet");
        }

        workbook
            .save_to_buffer()
            .map_err(|e| GuideError::Export(format!("Failed to build Excel file: {}", e)))
    }

    /// Build the workbook and write it to `output_path`
    pub fn export(&self, selected: &[String], output_path: &Path) -> GuideResult<()> {
        let bytes = self.generate(selected)?;
        fs::write(output_path, bytes)?;
        Ok(())
    }
}

fn write_header(worksheet: &mut Worksheet, table: &Table, formats: &SheetFormats) -> GuideResult<()> {
    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &formats.header)
            .map_err(|e| GuideError::Export(format!("Failed to write header: {}", e)))?;
    }
    Ok(())
}

/// Missing and infinite numbers stay blank
fn is_blank(cell: &CellValue) -> bool {
    cell.is_missing() || cell.as_f64().is_some_and(f64::is_infinite)
}

fn write_rows(worksheet: &mut Worksheet, table: &Table, formats: &SheetFormats) -> GuideResult<()> {
    for (r, row) in table.rows.iter().enumerate() {
        let excel_row = (r + 1) as u32; // +1 for header row
        for (c, (cell, format)) in row.iter().zip(row_formats(table, r)).enumerate() {
            let Some(format) = format else {
                continue;
            };
            match (formats.cell(format), cell.as_f64()) {
                (Some(number_format), Some(value)) => {
                    write_number(worksheet, excel_row, c, value, number_format)?
                }
                _ => write_plain(worksheet, excel_row, c, cell)?,
            }
        }
    }
    Ok(())
}

fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    value: f64,
    format: &Format,
) -> GuideResult<()> {
    worksheet
        .write_number_with_format(row, col as u16, value, format)
        .map_err(|e| GuideError::Export(format!("Failed to write number: {}", e)))?;
    Ok(())
}

/// Write a cell without any number format
fn write_plain(worksheet: &mut Worksheet, row: u32, col: usize, cell: &CellValue) -> GuideResult<()> {
    let result = match cell {
        CellValue::Int(n) => worksheet.write_number(row, col as u16, *n as f64),
        CellValue::Float(f) => worksheet.write_number(row, col as u16, *f),
        CellValue::Text(s) => worksheet.write_string(row, col as u16, s),
        CellValue::Empty => return Ok(()),
    };
    result.map_err(|e| GuideError::Export(format!("Failed to write cell: {}", e)))?;
    Ok(())
}

/// Size every column to its widest entry and keep its number format as the column default
fn autofit_columns(
    worksheet: &mut Worksheet,
    table: &Table,
    formats: &SheetFormats,
) -> GuideResult<()> {
    for col in 0..table.column_count() {
        let width = column_width(table, col);
        worksheet
            .set_column_width(col as u16, width as f64)
            .map_err(|e| GuideError::Export(format!("Failed to set column width: {}", e)))?;

        if let Some(format) = column_number_format(table, col) {
            worksheet
                .set_column_format(col as u16, formats.column(format))
                .map_err(|e| GuideError::Export(format!("Failed to set column format: {}", e)))?;
        }

        debug!(sheet = %table.name, col, width, "autofit column");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> SuperButtonExporter {
        let mut a = Table::new("A", ["Scope", "x"]);
        a.add_row(vec![CellValue::from("WP1"), CellValue::Int(1)]);
        let b = Table::new("B", ["Scope"]);
        SuperButtonExporter::new(vec![a, b])
    }

    #[test]
    fn test_resolve_keeps_selection_order() {
        let exporter = catalogue();
        let picked = exporter
            .resolve(&["B".to_string(), "A".to_string(), "B".to_string()])
            .unwrap();
        let names: Vec<&str> = picked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_resolve_rejects_unknown_and_empty() {
        let exporter = catalogue();
        assert!(matches!(
            exporter.resolve(&["C".to_string()]),
            Err(GuideError::UnknownSheet(name)) if name == "C"
        ));
        assert!(matches!(exporter.resolve(&[]), Err(GuideError::EmptySelection)));
    }

    #[test]
    fn test_column_number_formats() {
        let mut standard = Table::new("s", ["Scope", "Best Price", "Dev (%)"]);
        standard.add_row(vec!["WP1".into(), CellValue::Int(10310), CellValue::Float(27.35)]);
        assert_eq!(column_number_format(&standard, 0), None);
        assert_eq!(column_number_format(&standard, 1), Some(ColumnNumberFormat::Rupiah));
        assert_eq!(column_number_format(&standard, 2), Some(ColumnNumberFormat::Percent));

        let minimum = standard.with_style(SheetStyle::HighlightRowMinimum);
        assert_eq!(column_number_format(&minimum, 1), Some(ColumnNumberFormat::Percent));
        assert_eq!(column_number_format(&minimum, 0), None);
    }

    #[test]
    fn test_row_formats_skip_infinite_minimum() {
        let mut table = Table::new("Min", ["Scope", "A", "B"]).with_style(SheetStyle::HighlightRowMinimum);
        table.add_row(vec!["WP1".into(), CellValue::Float(f64::NEG_INFINITY), CellValue::Float(2.0)]);

        assert_eq!(
            row_formats(&table, 0),
            vec![Some(CellFormat::Plain), None, Some(CellFormat::Minimum)]
        );
    }

    #[test]
    fn test_row_formats_fill_ties() {
        let mut table = Table::new("Min", ["Scope", "A", "B", "C"]).with_style(SheetStyle::HighlightRowMinimum);
        table.add_row(vec![
            "WP1".into(),
            CellValue::Int(0),
            CellValue::Float(0.0),
            CellValue::Float(f64::NAN),
        ]);

        assert_eq!(
            row_formats(&table, 0),
            vec![
                Some(CellFormat::Plain),
                Some(CellFormat::Minimum),
                Some(CellFormat::Minimum),
                None,
            ]
        );
        assert!(row_formats(&table, 1).is_empty());
    }

    #[test]
    fn test_standard_rows_never_filled() {
        let mut table = Table::new("s", ["Scope", "Price", "Dev (%)"]);
        table.add_row(vec!["WP1".into(), CellValue::Int(5), CellValue::Float(1.5)]);
        assert_eq!(
            row_formats(&table, 0),
            vec![
                Some(CellFormat::Plain),
                Some(CellFormat::Rupiah),
                Some(CellFormat::Percent),
            ]
        );
    }

    #[test]
    fn test_sheet_formats() {
        let formats = SheetFormats::new();
        assert_eq!(
            formats.header,
            Format::new()
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
        );
        assert_eq!(
            formats.cell(CellFormat::Minimum),
            Some(&Format::new().set_num_format("#,##0.0\"%\"").set_background_color(Color::RGB(0xD9EAD3)))
        );
        assert_eq!(formats.cell(CellFormat::Rupiah), Some(&Format::new().set_num_format("#,##0")));
        assert_eq!(formats.cell(CellFormat::Percent), Some(formats.column(ColumnNumberFormat::Percent)));
        assert_eq!(formats.cell(CellFormat::Plain), None);
    }

    #[test]
    fn test_blank_cells() {
        assert!(is_blank(&CellValue::Empty));
        assert!(is_blank(&CellValue::Float(f64::NAN)));
        assert!(is_blank(&CellValue::Float(f64::NEG_INFINITY)));
        assert!(!is_blank(&CellValue::Float(0.0)));
        assert!(!is_blank(&CellValue::from("")));
    }
}
