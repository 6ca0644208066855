//! Excel output: the super button workbook and the dummy dataset
//!
//! - Export: selected example tables → one styled multi-sheet .xlsx
//! - Dummy dataset: built-in or file-backed single-sheet .xlsx, with preview

mod dummy;
mod exporter;

pub use dummy::{preview, DummyDataset};
pub use exporter::{
    column_number_format, column_width, row_formats, CellFormat, ColumnNumberFormat,
    SuperButtonExporter, MINIMUM_FILL, NUM_FORMAT_PERCENT, NUM_FORMAT_RUPIAH,
};
