//! Standard Deviation user guide
//!
//! This library holds the guide page for the Standard Deviation
//! pricing-comparison menu, the rupiah number formatting used by its tables,
//! and the Excel exports offered as downloads.
//!
//! # Features
//!
//! - Rupiah formatting (`7.000`, `1.234,50`, `27,35%`)
//! - Row-minimum, zero and TOTAL highlighting
//! - Multi-sheet "super button" workbook with per-column number formats
//! - Dummy dataset workbook (built-in or shipped from disk)
//!
//! # Example
//!
//! ```no_run
//! use stdev_guide::excel::SuperButtonExporter;
//! use stdev_guide::samples;
//! use std::path::Path;
//!
//! let exporter = SuperButtonExporter::new(samples::super_button_tables());
//! let sheets = exporter.sheet_names();
//! exporter.export(&sheets, Path::new("Super Button - Standard Deviation.xlsx"))?;
//! # Ok::<(), stdev_guide::error::GuideError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod format;
pub mod guide;
pub mod samples;
pub mod types;

// Re-export commonly used types
pub use error::{GuideError, GuideResult};
pub use format::{
    format_rupiah, format_rupiah_percent, highlight_min_cell, highlight_total, highlight_zero_cell,
    Highlight,
};
pub use types::{CellValue, SheetStyle, Table};
