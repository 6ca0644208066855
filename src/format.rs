//! Rupiah number formatting and cell highlighting
//!
//! Numbers are shown the Indonesian way: `.` groups thousands and `,` marks
//! decimals. Integral values drop their decimals entirely, so `7000.0`
//! renders as `7.000` and `1234.5` as `1.234,50`.

use crate::types::{CellValue, Table};

/// Format a cell in rupiah style.
///
/// Missing values become an empty string. Text that parses as a finite
/// number is formatted as that number; any other text is returned as is.
pub fn format_rupiah(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Int(n) => format_rupiah_number(*n as f64),
        CellValue::Float(f) if f.is_nan() => String::new(),
        CellValue::Float(f) => format_rupiah_number(*f),
        CellValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => format_rupiah_number(f),
            _ => s.clone(),
        },
    }
}

/// Format a cell in rupiah style followed by a percent sign
pub fn format_rupiah_percent(value: &CellValue) -> String {
    if value.is_missing() {
        return String::new();
    }
    format!("{}%", format_rupiah(value))
}

/// Format a plain number in rupiah style
pub fn format_rupiah_number(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    if x.fract() == 0.0 {
        let sign = if x < 0.0 { "-" } else { "" };
        return format!("{}{}", sign, group_thousands(&format!("{:.0}", x.abs())));
    }

    let sign = if x.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.2}", x.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // Rounding can leave nothing behind the decimal mark (7000.001 -> 7.000,00)
    if frac_part == "00" {
        return format!("{}{}", sign, group_thousands(int_part));
    }
    format!("{}{},{}", sign, group_thousands(int_part), frac_part)
}

/// Insert `.` between every group of three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

//==============================================================================
// Highlighting
//==============================================================================

/// Visual emphasis applied to a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Smallest number in its row
    Minimum,
    /// Number equal to zero
    Zero,
    /// Counter-example cell (TOTAL rows and columns)
    Warning,
}

impl Highlight {
    /// CSS declaration for the highlight
    pub fn css(self) -> &'static str {
        match self {
            Highlight::Minimum | Highlight::Zero => "background-color: #C6EFCE; color: #006100;",
            Highlight::Warning => "color: #FF4D4D;",
        }
    }

    /// Foreground colour as RGB
    pub fn foreground(self) -> (u8, u8, u8) {
        match self {
            Highlight::Minimum | Highlight::Zero => (0x00, 0x61, 0x00),
            Highlight::Warning => (0xFF, 0x4D, 0x4D),
        }
    }

    /// Background colour as RGB, if any
    pub fn background(self) -> Option<(u8, u8, u8)> {
        match self {
            Highlight::Minimum | Highlight::Zero => Some((0xC6, 0xEF, 0xCE)),
            Highlight::Warning => None,
        }
    }
}

/// Smallest numeric value in a row, NaN ignored
pub fn row_minimum(row: &[CellValue]) -> Option<f64> {
    row.iter()
        .filter_map(CellValue::as_f64)
        .filter(|v| !v.is_nan())
        .fold(None, |min, v| match min {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

/// Flag every cell equal to the row's numeric minimum
pub fn highlight_min_cell(row: &[CellValue]) -> Vec<Option<Highlight>> {
    let min = row_minimum(row);
    row.iter()
        .map(|cell| match (cell.as_f64(), min) {
            (Some(v), Some(m)) if v == m => Some(Highlight::Minimum),
            _ => None,
        })
        .collect()
}

/// Flag every numeric cell equal to zero.
///
/// Public highlighting API for callers styling their own tables. The guide
/// page marks the Rank-1 table with [`highlight_min_cell`] instead, since a
/// zero deviation is always the row minimum there.
///
/// ```
/// use stdev_guide::{highlight_zero_cell, CellValue, Highlight};
///
/// let row = vec![CellValue::from("WP2"), CellValue::Float(22.57), CellValue::Int(0)];
/// assert_eq!(highlight_zero_cell(&row), vec![None, None, Some(Highlight::Zero)]);
/// ```
pub fn highlight_zero_cell(row: &[CellValue]) -> Vec<Option<Highlight>> {
    row.iter()
        .map(|cell| match cell.as_f64() {
            Some(v) if v == 0.0 => Some(Highlight::Zero),
            _ => None,
        })
        .collect()
}

/// Mark the total row entirely, and the total column on every other row.
///
/// A row is the total row when its `label_column` cell reads `total_label`.
/// Missing columns simply produce no marks.
pub fn highlight_total(
    table: &Table,
    label_column: &str,
    total_label: &str,
    total_column: &str,
) -> Vec<Vec<Option<Highlight>>> {
    let label_idx = table.column_index(label_column);
    let total_idx = table.column_index(total_column);

    table
        .rows
        .iter()
        .map(|row| {
            let is_total_row = label_idx
                .and_then(|i| row.get(i))
                .is_some_and(|cell| matches!(cell, CellValue::Text(s) if s == total_label));

            (0..row.len())
                .map(|i| {
                    if is_total_row || Some(i) == total_idx {
                        Some(Highlight::Warning)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect()
}
