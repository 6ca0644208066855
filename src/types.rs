use serde::{Deserialize, Serialize};

//==============================================================================
// Cells
//==============================================================================

/// A single cell of an example table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Numeric value of the cell, NaN included
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Text(_) | CellValue::Empty => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Missing in the dataframe sense: empty, or a NaN float
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

//==============================================================================
// Columns
//==============================================================================

/// Column type as a dataframe would infer it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDtype {
    /// Every cell is an integer
    Integer,
    /// Numbers only, at least one float or missing value
    Float,
    /// Anything holding text, or nothing at all
    Object,
}

impl ColumnDtype {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnDtype::Integer | ColumnDtype::Float)
    }

    /// Infer the dtype of a column from its cells
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut saw_number = false;
        let mut saw_float = false;
        for cell in cells {
            match cell {
                CellValue::Text(_) => return ColumnDtype::Object,
                CellValue::Int(_) => saw_number = true,
                CellValue::Float(_) => {
                    saw_number = true;
                    saw_float = true;
                }
                // A hole in a numeric column turns it into floats
                CellValue::Empty => saw_float = true,
            }
        }

        match (saw_number, saw_float) {
            (false, _) => ColumnDtype::Object,
            (true, false) => ColumnDtype::Integer,
            (true, true) => ColumnDtype::Float,
        }
    }

    /// String form of a cell under this dtype, used for column autofit
    pub fn display(self, cell: &CellValue) -> String {
        match (self, cell) {
            (ColumnDtype::Float, CellValue::Int(n)) => format!("{:?}", *n as f64),
            (ColumnDtype::Float, CellValue::Empty) => "nan".to_string(),
            (_, CellValue::Int(n)) => n.to_string(),
            (_, CellValue::Float(f)) if f.is_nan() => "nan".to_string(),
            (_, CellValue::Float(f)) => format!("{:?}", f),
            (_, CellValue::Text(s)) => s.clone(),
            (_, CellValue::Empty) => String::new(),
        }
    }
}

//==============================================================================
// Tables
//==============================================================================

/// How a table is styled when written to its own worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetStyle {
    /// Numbers get a thousands format, `%` columns a percentage format
    #[default]
    Standard,
    /// Every number is a percentage and the smallest one per row is filled
    HighlightRowMinimum,
}

/// A hand-authored example table with ordered columns and row-major cells
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub style: SheetStyle,
}

impl Table {
    pub fn new<S: Into<String>>(name: impl Into<String>, columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            style: SheetStyle::Standard,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// A table of `rows` rows where every cell is an empty string
    pub fn blank<S: Into<String>>(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = S>,
        rows: usize,
    ) -> Self {
        let mut table = Self::new(name, columns);
        for _ in 0..rows {
            table.add_row(vec![CellValue::Text(String::new()); table.columns.len()]);
        }
        table
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    pub fn dtype(&self, index: usize) -> ColumnDtype {
        ColumnDtype::infer(self.column(index))
    }

    /// Indices of columns with a numeric dtype
    pub fn numeric_columns(&self) -> Vec<usize> {
        (0..self.column_count())
            .filter(|&i| self.dtype(i).is_numeric())
            .collect()
    }

    /// Indices of columns whose header contains a percent sign
    pub fn percent_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, name)| name.contains('%'))
            .map(|(i, _)| i)
            .collect()
    }

    /// Character length of the widest entry in a column, header included
    pub fn display_len(&self, index: usize) -> usize {
        let dtype = self.dtype(index);
        let header = self.columns.get(index).map_or(0, |c| c.chars().count());
        self.column(index)
            .map(|cell| dtype.display(cell).chars().count())
            .fold(header, usize::max)
    }

    /// Validate every row has one cell per column
    pub fn validate_lengths(&self) -> Result<(), String> {
        let expected = self.column_count();
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(format!(
                    "Table '{}' row {} has {} cells, expected {}",
                    self.name,
                    i + 1,
                    row.len(),
                    expected
                ));
            }
        }
        Ok(())
    }
}
