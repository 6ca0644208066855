//! Guide page model
//!
//! A [`Page`] is an ordered list of [`Block`]s. The content lives in
//! [`content`], the terminal output in [`render`].

pub mod content;
pub mod render;

use crate::format::{format_rupiah, format_rupiah_percent, Highlight};
use crate::types::{CellValue, Table};
use std::path::PathBuf;

pub use content::standard_deviation_guide;
pub use render::TerminalRenderer;

/// 24-bit colour
pub type Rgb = (u8, u8, u8);

/// Inline run of text inside a paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Plain(String),
    Bold(String),
    /// Coloured italic text
    Italic { text: String, color: Rgb },
    /// Coloured bold text
    Accent { text: String, color: Rgb },
    /// Small rounded label on a coloured background
    Pill { text: String, background: Rgb },
}

impl Span {
    pub fn plain(text: &str) -> Self {
        Span::Plain(text.to_string())
    }

    pub fn bold(text: &str) -> Self {
        Span::Bold(text.to_string())
    }

    pub fn italic(text: &str, color: Rgb) -> Self {
        Span::Italic {
            text: text.to_string(),
            color,
        }
    }

    pub fn accent(text: &str, color: Rgb) -> Self {
        Span::Accent {
            text: text.to_string(),
            color,
        }
    }

    pub fn pill(text: &str, background: Rgb) -> Self {
        Span::Pill {
            text: text.to_string(),
            background,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Span::Plain(t) | Span::Bold(t) => t,
            Span::Italic { text, .. } | Span::Accent { text, .. } | Span::Pill { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl BadgeColor {
    pub fn rgb(self) -> Rgb {
        match self {
            BadgeColor::Red => (0xFF, 0x4B, 0x4B),
            BadgeColor::Orange => (0xFF, 0xA4, 0x21),
            BadgeColor::Yellow => (0xFF, 0xE3, 0x12),
            BadgeColor::Green => (0x21, 0xC3, 0x54),
            BadgeColor::Blue => (0x1C, 0x83, 0xE1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
    pub color: BadgeColor,
}

impl Badge {
    pub fn new(label: &str, color: BadgeColor) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }
}

/// Display formatter applied to every cell of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    Rupiah,
    RupiahPercent,
}

impl ColumnFormat {
    pub fn apply(self, cell: &CellValue) -> String {
        match self {
            ColumnFormat::Rupiah => format_rupiah(cell),
            ColumnFormat::RupiahPercent => format_rupiah_percent(cell),
        }
    }
}

/// A table as shown on the page: data plus display formats and highlights
#[derive(Debug, Clone)]
pub struct TableBlock {
    pub table: Table,
    /// One entry per column
    pub formats: Vec<Option<ColumnFormat>>,
    /// One entry per cell, row-major; empty when nothing is highlighted
    pub highlights: Vec<Vec<Option<Highlight>>>,
}

impl TableBlock {
    pub fn new(table: Table) -> Self {
        let formats = vec![None; table.column_count()];
        Self {
            table,
            formats,
            highlights: Vec::new(),
        }
    }

    /// Format every column matching `predicate`
    #[must_use]
    pub fn format_columns(mut self, format: ColumnFormat, predicate: impl Fn(&str) -> bool) -> Self {
        for (i, name) in self.table.columns.iter().enumerate() {
            if predicate(name) {
                self.formats[i] = Some(format);
            }
        }
        self
    }

    /// Format every numeric column
    #[must_use]
    pub fn format_numeric(mut self, format: ColumnFormat) -> Self {
        for i in self.table.numeric_columns() {
            self.formats[i] = Some(format);
        }
        self
    }

    /// Highlight cells row by row
    #[must_use]
    pub fn highlight_rows(mut self, rule: impl Fn(&[CellValue]) -> Vec<Option<Highlight>>) -> Self {
        self.highlights = self.table.rows.iter().map(|row| rule(row)).collect();
        self
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Vec<Option<Highlight>>>) -> Self {
        self.highlights = highlights;
        self
    }

    pub fn highlight(&self, row: usize, col: usize) -> Option<Highlight> {
        self.highlights.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Text shown for one cell
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        let Some(cell) = self.table.rows.get(row).and_then(|r| r.get(col)) else {
            return String::new();
        };
        match self.formats.get(col).copied().flatten() {
            Some(format) => format.apply(cell),
            None => match cell {
                CellValue::Int(n) => n.to_string(),
                CellValue::Float(f) if f.is_nan() => String::new(),
                CellValue::Float(f) => f.to_string(),
                CellValue::Text(s) => s.clone(),
                CellValue::Empty => String::new(),
            },
        }
    }
}

/// One image tab
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub label: String,
    pub image: PathBuf,
}

/// Building blocks of the page, top to bottom
#[derive(Debug, Clone)]
pub enum Block {
    Title(String),
    Badges(Vec<Badge>),
    Caption(String),
    Divider,
    Heading(String),
    Subheading(String),
    Paragraph(Vec<Span>),
    /// Centered emphasised line
    Callout(String),
    Bullets(Vec<Vec<Span>>),
    Table(TableBlock),
    Download {
        label: String,
        file_name: String,
        command: String,
    },
    Tabs(Vec<Tab>),
    SheetPicker {
        prompt: String,
        options: Vec<String>,
        selected: Vec<String>,
    },
    Video(String),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// All table blocks in page order
    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect()
    }
}
