use crate::config::GuideConfig;
use crate::error::GuideResult;
use crate::excel::{self, column_number_format, DummyDataset, SuperButtonExporter};
use crate::format::{format_rupiah, format_rupiah_percent};
use crate::guide::{self, TableBlock, TerminalRenderer};
use crate::samples;
use crate::types::{CellValue, ColumnDtype, SheetStyle};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Render the guide page to stdout
pub fn show(config: &GuideConfig, plain: bool, width: Option<usize>) -> GuideResult<()> {
    let mut renderer = if plain {
        TerminalRenderer::plain()
    } else {
        TerminalRenderer::new()
    };
    if let Some(w) = width {
        renderer = renderer.with_width(w);
    }

    let page = guide::standard_deviation_guide(config)?;
    print!("{}", renderer.render(&page));
    Ok(())
}

/// Directory to write into, created if needed
fn prepare_output_dir(config: &GuideConfig, output_dir: Option<PathBuf>) -> GuideResult<PathBuf> {
    let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
    if !dir.as_os_str().is_empty() && !dir.exists() {
        debug!(dir = %dir.display(), "creating output directory");
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Write the dummy dataset workbook
pub fn dummy(config: &GuideConfig, output_dir: Option<PathBuf>, preview: bool) -> GuideResult<()> {
    println!("{}", "📥 Standard Deviation - Dummy Dataset".bold().green());

    let dir = prepare_output_dir(config, output_dir)?;
    let output = dir.join(&config.dummy_dataset.file_name);
    let dataset = DummyDataset::from_source(config.dummy_dataset.source.as_deref());
    if let DummyDataset::File(source) = &dataset {
        println!("   Source: {}", source.display());
    }

    let bytes = dataset.write_to(&output)?;
    println!("   Output: {}\n", output.display());

    if preview {
        let table = excel::preview(&bytes)?;
        println!("{}", "🔍 Preview:".cyan());
        print!(
            "{}",
            TerminalRenderer::new().render(&guide::Page {
                blocks: vec![guide::Block::Table(TableBlock::new(table))],
            })
        );
    }

    println!("{}", "🎈 Dummy dataset ready!".bold().green());
    Ok(())
}

/// Write the super button workbook with the chosen sheets, in the chosen order
pub fn super_button(
    config: &GuideConfig,
    sheets: Vec<String>,
    output_dir: Option<PathBuf>,
) -> GuideResult<()> {
    println!("{}", "🚀 Standard Deviation - Super Button".bold().green());

    let exporter = SuperButtonExporter::new(samples::super_button_tables());
    let selected = if sheets.is_empty() {
        config.default_sheets(&exporter.sheet_names())?
    } else {
        sheets
    };

    let dir = prepare_output_dir(config, output_dir)?;
    let output = dir.join(&config.super_button.file_name);
    exporter.export(&selected, &output)?;

    println!("   Output: {}", output.display());
    println!("   Sheets:");
    for (i, name) in selected.iter().enumerate() {
        println!("     {}. {}", i + 1, name.bright_blue());
    }
    println!();
    println!("{}", "✅ Export Complete!".bold().green());
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: ColumnDtype,
    pub number_format: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SheetInfo {
    pub name: String,
    pub style: SheetStyle,
    pub rows: usize,
    pub columns: Vec<ColumnInfo>,
}

/// Describe every sheet the super button can export
pub fn sheet_catalogue() -> Vec<SheetInfo> {
    samples::super_button_tables()
        .iter()
        .map(|table| SheetInfo {
            name: table.name.clone(),
            style: table.style,
            rows: table.row_count(),
            columns: table
                .columns
                .iter()
                .enumerate()
                .map(|(i, name)| ColumnInfo {
                    name: name.clone(),
                    dtype: table.dtype(i),
                    number_format: column_number_format(table, i).map(|f| f.pattern()),
                })
                .collect(),
        })
        .collect()
}

/// List the exportable sheets
pub fn sheets(json: bool) -> GuideResult<()> {
    let catalogue = sheet_catalogue();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalogue)?);
        return Ok(());
    }

    println!("{}", "📊 Super Button Sheets:".bold().cyan());
    for sheet in &catalogue {
        println!("   {} ({} rows)", sheet.name.bright_blue().bold(), sheet.rows);
        for column in &sheet.columns {
            match column.number_format {
                Some(pattern) => println!("      {} [{}]", column.name.cyan(), pattern),
                None => println!("      {}", column.name.cyan()),
            }
        }
    }
    Ok(())
}

/// Format a raw command-line value the way the guide tables do
pub fn format_value(raw: &str, percent: bool) -> String {
    let cell = if raw.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(raw.to_string())
    };
    if percent {
        format_rupiah_percent(&cell)
    } else {
        format_rupiah(&cell)
    }
}

/// Print each value in rupiah style
pub fn format_values(values: Vec<String>, percent: bool) -> GuideResult<()> {
    for raw in &values {
        let formatted = format_value(raw, percent);
        debug!(input = %raw, output = %formatted, "formatted value");
        println!("{}", formatted);
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
