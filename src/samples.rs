//! Hand-authored example tables shown on the guide page
//!
//! The result tables (rank, deviation, summary) are what the Standard
//! Deviation menu produces for [`dummy_dataset`].

use crate::types::{CellValue, SheetStyle, Table};

pub const BIDDERS_RANK: &str = "Bidder's Rank";
pub const RANK_1_DEVIATION: &str = "Rank-1 Deviation (%)";
pub const SUMMARY_DEVIATION: &str = "Summary Deviation (%)";

fn text(s: &str) -> CellValue {
    CellValue::from(s)
}

fn int(n: i64) -> CellValue {
    CellValue::Int(n)
}

fn float(f: f64) -> CellValue {
    CellValue::Float(f)
}

/// Empty template of the expected input layout
pub fn input_template() -> Table {
    Table::blank(
        "Input Structure",
        ["Scope", "Desc", "Vendor A", "Vendor B", "Vendor C", "Vendor D", "Vendor E"],
        3,
    )
}

/// Incorrect example: a leading "No" column would be read as numeric
pub fn number_column_example() -> Table {
    let columns = ["No", "Scope", "Desc", "Vendor A", "Vendor B", "Vendor C"];
    let mut table = Table::new("Number Column", columns);
    for n in 1..=3 {
        let mut row = vec![int(n)];
        row.extend(std::iter::repeat(text("")).take(columns.len() - 1));
        table.add_row(row);
    }
    table
}

/// A table that starts at B2 instead of A1, laid out as a spreadsheet grid
pub fn floating_table_example() -> Table {
    let columns = ["", "A", "B", "C", "D", "E", "F", "G"];
    let mut table = Table::new("Floating Table", columns);

    let content: [&[&str]; 6] = [
        &[],
        &["Scope", "UoM", "Vendor A", "Vendor B", "Vendor C"],
        &["WP1", "Site", "1.000", "2.000", "3.000"],
        &["WP2", "Site", "4.800", "5.000", "5.200"],
        &["WP3", "Site", "3.650", "3.450", "3.250"],
        &[],
    ];

    for (i, cells) in content.iter().enumerate() {
        // Row number, then column A left empty, then the table from column B
        let mut row = vec![int(i as i64 + 1), text("")];
        row.extend(cells.iter().map(|s| text(s)));
        row.resize(columns.len(), text(""));
        table.add_row(row);
    }
    table
}

/// Incorrect example carrying a TOTAL column and a TOTAL row
pub fn total_example() -> Table {
    let mut table = Table::new(
        "Total Column & Total Row",
        ["Scope", "Vendor A", "Vendor B", "Vendor C", "TOTAL"],
    );
    let rows: [[&str; 5]; 3] = [
        ["WP1", "1.000", "2.000", "3.000", "6.000"],
        ["WP2", "4.800", "5.000", "5.200", "15.000"],
        ["TOTAL", "5.800", "7.000", "8.200", "21.000"],
    ];
    for row in rows {
        table.add_row(row.iter().map(|s| text(s)).collect());
    }
    table
}

/// Prices behind every result table on the page
pub fn dummy_dataset() -> Table {
    let mut table = Table::new("Sheet1", ["Scope", "Desc", "Vendor A", "Vendor B", "Vendor C"]);
    table.add_row(vec![text("WP1"), text("Software License"), int(10310), int(13130), int(13134)]);
    table.add_row(vec![text("WP2"), text("Hardware"), int(17456), int(14242), int(14252)]);
    table.add_row(vec![text("WP3"), text("Installation Services"), int(7460), int(5400), int(3242)]);
    table
}

/// Rank of every vendor per scope, 1 being the cheapest
pub fn bidders_rank() -> Table {
    let mut table = Table::new(BIDDERS_RANK, ["Scope", "Vendor A", "Vendor B", "Vendor C"]);
    table.add_row(vec![text("WP1"), int(1), int(2), int(3)]);
    table.add_row(vec![text("WP2"), int(3), int(1), int(2)]);
    table.add_row(vec![text("WP3"), int(3), int(2), int(1)]);
    table
}

/// Deviation of every vendor from the cheapest offer, in percent
pub fn rank_1_deviation() -> Table {
    let mut table = Table::new(RANK_1_DEVIATION, ["Scope", "Vendor A", "Vendor B", "Vendor C"])
        .with_style(SheetStyle::HighlightRowMinimum);
    table.add_row(vec![text("WP1"), int(0), float(27.35), float(27.39)]);
    table.add_row(vec![text("WP2"), float(22.57), int(0), float(0.07)]);
    table.add_row(vec![text("WP3"), float(130.1), float(66.56), int(0)]);
    table
}

/// Per-scope ranking with the deviation of each runner-up from the best price
pub fn summary_deviation() -> Table {
    let mut table = Table::new(
        SUMMARY_DEVIATION,
        [
            "Scope",
            "1st Rank",
            "Best Price",
            "2nd Rank",
            "Dev. 2nd to 1st (%)",
            "3rd Rank",
            "Dev. 3rd to 1st (%)",
        ],
    );
    table.add_row(vec![
        text("WP1"),
        text("Vendor A"),
        int(10310),
        text("Vendor B"),
        float(27.35),
        text("Vendor C"),
        float(27.39),
    ]);
    table.add_row(vec![
        text("WP2"),
        text("Vendor B"),
        int(14242),
        text("Vendor C"),
        float(0.07),
        text("Vendor A"),
        float(22.57),
    ]);
    table.add_row(vec![
        text("WP3"),
        text("Vendor C"),
        int(3242),
        text("Vendor B"),
        float(66.56),
        text("Vendor A"),
        float(130.1),
    ]);
    table
}

/// The tables offered by the super button, in page order
pub fn super_button_tables() -> Vec<Table> {
    vec![bidders_rank(), rank_1_deviation(), summary_deviation()]
}

/// Scope names used for the visualization tabs
pub fn scopes() -> Vec<String> {
    bidders_rank()
        .column(0)
        .filter_map(|cell| match cell {
            CellValue::Text(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_samples_are_rectangular() {
        for table in [
            input_template(),
            number_column_example(),
            floating_table_example(),
            total_example(),
            dummy_dataset(),
            bidders_rank(),
            rank_1_deviation(),
            summary_deviation(),
        ] {
            assert!(table.validate_lengths().is_ok(), "{} is ragged", table.name);
        }
    }

    #[test]
    fn test_floating_table_starts_at_b2() {
        let table = floating_table_example();
        let b = table.column_index("B").unwrap();
        assert_eq!(table.rows[0][b], CellValue::from(""));
        assert_eq!(table.rows[1][b], CellValue::from("Scope"));
        assert_eq!(table.rows[2][b + 2], CellValue::from("1.000"));
        assert_eq!(table.rows[5][0], CellValue::Int(6));
    }

    #[test]
    fn test_best_price_matches_dummy_dataset() {
        let dataset = dummy_dataset();
        let summary = summary_deviation();
        let best = summary.column_index("Best Price").unwrap();

        for (data_row, summary_row) in dataset.rows.iter().zip(&summary.rows) {
            let cheapest = data_row[2..]
                .iter()
                .filter_map(CellValue::as_f64)
                .fold(f64::INFINITY, f64::min);
            assert_eq!(summary_row[best].as_f64(), Some(cheapest));
        }
    }

    #[test]
    fn test_scopes() {
        assert_eq!(scopes(), vec!["WP1", "WP2", "WP3"]);
    }
}
