use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// =========================================================================
// format_value Tests
// =========================================================================

#[test]
fn test_format_value_numbers() {
    assert_eq!(format_value("7000", false), "7.000");
    assert_eq!(format_value("7000.0", false), "7.000");
    assert_eq!(format_value("1234.5", false), "1.234,50");
}

#[test]
fn test_format_value_percent() {
    assert_eq!(format_value("27.35", true), "27,35%");
    assert_eq!(format_value("0", true), "0%");
}

#[test]
fn test_format_value_passthrough() {
    assert_eq!(format_value("Vendor A", false), "Vendor A");
    assert_eq!(format_value("Vendor A", true), "Vendor A%");
    assert_eq!(format_value("", false), "");
    assert_eq!(format_value("", true), "");
}

// =========================================================================
// sheet_catalogue Tests
// =========================================================================

#[test]
fn test_sheet_catalogue_order_and_styles() {
    let catalogue = sheet_catalogue();
    let names: Vec<&str> = catalogue.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Bidder's Rank", "Rank-1 Deviation (%)", "Summary Deviation (%)"]
    );
    assert_eq!(catalogue[1].style, SheetStyle::HighlightRowMinimum);
    assert!(catalogue.iter().all(|s| s.rows == 3));
}

#[test]
fn test_sheet_catalogue_number_formats() {
    let catalogue = sheet_catalogue();

    let rank = &catalogue[0];
    assert_eq!(rank.columns[0].number_format, None);
    assert_eq!(rank.columns[1].number_format, Some("#,##0"));

    let summary = &catalogue[2];
    let formats: Vec<Option<&str>> = summary.columns.iter().map(|c| c.number_format).collect();
    assert_eq!(
        formats,
        vec![
            None,
            None,
            Some("#,##0"),
            None,
            Some("#,##0.0\"%\""),
            None,
            Some("#,##0.0\"%\""),
        ]
    );
}

#[test]
fn test_sheet_catalogue_serializes() {
    let json = serde_json::to_value(sheet_catalogue()).unwrap();
    assert_eq!(json[1]["style"], "highlight_row_minimum");
    assert_eq!(json[0]["columns"][1]["dtype"], "integer");
    assert_eq!(json[1]["columns"][1]["dtype"], "float");
}

// =========================================================================
// show Tests
// =========================================================================

#[test]
fn test_show_rejects_unknown_default_sheet() {
    let config =
        GuideConfig::from_yaml("super_button:\n  default_sheets: [\"Histogram\"]\n").unwrap();
    let result = show(&config, true, None);
    assert!(matches!(result, Err(crate::error::GuideError::Config(_))));
}

// =========================================================================
// Output Tests
// =========================================================================

#[test]
fn test_prepare_output_dir_creates_missing() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    let dir = prepare_output_dir(&GuideConfig::default(), Some(nested.clone())).unwrap();
    assert_eq!(dir, nested);
    assert!(nested.is_dir());
}

#[test]
fn test_super_button_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = GuideConfig::default();

    super_button(
        &config,
        vec!["Summary Deviation (%)".to_string()],
        Some(temp_dir.path().to_path_buf()),
    )
    .unwrap();

    assert!(temp_dir
        .path()
        .join("Super Button - Standard Deviation.xlsx")
        .exists());
}

#[test]
fn test_super_button_unknown_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let result = super_button(
        &GuideConfig::default(),
        vec!["Nope".to_string()],
        Some(temp_dir.path().to_path_buf()),
    );
    assert!(matches!(result, Err(crate::error::GuideError::UnknownSheet(_))));
}

#[test]
fn test_dummy_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    dummy(&GuideConfig::default(), Some(temp_dir.path().to_path_buf()), true).unwrap();
    assert!(temp_dir
        .path()
        .join("Dummy Dataset - Standard Deviation.xlsx")
        .exists());
}
