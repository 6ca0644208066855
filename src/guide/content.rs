//! The Standard Deviation user guide

use super::{Badge, BadgeColor, Block, ColumnFormat, Page, Span, Tab, TableBlock};
use crate::config::GuideConfig;
use crate::error::GuideResult;
use crate::format::{highlight_min_cell, highlight_total};
use crate::samples;

const BRAND_RED: (u8, u8, u8) = (0xED, 0x1C, 0x24);
const PINK: (u8, u8, u8) = (0xFF, 0x69, 0xB4);
const TEAL: (u8, u8, u8) = (0x26, 0xBD, 0xAD);
const PILL_GREEN: (u8, u8, u8) = (0xC6, 0xEF, 0xCE);
const PILL_YELLOW: (u8, u8, u8) = (0xFF, 0xEB, 0x9C);
const PILL_GOLD: (u8, u8, u8) = (0xFF, 0xCB, 0x09);
const PILL_RED: (u8, u8, u8) = (0xFF, 0x00, 0x00);

fn section_badge(label: &str, color: BadgeColor) -> Block {
    Block::Badges(vec![Badge::new(label, color)])
}

fn paragraph(spans: Vec<Span>) -> Block {
    Block::Paragraph(spans)
}

/// Build the full guide page
///
/// Fails when the config names a default sheet the super button cannot export.
pub fn standard_deviation_guide(config: &GuideConfig) -> GuideResult<Page> {
    let mut page = Page::new();
    header(&mut page);
    input_structure(&mut page);
    constraints(&mut page);
    results(&mut page, config)?;
    video(&mut page, config);
    Ok(page)
}

fn header(page: &mut Page) {
    page.push(Block::Title("🧑‍🏫 User Guide: Standard Deviation".to_string()))
        .push(Block::Badges(vec![
            Badge::new("Indosat", BadgeColor::Red),
            Badge::new("Ooredoo", BadgeColor::Orange),
            Badge::new("Hutchison", BadgeColor::Green),
        ]))
        .push(Block::Caption(
            "INSPIRE 2025 | Oktaviana Sadama Nur Azizah".to_string(),
        ))
        .push(Block::Divider)
        .push(paragraph(vec![
            Span::accent("Standard Deviation", BRAND_RED),
            Span::plain(
                " measures the price variation across vendors to assess pricing stability \
                 and the consistency of commercial offers.",
            ),
        ]));
}

fn input_structure(page: &mut Page) {
    page.push(Block::Heading("Input Structure".to_string()))
        .push(paragraph(vec![
            Span::plain("The input file required for this menu should be a "),
            Span::accent("single file containing single sheet", PINK),
            Span::plain(", in either "),
            Span::pill(".xlsx", PILL_GREEN),
            Span::plain(" or "),
            Span::pill(".xls", PILL_YELLOW),
            Span::plain(" format. The table structure is as follows:"),
        ]))
        .push(Block::Table(TableBlock::new(samples::input_template())))
        .push(paragraph(vec![
            Span::bold("Sheet1:"),
            Span::plain(" "),
            Span::italic("single sheet only", TEAL),
        ]))
        .push(Block::Subheading("Description:".to_string()))
        .push(Block::Bullets(vec![
            vec![Span::bold("Scope & Desc"), Span::plain(": non-numeric columns")],
            vec![Span::bold("Vendor A - E"), Span::plain(": numeric columns")],
        ]))
        .push(paragraph(vec![
            Span::plain("The system accommodates a "),
            Span::bold("dynamic table"),
            Span::plain(
                ", allowing users to enter any number of non-numeric and numeric columns. \
                 Users have the freedom to name the columns as they wish. The system logic relies on ",
            ),
            Span::bold("column indices"),
            Span::plain(", not specific column names."),
        ]))
        .push(Block::Divider);
}

fn constraints(page: &mut Page) {
    let total = samples::total_example();
    let total_marks = highlight_total(&total, "Scope", "TOTAL", "TOTAL");

    page.push(Block::Heading("Constraint".to_string()))
        .push(paragraph(vec![Span::plain(
            "To ensure this menu works correctly, users need to follow certain rules regarding \
             the dataset structure.",
        )]))
        // 1. Column order
        .push(section_badge("1. COLUMN ORDER", BadgeColor::Red))
        .push(paragraph(vec![
            Span::plain(
                "When creating tables, it is important to follow the specified column structure. Columns ",
            ),
            Span::bold("must"),
            Span::plain(" be arranged in the following order:"),
        ]))
        .push(Block::Callout("Non-Numeric Columns → Numeric Columns".to_string()))
        .push(paragraph(vec![
            Span::plain("this order is "),
            Span::accent("strict", PINK),
            Span::plain(" and "),
            Span::accent("cannot be altered", PINK),
            Span::plain("!"),
        ]))
        // 2. Number column
        .push(section_badge("2. NUMBER COLUMN", BadgeColor::Orange))
        .push(paragraph(vec![Span::plain("Please refer the table below:")]))
        .push(Block::Table(TableBlock::new(samples::number_column_example())))
        .push(paragraph(vec![
            Span::plain("The table above is an "),
            Span::accent("incorrect example", PINK),
            Span::plain(" and is "),
            Span::accent("not allowed", PINK),
            Span::plain(" because it contains a "),
            Span::bold("\"No\""),
            Span::plain(
                " column. The \"No\" column is prohibited in this menu, as it will be treated as a \
                 numeric column by the system, which violates the constraint described in point 1.",
            ),
        ]))
        // 3. Floating table
        .push(section_badge("3. FLOATING TABLE", BadgeColor::Green))
        .push(paragraph(vec![
            Span::plain("Floating tables are allowed, meaning tables "),
            Span::accent("do not need to start from cell A1", PINK),
            Span::plain(
                ". However, ensure that the cells above and to the left of the table are empty, \
                 as shown in the example below:",
            ),
        ]))
        .push(Block::Table(TableBlock::new(samples::floating_table_example())))
        .push(paragraph(vec![Span::plain(
            "To provide additional explanations or notes on the sheet, you can include them using \
             an image or a text box.",
        )]))
        // 4. Total column & total row
        .push(section_badge("4. TOTAL COLUMN & TOTAL ROW", BadgeColor::Blue))
        .push(paragraph(vec![
            Span::plain("You are not allowed to add a "),
            Span::bold("TOTAL COLUMN"),
            Span::plain(" or "),
            Span::bold("TOTAL ROW"),
            Span::plain("! Please refer to the example table below:"),
        ]))
        .push(Block::Table(TableBlock::new(total).with_highlights(total_marks)))
        .push(paragraph(vec![
            Span::plain("The table above is an "),
            Span::accent("incorrect example", PINK),
            Span::plain(" and is "),
            Span::accent("not permitted", PINK),
            Span::plain(
                "! If you add it, the system will treat it as a regular row and include it in the \
                 calculations.",
            ),
        ]))
        .push(Block::Divider);
}

fn results(page: &mut Page, config: &GuideConfig) -> GuideResult<()> {
    let exportable: Vec<String> = samples::super_button_tables()
        .into_iter()
        .map(|t| t.name)
        .collect();
    let selected = config.default_sheets(&exportable)?;

    let tabs = samples::scopes()
        .into_iter()
        .enumerate()
        .map(|(i, scope)| Tab {
            label: scope,
            image: config.assets_dir.join(format!("{}.png", i + 1)),
        })
        .collect();

    page.push(Block::Heading("What is Displayed?".to_string()))
        .push(paragraph(vec![Span::plain(
            "You can try this menu by downloading the dummy dataset using the button below:",
        )]))
        .push(Block::Download {
            label: "Dummy Dataset".to_string(),
            file_name: config.dummy_dataset.file_name.clone(),
            command: "stdev-guide dummy".to_string(),
        })
        .push(paragraph(vec![Span::plain(
            "Based on this dummy dataset, the menu will produce the following results.",
        )]))
        // 1. Bidder's rank
        .push(section_badge("1. BIDDER'S RANK", BadgeColor::Red))
        .push(paragraph(vec![Span::plain(
            "The system will rank the scope prices for each vendor and display them in a table as follows.",
        )]))
        .push(Block::Table(TableBlock::new(samples::bidders_rank())))
        // 2. Rank-1 deviation
        .push(section_badge("2. RANK-1 DEVIATION (%)", BadgeColor::Orange))
        .push(paragraph(vec![
            Span::plain(
                "The system then calculates the deviation from the lowest price (1st rank). \
                 A deviation value of ",
            ),
            Span::accent("\"0%\"", PINK),
            Span::plain(" indicates that the vendor is the one offering the lowest price."),
        ]))
        .push(Block::Table(
            TableBlock::new(samples::rank_1_deviation())
                .format_numeric(ColumnFormat::RupiahPercent)
                .highlight_rows(highlight_min_cell),
        ))
        // 3. Summary deviation
        .push(section_badge("3. Summary Deviation (%)", BadgeColor::Yellow))
        .push(paragraph(vec![Span::plain(
            "After that, the system will generate a summary that helps users analyze each vendor's \
             rank and its deviation compared to the first-ranked bidder.",
        )]))
        .push(Block::Table(
            TableBlock::new(samples::summary_deviation())
                .format_columns(ColumnFormat::Rupiah, |c| c == "Best Price")
                .format_columns(ColumnFormat::RupiahPercent, |c| {
                    c.starts_with("Dev. ") && c.ends_with("(%)")
                }),
        ))
        // 4. Visualization
        .push(section_badge("4. VISUALIZATION", BadgeColor::Green))
        .push(paragraph(vec![Span::plain(
            "This menu visualizes the ranking for each scope, where the system loops through the \
             tabs based on the number of scopes.",
        )]))
        .push(Block::Tabs(tabs))
        // 5. Super button
        .push(section_badge("5. SUPER BUTTON", BadgeColor::Blue))
        .push(paragraph(vec![
            Span::plain("Lastly, there is a "),
            Span::pill("Super Button", PILL_GOLD),
            Span::plain(
                " feature where all dataframes generated by the system can be downloaded as a single \
                 file with multiple sheets. You can also customize the order of the sheets. The \
                 interface looks more or less like this.",
            ),
        ]))
        .push(Block::SheetPicker {
            prompt: "Select sheets to download in a single Excel file:".to_string(),
            options: exportable,
            selected,
        })
        .push(Block::Download {
            label: "Download".to_string(),
            file_name: config.super_button.file_name.clone(),
            command: "stdev-guide super-button".to_string(),
        })
        .push(Block::Divider);
    Ok(())
}

fn video(page: &mut Page, config: &GuideConfig) {
    page.push(Block::Heading("Video Tutorial".to_string()))
        .push(paragraph(vec![
            Span::plain("I have also included a video tutorial, which you can access through the "),
            Span::pill("YouTube", PILL_RED),
            Span::plain(" link below."),
        ]))
        .push(Block::Video(config.video_url.clone()));
}
