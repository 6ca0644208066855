//! Terminal rendering of a guide page

use super::{Badge, Block, Page, Rgb, Span, TableBlock, Tab};
use crate::format::Highlight;
use colored::{ColoredString, Colorize};

pub const DEFAULT_WIDTH: usize = 88;

/// Renders a [`Page`] as coloured (or plain) text
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    color: bool,
    width: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            color: true,
            width: DEFAULT_WIDTH,
        }
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that never emits escape codes
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(20);
        self
    }

    pub fn render(&self, page: &Page) -> String {
        let mut out = String::new();
        for block in &page.blocks {
            self.render_block(block, &mut out);
            out.push('\n');
        }
        out
    }

    fn paint(&self, text: &str, style: impl FnOnce(ColoredString) -> ColoredString) -> String {
        if self.color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_block(&self, block: &Block, out: &mut String) {
        match block {
            Block::Title(title) => {
                out.push_str(&self.paint(title, |s| s.bold()));
                out.push('\n');
            }
            Block::Badges(badges) => {
                let rendered: Vec<String> = badges.iter().map(|b| self.badge(b)).collect();
                out.push_str(&rendered.join(" "));
                out.push('\n');
            }
            Block::Caption(caption) => {
                out.push_str(&self.paint(caption, |s| s.dimmed()));
                out.push('\n');
            }
            Block::Divider => {
                out.push_str(&self.paint(&"─".repeat(self.width), |s| s.dimmed()));
                out.push('\n');
            }
            Block::Heading(text) => {
                out.push_str(&self.paint(&format!("## {}", text), |s| s.bold()));
                out.push('\n');
            }
            Block::Subheading(text) => {
                out.push_str(&self.paint(text, |s| s.bold().underline()));
                out.push('\n');
            }
            Block::Paragraph(spans) => {
                out.push_str(&self.wrap(spans));
                out.push('\n');
            }
            Block::Callout(text) => {
                let pad = self.width.saturating_sub(text.chars().count()) / 2;
                out.push_str(&" ".repeat(pad));
                out.push_str(&self.paint(text, |s| s.bold()));
                out.push('\n');
            }
            Block::Bullets(items) => {
                for spans in items {
                    out.push_str("  • ");
                    for span in spans {
                        out.push_str(&self.span(span, span.text()));
                    }
                    out.push('\n');
                }
            }
            Block::Table(table) => self.table(table, out),
            Block::Download {
                label,
                file_name,
                command,
            } => {
                let button = self.paint(&format!("[ ⬇ {} ]", label), |s| s.bold().red());
                out.push_str(&format!("{}  {} → \"{}\"\n", button, command, file_name));
            }
            Block::Tabs(tabs) => self.tabs(tabs, out),
            Block::SheetPicker {
                prompt,
                options,
                selected,
            } => {
                out.push_str(prompt);
                out.push('\n');
                for name in selected {
                    out.push_str(&format!("  [x] {}\n", self.paint(name, |s| s.cyan())));
                }
                for name in options.iter().filter(|o| !selected.contains(o)) {
                    out.push_str(&format!("  [ ] {}\n", name));
                }
            }
            Block::Video(url) => {
                out.push_str(&format!("▶ {}\n", self.paint(url, |s| s.blue().underline())));
            }
        }
    }

    fn badge(&self, badge: &Badge) -> String {
        let (r, g, b) = badge.color.rgb();
        self.paint(&format!("[{}]", badge.label), |s| s.truecolor(r, g, b).bold())
    }

    /// Paint `text` with the style of `span`
    fn span(&self, span: &Span, text: &str) -> String {
        match span {
            Span::Plain(_) => text.to_string(),
            Span::Bold(_) => self.paint(text, |s| s.bold()),
            Span::Italic { color: (r, g, b), .. } => {
                self.paint(text, |s| s.truecolor(*r, *g, *b).italic())
            }
            Span::Accent { color: (r, g, b), .. } => {
                self.paint(text, |s| s.truecolor(*r, *g, *b).bold())
            }
            Span::Pill {
                background: (r, g, b),
                ..
            } => {
                if self.color {
                    self.paint(&format!(" {} ", text), |s| {
                        s.black().on_truecolor(*r, *g, *b).bold()
                    })
                } else {
                    format!("`{}`", text)
                }
            }
        }
    }

    /// Word-wrap a paragraph, keeping the style of every word
    fn wrap(&self, spans: &[Span]) -> String {
        let mut out = String::new();
        let mut line_len = 0usize;
        let mut pending_space = false;

        for span in spans {
            for (i, word) in span.text().split(' ').enumerate() {
                if i > 0 {
                    pending_space = true;
                }
                if word.is_empty() {
                    continue;
                }

                let word_len = visible_len(span, word);
                let space = usize::from(pending_space && line_len > 0);
                if line_len > 0 && line_len + space + word_len > self.width {
                    out.push('\n');
                    line_len = 0;
                } else if space == 1 {
                    out.push(' ');
                    line_len += 1;
                }

                out.push_str(&self.span(span, word));
                line_len += word_len;
                pending_space = false;
            }
        }
        out
    }

    fn table(&self, block: &TableBlock, out: &mut String) {
        let table = &block.table;
        let cols = table.column_count();

        let texts: Vec<Vec<String>> = (0..table.row_count())
            .map(|r| (0..cols).map(|c| block.cell_text(r, c)).collect())
            .collect();

        let widths: Vec<usize> = (0..cols)
            .map(|c| {
                let header = table.columns[c].chars().count();
                texts
                    .iter()
                    .map(|row| row[c].chars().count())
                    .fold(header, usize::max)
            })
            .collect();

        let numeric: Vec<bool> = (0..cols).map(|c| table.dtype(c).is_numeric()).collect();

        out.push_str(&border('┌', '┬', '┐', &widths));
        let header: Vec<String> = (0..cols)
            .map(|c| self.paint(&pad(&table.columns[c], widths[c], false), |s| s.bold()))
            .collect();
        out.push_str(&format!("│ {} │\n", header.join(" │ ")));
        out.push_str(&border('├', '┼', '┤', &widths));

        for (r, row) in texts.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, text)| {
                    let padded = pad(text, widths[c], numeric[c]);
                    match block.highlight(r, c) {
                        Some(h) => self.highlighted(&padded, h),
                        None => padded,
                    }
                })
                .collect();
            out.push_str(&format!("│ {} │\n", cells.join(" │ ")));
        }
        out.push_str(&border('└', '┴', '┘', &widths));
    }

    fn highlighted(&self, text: &str, highlight: Highlight) -> String {
        let (r, g, b) = highlight.foreground();
        let background: Option<Rgb> = highlight.background();
        self.paint(text, |s| {
            let s = s.truecolor(r, g, b);
            match background {
                Some((br, bg, bb)) => s.on_truecolor(br, bg, bb),
                None => s,
            }
        })
    }

    fn tabs(&self, tabs: &[Tab], out: &mut String) {
        let labels: Vec<String> = tabs
            .iter()
            .map(|t| self.paint(&format!("[{}]", t.label), |s| s.bold()))
            .collect();
        out.push_str(&labels.join(" "));
        out.push('\n');
        for tab in tabs {
            out.push_str(&format!("  {} → {}\n", tab.label, tab.image.display()));
        }
    }
}

/// Width of a word once painted; pills gain padding in colour mode only
fn visible_len(span: &Span, word: &str) -> usize {
    let len = word.chars().count();
    match span {
        Span::Pill { .. } => len + 2,
        _ => len,
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

fn border(left: char, mid: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}
