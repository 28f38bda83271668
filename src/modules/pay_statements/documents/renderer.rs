use std::fmt::{self, Write as _};
use std::path::PathBuf;

use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element as _, Margins, SimplePageDecorator};
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::pay_statements::documents::layout::{
    DocumentTable, StatementDocument, EMPTY_TABLE_TEXT,
};

/// Turns a laid-out statement into printable bytes
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &StatementDocument) -> Result<Vec<u8>>;

    /// Conventional file extension for the output
    fn extension(&self) -> &'static str;
}

/// Paginated A4 PDF output via genpdf
///
/// Fonts are loaded on every render from `font_dir`, which must hold the
/// `{family}-Regular.ttf`, `-Bold.ttf`, `-Italic.ttf` and `-BoldItalic.ttf`
/// files.
pub struct PdfRenderer {
    font_dir: PathBuf,
    font_family: String,
}

impl PdfRenderer {
    pub fn new(font_dir: impl Into<PathBuf>, font_family: impl Into<String>) -> Self {
        Self {
            font_dir: font_dir.into(),
            font_family: font_family.into(),
        }
    }

    fn push_table(doc: &mut Document, table: &DocumentTable) -> Result<()> {
        let s_heading = Style::new().bold().with_font_size(12);
        let s_bold = Style::new().bold().with_font_size(9);
        let s_normal = Style::new().with_font_size(9);

        doc.push(Break::new(1));
        doc.push(Paragraph::new(table.title.as_str()).styled(s_heading));

        let mut layout = TableLayout::new(table.column_weights.clone());
        layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        let mut header = layout.row();
        for column in &table.columns {
            header.push_element(Paragraph::new(column.as_str()).styled(s_bold));
        }
        header.push().map_err(render_error)?;

        if table.is_empty() {
            let mut row = layout.row();
            row.push_element(Paragraph::new(EMPTY_TABLE_TEXT).styled(s_normal));
            for _ in 1..table.columns.len() {
                row.push_element(Paragraph::new(""));
            }
            row.push().map_err(render_error)?;
        }

        let last = table.columns.len().saturating_sub(1);
        for cells in &table.rows {
            let mut row = layout.row();
            for (i, cell) in cells.iter().enumerate() {
                if i == last {
                    row.push_element(
                        Paragraph::new(cell.as_str())
                            .aligned(Alignment::Right)
                            .styled(s_normal),
                    );
                } else {
                    row.push_element(Paragraph::new(cell.as_str()).styled(s_normal));
                }
            }
            row.push().map_err(render_error)?;
        }

        doc.push(layout);
        doc.push(
            Paragraph::new(format!("Total {}: {}", table.title, table.total))
                .aligned(Alignment::Right)
                .styled(s_bold),
        );

        Ok(())
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &StatementDocument) -> Result<Vec<u8>> {
        let font_family = genpdf::fonts::from_files(&self.font_dir, &self.font_family, None)
            .map_err(|e| {
                AppError::rendering(format!(
                    "Failed to load font family {} from {}: {}",
                    self.font_family,
                    self.font_dir.display(),
                    e
                ))
            })?;

        let mut doc = Document::new(font_family);
        doc.set_title(document.title.as_str());

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(15, 15, 15, 15));
        doc.set_page_decorator(decorator);

        let s_title = Style::new().bold().with_font_size(18);
        let s_label = Style::new().bold().with_font_size(10);
        let s_value = Style::new().with_font_size(10);

        doc.push(Paragraph::new(document.title.as_str()).styled(s_title));
        doc.push(Break::new(1));

        for (label, value) in &document.header {
            let mut paragraph = Paragraph::default();
            paragraph.push_styled(format!("{}: ", label), s_label);
            paragraph.push_styled(value.as_str(), s_value);
            doc.push(paragraph);
        }

        doc.push(Break::new(1));
        let mut summary = TableLayout::new(vec![3, 2]);
        summary.set_cell_decorator(FrameCellDecorator::new(false, true, false));
        for row in &document.summary {
            let style = if row.emphasis { s_label } else { s_value };
            summary
                .row()
                .element(Paragraph::new(row.label.as_str()).styled(style))
                .element(
                    Paragraph::new(row.amount.as_str())
                        .aligned(Alignment::Right)
                        .styled(style),
                )
                .push()
                .map_err(render_error)?;
        }
        doc.push(summary);

        for table in &document.tables {
            Self::push_table(&mut doc, table)?;
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes).map_err(render_error)?;

        debug!("Rendered statement PDF ({} bytes)", bytes.len());
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}

fn render_error(e: genpdf::error::Error) -> AppError {
    AppError::rendering(e.to_string())
}

/// Fixed-width UTF-8 text output, for terminals and logs
pub struct PlainTextRenderer {
    width: usize,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self { width: 78 }
    }

    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    fn write_table(&self, out: &mut String, table: &DocumentTable) -> fmt::Result {
        let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
        for row in &table.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", table.title)?;
        writeln!(out, "{}", "-".repeat(table.title.chars().count()))?;
        writeln!(out, "{}", format_row(&table.columns, &widths))?;

        if table.is_empty() {
            writeln!(out, "{}", EMPTY_TABLE_TEXT)?;
        }
        for row in &table.rows {
            writeln!(out, "{}", format_row(row, &widths))?;
        }

        let total = format!("Total {}: {}", table.title, table.total);
        writeln!(out, "{:>width$}", total, width = self.width)
    }

    fn write_document(&self, out: &mut String, document: &StatementDocument) -> fmt::Result {
        writeln!(out, "{}", document.title)?;
        writeln!(out, "{}", "=".repeat(self.width))?;
        for (label, value) in &document.header {
            writeln!(out, "{:<12}{}", format!("{}:", label), value)?;
        }

        writeln!(out)?;
        for row in &document.summary {
            let amount_width = self.width.saturating_sub(row.label.chars().count());
            writeln!(out, "{}{:>width$}", row.label, row.amount, width = amount_width)?;
        }

        for table in &document.tables {
            self.write_table(out, table)?;
        }

        Ok(())
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn render(&self, document: &StatementDocument) -> Result<Vec<u8>> {
        let mut out = String::new();
        self.write_document(&mut out, document)
            .map_err(|e| AppError::rendering(format!("Failed to write statement text: {}", e)))?;

        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
