/// Console table rendering - pure presentation concerns
///
/// This module renders generated reports as boxed tables:
/// - Border drawing and column layout
/// - Unicode-aware cell truncation and padding
/// - Numbered rows with a leading index column
///
/// It accepts already-ordered report rows and writes to any `std::io::Write`
/// destination, so the same rendering serves the console and test buffers.

use std::io::{self, Write};
use std::sync::OnceLock;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::ReportRow;

/// Options controlling table layout.
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    /// Include the leading sequential index column (numbered from 1)
    pub index: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { index: true }
    }
}

// Console width override - set once from the CLI, read at render time
static WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (for testing).
pub fn set_console_width(width: usize) {
    let _ = WIDTH_OVERRIDE.set(width); // Ignore error if already initialized
}

/// Get terminal width or default to 120
fn console_width() -> usize {
    if let Some(&width) = WIDTH_OVERRIDE.get() {
        return width;
    }
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 }
}

/// Writer for table output
pub struct TableWriter<W: Write> {
    writer: W,
    options: TableOptions,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, options: TableOptions) -> Self {
        Self { writer, options }
    }

    /// Render the whole table. An empty report renders nothing at all.
    pub fn write_table(&mut self, columns: (&str, &str), rows: &[ReportRow]) -> io::Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let widths = column_widths(columns, rows, self.options, console_width());

        self.write_border(&widths, "┌", "┬", "┐")?;
        self.write_cells(&widths, &header_cells(columns, self.options))?;
        self.write_border(&widths, "├", "┼", "┤")?;
        for (i, row) in rows.iter().enumerate() {
            self.write_cells(&widths, &row_cells(i + 1, row, self.options))?;
        }
        self.write_border(&widths, "└", "┴", "┘")?;

        Ok(())
    }

    fn write_border(&mut self, widths: &[usize], left: &str, mid: &str, right: &str) -> io::Result<()> {
        let mut line = String::from(left);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push_str(mid);
            }
            line.push_str(&"─".repeat(width + 2));
        }
        line.push_str(right);
        writeln!(self.writer, "{}", line)
    }

    fn write_cells(&mut self, widths: &[usize], cells: &[Cell]) -> io::Result<()> {
        let mut line = String::from("│");
        for (cell, width) in cells.iter().zip(widths) {
            line.push(' ');
            line.push_str(&pad(&cell.text, *width, cell.right_align));
            line.push_str(" │");
        }
        writeln!(self.writer, "{}", line)
    }
}

/// One rendered cell: text plus its alignment
struct Cell {
    text: String,
    right_align: bool,
}

impl Cell {
    fn left(text: impl Into<String>) -> Self {
        Self { text: text.into(), right_align: false }
    }

    fn right(text: impl Into<String>) -> Self {
        Self { text: text.into(), right_align: true }
    }
}

fn header_cells(columns: (&str, &str), options: TableOptions) -> Vec<Cell> {
    let mut cells = Vec::new();
    if options.index {
        cells.push(Cell::right("#"));
    }
    cells.push(Cell::left(columns.0));
    cells.push(Cell::right(columns.1));
    cells
}

fn row_cells(number: usize, row: &ReportRow, options: TableOptions) -> Vec<Cell> {
    let mut cells = Vec::new();
    if options.index {
        cells.push(Cell::right(number.to_string()));
    }
    cells.push(Cell::left(row.key.as_str()));
    cells.push(Cell::right(row.aggregate_display()));
    cells
}

/// Compute column widths from content, clamped to the console width.
///
/// The group-key column absorbs any shrinking needed to fit, down to a
/// minimum of 8 display columns.
fn column_widths(
    columns: (&str, &str),
    rows: &[ReportRow],
    options: TableOptions,
    limit: usize,
) -> Vec<usize> {
    let mut widths = Vec::new();

    if options.index {
        widths.push(display_width("#").max(rows.len().to_string().len()));
    }

    let mut key_width = display_width(columns.0);
    let mut aggregate_width = display_width(columns.1);
    for row in rows {
        key_width = key_width.max(display_width(&row.key));
        aggregate_width = aggregate_width.max(display_width(&row.aggregate_display()));
    }
    widths.push(key_width);
    widths.push(aggregate_width);

    // Borders: one │ per column plus the closing one; padding: 2 per column
    let chrome = widths.len() + 1 + 2 * widths.len();
    let total = widths.iter().sum::<usize>() + chrome;
    if total > limit {
        let key_index = widths.len() - 2;
        widths[key_index] = widths[key_index].saturating_sub(total - limit).max(8);
    }

    widths
}

/// Count the display width of a string, accounting for wide Unicode characters
fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to a display width, marking cut content with "..."
fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }

    let target = width.saturating_sub(3);
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if used + c_width > target {
            break;
        }
        result.push(c);
        used += c_width;
    }
    result.push_str("...");
    result
}

/// Truncate and pad to an exact display width
fn pad(s: &str, width: usize, right_align: bool) -> String {
    let cell = truncate(s, width);
    let fill = " ".repeat(width.saturating_sub(display_width(&cell)));
    if right_align { format!("{}{}", fill, cell) } else { format!("{}{}", cell, fill) }
}

/// Print a report table to stdout.
pub fn print_table(columns: (&str, &str), rows: &[ReportRow], options: TableOptions) {
    let mut writer = TableWriter::new(io::stdout(), options);
    let _ = writer.write_table(columns, rows);
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
