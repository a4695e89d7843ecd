//! Terminal output for the CLI.
//!
//! Separate from core logic to allow flatkey to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{REPORT_HEADER, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Gap between preview columns.
const COLUMN_GAP: usize = 2;

/// Print the confirmation after the CSV file has been written.
pub fn print_written(output: &str, row_count: usize) {
    print_written_to(output, row_count, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(output: &str, row_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} to {}",
            row_count,
            if row_count == 1 { "key" } else { "keys" },
            output
        )
        .green()
    );
}

/// Print a success line to stdout.
pub fn print_success(message: &str) {
    let _ = writeln!(
        io::stdout().lock(),
        "{} {}",
        SUCCESS_MARK.green(),
        message.green()
    );
}

/// Print a failure line to stderr.
pub fn print_failure(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        FAILURE_MARK.red(),
        message.red()
    );
}

/// Print a warning line to stderr.
pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}

/// Print a diagnostic line to stderr, only in verbose mode.
pub fn print_note(verbose: bool, message: &str) {
    if verbose {
        let _ = writeln!(io::stderr().lock(), "{} {}", "note:".bold().cyan(), message);
    }
}

/// Print the report as an aligned table.
pub fn print_preview(report: &Report) {
    print_preview_to(report, &mut io::stdout().lock());
}

/// Print the report table to a custom writer.
///
/// Column widths are display widths, so CJK names line up.
pub fn print_preview_to<W: Write>(report: &Report, writer: &mut W) {
    let rows: Vec<[String; 3]> = report.rows.iter().map(|row| row.fields()).collect();

    let mut widths = REPORT_HEADER.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header = REPORT_HEADER.map(|h| h.bold().to_string());
    write_line(writer, &REPORT_HEADER, &header, &widths);
    for row in &rows {
        write_line(writer, row, row, &widths);
    }
}

/// `plain` measures the cells, `styled` is what gets printed.
fn write_line<W: Write, P: AsRef<str>, S: AsRef<str>>(
    writer: &mut W,
    plain: &[P; 3],
    styled: &[S; 3],
    widths: &[usize; 3],
) {
    let mut line = String::new();
    for (i, (cell, shown)) in plain.iter().zip(styled).enumerate() {
        line.push_str(shown.as_ref());
        if i + 1 < plain.len() {
            let padding = widths[i] - UnicodeWidthStr::width(cell.as_ref()) + COLUMN_GAP;
            line.push_str(&" ".repeat(padding));
        }
    }
    let _ = writeln!(writer, "{}", line);
}
