use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{REPORT_HEADER, Report};

const DELIMITER: &str = ",";
const TERMINATOR: &str = "\r\n";

/// Comma-separated record writer.
///
/// Fields containing the delimiter, a quote, CR or LF are wrapped in quotes
/// with inner quotes doubled. Records end with CRLF.
pub struct CsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        let line = fields
            .iter()
            .map(|field| quote_field(field.as_ref()))
            .collect::<Vec<_>>()
            .join(DELIMITER);
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(TERMINATOR.as_bytes())?;
        Ok(())
    }

    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the header and every row of `report` to `writer`.
pub fn write_report<W: Write>(report: &Report, writer: W) -> Result<W> {
    let mut csv = CsvWriter::new(writer);
    csv.write_record(&REPORT_HEADER)?;
    for row in &report.rows {
        csv.write_record(&row.fields())?;
    }
    csv.into_inner()
}

/// Write `report` as a CSV file at `path`, creating parent directories.
pub fn write_report_file(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_report(report, BufWriter::new(file))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
