//! Semicolon-delimited report files
//!
//! One record per line, every field followed by `;`, no header and no
//! escaping. A field containing `;` corrupts its line.

use crate::consolidate::{DependencyRow, FrameworkUsageRow};
use crate::error::ScanResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Field terminator
pub const DELIMITER: char = ';';

/// Writer for one delimited report file
///
/// Creating the writer truncates any existing file.
#[derive(Debug)]
pub struct DelimitedWriter {
    path: PathBuf,
    out: BufWriter<File>,
    records: usize,
}

impl DelimitedWriter {
    /// Create or truncate the file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be created
    pub fn create(path: &Path) -> ScanResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            records: 0,
        })
    }

    /// Append one record
    ///
    /// # Errors
    /// Returns an error if writing fails
    pub fn write_record(&mut self, fields: &[&str]) -> ScanResult<()> {
        self.out.write_all(format_record(fields).as_bytes())?;
        self.out.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    /// Flush and close, returning the number of records written
    ///
    /// # Errors
    /// Returns an error if flushing fails
    pub fn finish(mut self) -> ScanResult<usize> {
        self.out.flush()?;
        tracing::debug!(path = %self.path.display(), records = self.records, "wrote report file");
        Ok(self.records)
    }
}

/// Render one record without the line terminator
#[must_use]
pub fn format_record(fields: &[&str]) -> String {
    let mut line = String::new();
    for field in fields {
        line.push_str(field);
        line.push(DELIMITER);
    }
    line
}

/// Write `name;framework;` lines
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn write_framework_usage(path: &Path, rows: &[FrameworkUsageRow]) -> ScanResult<usize> {
    let mut writer = DelimitedWriter::create(path)?;
    for row in rows {
        writer.write_record(&[row.project.as_str(), row.framework.as_str()])?;
    }
    writer.finish()
}

/// Write `solution;package;version;framework;` lines
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn write_dependency_listing(path: &Path, rows: &[DependencyRow]) -> ScanResult<usize> {
    let mut writer = DelimitedWriter::create(path)?;
    for row in rows {
        writer.write_record(&[
            row.project.as_str(),
            row.package.as_str(),
            row.version.as_str(),
            row.framework.as_str(),
        ])?;
    }
    writer.finish()
}
