//! Sheet backed by a CSV file.
//!
//! The whole file is loaded on open; writes stay in memory until `flush`,
//! which rewrites the file through a sibling temporary file and a rename.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error_handling::SheetError;

use super::grid::Grid;
use super::Sheet;

/// CSV-file sheet. Row 1 of the sheet is the first CSV line (no header
/// inference).
#[derive(Debug)]
pub struct CsvSheet {
    path: PathBuf,
    grid: Grid,
    dirty: bool,
}

impl CsvSheet {
    /// Opens `path`, or starts an empty sheet if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::Csv` if the file exists but cannot be read as CSV.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            log::info!("{} does not exist yet, starting an empty sheet", path.display());
            return Ok(Self {
                path,
                grid: Grid::new(),
                dirty: false,
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;
        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        log::debug!("Loaded {} row(s) from {}", rows.len(), path.display());

        Ok(Self {
            path,
            grid: Grid::from_rows(rows),
            dirty: false,
        })
    }

    /// File backing the sheet.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> SheetError {
        SheetError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Sheet for CsvSheet {
    fn get_cell(&self, row: usize, column: usize) -> String {
        self.grid.get(row, column)
    }

    fn set_cell(&mut self, row: usize, column: usize, value: &str) {
        self.grid.set(row, column, value);
        self.dirty = true;
    }

    fn grid(
        &self,
        first_row: usize,
        first_column: usize,
        rows: usize,
        columns: usize,
    ) -> Vec<Vec<String>> {
        self.grid.range(first_row, first_column, rows, columns)
    }

    fn last_row(&self) -> usize {
        self.grid.last_row()
    }

    fn last_column(&self) -> usize {
        self.grid.last_column()
    }

    fn flush(&mut self) -> Result<(), SheetError> {
        if !self.dirty {
            return Ok(());
        }

        let temp_path = self.temp_path();
        let mut writer = WriterBuilder::new().from_path(&temp_path)?;
        for row in self.grid.to_rows() {
            writer.write_record(&row)?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;
        drop(writer);
        std::fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        self.dirty = false;
        log::debug!("Committed sheet to {}", self.path.display());
        Ok(())
    }
}
