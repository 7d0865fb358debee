//! Tabular store holding one domain per row.
//!
//! The driver only needs a narrow contract: per-cell read/write, a bulk
//! grid read, last row/column introspection and a manual commit. Rows and
//! columns are 1-based, as in a spreadsheet.

mod csv_file;
mod grid;
mod memory;

pub use csv_file::CsvSheet;
pub use memory::MemorySheet;

use crate::columns::header_labels;
use crate::config::HEADER_ROW;
use crate::error_handling::SheetError;

/// A spreadsheet-like store with buffered writes.
pub trait Sheet {
    /// Value of a cell; empty for cells never written.
    fn get_cell(&self, row: usize, column: usize) -> String;

    /// Buffers a cell write. It becomes durable on the next `flush`.
    fn set_cell(&mut self, row: usize, column: usize, value: &str);

    /// Block of `rows` x `columns` cells starting at (`first_row`, `first_column`).
    fn grid(
        &self,
        first_row: usize,
        first_column: usize,
        rows: usize,
        columns: usize,
    ) -> Vec<Vec<String>>;

    /// Last row holding data (0 for an empty sheet).
    fn last_row(&self) -> usize;

    /// Last column holding data (0 for an empty sheet).
    fn last_column(&self) -> usize;

    /// Commits buffered writes.
    fn flush(&mut self) -> Result<(), SheetError>;
}

/// Writes the column labels into the header row if they are missing or stale.
///
/// Returns whether anything was written. Only labels are written; no
/// formatting is applied.
pub fn ensure_headers<S: Sheet + ?Sized>(sheet: &mut S) -> bool {
    let mut changed = false;
    for (index, label) in header_labels().into_iter().enumerate() {
        let column = index + 1;
        if sheet.get_cell(HEADER_ROW, column) != label {
            sheet.set_cell(HEADER_ROW, column, label);
            changed = true;
        }
    }
    changed
}
