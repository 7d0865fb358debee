//! Sheet kept entirely in memory.

use crate::error_handling::SheetError;

use super::grid::Grid;
use super::Sheet;

/// In-memory sheet. Commits are counted but otherwise free.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    grid: Grid,
    commits: usize,
}

impl MemorySheet {
    /// Empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sheet from literal rows (row 1 first).
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|cells| cells.into_iter().map(Into::into).collect())
            .collect();
        Self {
            grid: Grid::from_rows(rows),
            commits: 0,
        }
    }

    /// Number of times `flush` was called.
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl Sheet for MemorySheet {
    fn get_cell(&self, row: usize, column: usize) -> String {
        self.grid.get(row, column)
    }

    fn set_cell(&mut self, row: usize, column: usize, value: &str) {
        self.grid.set(row, column, value);
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
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_flush_count() {
        let mut sheet = MemorySheet::from_rows(vec![vec!["Domain"], vec!["example.com"]]);
        assert_eq!(sheet.get_cell(2, 1), "example.com");
        assert_eq!(sheet.last_row(), 2);
        assert_eq!(sheet.commit_count(), 0);
        sheet.flush().unwrap();
        sheet.flush().unwrap();
        assert_eq!(sheet.commit_count(), 2);
    }

    #[test]
    fn test_grid_reads_a_block() {
        let sheet = MemorySheet::from_rows(vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(
            sheet.grid(2, 1, 1, 3),
            vec![vec!["c".to_string(), "d".to_string(), String::new()]]
        );
    }
}
