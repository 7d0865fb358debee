//! In-memory cell grid shared by the sheet implementations.

/// Rectangular-on-demand grid of string cells, addressed 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn get(&self, row: usize, column: usize) -> String {
        if row == 0 || column == 0 {
            return String::new();
        }
        self.rows
            .get(row - 1)
            .and_then(|cells| cells.get(column - 1))
            .cloned()
            .unwrap_or_default()
    }

    /// Writes a cell, growing the grid as needed. Row or column 0 is ignored.
    pub fn set(&mut self, row: usize, column: usize, value: &str) {
        if row == 0 || column == 0 {
            log::warn!("Ignoring write to invalid cell ({row}, {column})");
            return;
        }
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < column {
            cells.resize(column, String::new());
        }
        cells[column - 1] = value.to_string();
    }

    pub fn range(
        &self,
        first_row: usize,
        first_column: usize,
        rows: usize,
        columns: usize,
    ) -> Vec<Vec<String>> {
        (first_row..first_row + rows)
            .map(|row| {
                (first_column..first_column + columns)
                    .map(|column| self.get(row, column))
                    .collect()
            })
            .collect()
    }

    /// Last row holding a non-empty cell (0 when the grid is blank).
    pub fn last_row(&self) -> usize {
        self.rows
            .iter()
            .rposition(|cells| cells.iter().any(|cell| !cell.is_empty()))
            .map_or(0, |index| index + 1)
    }

    /// Last column holding a non-empty cell in any row (0 when blank).
    pub fn last_column(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|cells| cells.iter().rposition(|cell| !cell.is_empty()))
            .max()
            .map_or(0, |index| index + 1)
    }

    /// Rows `1..=last_row()`, each padded to `last_column()` cells.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.range(1, 1, self.last_row(), self.last_column())
    }
}
