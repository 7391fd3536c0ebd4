//! Sparse workbook grid.
//!
//! A fixed-size 2-D table of string cells addressed by 1-based (row, column)
//! coordinates, matching spreadsheet conventions. Cells hold labels,
//! stringified literal values or formula text; the grid never interprets
//! any of them.

/// Workbook rows
pub const GRID_ROWS: usize = 240;
/// Workbook columns
pub const GRID_COLS: usize = 8;

/// Fixed-size sparse grid of string cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![String::new(); cols]; rows],
        }
    }

    /// Create an empty grid at the workbook's reference sizing.
    pub fn workbook_sized() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Set a cell at 1-based (row, column) coordinates.
    ///
    /// # Panics
    /// Panics if either coordinate is zero or beyond the grid dimensions;
    /// the workbook layout is static, so an out-of-range write is a
    /// programming error.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        assert!(
            (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row - 1][col - 1] = value.into();
    }

    /// Read a cell at 1-based (row, column) coordinates.
    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row - 1][col - 1]
    }

    /// Render the grid as comma-joined rows.
    ///
    /// Cells are emitted verbatim with no quoting or escaping, so a cell
    /// containing a comma shifts the remainder of its row. Formula text is
    /// preserved exactly for the spreadsheet application.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 1, "Company");
        grid.set(4, 3, "=B1+B2");

        assert_eq!(grid.get(1, 1), "Company");
        assert_eq!(grid.get(4, 3), "=B1+B2");
        assert_eq!(grid.get(2, 2), "");
    }

    #[test]
    fn test_to_csv_shape() {
        let mut grid = Grid::new(3, 4);
        grid.set(2, 2, "x");
        let csv = grid.to_csv();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ",,,");
        assert_eq!(lines[1], ",x,,");
    }

    #[test]
    fn test_to_csv_no_escaping() {
        let mut grid = Grid::new(1, 2);
        grid.set(1, 1, "=IF(A1>0,\"Review\",\"OK\")");
        // Embedded commas pass straight through
        assert_eq!(grid.to_csv(), "=IF(A1>0,\"Review\",\"OK\"),\n");
    }

    #[test]
    fn test_workbook_sizing() {
        let grid = Grid::workbook_sized();
        assert_eq!(grid.rows(), 240);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.to_csv().lines().count(), 240);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_set_panics() {
        let mut grid = Grid::new(2, 2);
        grid.set(3, 1, "overflow");
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_zero_coordinate_set_panics() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, "zero");
    }
}
