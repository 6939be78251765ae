//! Fixed-size two-dimensional symbol storage.
//!
//! A [`Grid`] is a row-major rectangle of [`Symbol`]s whose dimensions are set
//! at construction and never change. Every cell starts out blank. All cell
//! access is bounds-checked and reports [`GridError::IndexOutOfRange`] instead
//! of panicking.

use crate::error::{GridError, GridResult};
use crate::symbol::Symbol;

/// A rectangular matrix of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Symbol>,
}

impl Grid {
    /// Create a `rows` x `cols` grid with every cell blank.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Symbol::Blank; rows * cols],
        }
    }

    /// Parse rendered lines back into a grid.
    ///
    /// All lines must have the same width and consist only of `|`, `-`
    /// and spaces.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> GridResult<Self> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows * cols);

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::RaggedRows {
                    index: row,
                    expected: cols,
                    actual: width,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let symbol = Symbol::from_char(c).ok_or(GridError::UnknownSymbol {
                    found: c,
                    row,
                    col,
                })?;
                cells.push(symbol);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    fn index(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Read the symbol at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> GridResult<Symbol> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write `symbol` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) -> GridResult<()> {
        let i = self.index(row, col)?;
        self.cells[i] = symbol;
        Ok(())
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> GridResult<&[Symbol]> {
        if row >= self.rows {
            return Err(GridError::IndexOutOfRange {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Iterate over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl DoubleEndedIterator<Item = &[Symbol]> + ExactSizeIterator + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Overwrite every cell of `row` with `symbol`.
    pub fn fill_row(&mut self, row: usize, symbol: Symbol) -> GridResult<()> {
        self.index(row, 0)?;
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(symbol);
        Ok(())
    }

    /// Overwrite every cell of `col` with `symbol`.
    pub fn fill_col(&mut self, col: usize, symbol: Symbol) -> GridResult<()> {
        self.index(0, col)?;
        for row in 0..self.rows {
            self.cells[row * self.cols + col] = symbol;
        }
        Ok(())
    }

    /// Copy all of `source` into this grid with its top-left corner at
    /// `(row_offset, col_offset)`.
    ///
    /// The whole source must fit; nothing is written otherwise.
    pub fn blit(&mut self, source: &Grid, row_offset: usize, col_offset: usize) -> GridResult<()> {
        if source.is_empty() {
            return Ok(());
        }
        let last_row = row_offset + source.rows - 1;
        let last_col = col_offset + source.cols - 1;
        self.index(last_row, last_col)?;

        for (r, src_row) in source.iter_rows().enumerate() {
            let start = (row_offset + r) * self.cols + col_offset;
            self.cells[start..start + source.cols].copy_from_slice(src_row);
        }
        Ok(())
    }

    /// Extract the `rows` x `cols` block whose top-left corner is
    /// `(row_offset, col_offset)`.
    pub fn region(
        &self,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        cols: usize,
    ) -> GridResult<Grid> {
        let mut out = Grid::new(rows, cols);
        if out.is_empty() {
            return Ok(out);
        }
        self.index(row_offset + rows - 1, col_offset + cols - 1)?;

        for r in 0..rows {
            let start = (row_offset + r) * self.cols + col_offset;
            out.cells[r * cols..(r + 1) * cols].copy_from_slice(&self.cells[start..start + cols]);
        }
        Ok(out)
    }

    /// Render each row as a string.
    pub fn lines(&self) -> Vec<String> {
        self.iter_rows()
            .map(|row| row.iter().map(|s| s.as_char()).collect())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
