//! The fixed-size glyph entity for a single digit.

use crate::entity::{MatrixEntity, ensure_non_empty};
use crate::error::GridResult;
use crate::glyph::segment::Segment;
use crate::grid::Grid;
use crate::symbol::Symbol;

/// Rows in every digit glyph.
pub const GLYPH_ROWS: usize = 5;
/// Columns in every digit glyph.
pub const GLYPH_COLS: usize = 4;

/// A drawing of one digit.
///
/// Fresh glyphs are 5x4. Joining glyphs with the transformation operations
/// yields wider or taller glyphs, which is how a number's frame is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitGlyph {
    grid: Grid,
}

impl Default for DigitGlyph {
    fn default() -> Self {
        Self::blank()
    }
}

impl DigitGlyph {
    /// An empty frame with every cell blank.
    pub fn blank() -> Self {
        Self {
            grid: Grid::new(GLYPH_ROWS, GLYPH_COLS),
        }
    }

    /// Read one cell.
    pub fn cell(&self, row: usize, col: usize) -> GridResult<Symbol> {
        self.grid.get(row, col)
    }

    /// Write one cell; the coordinate must lie inside the glyph's grid.
    pub fn set_cell(&mut self, row: usize, col: usize, symbol: Symbol) -> GridResult<()> {
        self.grid.set(row, col, symbol)
    }

    /// Write `symbol` into every cell of `segment`.
    pub fn set_segment(&mut self, segment: Segment, symbol: Symbol) -> GridResult<()> {
        for &(row, col) in segment.cells() {
            self.set_cell(row, col, symbol)?;
        }
        Ok(())
    }

    pub fn set_top_bar(&mut self) -> GridResult<()> {
        self.set_segment(Segment::Top, Symbol::HBar)
    }

    pub fn set_middle_bar(&mut self) -> GridResult<()> {
        self.set_segment(Segment::Middle, Symbol::HBar)
    }

    pub fn set_bottom_bar(&mut self) -> GridResult<()> {
        self.set_segment(Segment::Bottom, Symbol::HBar)
    }

    /// Both halves of the left pipe.
    pub fn set_left_pipe(&mut self) -> GridResult<()> {
        self.set_segment(Segment::LeftTop, Symbol::VBar)?;
        self.set_segment(Segment::LeftBottom, Symbol::VBar)
    }

    /// Both halves of the right pipe.
    pub fn set_right_pipe(&mut self) -> GridResult<()> {
        self.set_segment(Segment::RightTop, Symbol::VBar)?;
        self.set_segment(Segment::RightBottom, Symbol::VBar)
    }

    pub fn set_left_top_pipe(&mut self) -> GridResult<()> {
        self.set_segment(Segment::LeftTop, Symbol::VBar)
    }

    pub fn set_left_bottom_pipe(&mut self) -> GridResult<()> {
        self.set_segment(Segment::LeftBottom, Symbol::VBar)
    }

    pub fn set_right_top_pipe(&mut self) -> GridResult<()> {
        self.set_segment(Segment::RightTop, Symbol::VBar)
    }

    pub fn set_right_bottom_pipe(&mut self) -> GridResult<()> {
        self.set_segment(Segment::RightBottom, Symbol::VBar)
    }

    /// Give up the glyph and keep its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl MatrixEntity for DigitGlyph {
    const KIND: &'static str = "digit glyph";

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn set_grid(&mut self, grid: Grid) -> GridResult<()> {
        ensure_non_empty(&grid)?;
        self.grid = grid;
        Ok(())
    }

    fn from_grid(grid: Grid) -> GridResult<Self> {
        ensure_non_empty(&grid)?;
        Ok(Self { grid })
    }
}
