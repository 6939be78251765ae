//! Four-quadrant mirror composition of a number.
//!
//! A [`CoordinateField`] for an R x C number is a (2R+1) x (2C+1) grid split
//! by a horizontal axis on row R and a vertical axis on column C:
//!
//! ```text
//!  original        | horizontal mirror
//! -----------------+------------------
//!  vertical mirror | both mirrors
//! ```
//!
//! The original is placed at construction. Each mirror quadrant starts blank
//! and is filled at most once, always from the original number. The axes
//! cross on a horizontal bar.

use serde::{Deserialize, Serialize};

use crate::entity::MatrixEntity;
use crate::error::GridResult;
use crate::grid::Grid;
use crate::number::Number;
use crate::symbol::Symbol;
use crate::transform::{invert_horizontal, invert_vertical};

/// Which mirrored copy of the number to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mirror {
    /// Flipped left-to-right, placed right of the vertical axis.
    #[serde(alias = "x")]
    Horizontal,
    /// Flipped top-to-bottom, placed below the horizontal axis.
    #[serde(alias = "y")]
    Vertical,
    /// Flipped both ways, placed diagonally opposite the original.
    #[serde(alias = "xy")]
    Both,
}

impl Mirror {
    /// Every mirror, in the order `fill_all` applies them.
    pub const ALL: [Mirror; 3] = [Mirror::Horizontal, Mirror::Vertical, Mirror::Both];

    /// The quadrant this mirror is drawn into.
    pub fn quadrant(self) -> Quadrant {
        match self {
            Mirror::Horizontal => Quadrant::TopRight,
            Mirror::Vertical => Quadrant::BottomLeft,
            Mirror::Both => Quadrant::BottomRight,
        }
    }
}

impl std::fmt::Display for Mirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mirror::Horizontal => write!(f, "horizontal"),
            Mirror::Vertical => write!(f, "vertical"),
            Mirror::Both => write!(f, "both"),
        }
    }
}

/// One of the four R x C regions of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A number and its mirror images arranged around two axes.
#[derive(Debug, Clone)]
pub struct CoordinateField {
    number: Number,
    grid: Grid,
    horizontal_filled: bool,
    vertical_filled: bool,
    both_filled: bool,
}

impl CoordinateField {
    /// Seed a field with `number` in the top-left quadrant and draw the axes.
    pub fn new(number: Number) -> GridResult<Self> {
        let (rows, cols) = (number.rows(), number.cols());
        let mut grid = Grid::new(2 * rows + 1, 2 * cols + 1);

        grid.blit(number.grid(), 0, 0)?;
        grid.fill_col(cols, Symbol::VBar)?;
        grid.fill_row(rows, Symbol::HBar)?;

        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            "coordinate field created"
        );

        Ok(Self {
            number,
            grid,
            horizontal_filled: false,
            vertical_filled: false,
            both_filled: false,
        })
    }

    /// The number this field mirrors.
    pub fn number(&self) -> &Number {
        &self.number
    }

    /// The composed field.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Row index of the horizontal axis, equal to the number's height.
    pub fn axis_row(&self) -> usize {
        self.number.rows()
    }

    /// Column index of the vertical axis, equal to the number's width.
    pub fn axis_col(&self) -> usize {
        self.number.cols()
    }

    /// Whether `mirror` has already been drawn.
    pub fn is_filled(&self, mirror: Mirror) -> bool {
        match mirror {
            Mirror::Horizontal => self.horizontal_filled,
            Mirror::Vertical => self.vertical_filled,
            Mirror::Both => self.both_filled,
        }
    }

    pub fn horizontal_filled(&self) -> bool {
        self.horizontal_filled
    }

    pub fn vertical_filled(&self) -> bool {
        self.vertical_filled
    }

    pub fn both_filled(&self) -> bool {
        self.both_filled
    }

    /// `true` once every mirror quadrant has been drawn.
    pub fn is_complete(&self) -> bool {
        Mirror::ALL.iter().all(|m| self.is_filled(*m))
    }

    /// Top-left cell of `quadrant` within the field.
    fn origin(&self, quadrant: Quadrant) -> (usize, usize) {
        let (r, c) = (self.axis_row() + 1, self.axis_col() + 1);
        match quadrant {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, c),
            Quadrant::BottomLeft => (r, 0),
            Quadrant::BottomRight => (r, c),
        }
    }

    /// Copy out one quadrant.
    pub fn quadrant(&self, quadrant: Quadrant) -> GridResult<Grid> {
        let (row, col) = self.origin(quadrant);
        self.grid
            .region(row, col, self.number.rows(), self.number.cols())
    }

    /// Draw `mirror` into its quadrant. Does nothing if already drawn.
    pub fn fill(&mut self, mirror: Mirror) -> GridResult<()> {
        if self.is_filled(mirror) {
            tracing::debug!(%mirror, "mirror already filled, skipping");
            return Ok(());
        }

        let image = match mirror {
            Mirror::Horizontal => invert_horizontal(&self.number)?,
            Mirror::Vertical => invert_vertical(&self.number)?,
            Mirror::Both => invert_horizontal(&invert_vertical(&self.number)?)?,
        };
        let (row, col) = self.origin(mirror.quadrant());
        self.grid.blit(image.grid(), row, col)?;

        match mirror {
            Mirror::Horizontal => self.horizontal_filled = true,
            Mirror::Vertical => self.vertical_filled = true,
            Mirror::Both => self.both_filled = true,
        }
        tracing::debug!(%mirror, row, col, "mirror filled");
        Ok(())
    }

    pub fn fill_horizontal_mirror(&mut self) -> GridResult<()> {
        self.fill(Mirror::Horizontal)
    }

    pub fn fill_vertical_mirror(&mut self) -> GridResult<()> {
        self.fill(Mirror::Vertical)
    }

    pub fn fill_both_mirror(&mut self) -> GridResult<()> {
        self.fill(Mirror::Both)
    }

    /// Draw every mirror that is still missing.
    pub fn fill_all(&mut self) -> GridResult<()> {
        for mirror in Mirror::ALL {
            self.fill(mirror)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}

/// Seed a [`CoordinateField`] from `number`.
pub fn build_coordinate_field(number: Number) -> GridResult<CoordinateField> {
    CoordinateField::new(number)
}
