//! The capability every grid-backed value needs to take part in transformations.
//!
//! Anything implementing [`MatrixEntity`] can be flipped and concatenated by
//! the functions in [`crate::transform`], and the result comes back as the
//! same concrete type. Implementors decide which grid shapes they accept in
//! [`MatrixEntity::from_grid`]; a zero-sized grid is never acceptable.

use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// A value backed by a [`Grid`] that can be rebuilt from one.
///
/// Invariant: for any grid `g` accepted by `from_grid`,
/// `Self::from_grid(g.clone())?.grid() == &g`.
pub trait MatrixEntity: Sized {
    /// Human-readable name used in diagnostics and logs.
    const KIND: &'static str;

    /// Borrow the backing grid.
    fn grid(&self) -> &Grid;

    /// Replace the backing grid in place.
    ///
    /// On error the entity is left untouched.
    fn set_grid(&mut self, grid: Grid) -> GridResult<()>;

    /// Build a fresh entity of this kind around `grid`.
    fn from_grid(grid: Grid) -> GridResult<Self>;

    /// Number of rows in the backing grid.
    fn rows(&self) -> usize {
        self.grid().rows()
    }

    /// Number of columns in the backing grid.
    fn cols(&self) -> usize {
        self.grid().cols()
    }
}

/// Reject grids with no rows or no columns.
pub(crate) fn ensure_non_empty(grid: &Grid) -> GridResult<()> {
    if grid.is_empty() {
        return Err(GridError::EmptyGrid {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    Ok(())
}

/// A bare grid is its own entity.
impl MatrixEntity for Grid {
    const KIND: &'static str = "grid";

    fn grid(&self) -> &Grid {
        self
    }

    fn set_grid(&mut self, grid: Grid) -> GridResult<()> {
        ensure_non_empty(&grid)?;
        *self = grid;
        Ok(())
    }

    fn from_grid(grid: Grid) -> GridResult<Self> {
        ensure_non_empty(&grid)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[test]
    fn grid_round_trips_through_from_grid() {
        let mut g = Grid::new(2, 2);
        g.set(0, 1, Symbol::VBar).unwrap();
        let rebuilt = <Grid as MatrixEntity>::from_grid(g.clone()).unwrap();
        assert_eq!(MatrixEntity::grid(&rebuilt), &g);
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        let err = <Grid as MatrixEntity>::from_grid(Grid::new(0, 3)).unwrap_err();
        assert!(matches!(err, GridError::EmptyGrid { rows: 0, cols: 3 }));

        let mut g = Grid::new(1, 1);
        assert!(g.set_grid(Grid::new(2, 0)).is_err());
        assert_eq!(g, Grid::new(1, 1));
    }
}
