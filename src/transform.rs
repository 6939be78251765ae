//! Type-preserving grid transformations.
//!
//! Every operation here is generic over [`MatrixEntity`], leaves its inputs
//! untouched, and returns a new entity of the same concrete type built through
//! [`MatrixEntity::from_grid`].

use crate::entity::MatrixEntity;
use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// Direction in which two entities are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Side by side: columns add up, rows take the maximum.
    Horizontal,
    /// Stacked: rows add up, columns take the maximum.
    Vertical,
}

/// Mirror an entity left-to-right: `out[r][c] = src[r][cols - 1 - c]`.
pub fn invert_horizontal<T: MatrixEntity>(entity: &T) -> GridResult<T> {
    let src = entity.grid();
    let mut out = Grid::new(src.rows(), src.cols());
    for (r, row) in src.iter_rows().enumerate() {
        for (c, symbol) in row.iter().rev().enumerate() {
            out.set(r, c, *symbol)?;
        }
    }
    T::from_grid(out)
}

/// Mirror an entity top-to-bottom: `out[r][c] = src[rows - 1 - r][c]`.
pub fn invert_vertical<T: MatrixEntity>(entity: &T) -> GridResult<T> {
    let src = entity.grid();
    let mut out = Grid::new(src.rows(), src.cols());
    for (r, row) in src.iter_rows().rev().enumerate() {
        for (c, symbol) in row.iter().enumerate() {
            out.set(r, c, *symbol)?;
        }
    }
    T::from_grid(out)
}

/// Join `a` and `b` along `axis`.
///
/// `a` always sits at the origin. Cells covered by neither operand, which
/// happens when the two differ in size across the join, stay blank.
pub fn concat<T: MatrixEntity>(a: &T, b: &T, axis: Axis) -> GridResult<T> {
    let (ga, gb) = (a.grid(), b.grid());

    let (rows, cols, b_row, b_col) = match axis {
        Axis::Horizontal => (
            ga.rows().max(gb.rows()),
            ga.cols() + gb.cols(),
            0,
            ga.cols(),
        ),
        Axis::Vertical => (
            ga.rows() + gb.rows(),
            ga.cols().max(gb.cols()),
            ga.rows(),
            0,
        ),
    };

    let mut out = Grid::new(rows, cols);
    out.blit(ga, 0, 0)?;
    out.blit(gb, b_row, b_col)?;
    T::from_grid(out)
}

/// Left fold of [`concat`] over `entities`.
///
/// `[e0, e1, e2]` becomes `concat(concat(e0, e1), e2)`. A single entity comes
/// back as a fresh copy; an empty slice is rejected.
pub fn concat_all<T: MatrixEntity>(entities: &[T], axis: Axis) -> GridResult<T> {
    let (first, rest) = entities.split_first().ok_or(GridError::EmptySequence {
        operation: "concat_all",
    })?;

    let mut acc = T::from_grid(first.grid().clone())?;
    for next in rest {
        acc = concat(&acc, next, axis)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn grid(lines: &[&str]) -> Grid {
        Grid::parse(lines).unwrap()
    }

    #[test]
    fn invert_horizontal_reverses_columns() {
        let g = grid(&["|- ", " -|"]);
        let out = invert_horizontal(&g).unwrap();
        assert_eq!(out.lines(), [" -|", "|- "]);
        // Input untouched.
        assert_eq!(g.lines(), ["|- ", " -|"]);
    }

    #[test]
    fn invert_vertical_reverses_rows() {
        let g = grid(&["|  ", " - ", "  |"]);
        let out = invert_vertical(&g).unwrap();
        assert_eq!(out.lines(), ["  |", " - ", "|  "]);
    }

    #[test]
    fn inversions_are_involutions() {
        let g = grid(&["|- -", "  ||", "--  "]);
        let hh = invert_horizontal(&invert_horizontal(&g).unwrap()).unwrap();
        let vv = invert_vertical(&invert_vertical(&g).unwrap()).unwrap();
        assert_eq!(hh, g);
        assert_eq!(vv, g);
    }

    #[test]
    fn horizontal_concat_places_blocks_and_pads() {
        let a = grid(&["||", "||", "||"]);
        let b = grid(&["-"]);
        let out = concat(&a, &b, Axis::Horizontal).unwrap();
        assert_eq!(out.rows(), 3);
        assert_eq!(out.cols(), 3);
        assert_eq!(out.region(0, 0, 3, 2).unwrap(), a);
        assert_eq!(out.region(0, 2, 1, 1).unwrap(), b);
        assert_eq!(out.lines(), ["||-", "|| ", "|| "]);
    }

    #[test]
    fn vertical_concat_places_blocks_and_pads() {
        let a = grid(&["-"]);
        let b = grid(&["||", "--"]);
        let out = concat(&a, &b, Axis::Vertical).unwrap();
        assert_eq!(out.rows(), 3);
        assert_eq!(out.cols(), 2);
        assert_eq!(out.region(0, 0, 1, 1).unwrap(), a);
        assert_eq!(out.region(1, 0, 2, 2).unwrap(), b);
        assert_eq!(out.lines(), ["- ", "||", "--"]);
    }

    #[test]
    fn concat_all_is_a_left_fold() {
        let parts = [grid(&["|"]), grid(&["-", "-"]), grid(&["| "])];
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let folded = concat_all(&parts, axis).unwrap();
            let manual = concat(&concat(&parts[0], &parts[1], axis).unwrap(), &parts[2], axis)
                .unwrap();
            assert_eq!(folded, manual);
        }
    }

    #[test]
    fn concat_all_single_element_is_a_copy() {
        let only = grid(&["|-"]);
        let out = concat_all(std::slice::from_ref(&only), Axis::Horizontal).unwrap();
        assert_eq!(out, only);
    }

    #[test]
    fn concat_all_rejects_empty_input() {
        let err = concat_all::<Grid>(&[], Axis::Horizontal).unwrap_err();
        assert!(matches!(err, GridError::EmptySequence { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
