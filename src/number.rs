//! A multi-digit number drawn as one wide glyph.

use crate::entity::{MatrixEntity, ensure_non_empty};
use crate::error::{GridError, GridResult};
use crate::glyph::{DigitGlyph, digit_glyph_for};
use crate::grid::Grid;
use crate::transform::{Axis, concat_all};

/// Digit glyphs laid side by side, left to right.
///
/// A number of `n` digits is 5 rows by `4 * n` columns. The glyphs are copied
/// in at construction and not kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    grid: Grid,
}

impl Number {
    /// Concatenate `glyphs` horizontally in order.
    pub fn from_glyphs(glyphs: &[DigitGlyph]) -> GridResult<Self> {
        if glyphs.is_empty() {
            return Err(GridError::EmptySequence {
                operation: "build_number",
            });
        }
        let joined = concat_all(glyphs, Axis::Horizontal)?;
        let number = Number::from_grid(joined.into_grid())?;

        tracing::debug!(
            digits = glyphs.len(),
            rows = number.rows(),
            cols = number.cols(),
            "number built"
        );
        Ok(number)
    }

    /// Look up each digit value and concatenate the glyphs.
    pub fn from_digits(digits: &[u8]) -> GridResult<Self> {
        let glyphs = digits
            .iter()
            .map(|&d| digit_glyph_for(d))
            .collect::<GridResult<Vec<_>>>()?;
        Self::from_glyphs(&glyphs)
    }
}

/// Build a [`Number`] from a non-empty sequence of glyphs.
pub fn build_number(glyphs: &[DigitGlyph]) -> GridResult<Number> {
    Number::from_glyphs(glyphs)
}

impl MatrixEntity for Number {
    const KIND: &'static str = "number";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::glyph::{GLYPH_COLS, GLYPH_ROWS};

    #[test]
    fn number_width_scales_with_digit_count() {
        for n in 1..=4u8 {
            let digits: Vec<u8> = (0..n).collect();
            let number = Number::from_digits(&digits).unwrap();
            assert_eq!(number.rows(), GLYPH_ROWS);
            assert_eq!(number.cols(), GLYPH_COLS * usize::from(n));
        }
    }

    #[test]
    fn digits_appear_left_to_right() {
        let number = Number::from_digits(&[1, 0]).unwrap();
        assert_eq!(
            number.grid().lines(),
            [
                "     -- ",
                "   ||  |",
                "        ",
                "   ||  |",
                "     -- ",
            ]
        );
        let right = number.grid().region(0, 4, 5, 4).unwrap();
        assert_eq!(&right, digit_glyph_for(0).unwrap().grid());
    }

    #[test]
    fn empty_glyph_sequence_fails() {
        let err = build_number(&[]).unwrap_err();
        assert!(matches!(err, GridError::EmptySequence { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn bad_digit_value_fails() {
        let err = Number::from_digits(&[1, 12]).unwrap_err();
        assert!(matches!(err, GridError::DigitOutOfRange { value: 12 }));
    }

    #[test]
    fn set_grid_replaces_in_place() {
        let mut number = Number::from_digits(&[7]).unwrap();
        let replacement = Grid::new(5, 8);
        number.set_grid(replacement.clone()).unwrap();
        assert_eq!(number.grid(), &replacement);
        assert!(number.set_grid(Grid::new(0, 0)).is_err());
        assert_eq!(number.grid(), &replacement);
    }
}
