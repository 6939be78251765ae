//! Named glyph regions and the cells they cover.

/// A named region of the 5x4 glyph frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Top horizontal bar.
    Top,
    /// Middle horizontal bar.
    Middle,
    /// Bottom horizontal bar.
    Bottom,
    /// Left column, rows 1 and 2.
    Left,
    /// Right column, rows 1 and 2.
    Right,
    /// Upper half of the left pipe.
    LeftTop,
    /// Lower half of the left pipe.
    LeftBottom,
    /// Upper half of the right pipe.
    RightTop,
    /// Lower half of the right pipe.
    RightBottom,
}

impl Segment {
    /// Every segment, in declaration order.
    pub const ALL: [Segment; 9] = [
        Segment::Top,
        Segment::Middle,
        Segment::Bottom,
        Segment::Left,
        Segment::Right,
        Segment::LeftTop,
        Segment::LeftBottom,
        Segment::RightTop,
        Segment::RightBottom,
    ];

    /// The `(row, col)` cells this segment covers.
    pub const fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Segment::Top => &[(0, 1), (0, 2)],
            Segment::Middle => &[(2, 1), (2, 2)],
            Segment::Bottom => &[(4, 1), (4, 2)],
            Segment::Left => &[(1, 0), (2, 0)],
            Segment::Right => &[(1, 3), (2, 3)],
            Segment::LeftTop => &[(1, 0)],
            Segment::LeftBottom => &[(3, 0)],
            Segment::RightTop => &[(1, 3)],
            Segment::RightBottom => &[(3, 3)],
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Segment::Top => "top",
            Segment::Middle => "middle",
            Segment::Bottom => "bottom",
            Segment::Left => "left",
            Segment::Right => "right",
            Segment::LeftTop => "left-top",
            Segment::LeftBottom => "left-bottom",
            Segment::RightTop => "right-top",
            Segment::RightBottom => "right-bottom",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GLYPH_COLS, GLYPH_ROWS};

    #[test]
    fn all_cells_fit_the_frame() {
        for segment in Segment::ALL {
            for &(row, col) in segment.cells() {
                assert!(
                    row < GLYPH_ROWS && col < GLYPH_COLS,
                    "segment {segment} cell ({row}, {col}) leaves the frame"
                );
            }
        }
    }

    #[test]
    fn bars_sit_on_even_rows() {
        for segment in [Segment::Top, Segment::Middle, Segment::Bottom] {
            for &(row, col) in segment.cells() {
                assert_eq!(row % 2, 0);
                assert!((1..=2).contains(&col));
            }
        }
    }

    #[test]
    fn half_pipes_are_single_cells() {
        for segment in [
            Segment::LeftTop,
            Segment::LeftBottom,
            Segment::RightTop,
            Segment::RightBottom,
        ] {
            assert_eq!(segment.cells().len(), 1);
        }
    }
}
