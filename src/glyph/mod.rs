//! Seven-segment style digit glyphs.
//!
//! A digit is drawn on a fixed 5-row by 4-column frame out of named segments
//! (bars and pipes). The frame looks like this, with `-` bars on rows 0, 2
//! and 4 and `|` pipes on rows 1 and 3:
//!
//! ```text
//!  --
//! |  |
//!  --
//! |  |
//!  --
//! ```
//!
//! ## Components
//!
//! - [`segment`] — segment names and the cells each one covers
//! - [`digit`] — the [`DigitGlyph`] entity and its segment writers
//! - [`catalog`] — the ten digit glyphs, built once and looked up by value

pub mod catalog;
pub mod digit;
pub mod segment;

pub use catalog::{all_digits, digit_glyph_for};
pub use digit::{DigitGlyph, GLYPH_COLS, GLYPH_ROWS};
pub use segment::Segment;
