// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # digit-mirror
//!
//! Seven-segment style ASCII digits and a four-quadrant mirror field.
//!
//! ## Architecture
//!
//! - **Cells** (`symbol`, `grid`): a three-symbol alphabet in a bounds-checked,
//!   fixed-size matrix
//! - **Entities** (`entity`): the [`MatrixEntity`] trait shared by everything
//!   that is backed by a grid
//! - **Transformations** (`transform`): generic flips and concatenation that
//!   return the same entity type they were given
//! - **Glyphs** (`glyph`): the 5x4 digit drawings and their lookup table
//! - **Composition** (`number`, `field`): numbers built from glyphs, and the
//!   mirror field built from a number
//! - **Edges** (`input`, `config`, `render`, `session`): user input parsing,
//!   TOML config, text output and the interactive prompt loop
//!
//! ## Library usage
//!
//! ```
//! use digit_mirror::field::build_coordinate_field;
//! use digit_mirror::number::Number;
//! use digit_mirror::render::render_grid;
//!
//! let number = Number::from_digits(&[4, 2]).unwrap();
//! let mut field = build_coordinate_field(number).unwrap();
//! field.fill_horizontal_mirror().unwrap();
//! for line in render_grid(field.grid()) {
//!     println!("{line}");
//! }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod field;
pub mod glyph;
pub mod grid;
pub mod input;
pub mod number;
pub mod render;
pub mod session;
pub mod symbol;
pub mod transform;

pub use entity::MatrixEntity;
pub use error::{ErrorKind, GridError, GridResult, MirrorError, MirrorResult};
pub use field::{CoordinateField, Mirror, Quadrant, build_coordinate_field};
pub use glyph::{DigitGlyph, digit_glyph_for};
pub use grid::Grid;
pub use number::{Number, build_number};
pub use symbol::Symbol;
pub use transform::{Axis, concat, concat_all, invert_horizontal, invert_vertical};
