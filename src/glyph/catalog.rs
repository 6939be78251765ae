//! The ten digit glyphs, built once and shared read-only.
//!
//! Digits 0 through 4 are drawn directly from segments. The rest are derived
//! from simpler digits by mirroring and at most one extra segment, so only
//! five shapes are defined by hand.

use std::sync::OnceLock;

use crate::error::{GridError, GridResult};
use crate::glyph::digit::DigitGlyph;
use crate::transform::{invert_horizontal, invert_vertical};

static CATALOG: OnceLock<[DigitGlyph; 10]> = OnceLock::new();

fn build_catalog() -> GridResult<[DigitGlyph; 10]> {
    Ok([
        zero()?,
        one()?,
        two()?,
        three()?,
        four()?,
        five()?,
        six()?,
        seven()?,
        eight()?,
        nine()?,
    ])
}

/// All ten glyphs, indexed by digit value.
pub fn all_digits() -> GridResult<&'static [DigitGlyph; 10]> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let built = build_catalog()?;
    tracing::debug!("digit glyph catalog built");
    Ok(CATALOG.get_or_init(|| built))
}

/// The glyph for a single digit `value` in `0..=9`.
pub fn digit_glyph_for(value: u8) -> GridResult<DigitGlyph> {
    all_digits()?
        .get(usize::from(value))
        .cloned()
        .ok_or(GridError::DigitOutOfRange { value })
}

fn zero() -> GridResult<DigitGlyph> {
    let mut g = DigitGlyph::blank();
    g.set_top_bar()?;
    g.set_left_pipe()?;
    g.set_right_pipe()?;
    g.set_bottom_bar()?;
    Ok(g)
}

fn one() -> GridResult<DigitGlyph> {
    let mut g = DigitGlyph::blank();
    g.set_right_pipe()?;
    Ok(g)
}

fn two() -> GridResult<DigitGlyph> {
    let mut g = DigitGlyph::blank();
    g.set_top_bar()?;
    g.set_right_top_pipe()?;
    g.set_middle_bar()?;
    g.set_left_bottom_pipe()?;
    g.set_bottom_bar()?;
    Ok(g)
}

fn three() -> GridResult<DigitGlyph> {
    let mut g = DigitGlyph::blank();
    g.set_top_bar()?;
    g.set_right_pipe()?;
    g.set_middle_bar()?;
    g.set_bottom_bar()?;
    Ok(g)
}

fn four() -> GridResult<DigitGlyph> {
    let mut g = DigitGlyph::blank();
    g.set_right_pipe()?;
    g.set_left_top_pipe()?;
    g.set_middle_bar()?;
    Ok(g)
}

fn five() -> GridResult<DigitGlyph> {
    invert_horizontal(&two()?)
}

fn six() -> GridResult<DigitGlyph> {
    let mut g = five()?;
    g.set_left_pipe()?;
    Ok(g)
}

fn seven() -> GridResult<DigitGlyph> {
    let mut g = one()?;
    g.set_top_bar()?;
    Ok(g)
}

fn eight() -> GridResult<DigitGlyph> {
    let mut g = three()?;
    g.set_left_pipe()?;
    Ok(g)
}

// Horizontal first, then vertical.
fn nine() -> GridResult<DigitGlyph> {
    let mirrored = invert_horizontal(&six()?)?;
    invert_vertical(&mirrored)
}
