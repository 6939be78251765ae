//! Parsing of user-typed numbers and mirror choices.

use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::MirrorConfig;
use crate::field::Mirror;

/// Errors from parsing user input.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("no number given")]
    #[diagnostic(code(mirror::input::empty), help("Type between 1 and {max} digits."))]
    Empty { max: usize },

    #[error("{len} digits is too many")]
    #[diagnostic(
        code(mirror::input::too_long),
        help("The amount of digits should be between 1 and {max}.")
    )]
    TooLong { len: usize, max: usize },

    #[error("{found:?} at position {position} is not a digit")]
    #[diagnostic(code(mirror::input::not_a_digit), help("Use only the characters 0-9."))]
    NotADigit { found: char, position: usize },

    #[error("unknown mirror \"{input}\"")]
    #[diagnostic(
        code(mirror::input::unknown_mirror),
        help("Use 'x' (horizontal), 'y' (vertical) or 'xy' (both).")
    )]
    UnknownMirror { input: String },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

/// Turn a typed number into digit values.
///
/// Surrounding whitespace is ignored. The result is left-padded with zeros
/// up to `config.pad_width`.
pub fn parse_digits(input: &str, config: &MirrorConfig) -> InputResult<Vec<u8>> {
    let input = input.trim();
    let len = input.chars().count();
    if len == 0 {
        return Err(InputError::Empty {
            max: config.max_digits,
        });
    }
    if len > config.max_digits {
        return Err(InputError::TooLong {
            len,
            max: config.max_digits,
        });
    }

    let mut digits = Vec::with_capacity(len.max(config.pad_width));
    digits.resize(config.pad_width.saturating_sub(len), 0);
    for (position, c) in input.chars().enumerate() {
        let value = c
            .to_digit(10)
            .ok_or(InputError::NotADigit { found: c, position })?;
        digits.push(value as u8);
    }
    Ok(digits)
}

impl FromStr for Mirror {
    type Err = InputError;

    fn from_str(s: &str) -> InputResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "horizontal" => Ok(Mirror::Horizontal),
            "y" | "vertical" => Ok(Mirror::Vertical),
            "xy" | "both" => Ok(Mirror::Both),
            _ => Err(InputError::UnknownMirror {
                input: s.to_string(),
            }),
        }
    }
}
