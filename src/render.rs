//! Text renderers for grids, numbers and fields.
//!
//! The plain renderers turn each grid row into one line of `|`, `-` and
//! spaces with nothing added. The terminal renderer optionally color-codes
//! the bars, and the JSON renderer wraps a field's lines with its fill state.

use std::io::IsTerminal;

use serde::Serialize;

use crate::entity::MatrixEntity;
use crate::error::GridResult;
use crate::field::CoordinateField;
use crate::glyph::all_digits;
use crate::grid::Grid;
use crate::symbol::Symbol;

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";

/// Configuration for terminal rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Enable ANSI color codes.
    pub color: bool,
}

impl RenderConfig {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            color: color_wanted(
                std::io::stdout().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ),
        }
    }

    /// Forced color wins; otherwise fall back to [`RenderConfig::detect`].
    pub fn resolve(force_color: bool) -> Self {
        if force_color {
            Self { color: true }
        } else {
            Self::detect()
        }
    }
}

/// One line per row of the entity's grid.
pub fn render<E: MatrixEntity>(entity: &E) -> Vec<String> {
    render_grid(entity.grid())
}

/// One line per row of `grid`.
pub fn render_grid(grid: &Grid) -> Vec<String> {
    grid.lines()
}

/// Render `grid` for a terminal, one row per line.
///
/// With color off this is exactly the plain lines joined by newlines.
pub fn render_to_terminal(grid: &Grid, config: &RenderConfig) -> String {
    if !config.color {
        return render_grid(grid).join("\n");
    }

    grid.iter_rows()
        .map(|row| row.iter().map(|s| colored(*s)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializable view of a field for machine consumers.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub lines: Vec<String>,
    pub mirrors: MirrorState,
}

/// Which mirror quadrants have been filled.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MirrorState {
    pub horizontal: bool,
    pub vertical: bool,
    pub both: bool,
}

impl FieldSnapshot {
    pub fn of(field: &CoordinateField) -> Self {
        let grid = field.grid();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            lines: render_grid(grid),
            mirrors: MirrorState {
                horizontal: field.horizontal_filled(),
                vertical: field.vertical_filled(),
                both: field.both_filled(),
            },
        }
    }
}

/// Pretty-printed JSON for a field.
pub fn render_json(field: &CoordinateField) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&FieldSnapshot::of(field))
}

/// All ten digit glyphs side by side, each headed by its value.
pub fn render_digit_table(config: &RenderConfig) -> GridResult<String> {
    let digits = all_digits()?;

    let mut header = String::new();
    for value in 0..digits.len() {
        header.push_str(&format!(" {value}   "));
    }
    let header = header.trim_end().to_string();

    let mut lines = Vec::new();
    lines.push(if config.color {
        format!("{BOLD}{header}{RESET}")
    } else {
        header
    });

    let rendered: Vec<String> = digits
        .iter()
        .map(|g| render_to_terminal(g.grid(), config))
        .collect();
    let rows: Vec<Vec<&str>> = rendered.iter().map(|r| r.lines().collect()).collect();
    let height = rows.first().map_or(0, Vec::len);
    for r in 0..height {
        let line = rows
            .iter()
            .filter_map(|glyph| glyph.get(r).copied())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

// -----------------------------------------------------------------------
// Internal helpers
// -----------------------------------------------------------------------

fn colored(symbol: Symbol) -> String {
    match symbol {
        Symbol::VBar => format!("{CYAN}|{RESET}"),
        Symbol::HBar => format!("{YELLOW}-{RESET}"),
        Symbol::Blank => " ".to_string(),
    }
}

fn color_wanted(is_terminal: bool, no_color: bool) -> bool {
    is_terminal && !no_color
}
