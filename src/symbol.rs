//! The three-valued drawing alphabet.
//!
//! Every cell of every grid in the crate holds one [`Symbol`]. The textual
//! form of each symbol is fixed: a vertical bar renders as `|`, a horizontal
//! bar as `-`, and a blank as a single space.

use serde::{Deserialize, Serialize};

/// A single drawable cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Symbol {
    /// Vertical bar (`|`).
    VBar,
    /// Horizontal bar (`-`).
    HBar,
    /// Empty cell (` `).
    #[default]
    Blank,
}

impl Symbol {
    /// The character this symbol renders as.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::VBar => '|',
            Symbol::HBar => '-',
            Symbol::Blank => ' ',
        }
    }

    /// Parse a rendered character back into a symbol.
    ///
    /// Returns `None` for anything outside the three-character alphabet.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '|' => Some(Symbol::VBar),
            '-' => Some(Symbol::HBar),
            ' ' => Some(Symbol::Blank),
            _ => None,
        }
    }

    /// Whether this cell draws anything.
    pub const fn is_bar(self) -> bool {
        !matches!(self, Symbol::Blank)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
