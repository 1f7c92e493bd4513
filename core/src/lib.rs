#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use scene::*;
pub use types::*;

mod board;
mod cell;
mod color;
mod config;
mod error;
mod generator;
mod scene;
mod types;

/// Key that regenerates the board.
pub const RESET_KEY: &str = "r";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The point was not inside any cell.
    NoChange,
    /// A color was selected; holds how many cells joined the captured region.
    Flooded(CellCount),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flooded(_) => true,
        }
    }

    pub const fn absorbed(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Flooded(absorbed) => absorbed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Reset,
}

impl KeyOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Reset => true,
        }
    }
}
