use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_SIZE: Coord = 5;
pub const DEFAULT_CELL_SIDE: u16 = 20;
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 200;

/// How a selection grows the captured region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Propagation {
    /// Rescan the whole grid `size * size` times, capturing matching cells next to the region.
    Saturation,
    /// Breadth-first fill seeded from every captured cell.
    Queue,
}

impl Default for Propagation {
    fn default() -> Self {
        Self::Saturation
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Cells per side, the board is `size`×`size`.
    pub size: Coord,
    /// Side length of a cell in canvas pixels.
    pub cell_side: u16,
    /// Colors drawn from during generation.
    pub palette: Vec<Color>,
    /// Delay between cascade frames.
    pub frame_interval_ms: u32,
    pub propagation: Propagation,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cell_side: DEFAULT_CELL_SIDE,
            palette: Color::ALL.to_vec(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            propagation: Propagation::default(),
        }
    }
}

impl GameConfig {
    pub fn new(size: Coord) -> Result<Self> {
        let config = Self {
            size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_propagation(self, propagation: Propagation) -> Self {
        Self {
            propagation,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidConfiguration("board size must be at least 1"));
        }
        if self.cell_side == 0 {
            return Err(GameError::InvalidConfiguration("cell side must be at least 1"));
        }
        if self.palette.is_empty() {
            return Err(GameError::InvalidConfiguration("palette must not be empty"));
        }
        if self.frame_interval_ms == 0 {
            return Err(GameError::InvalidConfiguration(
                "frame interval must be at least 1ms",
            ));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Number of anti-diagonals, which is also the length of one cascade cycle.
    pub const fn diagonal_count(&self) -> u16 {
        2 * self.size as u16 - 1
    }

    /// Width and height of the square canvas holding the board.
    pub fn canvas_side(&self) -> i32 {
        i32::from(self.size) * i32::from(self.cell_side)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.into())
    }
}
