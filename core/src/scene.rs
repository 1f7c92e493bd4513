use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

pub const WIN_MESSAGE: &str = "You Win!";
pub const WIN_FONT_SIZE: u16 = 18;
pub const WIN_TEXT_RGB: (u8, u8, u8) = (0, 0, 0);

/// Solid square a renderer should fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Square {
    pub origin: Point,
    pub side: u16,
    pub color: Color,
}

impl Square {
    pub fn center(&self) -> Point {
        let half = i32::from(self.side) / 2;
        Point::new(self.origin.x + half, self.origin.y + half)
    }
}

impl From<&Cell> for Square {
    fn from(cell: &Cell) -> Self {
        Self {
            origin: cell.origin(),
            side: cell.side(),
            color: cell.color(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub text: &'static str,
    pub center: Point,
    pub font_size: u16,
    pub rgb: (u8, u8, u8),
}

/// Everything a renderer needs to draw one frame, on a square canvas of `canvas_side` pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Scene {
    /// One square per cell, in row-major order.
    Playing {
        canvas_side: i32,
        squares: Vec<Square>,
    },
    /// The board replaced by a centered banner.
    Won { canvas_side: i32, banner: Banner },
}

impl Scene {
    pub(crate) fn won(canvas_side: i32) -> Self {
        Self::Won {
            canvas_side,
            banner: Banner {
                text: WIN_MESSAGE,
                center: Point::new(canvas_side / 2, canvas_side / 2),
                font_size: WIN_FONT_SIZE,
                rgb: WIN_TEXT_RGB,
            },
        }
    }

    pub const fn canvas_side(&self) -> i32 {
        match self {
            Self::Playing { canvas_side, .. } | Self::Won { canvas_side, .. } => *canvas_side,
        }
    }

    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}
