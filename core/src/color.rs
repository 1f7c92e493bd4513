use core::fmt;
use serde::{Deserialize, Serialize};

/// Fill colors a cell can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Orange,
}

impl Color {
    /// Default palette, in draw order.
    pub const ALL: [Color; 6] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Orange,
    ];

    pub const fn rgb(self) -> (u8, u8, u8) {
        use Color::*;
        match self {
            Red => (255, 0, 0),
            Green => (0, 255, 0),
            Yellow => (255, 255, 0),
            Blue => (0, 0, 255),
            Magenta => (255, 0, 255),
            Orange => (255, 200, 0),
        }
    }

    pub const fn name(self) -> &'static str {
        use Color::*;
        match self {
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Orange => "orange",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
