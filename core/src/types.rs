use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board size and grid positions.
pub type Coord = u8;

/// Count type used for total-cell and captured-cell counts.
pub type CellCount = u16;

/// Row-major index into the board's cell arena, `row * size + col`.
pub type CellIndex = usize;

/// Grid position `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Arrays are stored row-major, so the row comes first.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub fn flat_index((col, row): Coord2, size: Coord) -> CellIndex {
    usize::from(row) * usize::from(size) + usize::from(col)
}

/// Inverse of [`flat_index`]. `index` must be below `size * size`.
pub fn coords_of(index: CellIndex, size: Coord) -> Coord2 {
    let size = usize::from(size);
    ((index % size) as Coord, (index / size) as Coord)
}

/// Pixel position in logical canvas coordinates, origin at the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Left => Right,
            Top => Bottom,
            Right => Left,
            Bottom => Top,
        }
    }

    /// Displacement as `(dcol, drow)`.
    const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Left => (-1, 0),
            Top => (0, -1),
            Right => (1, 0),
            Bottom => (0, 1),
        }
    }

    /// The grid position one step away in this direction, if it is still on a `size`×`size` board.
    pub fn step(self, coords: Coord2, size: Coord) -> Option<Coord2> {
        apply_delta(coords, self.delta(), size)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bound: Coord) -> Option<Coord2> {
    let (col, row) = coords;
    let (dcol, drow) = delta;

    let next_col = col.checked_add_signed(dcol)?;
    if next_col >= bound {
        return None;
    }

    let next_row = row.checked_add_signed(drow)?;
    if next_row >= bound {
        return None;
    }

    Some((next_col, next_row))
}
