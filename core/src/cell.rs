use serde::{Deserialize, Serialize};

use crate::*;

/// Arena indices of the four orthogonal neighbors, `None` past the grid edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub left: Option<CellIndex>,
    pub top: Option<CellIndex>,
    pub right: Option<CellIndex>,
    pub bottom: Option<CellIndex>,
}

impl Neighbors {
    pub const fn get(&self, direction: Direction) -> Option<CellIndex> {
        use Direction::*;
        match direction {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<CellIndex> {
        use Direction::*;
        match direction {
            Left => &mut self.left,
            Top => &mut self.top,
            Right => &mut self.right,
            Bottom => &mut self.bottom,
        }
    }

    /// Present neighbors in left, top, right, bottom order.
    pub fn iter(self) -> impl Iterator<Item = CellIndex> {
        [self.left, self.top, self.right, self.bottom]
            .into_iter()
            .flatten()
    }
}

/// A single square of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    origin: Point,
    side: u16,
    color: Color,
    captured: bool,
    neighbors: Neighbors,
}

impl Cell {
    /// Creates an uncaptured, unlinked cell whose pixel origin follows from its grid position.
    pub fn new(coords: Coord2, side: u16, color: Color) -> Self {
        let (col, row) = coords;
        let side_px = i32::from(side);
        Self {
            coords,
            origin: Point::new(i32::from(col) * side_px, i32::from(row) * side_px),
            side,
            color,
            captured: false,
            neighbors: Neighbors::default(),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn origin(&self) -> Point {
        self.origin
    }

    pub const fn side(&self) -> u16 {
        self.side
    }

    pub fn center(&self) -> Point {
        let half = i32::from(self.side) / 2;
        Point::new(self.origin.x + half, self.origin.y + half)
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    pub const fn neighbors(&self) -> Neighbors {
        self.neighbors
    }

    pub const fn neighbor(&self, direction: Direction) -> Option<CellIndex> {
        self.neighbors.get(direction)
    }

    pub fn set_neighbor(&mut self, direction: Direction, index: Option<CellIndex>) {
        *self.neighbors.slot_mut(direction) = index;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn capture(&mut self) {
        self.captured = true;
    }

    /// Whether `point` lies strictly inside this square, edges excluded.
    pub fn is_within(&self, point: Point) -> bool {
        let side = i32::from(self.side);
        point.x > self.origin.x
            && point.y > self.origin.y
            && point.x < self.origin.x + side
            && point.y < self.origin.y + side
    }

    /// Whether any linked neighbor is captured according to `is_captured`.
    pub fn is_adjacent_to_captured(&self, is_captured: impl Fn(CellIndex) -> bool) -> bool {
        self.neighbors.iter().any(is_captured)
    }
}
