use alloc::collections::VecDeque;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Arena index of the anchor, the top-left cell whose color is the player's region color.
pub const ANCHOR: CellIndex = 0;

/// An N×N game of flood-it.
///
/// Cells live in a row-major arena and refer to each other by index. The board owns its color source so a reset
/// draws a fresh layout from the same stream.
#[derive(Clone, Debug)]
pub struct Board<S = RandomSource> {
    config: GameConfig,
    cells: Array2<Cell>,
    source: S,
    diagonal: u16,
}

impl Board {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomSource::new(seed))
    }
}

impl<S: ColorSource> Board<S> {
    pub fn new(config: GameConfig, mut source: S) -> Result<Self> {
        config.validate()?;
        let cells = build_cells(&config, &mut source);
        log::debug!("Generated {0}x{0} board", config.size);
        Ok(Self {
            config,
            cells,
            source,
            diagonal: 0,
        })
    }

    /// Builds a board from explicit row-major `colors`, capturing the anchor plus every index in `captured`.
    pub fn from_colors(
        config: GameConfig,
        colors: &[Color],
        captured: &[CellIndex],
        source: S,
    ) -> Result<Self> {
        config.validate()?;
        if colors.len() != usize::from(config.total_cells()) {
            return Err(GameError::InvalidBoardShape);
        }
        if captured.iter().any(|&index| index >= colors.len()) {
            return Err(GameError::InvalidCoords);
        }

        let mut cells = layout_cells(&config, colors);
        for &index in captured {
            cells[nd_index(index, config.size)].capture();
        }

        Ok(Self {
            config,
            cells,
            source,
            diagonal: 0,
        })
    }

    /// Replaces every cell with a freshly drawn layout, continuing the current color stream.
    pub fn regenerate(&mut self) {
        self.cells = build_cells(&self.config, &mut self.source);
        self.diagonal = 0;
        log::debug!("Regenerated {0}x{0} board", self.config.size);
    }

    /// Restarts the color stream from `seed`, then regenerates.
    pub fn reseed(&mut self, seed: u64) {
        log::debug!("Reseeding color source with {}", seed);
        self.source.reseed(seed);
        self.regenerate();
    }

    /// Advances the cascade one anti-diagonal, repainting its captured cells with the anchor color.
    pub fn on_tick(&mut self) {
        let size = u16::from(self.config.size);
        let diagonal = self.diagonal;
        let (count, row, start) = if diagonal < size {
            (diagonal + 1, diagonal, 0)
        } else {
            (2 * size - 1 - diagonal, size - 1, diagonal - (size - 1))
        };

        let color = self.anchor().color();
        let mut repainted = 0;
        for step in 0..count {
            let cell = &mut self.cells[[usize::from(row - step), usize::from(start + step)]];
            if cell.is_captured() && cell.color() != color {
                cell.set_color(color);
                repainted += 1;
            }
        }
        log::trace!("Cascade diagonal {} repainted {} cells", diagonal, repainted);

        self.diagonal = if diagonal + 1 < self.config.diagonal_count() {
            diagonal + 1
        } else {
            0
        };

        if repainted > 0 && self.is_won() {
            log::info!("Board won");
        }
    }

    /// Selects the color of the cell under `point`. Points outside every cell change nothing.
    pub fn on_click(&mut self, point: Point) -> ClickOutcome {
        match self.cell_index_at(point) {
            Some(index) => self.flood_from(index),
            None => {
                log::trace!("Click at {:?} missed the board", point);
                ClickOutcome::NoChange
            }
        }
    }

    /// Selects the color of the cell at `coords`.
    pub fn select_at(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(self.flood_from(flat_index(coords, self.config.size)))
    }

    pub fn on_key(&mut self, key: &str) -> KeyOutcome {
        if key == RESET_KEY {
            self.regenerate();
            KeyOutcome::Reset
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Grows the captured region using the anchor's current color, then hands the anchor the clicked color.
    fn flood_from(&mut self, clicked: CellIndex) -> ClickOutcome {
        self.diagonal = 0;

        let target = self.anchor().color();
        let chosen = self[clicked].color();
        let absorbed = match self.config.propagation {
            Propagation::Saturation => self.saturate(target),
            Propagation::Queue => self.fill_queue(target),
        };
        self.cell_mut(ANCHOR).set_color(chosen);

        log::debug!(
            "Selected {} at {:?}, absorbed {} {} cells",
            chosen,
            coords_of(clicked, self.config.size),
            absorbed,
            target
        );
        ClickOutcome::Flooded(absorbed)
    }

    /// Full grid rescans, one per cell, so capture has reached its closure when this returns.
    fn saturate(&mut self, target: Color) -> CellCount {
        let total = usize::from(self.total_cells());
        let mut absorbed = 0;

        for _ in 0..total {
            for index in 0..total {
                let cell = self[index];
                if cell.is_captured() || cell.color() != target {
                    continue;
                }
                if cell.is_adjacent_to_captured(|neighbor| self[neighbor].is_captured()) {
                    self.cell_mut(index).capture();
                    absorbed += 1;
                }
            }
        }

        absorbed
    }

    fn fill_queue(&mut self, target: Color) -> CellCount {
        let mut to_visit: VecDeque<CellIndex> = self
            .cells
            .iter()
            .filter(|cell| cell.is_captured())
            .flat_map(|cell| cell.neighbors().iter())
            .collect();
        let mut absorbed = 0;

        while let Some(index) = to_visit.pop_front() {
            let cell = self.cell_mut(index);
            if cell.is_captured() || cell.color() != target {
                continue;
            }
            cell.capture();
            absorbed += 1;
            to_visit.extend(cell.neighbors().iter());
        }

        absorbed
    }

    fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let nd = nd_index(index, self.config.size);
        &mut self.cells[nd]
    }
}

impl<S> Board<S> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    /// Anti-diagonal the next tick will repaint.
    pub fn diagonal(&self) -> u16 {
        self.diagonal
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.config.size;
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        if index < usize::from(self.total_cells()) {
            Some(&self[index])
        } else {
            None
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn anchor(&self) -> &Cell {
        &self[ANCHOR]
    }

    pub fn captured_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_captured())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Won once every cell shows the same color.
    pub fn is_won(&self) -> bool {
        let color = self.anchor().color();
        self.cells.iter().all(|cell| cell.color() == color)
    }

    pub fn colors(&self) -> Array2<Color> {
        self.cells.map(|cell| cell.color())
    }

    /// First cell in row-major order strictly containing `point`.
    pub fn cell_index_at(&self, point: Point) -> Option<CellIndex> {
        self.cells.iter().position(|cell| cell.is_within(point))
    }

    pub fn scene(&self) -> Scene {
        let canvas_side = self.config.canvas_side();
        if self.is_won() {
            Scene::won(canvas_side)
        } else {
            Scene::Playing {
                canvas_side,
                squares: self.cells.iter().map(Square::from).collect(),
            }
        }
    }
}

impl<S> Index<CellIndex> for Board<S> {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[nd_index(index, self.config.size)]
    }
}

fn nd_index(index: CellIndex, size: Coord) -> [usize; 2] {
    let size = usize::from(size);
    [index / size, index % size]
}

fn build_cells<S: ColorSource + ?Sized>(config: &GameConfig, source: &mut S) -> Array2<Cell> {
    let colors = generate_colors(source, config);
    layout_cells(config, &colors)
}

/// Lays `colors` out row-major, captures the anchor and links neighbors.
fn layout_cells(config: &GameConfig, colors: &[Color]) -> Array2<Cell> {
    let size = config.size;
    let side = usize::from(size);

    let mut cells = Array2::from_shape_fn((side, side), |(row, col)| {
        let coords = (col as Coord, row as Coord);
        Cell::new(coords, config.cell_side, colors[flat_index(coords, size)])
    });
    cells[[0, 0]].capture();
    link_neighbors(&mut cells, size);

    cells
}

fn link_neighbors(cells: &mut Array2<Cell>, size: Coord) {
    for cell in cells.iter_mut() {
        let coords = cell.coords();
        for direction in Direction::ALL {
            let neighbor = direction
                .step(coords, size)
                .map(|next| flat_index(next, size));
            cell.set_neighbor(direction, neighbor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use Color::*;

    fn board(size: Coord, colors: &[Color], captured: &[CellIndex]) -> Board<Lcg48> {
        let config = GameConfig::new(size).unwrap();
        Board::from_colors(config, colors, captured, Lcg48::new(0)).unwrap()
    }

    fn captured_indices<S>(board: &Board<S>) -> Vec<CellIndex> {
        board
            .cells()
            .enumerate()
            .filter(|(_, cell)| cell.is_captured())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn fixed_seed_reproduces_layout() {
        let config = GameConfig::default();
        let board = Board::new(config, Lcg48::new(16)).unwrap();

        let colors: Vec<Color> = board.cells().map(Cell::color).collect();
        assert_eq!(
            colors,
            [
                Blue, Magenta, Blue, Magenta, Green, //
                Magenta, Orange, Yellow, Magenta, Orange, //
                Orange, Yellow, Yellow, Orange, Orange, //
                Magenta, Blue, Blue, Red, Blue, //
                Magenta, Blue, Red, Yellow, Magenta,
            ]
        );

        let mut source = board.source().clone();
        let next: Vec<Color> = (0..3).map(|_| Color::ALL[source.next_below(6)]).collect();
        assert_eq!(next, [Yellow, Red, Magenta]);
    }

    #[test]
    fn generation_captures_only_the_anchor() {
        let board = Board::new(GameConfig::new(3).unwrap(), Lcg48::new(16)).unwrap();

        assert_eq!(board.total_cells(), 9);
        assert_eq!(board.cells().count(), 9);
        assert_eq!(board[4].color(), Green);
        assert_eq!(captured_indices(&board), [ANCHOR]);
        assert_eq!(board.anchor().neighbor(Direction::Left), None);
        assert_eq!(board.anchor().neighbor(Direction::Top), None);
        assert_eq!(board.diagonal(), 0);
    }

    #[test]
    fn neighbors_match_grid_adjacency() {
        let board = Board::with_seed(GameConfig::new(4).unwrap(), 1).unwrap();

        let center = board.cell_at((1, 2)).unwrap();
        assert_eq!(center.neighbor(Direction::Left), Some(8));
        assert_eq!(center.neighbor(Direction::Top), Some(5));
        assert_eq!(center.neighbor(Direction::Right), Some(10));
        assert_eq!(center.neighbor(Direction::Bottom), Some(13));

        let corner = board.cell_at((3, 3)).unwrap();
        assert_eq!(corner.neighbor(Direction::Right), None);
        assert_eq!(corner.neighbor(Direction::Bottom), None);

        for (index, cell) in board.cells().enumerate() {
            for direction in Direction::ALL {
                if let Some(neighbor) = cell.neighbor(direction) {
                    assert_eq!(board[neighbor].neighbor(direction.opposite()), Some(index));
                }
            }
        }
    }

    #[test]
    fn reclicking_the_anchor_keeps_captured_set() {
        let colors = [Blue, Magenta, Magenta, Green, Magenta, Yellow, Orange, Blue, Magenta];
        let mut board = board(3, &colors, &[4, 6, 7, 8]);

        let outcome = board.select_at((0, 0)).unwrap();

        assert_eq!(outcome, ClickOutcome::Flooded(0));
        assert_eq!(captured_indices(&board), [0, 4, 6, 7, 8]);
        assert_eq!(board.anchor().color(), Blue);
    }

    #[test]
    fn propagation_uses_color_from_before_the_click() {
        let colors = [Red, Blue, Blue, Green, Green, Green, Green, Green, Blue];
        let mut board = board(3, &colors, &[]);

        // blue is next to the anchor, but the anchor was still red while propagating
        assert_eq!(board.select_at((1, 0)).unwrap(), ClickOutcome::Flooded(0));
        assert_eq!(board.anchor().color(), Blue);
        assert_eq!(captured_indices(&board), [0]);

        assert_eq!(board.select_at((0, 1)).unwrap(), ClickOutcome::Flooded(2));
        assert_eq!(board.anchor().color(), Green);
        assert_eq!(captured_indices(&board), [0, 1, 2]);

        // the far blue corner is never reachable through green
        assert_eq!(board.select_at((2, 2)).unwrap(), ClickOutcome::Flooded(5));
        assert_eq!(captured_indices(&board), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(!board.is_won());

        for _ in 0..board.config().diagonal_count() {
            board.on_tick();
        }

        assert!(board.cells().all(|cell| cell.color() == Blue));
        assert!(board.is_won());
        assert!(!board[8].is_captured());
        assert!(board.scene().is_won());
    }

    #[test]
    fn saturation_and_queue_agree() {
        let config = GameConfig::new(7).unwrap();
        let mut saturating = Board::new(config.clone(), Lcg48::new(5)).unwrap();
        let mut queued =
            Board::new(config.with_propagation(Propagation::Queue), Lcg48::new(5)).unwrap();

        for coords in [(3, 3), (6, 0), (0, 6), (2, 5), (5, 5), (1, 1)] {
            assert_eq!(
                saturating.select_at(coords).unwrap(),
                queued.select_at(coords).unwrap()
            );
            assert_eq!(captured_indices(&saturating), captured_indices(&queued));
            assert_eq!(saturating.anchor().color(), queued.anchor().color());
        }
    }

    #[test]
    fn click_outside_changes_nothing() {
        let mut board = Board::new(GameConfig::new(3).unwrap(), Lcg48::new(16)).unwrap();
        board.on_tick();
        let before = board.colors();

        assert_eq!(board.on_click(Point::new(1000, 1000)), ClickOutcome::NoChange);
        assert_eq!(board.on_click(Point::new(20, 5)), ClickOutcome::NoChange);
        assert!(!ClickOutcome::NoChange.has_update());

        assert_eq!(board.colors(), before);
        assert_eq!(board.diagonal(), 1);
        assert_eq!(captured_indices(&board), [ANCHOR]);
    }

    #[test]
    fn click_selects_cell_under_point() {
        let colors = [Red, Red, Green, Blue, Yellow, Green, Blue, Blue, Blue];
        let mut board = board(3, &colors, &[]);

        assert_eq!(board.cell_index_at(Point::new(25, 5)), Some(1));
        assert_eq!(board.cell_index_at(Point::new(50, 50)), Some(8));

        let outcome = board.on_click(Point::new(50, 10));

        assert_eq!(outcome, ClickOutcome::Flooded(1));
        assert!(outcome.has_update());
        assert_eq!(board.anchor().color(), Green);
        assert_eq!(captured_indices(&board), [0, 1]);
    }

    #[test]
    fn click_restarts_the_cascade() {
        let mut board = Board::new(GameConfig::new(4).unwrap(), Lcg48::new(3)).unwrap();
        board.on_tick();
        board.on_tick();
        assert_eq!(board.diagonal(), 2);

        board.select_at((3, 3)).unwrap();

        assert_eq!(board.diagonal(), 0);
    }

    #[test]
    fn cascade_cycles_through_every_diagonal() {
        for size in [1, 2, 5] {
            let mut board = Board::with_seed(GameConfig::new(size).unwrap(), 0).unwrap();
            let cycle = board.config().diagonal_count();

            for expected in 1..cycle {
                board.on_tick();
                assert_eq!(board.diagonal(), expected);
            }
            board.on_tick();
            assert_eq!(board.diagonal(), 0);
        }
    }

    #[test]
    fn cascade_repaints_one_diagonal_per_tick() {
        let colors = [Red, Red, Red, Red, Red, Red, Red, Red, Blue];
        let mut board = board(3, &colors, &[1, 2, 3, 4, 5, 6, 7]);
        board.select_at((2, 2)).unwrap();
        board.on_tick();

        // diagonal 0 only holds the anchor
        assert_eq!(board[1].color(), Red);
        board.on_tick();
        assert_eq!(board[1].color(), Blue);
        assert_eq!(board[3].color(), Blue);
        assert_eq!(board[4].color(), Red);
        board.on_tick();
        assert_eq!(board[2].color(), Blue);
        assert_eq!(board[4].color(), Blue);
        assert_eq!(board[6].color(), Blue);
        assert_eq!(board[5].color(), Red);
        board.on_tick();
        assert_eq!(board[5].color(), Blue);
        assert_eq!(board[7].color(), Blue);
        board.on_tick();

        assert_eq!(board.diagonal(), 0);
        assert!(board.is_won());
    }

    #[test]
    fn cascade_leaves_uncaptured_cells_alone() {
        let colors = [Red, Green, Green, Green];
        let mut board = board(2, &colors, &[]);
        board.select_at((1, 0)).unwrap();

        for _ in 0..3 {
            board.on_tick();
        }

        assert_eq!(board.colors().iter().copied().collect::<Vec<_>>(), [Green; 4]);
        assert_eq!(captured_indices(&board), [ANCHOR]);
    }

    #[test]
    fn win_requires_every_cell_to_match() {
        let uniform = board(3, &[Orange; 9], &[]);
        assert!(uniform.is_won());

        let mut colors = [Orange; 9];
        colors[5] = Yellow;
        let almost = board(3, &colors, &[]);
        assert!(!almost.is_won());
    }

    #[test]
    fn single_cell_board_is_already_won() {
        let mut board = Board::with_seed(GameConfig::new(1).unwrap(), 9).unwrap();

        assert!(board.is_won());
        assert_eq!(board.select_at((0, 0)).unwrap(), ClickOutcome::Flooded(0));
        board.on_tick();
        assert_eq!(board.diagonal(), 0);
    }

    #[test]
    fn reset_key_draws_a_new_layout() {
        let config = GameConfig::new(4).unwrap();
        let mut board = Board::new(config.clone(), Lcg48::new(11)).unwrap();
        let mut expected_source = Lcg48::new(11);
        generate_colors(&mut expected_source, &config);
        let expected = generate_colors(&mut expected_source, &config);

        board.select_at((2, 2)).unwrap();
        board.on_tick();

        assert_eq!(board.on_key("s"), KeyOutcome::Ignored);
        assert_eq!(board.diagonal(), 1);
        assert_eq!(board.on_key("r"), KeyOutcome::Reset);

        assert_eq!(board.cells().map(Cell::color).collect::<Vec<_>>(), expected);
        assert_eq!(captured_indices(&board), [ANCHOR]);
        assert_eq!(board.diagonal(), 0);
    }

    #[test]
    fn reseed_replays_the_original_layout() {
        let mut board = Board::with_seed(GameConfig::default(), 21).unwrap();
        let original = board.colors();

        board.on_key(RESET_KEY);
        board.reseed(21);

        assert_eq!(board.colors(), original);
    }

    #[test]
    fn from_colors_checks_shape() {
        let config = GameConfig::new(2).unwrap();

        assert_eq!(
            Board::from_colors(config.clone(), &[Red; 3], &[], Lcg48::new(0)).unwrap_err(),
            GameError::InvalidBoardShape
        );
        assert_eq!(
            Board::from_colors(config.clone(), &[Red; 4], &[4], Lcg48::new(0)).unwrap_err(),
            GameError::InvalidCoords
        );
        assert!(matches!(
            Board::with_seed(GameConfig { size: 0, ..config }, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn lookups_reject_out_of_range() {
        let board = board(2, &[Red, Green, Blue, Yellow], &[]);

        assert!(board.cell(3).is_some());
        assert!(board.cell(4).is_none());
        assert_eq!(board.cell_at((2, 0)).unwrap_err(), GameError::InvalidCoords);
        assert_eq!(board.cell_at((1, 1)).unwrap().color(), Yellow);
    }

    #[test]
    fn scene_lists_squares_row_major() {
        let board = Board::new(GameConfig::new(3).unwrap(), Lcg48::new(16)).unwrap();

        let Scene::Playing {
            canvas_side,
            squares,
        } = board.scene()
        else {
            panic!("fresh board should not be won");
        };

        assert_eq!(canvas_side, 60);
        assert_eq!(squares.len(), 9);
        assert_eq!(squares[4].origin, Point::new(20, 20));
        assert_eq!(squares[4].color, Green);
        assert_eq!(squares[5].origin, Point::new(40, 20));
        assert_eq!(squares[5].center(), Point::new(50, 30));
    }

    #[test]
    fn won_scene_centers_banner() {
        let board = board(3, &[Magenta; 9], &[]);

        let Scene::Won {
            canvas_side,
            banner,
        } = board.scene()
        else {
            panic!("uniform board should be won");
        };

        assert_eq!(canvas_side, 60);
        assert_eq!(banner.text, WIN_MESSAGE);
        assert_eq!(banner.center, Point::new(30, 30));
        assert_eq!(banner.font_size, 18);
    }

    #[test]
    fn captured_count_tracks_absorption() {
        let colors = [Red, Green, Green, Green];
        let mut board = board(2, &colors, &[]);
        assert_eq!(board.captured_count(), 1);

        board.select_at((1, 0)).unwrap();
        board.select_at((1, 0)).unwrap();

        assert_eq!(board.captured_count(), 4);
    }
}
