use std::io::{self, Write};

use clap::ValueEnum;
use crossterm::style::{self, Stylize};
use floodit_core::{Color, Coord, Scene};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Colored blocks
    Color,
    /// One letter per cell, for terminals without color
    Plain,
}

fn term_color(color: Color) -> style::Color {
    let (r, g, b) = color.rgb();
    style::Color::Rgb { r, g, b }
}

fn letter(color: Color) -> char {
    use Color::*;
    match color {
        Red => 'R',
        Green => 'G',
        Yellow => 'Y',
        Blue => 'B',
        Magenta => 'M',
        Orange => 'O',
    }
}

/// Writes `scene` as `size` rows of cells, or the win banner.
pub fn draw(scene: &Scene, size: Coord, style: Style, out: &mut impl Write) -> io::Result<()> {
    match scene {
        Scene::Playing { squares, .. } => {
            for row in squares.chunks(usize::from(size)) {
                for square in row {
                    match style {
                        Style::Color => write!(out, "{}", "  ".on(term_color(square.color)))?,
                        Style::Plain => write!(out, "{}", letter(square.color))?,
                    }
                }
                writeln!(out)?;
            }
        }
        Scene::Won { banner, .. } => match style {
            Style::Color => writeln!(out, "{}", banner.text.bold())?,
            Style::Plain => writeln!(out, "{}", banner.text)?,
        },
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodit_core::{Board, GameConfig, Lcg48};

    fn plain(scene: &Scene, size: Coord) -> String {
        let mut out = Vec::new();
        draw(scene, size, Style::Plain, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_rows_follow_the_grid() {
        let board = Board::new(GameConfig::new(3).unwrap(), Lcg48::new(16)).unwrap();

        assert_eq!(plain(&board.scene(), 3), "BMB\nMGM\nOYM\n");
    }

    #[test]
    fn won_board_prints_banner() {
        let board = Board::with_seed(GameConfig::new(1).unwrap(), 4).unwrap();

        assert_eq!(plain(&board.scene(), 1), "You Win!\n");
    }
}
