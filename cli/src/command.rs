use std::str::FromStr;

use floodit_core::{Coord2, Point, RESET_KEY};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  click X Y     select the cell under pixel X Y
  pick COL ROW  select the cell at a grid position
  tick [N]      advance the cascade N frames (default 1)
  play          run one full cascade at the configured frame rate
  key K         send a key press, `r` starts a new board
  r             same as `key r`
  seed S        reseed and start a new board
  show          redraw the board
  quit          leave";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(Point),
    Pick(Coord2),
    Tick(u32),
    Play,
    Key(String),
    Seed(u64),
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` expects {1}")]
    Arguments(&'static str, &'static str),
}

fn parse_pair<T: FromStr>(args: &[&str]) -> Option<(T, T)> {
    match args {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        use Command::*;
        use ParseCommandError::*;

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(Empty);
        };
        let args: Vec<&str> = words.collect();

        match name {
            "click" => parse_pair(&args)
                .map(|(x, y)| Click(Point::new(x, y)))
                .ok_or(Arguments("click", "X Y pixel coordinates")),
            "pick" => parse_pair(&args)
                .map(Pick)
                .ok_or(Arguments("pick", "COL ROW grid coordinates")),
            "tick" => match args.as_slice() {
                [] => Ok(Tick(1)),
                [frames] => frames
                    .parse()
                    .map(Tick)
                    .map_err(|_| Arguments("tick", "an optional frame count")),
                _ => Err(Arguments("tick", "an optional frame count")),
            },
            "key" => match args.as_slice() {
                [key] => Ok(Key(key.to_string())),
                _ => Err(Arguments("key", "a single key name")),
            },
            RESET_KEY => Ok(Key(RESET_KEY.to_string())),
            "seed" => match args.as_slice() {
                [seed] => seed
                    .parse()
                    .map(Seed)
                    .map_err(|_| Arguments("seed", "an unsigned integer")),
                _ => Err(Arguments("seed", "an unsigned integer")),
            },
            "play" => Ok(Play),
            "show" => Ok(Show),
            "help" | "?" => Ok(Help),
            "quit" | "q" | "exit" => Ok(Quit),
            other => Err(Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selections() {
        assert_eq!("click 25 -3".parse::<Command>(), Ok(Command::Click(Point::new(25, -3))));
        assert_eq!("  pick 1 4 ".parse::<Command>(), Ok(Command::Pick((1, 4))));
    }

    #[test]
    fn tick_defaults_to_one_frame() {
        assert_eq!("tick".parse::<Command>(), Ok(Command::Tick(1)));
        assert_eq!("tick 9".parse::<Command>(), Ok(Command::Tick(9)));
    }

    #[test]
    fn reset_shorthand_is_a_key_press() {
        assert_eq!("r".parse::<Command>(), Ok(Command::Key("r".to_string())));
        assert_eq!("key x".parse::<Command>(), Ok(Command::Key("x".to_string())));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            "pick 1".parse::<Command>(),
            Err(ParseCommandError::Arguments("pick", "COL ROW grid coordinates"))
        );
        assert_eq!(
            "pick 300 1".parse::<Command>(),
            Err(ParseCommandError::Arguments("pick", "COL ROW grid coordinates"))
        );
        assert!(matches!(
            "seed -1".parse::<Command>(),
            Err(ParseCommandError::Arguments("seed", _))
        ));
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "undo".parse::<Command>(),
            Err(ParseCommandError::Unknown("undo".to_string()))
        );
    }
}
