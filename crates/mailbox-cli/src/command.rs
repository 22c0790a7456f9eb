//! Parsing of lines typed at the prompt.

use mailbox_core::{Move, Square};

/// A command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move from one square to another ("e2e4", "e7e8q" or "e2 e4").
    Move { from: Square, to: Square },
    /// List the legal destinations from a square.
    Moves(Square),
    /// Show the move list.
    History,
    /// Turn the board around.
    Flip,
    /// Start over from the initial position.
    Reset,
    Help,
    Quit,
    /// Blank line: redraw the board.
    Redraw,
    /// Input that matched nothing.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => Command::Redraw,
            ["quit"] | ["exit"] | ["q"] => Command::Quit,
            ["help"] | ["?"] => Command::Help,
            ["history"] | ["h"] => Command::History,
            ["flip"] => Command::Flip,
            ["reset"] => Command::Reset,
            ["moves", square] => match Square::from_algebraic(square) {
                Some(sq) => Command::Moves(sq),
                None => Command::Unknown(input.to_string()),
            },
            [from, to] => Self::parse_move(from, to, input),
            [text] => match Move::from_coordinate(text) {
                Some(m) => Command::Move {
                    from: m.from,
                    to: m.to,
                },
                None => Command::Unknown(input.to_string()),
            },
            _ => Command::Unknown(input.to_string()),
        }
    }

    fn parse_move(from: &str, to: &str, input: &str) -> Self {
        match (Square::from_algebraic(from), Square::from_algebraic(to)) {
            (Some(from), Some(to)) => Command::Move { from, to },
            _ => Command::Unknown(input.to_string()),
        }
    }
}

/// Text printed for the `help` command.
pub const HELP: &str = "\
commands:
  e2e4 | e2 e4   play a move
  moves e2       list legal destinations from a square
  history        show the move list
  flip           turn the board around
  reset          start a new game
  quit           leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn parse_moves() {
        assert_eq!(
            Command::parse("e2e4"),
            Command::Move {
                from: sq("e2"),
                to: sq("e4")
            }
        );
        assert_eq!(
            Command::parse("  g1 f3 "),
            Command::Move {
                from: sq("g1"),
                to: sq("f3")
            }
        );
        assert_eq!(
            Command::parse("e7e8q"),
            Command::Move {
                from: sq("e7"),
                to: sq("e8")
            }
        );
        assert_eq!(
            Command::parse("e7e8n"),
            Command::Unknown("e7e8n".to_string())
        );
        assert_eq!(
            Command::parse("e2e9"),
            Command::Unknown("e2e9".to_string())
        );
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(Command::parse(""), Command::Redraw);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("flip"), Command::Flip);
        assert_eq!(Command::parse("reset"), Command::Reset);
        assert_eq!(Command::parse("history"), Command::History);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("moves b1"), Command::Moves(sq("b1")));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            Command::parse("moves z9"),
            Command::Unknown("moves z9".to_string())
        );
        assert_eq!(
            Command::parse("castle now please"),
            Command::Unknown("castle now please".to_string())
        );
    }
}
