//! Played-move records and their display notation.

use mailbox_core::{Color, Piece, Square};
use std::fmt;

/// A move as it was played, with what it captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    /// The piece as it stands on `to` after the move. A promoted pawn is
    /// recorded as the queen it became.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl MoveRecord {
    /// Returns the move-list notation, e.g. `N g1→f3` or `P (b) d5xe4`.
    ///
    /// Black moves carry a ` (b)` tag; captures use `x` between the squares.
    pub fn notation(&self) -> String {
        let tag = match self.piece.color {
            Color::White => "",
            Color::Black => " (b)",
        };
        let sep = if self.captured.is_some() { 'x' } else { '→' };
        format!(
            "{}{} {}{}{}",
            self.piece.kind.letter(),
            tag,
            self.from,
            sep,
            self.to
        )
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailbox_core::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn quiet_white_move() {
        let record = MoveRecord {
            piece: Piece::new(PieceKind::Knight, Color::White),
            from: sq("g1"),
            to: sq("f3"),
            captured: None,
            promoted: false,
        };
        assert_eq!(record.notation(), "N g1→f3");
        assert_eq!(record.to_string(), "N g1→f3");
    }

    #[test]
    fn black_capture() {
        let record = MoveRecord {
            piece: Piece::new(PieceKind::Pawn, Color::Black),
            from: sq("d5"),
            to: sq("e4"),
            captured: Some(Piece::new(PieceKind::Pawn, Color::White)),
            promoted: false,
        };
        assert_eq!(record.notation(), "P (b) d5xe4");
    }

    #[test]
    fn promotion_is_recorded_as_queen() {
        let record = MoveRecord {
            piece: Piece::new(PieceKind::Queen, Color::White),
            from: sq("a7"),
            to: sq("a8"),
            captured: None,
            promoted: true,
        };
        assert_eq!(record.notation(), "Q a7→a8");
        assert!(record.promoted);
    }
}
