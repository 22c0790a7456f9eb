//! Core types for chess on an 8x8 mailbox board.
//!
//! This crate provides the board model used by the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for row/column board coordinates and algebraic names
//! - [`Move`] for origin/destination pairs
//! - [`Board`], an 8x8 grid of optional pieces
//! - Piece-placement text (the first FEN field) parsing and rendering

mod board;
mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use board::{clone_board, create_starting_board, Board};
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use placement::{PlacementError, STARTING_PLACEMENT};
pub use square::{is_on_board, square_to_algebraic, Square, BOARD_SIZE};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_serializes_cells() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        let json = serde_json::to_value(&board).unwrap();
        let cells = json["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0][4]["kind"], "King");
        assert_eq!(cells[0][4]["color"], "Black");
        assert!(cells[3][3].is_null());

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }
}
