//! Standard movement rules.

use super::RuleSet;
use crate::movegen::{self, Targets};
use mailbox_core::{Board, Color, Piece, Square};

/// Standard piece movement without the special rules.
///
/// - Standard movement for all six piece kinds
/// - Pawns promote to a queen on arrival
/// - Check and checkmate detection
///
/// Castling, en passant, under-promotion and draw rules are not part of
/// this rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    fn initial_board(&self) -> Board {
        Board::starting()
    }

    fn legal_moves(&self, board: &Board, from: Square) -> Targets {
        movegen::legal_moves(board, from)
    }

    fn apply_move(&self, board: &mut Board, from: Square, to: Square) -> Option<Piece> {
        movegen::make_move(board, from, to)
    }

    fn is_check(&self, board: &Board, color: Color) -> bool {
        movegen::is_king_in_check(board, color)
    }

    fn is_checkmate(&self, board: &Board, color: Color) -> bool {
        movegen::is_checkmate(board, color)
    }
}
