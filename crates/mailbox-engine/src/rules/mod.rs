//! Rule set abstraction.
//!
//! The [`Session`](crate::Session) delegates every rules question to a
//! [`RuleSet`], so a different movement or end-of-game policy can be
//! plugged in without touching the session state machine.

mod standard;

pub use standard::StandardRules;

use crate::Targets;
use mailbox_core::{Board, Color, Piece, Square};

/// Status of the side to move.
///
/// There is no draw state: a side with no legal moves that is not in check
/// stays [`GameStatus::Ongoing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// The game continues with `to_move` to play.
    Ongoing { to_move: Color, in_check: bool },
    /// `winner` has checkmated the other side.
    Checkmate { winner: Color },
}

impl GameStatus {
    /// Returns true once the game has been decided.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }
}

/// Trait for the rules a session plays by.
///
/// # Example
///
/// ```
/// use mailbox_engine::rules::{RuleSet, StandardRules};
/// use mailbox_core::Square;
///
/// let board = StandardRules.initial_board();
/// let g1 = Square::from_algebraic("g1").unwrap();
/// assert_eq!(StandardRules.legal_moves(&board, g1).len(), 2);
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns the legal destinations for the piece on `from`.
    fn legal_moves(&self, board: &Board, from: Square) -> Targets;

    /// Applies a move in place and returns the captured piece, if any.
    ///
    /// Legality is the caller's responsibility.
    fn apply_move(&self, board: &mut Board, from: Square, to: Square) -> Option<Piece>;

    /// Returns true if the king of `color` is attacked.
    fn is_check(&self, board: &Board, color: Color) -> bool;

    /// Returns true if `color` is checkmated.
    fn is_checkmate(&self, board: &Board, color: Color) -> bool;

    /// Returns true if the move is legal on this board.
    fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        self.legal_moves(board, from).contains(to)
    }

    /// Returns the status of the game with `to_move` to play.
    fn status(&self, board: &Board, to_move: Color) -> GameStatus {
        if self.is_checkmate(board, to_move) {
            GameStatus::Checkmate {
                winner: to_move.opposite(),
            }
        } else {
            GameStatus::Ongoing {
                to_move,
                in_check: self.is_check(board, to_move),
            }
        }
    }
}
