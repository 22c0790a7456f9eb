//! Chess rules engine on an 8x8 mailbox board.
//!
//! This crate provides:
//! - Pseudo-legal move generation per piece kind
//! - Legality filtering by playing each candidate on a copy of the board
//! - Check and checkmate detection by looking outward from the king
//! - [`RuleSet`] - Trait a [`Session`] plays by, with [`StandardRules`]
//! - [`Session`] - Interactive game state: turn, selection, move list
//!
//! # Architecture
//!
//! The engine is stateless: every function takes the board it works on.
//! Legality is decided by simulation. Each candidate move is applied to a
//! clone of the board and kept only if the mover's king is not attacked
//! afterwards.
//!
//! # Example
//!
//! ```
//! use mailbox_core::{Board, Color, Square};
//! use mailbox_engine::{is_checkmate, legal_moves, Session};
//!
//! let board = Board::starting();
//! let b1 = Square::from_algebraic("b1").unwrap();
//! assert_eq!(legal_moves(&board, b1).len(), 2);
//! assert!(!is_checkmate(&board, Color::White));
//!
//! let mut session = Session::new();
//! session.play_coordinate("e2e4").unwrap();
//! assert_eq!(session.to_move(), Color::Black);
//! ```

pub mod movegen;
mod record;
pub mod rules;
mod session;

pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    all_legal_moves, has_legal_move, is_checkmate, is_king_in_check, legal_moves, make_move,
    promote_on_arrival, pseudo_legal_moves, Targets,
};
pub use record::MoveRecord;
pub use rules::{GameStatus, RuleSet, StandardRules};
pub use session::{ClickOutcome, Session, SessionError};
