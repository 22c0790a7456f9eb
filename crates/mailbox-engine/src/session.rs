//! Interactive game session.
//!
//! The [`Session`] is the record a front end holds between user actions:
//! the board, whose turn it is, the current selection and its highlighted
//! destinations, the move list and the board orientation. The rules engine
//! itself stays stateless; the session owns the one board it plays on and
//! sequences every call.

use crate::record::MoveRecord;
use crate::rules::{GameStatus, RuleSet, StandardRules};
use crate::Targets;
use mailbox_core::{Board, Color, Move, PieceKind, Square};
use thiserror::Error;

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The move text could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Color, found: Color },
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The game has already been decided.
    #[error("game has already ended")]
    GameOver,
}

/// What a click on a square did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selected piece moved to the clicked square.
    Moved(MoveRecord),
    /// The selection was cleared.
    Cleared,
}

/// A game in progress, driven one move or click at a time.
#[derive(Debug, Clone)]
pub struct Session<R: RuleSet = StandardRules> {
    rules: R,
    board: Board,
    to_move: Color,
    selected: Option<Square>,
    highlights: Targets,
    history: Vec<MoveRecord>,
    flipped: bool,
}

impl Default for Session<StandardRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<StandardRules> {
    /// Creates a session at the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_rules(StandardRules)
    }

    /// Creates a session from a custom board.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let mut session = Self::new();
        session.board = board;
        session.to_move = to_move;
        session
    }
}

impl<R: RuleSet> Session<R> {
    /// Creates a session playing by the given rules.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Session {
            rules,
            board,
            to_move: Color::White,
            selected: None,
            highlights: Targets::new(),
            history: Vec::new(),
            flipped: false,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the legal destinations of the selected piece.
    pub fn highlights(&self) -> &Targets {
        &self.highlights
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the game status for the side to move.
    pub fn status(&self) -> GameStatus {
        self.rules.status(&self.board, self.to_move)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.rules.is_check(&self.board, self.to_move)
    }

    /// Returns the legal destinations for the piece on `from`, whoever owns it.
    pub fn legal_moves(&self, from: Square) -> Targets {
        self.rules.legal_moves(&self.board, from)
    }

    /// Returns a one-line status such as `Turn: White - check!`.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Checkmate { winner } => format!("Checkmate - winner: {}", winner),
            GameStatus::Ongoing {
                to_move,
                in_check: true,
            } => format!("Turn: {} - check!", to_move),
            GameStatus::Ongoing { to_move, .. } => format!("Turn: {}", to_move),
        }
    }

    /// Handles a click on a square.
    ///
    /// With a piece selected, clicking another piece of the side to move
    /// reselects and clicking a highlighted square plays the move. Without a
    /// selection, clicking a piece of the side to move selects it. Any other
    /// click clears the selection.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        let owns = self
            .board
            .piece_at(sq)
            .is_some_and(|p| p.color == self.to_move);

        if let Some(from) = self.selected {
            if !owns && self.highlights.contains(sq) {
                return match self.play(from, sq) {
                    Ok(record) => ClickOutcome::Moved(record),
                    Err(err) => {
                        tracing::warn!(%from, to = %sq, %err, "highlighted move rejected");
                        self.clear_selection();
                        ClickOutcome::Cleared
                    }
                };
            }
        }

        if owns {
            self.select(sq);
            return ClickOutcome::Selected(sq);
        }

        self.clear_selection();
        ClickOutcome::Cleared
    }

    /// Selects the piece on `sq` and highlights its legal destinations.
    fn select(&mut self, sq: Square) {
        self.selected = Some(sq);
        self.highlights = self.rules.legal_moves(&self.board, sq);
        tracing::debug!(square = %sq, moves = self.highlights.len(), "selected");
    }

    /// Clears the selection and its highlights.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.highlights.clear();
    }

    /// Plays a move for the side to move.
    ///
    /// Turn order is enforced here rather than in the rules engine.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, SessionError> {
        if self.status().is_over() {
            return Err(SessionError::GameOver);
        }

        let moving = self
            .board
            .piece_at(from)
            .ok_or(SessionError::EmptySquare(from))?;
        if moving.color != self.to_move {
            return Err(SessionError::WrongTurn {
                expected: self.to_move,
                found: moving.color,
            });
        }
        if !self.rules.is_legal(&self.board, from, to) {
            return Err(SessionError::IllegalMove(Move::new(from, to)));
        }

        let captured = self.rules.apply_move(&mut self.board, from, to);
        let piece = self.board.piece_at(to).unwrap_or(moving);
        let record = MoveRecord {
            piece,
            from,
            to,
            captured,
            promoted: moving.kind == PieceKind::Pawn && piece.kind != PieceKind::Pawn,
        };

        self.history.push(record);
        self.to_move = self.to_move.opposite();
        self.clear_selection();
        tracing::debug!(notation = %record, "move played");

        if let GameStatus::Checkmate { winner } = self.status() {
            tracing::info!(%winner, plies = self.history.len(), "checkmate");
        }

        Ok(record)
    }

    /// Plays a move given in coordinate notation (e.g., "e2e4").
    pub fn play_coordinate(&mut self, text: &str) -> Result<MoveRecord, SessionError> {
        let text = text.trim();
        let m = Move::from_coordinate(text)
            .ok_or_else(|| SessionError::InvalidNotation(text.to_string()))?;
        self.play(m.from, m.to)
    }

    /// Restores the starting position and clears history and selection.
    ///
    /// The board orientation is kept.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_board();
        self.to_move = Color::White;
        self.history.clear();
        self.clear_selection();
        tracing::debug!("session reset");
    }

    /// Turns the board around for display.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Returns true if the board is shown from Black's side.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Returns the squares in display order, row by row, honoring the
    /// orientation.
    pub fn display_order(&self) -> impl Iterator<Item = Square> {
        let flipped = self.flipped;
        (0..8u8).flat_map(move |i| {
            let row = if flipped { 7 - i } else { i };
            (0..8u8).filter_map(move |j| {
                let col = if flipped { 7 - j } else { j };
                Square::new(row, col)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailbox_core::Piece;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn new_session() {
        let session = Session::new();
        assert_eq!(session.to_move(), Color::White);
        assert!(session.history().is_empty());
        assert!(!session.is_check());
        assert_eq!(session.status_line(), "Turn: White");
    }

    #[test]
    fn play_alternates_turns() {
        let mut session = Session::new();
        let record = session.play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(record.notation(), "P e2→e4");
        assert_eq!(session.to_move(), Color::Black);

        let record = session.play_coordinate("d7d5").unwrap();
        assert_eq!(record.notation(), "P (b) d7→d5");

        let record = session.play(sq("e4"), sq("d5")).unwrap();
        assert_eq!(record.notation(), "P e4xd5");
        assert_eq!(
            record.captured,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn wrong_turn() {
        let mut session = Session::new();
        assert_eq!(
            session.play(sq("e7"), sq("e5")),
            Err(SessionError::WrongTurn {
                expected: Color::White,
                found: Color::Black
            })
        );
    }

    #[test]
    fn empty_square_and_illegal_move() {
        let mut session = Session::new();
        assert_eq!(
            session.play(sq("e4"), sq("e5")),
            Err(SessionError::EmptySquare(sq("e4")))
        );
        assert_eq!(
            session.play(sq("e2"), sq("e5")),
            Err(SessionError::IllegalMove(Move::new(sq("e2"), sq("e5"))))
        );
        assert!(matches!(
            session.play_coordinate("e2"),
            Err(SessionError::InvalidNotation(_))
        ));
        assert_eq!(session.to_move(), Color::White);
        assert_eq!(session.board(), &Board::starting());
    }

    #[test]
    fn click_selects_and_moves() {
        let mut session = Session::new();
        assert_eq!(session.click(sq("g1")), ClickOutcome::Selected(sq("g1")));
        assert_eq!(session.highlights().len(), 2);
        assert!(session.highlights().contains(sq("f3")));

        match session.click(sq("f3")) {
            ClickOutcome::Moved(record) => assert_eq!(record.notation(), "N g1→f3"),
            other => panic!("expected a move, got {:?}", other),
        }
        assert_eq!(session.selected(), None);
        assert!(session.highlights().is_empty());
        assert_eq!(session.to_move(), Color::Black);
    }

    #[test]
    fn click_reselects_own_piece() {
        let mut session = Session::new();
        session.click(sq("g1"));
        assert_eq!(session.click(sq("b1")), ClickOutcome::Selected(sq("b1")));
        assert!(session.highlights().contains(sq("c3")));
        assert!(!session.highlights().contains(sq("f3")));
    }

    #[test]
    fn click_elsewhere_clears() {
        let mut session = Session::new();
        session.click(sq("g1"));
        assert_eq!(session.click(sq("e5")), ClickOutcome::Cleared);
        assert_eq!(session.selected(), None);

        // An enemy piece cannot be selected.
        assert_eq!(session.click(sq("e7")), ClickOutcome::Cleared);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut session = Session::new();
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            session.play_coordinate(m).unwrap();
        }
        assert_eq!(
            session.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert_eq!(session.status_line(), "Checkmate - winner: Black");
        assert_eq!(session.play_coordinate("a2a3"), Err(SessionError::GameOver));
    }

    #[test]
    fn check_status_line() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4RK2").unwrap();
        let session = Session::from_board(board, Color::Black);
        assert_eq!(session.status_line(), "Turn: Black - check!");
    }

    #[test]
    fn promotion_is_recorded() {
        let board = Board::from_placement("4k3/P7/8/8/8/8/8/4K3").unwrap();
        let mut session = Session::from_board(board, Color::White);
        let record = session.play_coordinate("a7a8").unwrap();
        assert!(record.promoted);
        assert_eq!(record.notation(), "Q a7→a8");
        assert_eq!(
            session.board().piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn reset_keeps_orientation() {
        let mut session = Session::new();
        session.play_coordinate("e2e4").unwrap();
        session.flip();
        session.click(sq("e7"));
        session.reset();
        assert_eq!(session.board(), &Board::starting());
        assert_eq!(session.to_move(), Color::White);
        assert!(session.history().is_empty());
        assert_eq!(session.selected(), None);
        assert!(session.is_flipped());
    }

    #[test]
    fn display_order_follows_flip() {
        let mut session = Session::new();
        let order: Vec<Square> = session.display_order().collect();
        assert_eq!(order.len(), 64);
        assert_eq!(order[0], Square::A8);
        assert_eq!(order[63], Square::H1);

        session.flip();
        let order: Vec<Square> = session.display_order().collect();
        assert_eq!(order[0], Square::H1);
        assert_eq!(order[63], Square::A8);
    }
}
