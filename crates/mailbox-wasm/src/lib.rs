//! WebAssembly bindings for the mailbox rules engine.
//!
//! The browser page owns rendering and click handling; this crate holds
//! the game session and answers its questions: what is on each cell, which
//! cells to highlight, what the status line says.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game } from 'mailbox-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! for (const cell of game.cells()) {
//!   drawCell(cell);
//! }
//!
//! game.click(6, 4);           // select the e2 pawn
//! game.click(4, 4);           // move it to e4
//! console.log(game.history()); // ["P e2→e4"]
//! console.log(game.status());  // "Turn: Black"
//! ```

use mailbox_core::{Board, Color, Square};
use mailbox_engine::{ClickOutcome, Session};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Everything the page needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub row: u8,
    pub col: u8,
    /// Algebraic name, shown as the coordinate label.
    pub name: String,
    pub light: bool,
    /// Unicode glyph of the piece on the cell, if any.
    pub symbol: Option<char>,
    pub selected: bool,
    pub highlighted: bool,
}

/// A chess game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Game {
    session: Session,
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game with the standard starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            session: Session::new(),
        }
    }

    /// Creates a game from piece-placement text and the side to move
    /// ("w" or "b").
    #[wasm_bindgen(js_name = fromPlacement)]
    pub fn from_placement(placement: &str, side: &str) -> Result<Game, JsError> {
        let session = load_session(placement, side).map_err(|e| JsError::new(&e))?;
        Ok(Game { session })
    }

    /// Returns the current piece placement.
    pub fn placement(&self) -> String {
        self.session.board().to_placement()
    }

    /// Handles a click on the cell at (row, col).
    ///
    /// Returns "selected", "moved" or "cleared".
    pub fn click(&mut self, row: u8, col: u8) -> String {
        let Some(sq) = Square::new(row, col) else {
            self.session.clear_selection();
            return "cleared".to_string();
        };
        match self.session.click(sq) {
            ClickOutcome::Selected(_) => "selected",
            ClickOutcome::Moved(_) => "moved",
            ClickOutcome::Cleared => "cleared",
        }
        .to_string()
    }

    /// Makes a move given in coordinate notation (e.g., "e2e4").
    ///
    /// Returns the move-list entry, or an error if the move is invalid,
    /// out of turn or illegal.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, text: &str) -> Result<String, JsError> {
        self.session
            .play_coordinate(text)
            .map(|record| record.notation())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the legal destinations from a square, in algebraic notation.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, square: &str) -> Vec<String> {
        match Square::from_algebraic(square) {
            Some(sq) => self
                .session
                .legal_moves(sq)
                .as_slice()
                .iter()
                .map(|s| s.to_algebraic())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the cells in display order as an array of plain objects.
    pub fn cells(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.cell_views()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns true if the side to move is in check.
    #[wasm_bindgen(js_name = isCheck)]
    pub fn is_check(&self) -> bool {
        self.session.is_check()
    }

    /// Returns true if the side to move is checkmated.
    #[wasm_bindgen(js_name = isCheckmate)]
    pub fn is_checkmate(&self) -> bool {
        self.session.status().is_over()
    }

    /// Returns the status line shown above the board.
    pub fn status(&self) -> String {
        self.session.status_line()
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        match self.session.to_move() {
            Color::White => "white".to_string(),
            Color::Black => "black".to_string(),
        }
    }

    /// Returns the piece at the given square as a placement letter.
    ///
    /// Returns null if the square is empty.
    /// Returns a string like "P" (white pawn), "k" (black king), etc.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = Square::from_algebraic(square)?;
        let piece = self.session.board().piece_at(sq)?;
        Some(piece.to_char().to_string())
    }

    /// Returns the move list entries in play order.
    pub fn history(&self) -> Vec<String> {
        self.session
            .history()
            .iter()
            .map(|record| record.notation())
            .collect()
    }

    /// Resets the game to the starting position.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Turns the board around.
    pub fn flip(&mut self) {
        self.session.flip();
    }

    #[wasm_bindgen(js_name = isFlipped)]
    pub fn is_flipped(&self) -> bool {
        self.session.is_flipped()
    }
}

impl Game {
    /// Builds the per-cell view in display order.
    pub fn cell_views(&self) -> Vec<CellView> {
        let board = self.session.board();
        let selected = self.session.selected();
        let highlights = self.session.highlights();
        self.session
            .display_order()
            .map(|sq| CellView {
                row: sq.row(),
                col: sq.col(),
                name: sq.to_algebraic(),
                light: (sq.row() + sq.col()) % 2 == 0,
                symbol: board.piece_at(sq).map(|p| p.symbol()),
                selected: selected == Some(sq),
                highlighted: highlights.contains(sq),
            })
            .collect()
    }
}

/// Builds a session from placement text and a side-to-move code.
fn load_session(placement: &str, side: &str) -> Result<Session, String> {
    let board = Board::from_placement(placement).map_err(|e| e.to_string())?;
    let to_move =
        Color::from_code_str(side).ok_or_else(|| format!("invalid side to move: {}", side))?;
    Ok(Session::from_board(board, to_move))
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_new() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), "white");
        assert_eq!(game.status(), "Turn: White");
        assert!(!game.is_check());
        assert!(!game.is_checkmate());
    }

    #[test]
    fn game_from_placement() {
        let game = Game::from_placement("4k3/8/8/8/8/8/8/4RK2", "b").unwrap();
        assert_eq!(game.side_to_move(), "black");
        assert!(game.is_check());
        assert_eq!(game.placement(), "4k3/8/8/8/8/8/8/4RK2");
    }

    #[test]
    fn load_session_validates_input() {
        let session = load_session("4k3/8/8/8/8/8/8/4K3", "b").unwrap();
        assert_eq!(session.to_move(), Color::Black);
        assert_eq!(
            load_session("4k3/8/8/8/8/8/8/4K3", "bogus").unwrap_err(),
            "invalid side to move: bogus"
        );
        assert!(load_session("4k3/8/8/8/8/8/8/4K3", "").is_err());
        assert_eq!(
            load_session("P3k3/8/8/8/8/8/8/4K3", "w").unwrap_err(),
            "pawn on its promotion square a8"
        );
    }

    #[test]
    fn piece_at() {
        let game = Game::new();
        assert_eq!(game.piece_at("e1"), Some("K".to_string()));
        assert_eq!(game.piece_at("e8"), Some("k".to_string()));
        assert_eq!(game.piece_at("e4"), None);
        assert_eq!(game.piece_at("z9"), None);
    }

    #[test]
    fn click_then_move() {
        let mut game = Game::new();
        assert_eq!(game.click(6, 4), "selected");
        let views = game.cell_views();
        let e4 = views.iter().find(|c| c.name == "e4").unwrap();
        assert!(e4.highlighted);
        let e2 = views.iter().find(|c| c.name == "e2").unwrap();
        assert!(e2.selected);
        assert_eq!(e2.symbol, Some('♙'));

        assert_eq!(game.click(4, 4), "moved");
        assert_eq!(game.history(), vec!["P e2→e4".to_string()]);
        assert_eq!(game.side_to_move(), "black");
        assert_eq!(game.click(9, 9), "cleared");
    }

    #[test]
    fn legal_moves_lists_destinations() {
        let game = Game::new();
        let mut moves = game.legal_moves("g1");
        moves.sort();
        assert_eq!(moves, vec!["f3".to_string(), "h3".to_string()]);
        assert!(game.legal_moves("e4").is_empty());
        assert!(game.legal_moves("bad").is_empty());
    }

    #[test]
    fn make_move_and_mate() {
        let mut game = Game::new();
        for m in ["f2f3", "e7e5", "g2g4"] {
            game.make_move(m).unwrap();
        }
        assert_eq!(game.make_move("d8h4").unwrap(), "Q (b) d8→h4");
        assert!(game.is_checkmate());
        assert_eq!(game.status(), "Checkmate - winner: Black");
    }

    #[test]
    fn flipped_cells_start_at_h1() {
        let mut game = Game::new();
        game.flip();
        assert!(game.is_flipped());
        let views = game.cell_views();
        assert_eq!(views.len(), 64);
        assert_eq!(views[0].name, "h1");
        assert!(views[0].light);
        game.reset();
        assert!(game.is_flipped());
        assert!(game.history().is_empty());
    }
}
