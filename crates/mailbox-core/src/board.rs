//! The 8x8 mailbox board.

use crate::placement::{self, PlacementError};
use crate::{Color, Piece, PieceKind, Square};
use std::fmt;

/// Back-row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, addressed by [`Square`].
///
/// `Clone` produces a fully independent board. Pieces are stored by value,
/// so mutating the copy (including promoting a pawn on it) never touches
/// the original.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_home_row() as usize;
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(*kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Parses piece-placement text (the first FEN field).
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        placement::parse(text)
    }

    /// Returns the piece-placement text for this board.
    pub fn to_placement(&self) -> String {
        placement::render(self)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns a mutable reference to the cell at the given square.
    #[inline]
    pub fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Places (or clears) a piece on the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        *self.cell_mut(sq) = piece;
    }

    /// Removes and returns the piece on the given square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).take()
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Finds the king of the given color (first match in row-major order).
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Writes the board as text, one row per line, using `glyph` for pieces.
    pub fn write_diagram<F>(&self, f: &mut impl fmt::Write, flipped: bool, glyph: F) -> fmt::Result
    where
        F: Fn(Piece) -> char,
    {
        let order: Vec<u8> = if flipped {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        };
        for &row in &order {
            write!(f, "{} ", 8 - row)?;
            for &col in &order {
                let cell = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map(&glyph)
                    .unwrap_or('.');
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for &col in &order {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)
    }
}

/// Creates the standard starting position.
pub fn create_starting_board() -> Board {
    Board::starting()
}

/// Returns an independent copy of the board.
pub fn clone_board(board: &Board) -> Board {
    board.clone()
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_diagram(f, false, Piece::to_char)
    }
}
