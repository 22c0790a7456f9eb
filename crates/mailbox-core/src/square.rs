//! Board square representation.

use std::fmt;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if both coordinates lie on the board.
///
/// Takes signed coordinates so callers can test a square reached by a
/// negative offset before turning it into a [`Square`].
#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

/// A square on the board, addressed by row and column.
///
/// Row 0 is Black's back row (rank 8 in algebraic notation) and row 7 is
/// White's back row (rank 1). Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates.
    #[inline]
    pub const fn from_signed(row: i8, col: i8) -> Option<Self> {
        if is_on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::from_signed(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit ('1'-'8'); rank is `8 - row`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + BOARD_SIZE - self.row) as char
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::new(BOARD_SIZE - (rank - b'0'), file - b'a')
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file_char());
        s.push(self.rank_char());
        s
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    // Corner and king squares
    pub const A8: Square = Square { row: 0, col: 0 };
    pub const E8: Square = Square { row: 0, col: 4 };
    pub const H8: Square = Square { row: 0, col: 7 };
    pub const A1: Square = Square { row: 7, col: 0 };
    pub const E1: Square = Square { row: 7, col: 4 };
    pub const H1: Square = Square { row: 7, col: 7 };
}

/// Maps a square to its algebraic name.
pub fn square_to_algebraic(row: u8, col: u8) -> Option<String> {
    Square::new(row, col).map(Square::to_algebraic)
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
