//! Move generation.
//!
//! Moves are generated per piece: the caller names a square and gets back
//! the destinations reachable from it. Pseudo-legal generation follows
//! piece geometry and occupancy only; [`legal_moves`] then plays each
//! candidate on a copy of the board and drops those that leave the mover's
//! king attacked.

mod attacks;
pub mod perft;

use mailbox_core::{Board, Color, Move, Piece, PieceKind, Square};

pub use attacks::{
    attacked_by_knight, attacked_by_pawn, attacked_by_ray, is_checkmate, is_king_in_check,
};

/// A ray or step direction as (row delta, column delta).
pub type Direction = (i8, i8);

/// The four orthogonal directions: north, south, west, east.
pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal directions.
pub const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight directions, orthogonal first.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Knight jump offsets.
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A list of destination squares with a fixed maximum capacity.
///
/// A single piece reaches at most 27 squares (a centralized queen).
#[derive(Clone)]
pub struct Targets {
    squares: [Square; Self::MAX_TARGETS],
    len: usize,
}

impl Targets {
    /// Maximum number of destinations from one square.
    pub const MAX_TARGETS: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Targets {
            squares: [Square::A8; Self::MAX_TARGETS],
            len: 0,
        }
    }

    /// Adds a destination to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_TARGETS);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    /// Returns the number of destinations.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the destinations.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    /// Returns true if the square is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Clears the list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only destinations for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.squares[read]) {
                self.squares[write] = self.squares[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for Targets {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for Targets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the destinations the piece on `from` could move to, ignoring
/// whether the move exposes its own king. An empty square yields nothing.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Targets {
    let mut targets = Targets::new();
    let Some(piece) = board.piece_at(from) else {
        return targets;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut targets),
        PieceKind::Knight => generate_step_moves(board, from, piece, &KNIGHT_OFFSETS, &mut targets),
        PieceKind::Bishop => generate_sliding_moves(board, from, piece, &DIAGONAL, &mut targets),
        PieceKind::Rook => generate_sliding_moves(board, from, piece, &ORTHOGONAL, &mut targets),
        PieceKind::Queen => {
            generate_sliding_moves(board, from, piece, &ALL_DIRECTIONS, &mut targets)
        }
        PieceKind::King => generate_step_moves(board, from, piece, &ALL_DIRECTIONS, &mut targets),
    }

    targets
}

/// Generates the legal destinations for the piece on `from`.
pub fn legal_moves(board: &Board, from: Square) -> Targets {
    let Some(piece) = board.piece_at(from) else {
        return Targets::new();
    };

    let mut targets = pseudo_legal_moves(board, from);
    targets.retain(|&to| {
        let mut scratch = board.clone();
        make_move(&mut scratch, from, to);
        !is_king_in_check(&scratch, piece.color)
    });
    targets
}

/// Generates every legal move for one color, in row-major origin order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| {
            legal_moves(board, from)
                .as_slice()
                .iter()
                .map(|&to| Move::new(from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// Moves the piece on `from` to `to` in place, overwriting whatever stood
/// there, and promotes a pawn arriving on its last row.
///
/// Returns the captured piece, if any. Legality is not checked; moving from
/// an empty square clears `to`.
pub fn make_move(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    let moving = board.take(from);
    let captured = board.take(to);
    board.set(to, moving);
    promote_on_arrival(board, to);
    captured
}

/// Turns a pawn standing on its color's promotion row into a queen.
///
/// Returns true if a promotion happened.
pub fn promote_on_arrival(board: &mut Board, sq: Square) -> bool {
    match board.cell_mut(sq) {
        Some(piece)
            if piece.kind == PieceKind::Pawn && sq.row() == piece.color.promotion_row() =>
        {
            piece.kind = PieceKind::Queen;
            true
        }
        _ => false,
    }
}

/// Returns true if `sq` is empty or holds a piece of the other color.
#[inline]
fn is_open_to(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).map_or(true, |p| p.color != color)
}

/// Generates pawn pushes and diagonal captures.
fn generate_pawn_moves(board: &Board, from: Square, pawn: Piece, targets: &mut Targets) {
    let dir = pawn.color.pawn_direction();

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        targets.push(one);

        if from.row() == pawn.color.pawn_home_row() {
            if let Some(two) = from.offset(2 * dir, 0).filter(|&sq| board.is_empty(sq)) {
                targets.push(two);
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(sq) = from.offset(dir, dc) {
            if board.piece_at(sq).is_some_and(|p| p.color != pawn.color) {
                targets.push(sq);
            }
        }
    }
}

/// Generates single-step moves (knight jumps, king steps).
fn generate_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[Direction],
    targets: &mut Targets,
) {
    for &(dr, dc) in offsets {
        if let Some(sq) = from.offset(dr, dc) {
            if is_open_to(board, sq, piece.color) {
                targets.push(sq);
            }
        }
    }
}

/// Walks each ray until the edge or the first occupied square.
///
/// The first occupied square is included only if it holds an enemy piece;
/// either way the ray stops there.
fn generate_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    targets: &mut Targets,
) {
    for &(dr, dc) in directions {
        let mut current = from.offset(dr, dc);
        while let Some(sq) = current {
            match board.piece_at(sq) {
                None => targets.push(sq),
                Some(other) => {
                    if other.color != piece.color {
                        targets.push(sq);
                    }
                    break;
                }
            }
            current = sq.offset(dr, dc);
        }
    }
}
