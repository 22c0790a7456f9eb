//! Attack detection against a king square.
//!
//! Instead of generating every enemy move, the detector looks outward from
//! the king: the two pawn-capture squares, the eight knight jumps, and the
//! eight rays.

use super::{has_legal_move, ALL_DIRECTIONS, KNIGHT_OFFSETS};
use mailbox_core::{Board, Color, PieceKind, Square};

/// Returns true if the king of `color` is attacked.
///
/// A board with no king of that color reports check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        return true;
    };
    let enemy = color.opposite();

    attacked_by_pawn(board, king, enemy)
        || attacked_by_knight(board, king, enemy)
        || attacked_by_ray(board, king, enemy)
}

/// Returns true if `color` is in check and none of its pieces has a legal
/// move. A side with no legal moves that is not in check is not mated.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_legal_move(board, color)
}

/// Returns true if a pawn of `attacker` attacks `sq`.
///
/// An attacking pawn sits one step behind `sq` along its own push
/// direction, on either neighboring column.
pub fn attacked_by_pawn(board: &Board, sq: Square, attacker: Color) -> bool {
    let back = -attacker.pawn_direction();
    [-1, 1].into_iter().any(|dc| {
        sq.offset(back, dc)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == attacker)
    })
}

/// Returns true if a knight of `attacker` attacks `sq`.
pub fn attacked_by_knight(board: &Board, sq: Square, attacker: Color) -> bool {
    KNIGHT_OFFSETS.iter().any(|&(dr, dc)| {
        sq.offset(dr, dc)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|p| p.kind == PieceKind::Knight && p.color == attacker)
    })
}

/// Returns true if a king, rook, bishop or queen of `attacker` reaches `sq`
/// along one of the eight rays.
///
/// The first occupied square on each ray decides: an enemy king attacks
/// only from one step away; rooks and queens attack along orthogonal rays;
/// bishops and queens along diagonal rays. Anything else blocks the ray.
pub fn attacked_by_ray(board: &Board, sq: Square, attacker: Color) -> bool {
    for &(dr, dc) in &ALL_DIRECTIONS {
        let orthogonal = dr == 0 || dc == 0;
        let mut steps = 1;
        let mut current = sq.offset(dr, dc);

        while let Some(at) = current {
            if let Some(piece) = board.piece_at(at) {
                if piece.color == attacker {
                    let hits = match piece.kind {
                        PieceKind::King => steps == 1,
                        PieceKind::Queen => true,
                        PieceKind::Rook => orthogonal,
                        PieceKind::Bishop => !orthogonal,
                        PieceKind::Knight | PieceKind::Pawn => false,
                    };
                    if hits {
                        return true;
                    }
                }
                break;
            }
            current = at.offset(dr, dc);
            steps += 1;
        }
    }
    false
}
