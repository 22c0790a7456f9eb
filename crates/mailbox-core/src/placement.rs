//! Piece-placement text, the first field of a FEN record.
//!
//! Only the placement field carries meaning here: this rule set has no
//! castling, en passant or move clocks. Any further whitespace-separated
//! fields are ignored, so a full FEN string is accepted as input.

use crate::{Board, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing piece placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    RankLength { rank: u8, squares: u32 },

    #[error("pawn on its promotion square {0}")]
    PawnOnPromotionRow(Square),
}

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub(crate) fn parse(text: &str) -> Result<Board, PlacementError> {
    let field = match text.split_whitespace().next() {
        Some(field) => field,
        None => return Err(PlacementError::RankCount(0)),
    };

    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    // Rank groups are listed from rank 8 down, which is row 0 upward.
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut col = 0u32;
        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(PlacementError::InvalidCharacter { ch, rank });
                }
                col += skip;
            } else if let Some(piece) = Piece::from_char(ch) {
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    if piece.kind == PieceKind::Pawn && sq.row() == piece.color.promotion_row() {
                        return Err(PlacementError::PawnOnPromotionRow(sq));
                    }
                    board.set(sq, Some(piece));
                }
                col += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { ch, rank });
            }
            if col > 8 {
                break;
            }
        }
        if col != 8 {
            return Err(PlacementError::RankLength {
                rank,
                squares: col,
            });
        }
    }

    Ok(board)
}

pub(crate) fn render(board: &Board) -> String {
    let mut out = String::with_capacity(64);
    for row in 0..8u8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|sq| board.piece_at(sq));
            match piece {
                Some(piece) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn parse_starting_placement() {
        let board = parse(STARTING_PLACEMENT).unwrap();
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn full_fen_is_accepted() {
        let board = parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn sparse_placement() {
        let board = parse("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(
            board.piece_at(Square::E8),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(board.pieces().count(), 2);
        assert_eq!(render(&board), "4k3/8/8/8/8/8/8/4K3");
    }

    #[test]
    fn render_starting() {
        assert_eq!(render(&Board::starting()), STARTING_PLACEMENT);
    }

    #[test]
    fn rank_count() {
        assert_eq!(parse("8/8/8/8/8/8/8"), Err(PlacementError::RankCount(7)));
        assert_eq!(parse("   "), Err(PlacementError::RankCount(0)));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidCharacter { ch: 'X', rank: 2 })
        );
        assert!(matches!(
            parse("9/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidCharacter { ch: '9', .. })
        ));
    }

    #[test]
    fn rank_length() {
        assert_eq!(
            parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::RankLength {
                rank: 8,
                squares: 9
            })
        );
        assert_eq!(
            parse("7/8/8/8/8/8/8/8"),
            Err(PlacementError::RankLength {
                rank: 8,
                squares: 7
            })
        );
    }

    #[test]
    fn pawn_on_promotion_row() {
        assert_eq!(
            parse("P3k3/8/8/8/8/8/8/4K3"),
            Err(PlacementError::PawnOnPromotionRow(Square::A8))
        );
        assert_eq!(
            parse("4k3/8/8/8/8/8/8/4K2p"),
            Err(PlacementError::PawnOnPromotionRow(Square::H1))
        );
        // Pawns on their own back rows never got there by moving, but they
        // are not stuck either.
        assert!(parse("p3k3/8/8/8/8/8/8/4K2P").is_ok());
    }

    #[test]
    fn error_display() {
        let err = PlacementError::RankLength {
            rank: 3,
            squares: 9,
        };
        assert_eq!(err.to_string(), "rank 3 has 9 squares, expected 8");
    }
}
