//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known values to validate the move generator. Counts
//! only match published tables while no castling, en passant or
//! under-promotion could occur within the searched depth.

use super::{all_legal_moves, make_move};
use mailbox_core::{Board, Color};

/// Counts the number of leaf nodes at the given depth, `color` to move.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board, color);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        let mut next = board.clone();
        make_move(&mut next, m.from, m.to);
        nodes += perft(&next, color.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = all_legal_moves(board, color);
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        let mut next = board.clone();
        make_move(&mut next, m.from, m.to);
        let nodes = if depth > 1 {
            perft(&next, color.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
