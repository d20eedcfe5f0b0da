//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation rules per piece
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Board edges, promotions and unusual codes
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod proptest;

use crate::board::{Board, MoveList};

/// Collect the moves `board` generates for the piece on `from`.
pub(super) fn moves_from(board: &Board, from: crate::board::Square) -> MoveList {
    let mut moves = MoveList::new();
    board.generate_piece_moves(from, board.get(from), &mut moves);
    moves
}
