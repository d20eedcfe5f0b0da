//! Chess board representation and pseudo-legal move mechanics.
//!
//! The board is a 64-square mailbox of packed [`Piece`] bytes, mirrored by an
//! occupancy [`Bitboard`] so generation only visits occupied squares. Moves are
//! packed into 64-bit [`WideMove`] values carrying capture, promotion and en
//! passant metadata. Check detection and castling are left to higher layers.
//!
//! # Example
//! ```
//! use chess_kernel::board::{Board, Color, MoveList, Piece, PieceKind, Square};
//!
//! let mut board = Board::new();
//! board.set(Square::at(5, 4), Piece::new(PieceKind::Queen, Color::White));
//!
//! let mut moves = MoveList::new();
//! board.generate_moves(&mut moves);
//! println!("A lone queen on f5 has {} moves", moves.len());
//! ```

mod builder;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{PieceError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, Color, MoveKind, MoveList, Piece, PieceKind, Promotion, SimpleMove,
    Square, WideMove,
};
