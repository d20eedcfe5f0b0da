//! Core board types.
//!
//! This module contains the fundamental value types of the kernel:
//! - `Piece`, `PieceKind` and `Color` - packed piece codec
//! - `Square` - compact board position (u8)
//! - `Bitboard` - occupancy index
//! - `SimpleMove`, `WideMove` and `MoveList` - move codec

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{MoveKind, MoveList, Promotion, SimpleMove, WideMove};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
