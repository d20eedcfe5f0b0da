//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_kernel::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, MoveList, Piece, PieceKind, Promotion, Square, SquareError,
    UnmakeInfo, WideMove,
};
