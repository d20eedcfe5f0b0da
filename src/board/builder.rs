//! Fluent builder for setting up positions.
//!
//! Allows creating positions piece by piece on top of an empty board or the
//! standard initial position.
//!
//! # Example
//! ```
//! use chess_kernel::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::at(4, 0), PieceKind::King, Color::White)
//!     .piece(Square::at(4, 7), PieceKind::King, Color::Black)
//!     .piece(Square::at(0, 1), PieceKind::Pawn, Color::White)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::starting_position(),
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, kind: PieceKind, color: Color) -> Self {
        self.board.set(square, Piece::new(kind, color));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.board.set_turn(color);
        self
    }

    /// Let `color` capture the enemy pawn on `victim` en passant.
    #[must_use]
    pub fn en_passant(mut self, color: Color, victim: Square) -> Self {
        self.board.set_en_passant_target(color, Some(victim));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        trace!(
            "built board with {} pieces, {} to move",
            self.board.piece_count(),
            self.board.turn()
        );
        self.board
    }
}
