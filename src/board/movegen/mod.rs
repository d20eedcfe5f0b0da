//! Pseudo-legal move generation.
//!
//! Moves obey piece movement and board edges but are not checked for leaving
//! the mover's king attacked. Occupied squares are visited in ascending index
//! order, and each piece emits its moves in a fixed rule order, so a given
//! board always produces the same sequence.

mod leapers;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Append the pseudo-legal moves of every piece on the board, both colors.
    pub fn generate_moves(&self, moves: &mut MoveList) {
        for sq in self.occupied() {
            self.generate_piece_moves(sq, self.get(sq), moves);
        }
    }

    /// Append the pseudo-legal moves of the side to move only.
    pub fn generate_side_moves(&self, moves: &mut MoveList) {
        let color = self.turn();
        for sq in self.occupied() {
            let piece = self.get(sq);
            if piece.is_color(color) {
                self.generate_piece_moves(sq, piece, moves);
            }
        }
    }

    /// Append the pseudo-legal moves of `piece` standing on `from`.
    ///
    /// Empty squares and unassigned type codes produce nothing.
    pub fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = piece.color();
        match piece.kind() {
            Some(PieceKind::Pawn) => self.generate_pawn_moves(from, color, moves),
            Some(PieceKind::Knight) => self.generate_knight_moves(from, color, moves),
            Some(PieceKind::King) => self.generate_king_moves(from, color, moves),
            Some(PieceKind::Rook) => {
                self.generate_slider_moves(from, color, SliderType::Rook, moves);
            }
            Some(PieceKind::Bishop) => {
                self.generate_slider_moves(from, color, SliderType::Bishop, moves);
            }
            Some(PieceKind::Queen) => {
                self.generate_slider_moves(from, color, SliderType::Queen, moves);
            }
            None => {}
        }
    }
}
