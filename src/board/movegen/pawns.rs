use super::super::{Board, Color, MoveList, Piece, PieceKind, Promotion, Square, WideMove};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        // A pawn on the far rank has nowhere to go.
        let Some(forward) = from.offset(0, dir) else {
            return;
        };

        if !self.has_piece(forward) {
            push_pawn_move(color, self.create_move(from, forward), moves);
            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = forward.offset(0, dir) {
                    if !self.has_piece(double) {
                        moves.push(self.create_move(from, double));
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            if let Some(target) = from.offset(file_delta, dir) {
                if self.is_piece_of_color(target, color.opponent()) {
                    push_pawn_move(color, self.create_move(from, target), moves);
                }
            }
        }

        // The target only counts while an enemy pawn still stands on it.
        if let Some(victim) = self.en_passant_target(color) {
            let victim_pawn = Piece::new(PieceKind::Pawn, color.opponent());
            if victim.rank() == from.rank()
                && victim.file().abs_diff(from.file()) == 1
                && self.get(victim) == victim_pawn
            {
                if let Some(to) = victim.offset(0, dir) {
                    moves.push(
                        WideMove::new(from, to)
                            .with_capture(victim_pawn)
                            .with_en_passant(),
                    );
                }
            }
        }
    }
}

/// Push `mv`, expanded into one move per promotion piece when it reaches the last rank.
fn push_pawn_move(color: Color, mv: WideMove, moves: &mut MoveList) {
    if mv.destination().rank() == color.promotion_rank() {
        for promotion in Promotion::ALL {
            moves.push(mv.with_promotion(promotion));
        }
    } else {
        moves.push(mv);
    }
}
