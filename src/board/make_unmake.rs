use super::{Board, Color, Piece, PieceKind, Square, WideMove};

/// State `make_move` overwrites and `unmake_move` needs back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) previous_en_passant: [Option<Square>; 2],
    pub(crate) previous_turn: Color,
}

/// Square of the pawn taken by an en passant move: destination file, source rank.
#[inline]
fn en_passant_victim(m: WideMove) -> Square {
    Square::at(m.destination().file(), m.source().rank())
}

impl Board {
    /// Apply a move generated against the current position.
    ///
    /// The move must come from this board (normally via the generator or
    /// [`Board::create_move`]); anything else leaves the board in an
    /// unspecified state.
    pub fn make_move(&mut self, m: WideMove) -> UnmakeInfo {
        let info = UnmakeInfo {
            previous_en_passant: self.en_passant_targets(),
            previous_turn: self.turn(),
        };

        let from = m.source();
        let to = m.destination();
        let mut piece = self.get(from);
        debug_assert!(!piece.is_empty(), "make_move from empty square {from}");
        let mover = piece.color();
        debug_assert!(
            !m.is_promotion() || piece.is_kind(PieceKind::Pawn),
            "promotion flag on a non-pawn move from {from}"
        );

        self.clear(from);
        if piece.is_kind(PieceKind::Pawn) && m.is_promotion() {
            piece = m.resolve_promoted_piece(piece);
        }
        if m.is_en_passant() {
            self.clear(en_passant_victim(m));
        }
        self.set(to, piece);

        // The mover's own en passant chance lapses once it has moved.
        self.set_en_passant_target(mover, None);
        if piece.is_kind(PieceKind::Pawn) && from.rank().abs_diff(to.rank()) == 2 {
            self.set_en_passant_target(mover.opponent(), Some(to));
        }

        self.set_turn(self.turn().opponent());
        trace!("make {:?}", m);
        info
    }

    /// Revert a move previously applied with [`Board::make_move`].
    pub fn unmake_move(&mut self, m: WideMove, info: UnmakeInfo) {
        self.set_turn(info.previous_turn);

        let from = m.source();
        let to = m.destination();
        let moved = self.get(to);
        debug_assert!(!moved.is_empty(), "unmake_move to empty square {to}");
        let mover = moved.color();

        if m.is_promotion() {
            self.set(to, m.captured());
            self.set(from, Piece::new(PieceKind::Pawn, mover));
        } else if m.is_en_passant() {
            self.clear(to);
            self.set(from, moved);
            self.set(en_passant_victim(m), m.captured());
        } else {
            self.set(to, m.captured());
            self.set(from, moved);
        }

        self.restore_en_passant_targets(info.previous_en_passant);
        trace!("unmake {:?}", m);
    }
}
