use super::super::{Board, Color, MoveList, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_leaper_moves(from, color, &KNIGHT_OFFSETS, moves);
    }

    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_leaper_moves(from, color, &KING_OFFSETS, moves);
    }

    // `Square::offset` rejects each target by file and rank, so nothing wraps
    // around an edge.
    fn generate_leaper_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(file_delta, rank_delta) in offsets {
            if let Some(to) = from.offset(file_delta, rank_delta) {
                if !self.is_piece_of_color(to, color) {
                    moves.push(self.create_move(from, to));
                }
            }
        }
    }
}
