use super::super::{Board, Color, MoveList, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        match slider {
            SliderType::Rook => self.generate_ray_moves(from, color, &ORTHOGONAL, moves),
            SliderType::Bishop => self.generate_ray_moves(from, color, &DIAGONAL, moves),
            SliderType::Queen => {
                self.generate_ray_moves(from, color, &ORTHOGONAL, moves);
                self.generate_ray_moves(from, color, &DIAGONAL, moves);
            }
        }
    }

    /// Walk each ray until the edge, a friendly piece (excluded) or an enemy
    /// piece (included as a capture).
    fn generate_ray_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(file_step, rank_step) in directions {
            let mut current = from;
            while let Some(to) = current.offset(file_step, rank_step) {
                let target = self.get(to);
                if target.is_color(color) {
                    break;
                }
                moves.push(self.create_move(from, to));
                if !target.is_empty() {
                    break;
                }
                current = to;
            }
        }
    }
}
