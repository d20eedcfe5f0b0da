use std::fmt;
use std::hash::{Hash, Hasher};

use crate::zobrist::ZOBRIST;

use super::{Bitboard, Color, Piece, PieceKind, Square, SquareError, WideMove};

/// Mailbox board: 64 packed pieces plus side to move and en passant state.
///
/// `occupied` mirrors exactly the non-empty squares of `squares`. Both are
/// private and only change through [`Board::set`].
#[derive(Clone)]
pub struct Board {
    squares: [Piece; 64],
    occupied: Bitboard,
    turn: Color,
    // en_passant[c]: the enemy pawn that color `c` may capture en passant
    en_passant: [Option<Square>; 2],
}

impl Board {
    /// An empty board with White to move and no en passant targets.
    #[must_use]
    pub fn new() -> Self {
        Board {
            squares: [Piece::EMPTY; 64],
            occupied: Bitboard::EMPTY,
            turn: Color::White,
            en_passant: [None; 2],
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::new();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in (0u8..).zip(back_rank.iter()) {
            board.set(Square::at(file, 0), Piece::new(kind, Color::White));
            board.set(Square::at(file, 7), Piece::new(kind, Color::Black));
            board.set(Square::at(file, 1), Piece::new(PieceKind::Pawn, Color::White));
            board.set(Square::at(file, 6), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Piece {
        self.squares[sq.as_usize()]
    }

    /// Write a square, keeping the occupancy index in sync.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.as_usize()] = piece;
        if piece.is_empty() {
            self.occupied.remove(sq);
        } else {
            self.occupied.insert(sq);
        }
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, Piece::EMPTY);
    }

    pub fn get_at(&self, file: u8, rank: u8) -> Result<Piece, SquareError> {
        let sq = Square::try_from((file, rank))?;
        Ok(self.get(sq))
    }

    pub fn set_at(&mut self, file: u8, rank: u8, piece: Piece) -> Result<(), SquareError> {
        let sq = Square::try_from((file, rank))?;
        self.set(sq, piece);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn has_piece(&self, sq: Square) -> bool {
        !self.get(sq).is_empty()
    }

    /// Returns true if `sq` holds a piece of `color`; false for empty squares.
    #[inline]
    #[must_use]
    pub fn is_piece_of_color(&self, sq: Square, color: Color) -> bool {
        self.get(sq).is_color(color)
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// The enemy pawn `color` may currently capture en passant.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self, color: Color) -> Option<Square> {
        self.en_passant[color.index()]
    }

    pub fn set_en_passant_target(&mut self, color: Color, target: Option<Square>) {
        self.en_passant[color.index()] = target;
    }

    pub(crate) fn en_passant_targets(&self) -> [Option<Square>; 2] {
        self.en_passant
    }

    pub(crate) fn restore_en_passant_targets(&mut self, targets: [Option<Square>; 2]) {
        self.en_passant = targets;
    }

    /// Read-only view of the occupancy index.
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied.popcount()
    }

    /// Build a wide move annotated with whatever currently occupies `to`.
    #[inline]
    #[must_use]
    pub fn create_move(&self, from: Square, to: Square) -> WideMove {
        let captured = self.get(to);
        let mv = WideMove::new(from, to);
        if captured.is_empty() {
            mv
        } else {
            mv.with_capture(captured)
        }
    }

    /// Independent deep copy, for exploring a branch without touching `self`.
    #[must_use]
    pub fn fork(&self) -> Board {
        self.clone()
    }

    /// Zobrist hash of pieces, side to move and en passant targets.
    ///
    /// Squares holding an unassigned type code do not contribute.
    #[must_use]
    pub fn hash_position(&self) -> u64 {
        let mut hash = 0;
        for sq in self.occupied {
            let piece = self.get(sq);
            if let Some(kind) = piece.kind() {
                hash ^= ZOBRIST.piece(kind, piece.color(), sq);
            }
        }
        if self.turn == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }
        for color in Color::BOTH {
            if let Some(victim) = self.en_passant_target(color) {
                hash ^= ZOBRIST.en_passant(color, victim);
            }
        }
        hash
    }

    /// Returns true if the occupancy index matches the square array.
    #[must_use]
    pub fn occupancy_consistent(&self) -> bool {
        Square::all().all(|sq| self.occupied.contains(sq) == !self.get(sq).is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

// Equality and hashing cover the square array only.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.squares.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(8x8) turn: {}", self.turn.name())?;
        for rank in (0..8).rev() {
            write!(f, "[")?;
            for file in 0..8 {
                if file != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get(Square::at(file, rank)).glyph())?;
            }
            writeln!(f, "] {}", rank + 1)?;
        }
        write!(f, " A  B  C  D  E  F  G  H ")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        write!(
            f,
            "occupied: {:#018x}, ep(white): {:?}, ep(black): {:?}",
            self.occupied.0,
            self.en_passant_target(Color::White),
            self.en_passant_target(Color::Black)
        )
    }
}
