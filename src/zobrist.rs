//! Zobrist hashing for board positions.
//!
//! Provides 64-bit position hashes covering pieces, side to move and the
//! en passant targets of both colors.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, PieceKind, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // en_passant_keys[capturing_color][victim_file]
    pub(crate) en_passant_keys: [[u64; 8]; 2],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut en_passant_keys = [[0; 8]; 2];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut en_passant_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, kind: PieceKind, color: Color, sq: Square) -> u64 {
        self.piece_keys[kind.index()][color.index()][sq.as_usize()]
    }

    #[inline]
    pub(crate) fn en_passant(&self, color: Color, victim: Square) -> u64 {
        self.en_passant_keys[color.index()][usize::from(victim.file())]
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
