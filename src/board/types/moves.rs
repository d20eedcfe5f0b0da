//! Move codec: simple and wide (analyzed) moves, and the move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

const SOURCE_SHIFT: u32 = 56;
const DESTINATION_SHIFT: u32 = 48;
const PROMOTION_SHIFT: u32 = 45;
const CAPTURE_SHIFT: u32 = 38;
const EN_PASSANT_SHIFT: u32 = 37;

/// Source and destination fields are 8 bits wide but only hold `0..64`.
const POSITION_MASK: u64 = 0x3F;
const PROMOTION_MASK: u64 = 0b111;
const CAPTURE_MASK: u64 = 0b111_1111;

/// Set in the promotion field when the move promotes.
const PROMOTION_FLAG: u8 = 0b100;

/// Bit annotation lining up with the top 27 bits of `debug_string`.
const BIT_ANNOTATION: &str = "Src.....Dst.....PrmCap....E";

/// Piece a pawn promotes to, as stored in the low two bits of the promotion field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Promotion {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl Promotion {
    /// Promotion choices in order of typical preference (queen first)
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    /// The full 3-bit promotion field, including the is-promotion bit.
    #[inline]
    #[must_use]
    pub const fn field(self) -> u8 {
        PROMOTION_FLAG | self as u8
    }

    /// Decode a 3-bit promotion field; `None` unless the is-promotion bit is set.
    #[inline]
    #[must_use]
    pub const fn from_field(field: u8) -> Option<Promotion> {
        if field & PROMOTION_FLAG == 0 {
            return None;
        }
        Some(match field & 0b11 {
            0 => Promotion::Knight,
            1 => Promotion::Bishop,
            2 => Promotion::Rook,
            _ => Promotion::Queen,
        })
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }

    /// Pawns and kings are not promotion targets.
    #[inline]
    #[must_use]
    pub const fn from_kind(kind: PieceKind) -> Option<Promotion> {
        match kind {
            PieceKind::Knight => Some(Promotion::Knight),
            PieceKind::Bishop => Some(Promotion::Bishop),
            PieceKind::Rook => Some(Promotion::Rook),
            PieceKind::Queen => Some(Promotion::Queen),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

/// What a wide move does, derived from its metadata fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Quiet,
    Capture,
    EnPassant,
    Promotion,
    PromotionCapture,
}

/// Minimal 16-bit move: source in the high byte, destination in the low byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimpleMove(u16);

impl SimpleMove {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        SimpleMove(((from.index() as u16) << 8) | to.index() as u16)
    }

    #[inline]
    #[must_use]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked(((self.0 >> 8) & 0x3F) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn destination(self) -> Square {
        Square::from_index_unchecked((self.0 & 0x3F) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Create from raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        SimpleMove(value)
    }
}

impl fmt::Display for SimpleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.destination())
    }
}

/// Analyzed 64-bit move.
///
/// Encoding, high to low:
/// - bits 56-63: source square
/// - bits 48-55: destination square
/// - bits 45-47: promotion field (bit 2 = promotes, bits 0-1 = [`Promotion`])
/// - bits 38-44: captured piece (packed [`Piece`], 0 = none)
/// - bit 37:     en passant
/// - bits 0-36:  reserved, zero
///
/// Source and destination alone identify a move; the rest is annotation.
/// Each `with_*` setter replaces its field, so calling one twice is harmless.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WideMove(u64);

impl WideMove {
    /// Create a move with all metadata fields zero.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        WideMove(
            ((from.index() as u64) << SOURCE_SHIFT) | ((to.index() as u64) << DESTINATION_SHIFT),
        )
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(self, promotion: Promotion) -> Self {
        let cleared = self.0 & !(PROMOTION_MASK << PROMOTION_SHIFT);
        WideMove(cleared | ((promotion.field() as u64) << PROMOTION_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn with_capture(self, captured: Piece) -> Self {
        let cleared = self.0 & !(CAPTURE_MASK << CAPTURE_SHIFT);
        WideMove(cleared | (((captured.bits() as u64) & CAPTURE_MASK) << CAPTURE_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn with_en_passant(self) -> Self {
        WideMove(self.0 | (1 << EN_PASSANT_SHIFT))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked(((self.0 >> SOURCE_SHIFT) & POSITION_MASK) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn destination(self) -> Square {
        Square::from_index_unchecked(((self.0 >> DESTINATION_SHIFT) & POSITION_MASK) as u8)
    }

    /// The raw 3-bit promotion field.
    #[inline]
    #[must_use]
    pub const fn promotion_field(self) -> u8 {
        ((self.0 >> PROMOTION_SHIFT) & PROMOTION_MASK) as u8
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion_field() & PROMOTION_FLAG != 0
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Promotion> {
        Promotion::from_field(self.promotion_field())
    }

    /// The piece recorded as captured, `Piece::EMPTY` when none.
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Piece {
        Piece::from_bits_truncate(((self.0 >> CAPTURE_SHIFT) & CAPTURE_MASK) as u8)
    }

    /// Returns true if a captured piece is recorded (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        !self.captured().is_empty() || self.is_en_passant()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        (self.0 >> EN_PASSANT_SHIFT) & 1 != 0
    }

    #[must_use]
    pub const fn kind(self) -> MoveKind {
        if self.is_en_passant() {
            MoveKind::EnPassant
        } else if self.is_promotion() {
            if self.captured().is_empty() {
                MoveKind::Promotion
            } else {
                MoveKind::PromotionCapture
            }
        } else if self.captured().is_empty() {
            MoveKind::Quiet
        } else {
            MoveKind::Capture
        }
    }

    /// The piece that ends up on the destination when `moving` makes this move:
    /// the promoted piece in the mover's color if the promotion bit is set,
    /// otherwise `moving` itself.
    #[inline]
    #[must_use]
    pub const fn resolve_promoted_piece(self, moving: Piece) -> Piece {
        match self.promotion() {
            Some(promotion) => Piece::new(promotion.kind(), moving.color()),
            None => moving,
        }
    }

    /// The addressing part of this move.
    #[inline]
    #[must_use]
    pub const fn simple(self) -> SimpleMove {
        SimpleMove::from_u16((self.0 >> DESTINATION_SHIFT) as u16)
    }

    /// Get the raw 64-bit value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Create from raw 64-bit value
    #[inline]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        WideMove(value)
    }

    /// Multi-line bit-field breakdown for diagnostics.
    #[must_use]
    pub fn debug_string(self) -> String {
        BitLayout(self).to_string()
    }
}

/// Renders the bit-field breakdown behind [`WideMove::debug_string`].
struct BitLayout(WideMove);

impl fmt::Display for BitLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mv = self.0;
        let significant = 64 - mv.0.leading_zeros();
        writeln!(f, "| MOVE: {significant} sigBits")?;
        writeln!(f, "| {BIT_ANNOTATION}")?;
        writeln!(f, "| {:064b}", mv.0)?;
        writeln!(
            f,
            "| src: {}, dst: {}",
            mv.source().index(),
            mv.destination().index()
        )?;
        writeln!(
            f,
            "| prm: {:03b}, cap: {}, ep: {}",
            mv.promotion_field(),
            mv.captured().name(),
            mv.is_en_passant()
        )
    }
}

impl From<SimpleMove> for WideMove {
    fn from(mv: SimpleMove) -> Self {
        WideMove(u64::from(mv.as_u16()) << DESTINATION_SHIFT)
    }
}

impl fmt::Debug for WideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideMove({}{}", self.source(), self.destination())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.kind().to_char().to_ascii_uppercase())?;
        }
        if !self.captured().is_empty() {
            write!(f, " x{}", self.captured().name())?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for WideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.destination())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.kind().to_char())?;
        }
        Ok(())
    }
}

/// Initial capacity of a move list; enough for any position reached in play.
pub(crate) const MAX_MOVES: usize = 256;

/// Output buffer the generator appends to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<WideMove>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: WideMove) {
        self.moves.push(mv);
    }

    /// Remove all moves, keeping the allocation.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WideMove] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WideMove> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<WideMove> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<WideMove> {
        self.get(0)
    }

    /// Find the first move with the given source and destination.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<WideMove> {
        self.iter()
            .copied()
            .find(|mv| mv.source() == from && mv.destination() == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a WideMove;
    type IntoIter = std::slice::Iter<'a, WideMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = WideMove;
    type IntoIter = std::vec::IntoIter<WideMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
