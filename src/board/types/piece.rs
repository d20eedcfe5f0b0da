//! Piece codec: packed 7-bit piece values and their tagged views.
//!
//! Layout of a packed piece byte (bit 7 is never set):
//!
//! ```text
//!   6 5 4   3   2 1 0
//!   t t t   c   r r r
//! ```
//!
//! `ttt` is the type code, `c` the color (0 = black, 1 = white) and `rrr`
//! reserved (always zero). The type codes are not sequential:
//!
//! | Type   | Code  |
//! |--------|-------|
//! | none   | `000` |
//! | pawn   | `100` |
//! | knight | `010` |
//! | bishop | `110` |
//! | rook   | `001` |
//! | queen  | `101` |
//! | king   | `011` |
//!
//! Code `111` is unassigned and decodes as an unknown type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceError;

const TYPE_SHIFT: u8 = 4;
const COLOR_SHIFT: u8 = 3;
const TYPE_MASK: u8 = 0b111_0000;
const COLOR_MASK: u8 = 0b000_1000;
const RESERVED_MASK: u8 = 0b000_0111;
const VALUE_MASK: u8 = 0b111_1111;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece types in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// The 3-bit type code stored in a packed piece.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::Pawn => 0b100,
            PieceKind::Knight => 0b010,
            PieceKind::Bishop => 0b110,
            PieceKind::Rook => 0b001,
            PieceKind::Queen => 0b101,
            PieceKind::King => 0b011,
        }
    }

    /// Decode a 3-bit type code. `000` (none) and `111` yield `None`.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Option<PieceKind> {
        match code {
            0b100 => Some(PieceKind::Pawn),
            0b010 => Some(PieceKind::Knight),
            0b110 => Some(PieceKind::Bishop),
            0b001 => Some(PieceKind::Rook),
            0b101 => Some(PieceKind::Queen),
            0b011 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Chess colors. The discriminant is the packed color bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Both colors in index order (Black=0, White=1)
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// The 1-bit color code stored in a packed piece.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a color code. Only the lowest bit is considered.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Color {
        if code & 1 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction in ranks (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A packed piece, or the empty square when zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Piece(u8);

impl Piece {
    /// The empty square.
    pub const EMPTY: Piece = Piece(0);

    /// Pack a piece of the given type and color.
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece((kind.code() << TYPE_SHIFT) | (color.code() << COLOR_SHIFT))
    }

    /// Pack raw type and color codes, rejecting codes wider than their fields.
    pub fn from_codes(type_code: u8, color_code: u8) -> Result<Self, PieceError> {
        if type_code > 0b111 {
            return Err(PieceError::TypeCodeOutOfRange { code: type_code });
        }
        if color_code > 1 {
            return Err(PieceError::ColorCodeOutOfRange { code: color_code });
        }
        Ok(Piece((type_code << TYPE_SHIFT) | (color_code << COLOR_SHIFT)))
    }

    /// Validate a raw packed value.
    pub fn from_bits(bits: u8) -> Result<Self, PieceError> {
        if bits & !VALUE_MASK != 0 {
            return Err(PieceError::OutOfRange { bits });
        }
        if bits & RESERVED_MASK != 0 {
            return Err(PieceError::ReservedBits { bits });
        }
        Ok(Piece(bits))
    }

    /// Keep the type and color fields of `bits`, dropping everything else.
    #[inline]
    #[must_use]
    pub(crate) const fn from_bits_truncate(bits: u8) -> Self {
        Piece(bits & (TYPE_MASK | COLOR_MASK))
    }

    /// Raw packed value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw 3-bit type code.
    #[inline]
    #[must_use]
    pub const fn type_code(self) -> u8 {
        (self.0 & TYPE_MASK) >> TYPE_SHIFT
    }

    /// Raw 1-bit color code.
    #[inline]
    #[must_use]
    pub const fn color_code(self) -> u8 {
        (self.0 & COLOR_MASK) >> COLOR_SHIFT
    }

    /// The piece type, or `None` for the empty square and unassigned codes.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.type_code())
    }

    /// The color bit of the piece. The empty square reads as black.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_code(self.color_code())
    }

    #[inline]
    #[must_use]
    pub fn is_kind(self, kind: PieceKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Returns true if the square holds a piece of `color`.
    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        !self.is_empty() && self.color_code() == color.code()
    }

    /// Same piece type with the given color.
    #[inline]
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Piece((self.0 & !COLOR_MASK) | (color.code() << COLOR_SHIFT))
    }

    /// Long name such as `queen:white`, `none`, or `unknownT(7):black`.
    #[must_use]
    pub fn name(self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }
        let type_name = match self.kind() {
            Some(kind) => kind.name().to_string(),
            None if self.type_code() == 0 => "none".to_string(),
            None => format!("unknownT({})", self.type_code()),
        };
        format!("{}:{}", type_name, self.color().name())
    }

    /// Single-character glyph: uppercase for white, lowercase for black,
    /// `-` for the empty square and `?` for an unassigned type code.
    #[must_use]
    pub fn glyph(self) -> char {
        if self.is_empty() {
            return '-';
        }
        match self.kind() {
            Some(kind) if self.color() == Color::White => kind.to_char().to_ascii_uppercase(),
            Some(kind) => kind.to_char(),
            None => '?',
        }
    }
}

impl From<(PieceKind, Color)> for Piece {
    fn from((kind, color): (PieceKind, Color)) -> Self {
        Piece::new(kind, color)
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> u8 {
        piece.0
    }
}

impl TryFrom<u8> for Piece {
    type Error = PieceError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Piece::from_bits(bits)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes_match_packed_layout() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).bits(), 0b100_0000);
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).bits(), 0b010_0000);
        assert_eq!(Piece::new(PieceKind::Bishop, Color::Black).bits(), 0b110_0000);
        assert_eq!(Piece::new(PieceKind::Rook, Color::Black).bits(), 0b001_0000);
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).bits(), 0b101_0000);
        assert_eq!(Piece::new(PieceKind::King, Color::Black).bits(), 0b011_0000);
        assert_eq!(Piece::new(PieceKind::Queen, Color::White).bits(), 0b101_1000);
    }

    #[test]
    fn test_kind_and_color_decode() {
        for kind in PieceKind::ALL {
            for color in Color::BOTH {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), Some(kind));
                assert_eq!(piece.color(), color);
                assert!(piece.is_color(color));
                assert!(!piece.is_color(color.opponent()));
                assert_eq!(piece.bits() & RESERVED_MASK, 0);
            }
        }
    }

    #[test]
    fn test_empty_piece() {
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.kind(), None);
        assert!(!Piece::EMPTY.is_color(Color::Black));
        assert_eq!(Piece::EMPTY.name(), "none");
        assert_eq!(Piece::EMPTY.glyph(), '-');
    }

    #[test]
    fn test_names_and_glyphs() {
        assert_eq!(Piece::new(PieceKind::Queen, Color::White).name(), "queen:white");
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).name(), "knight:black");
        assert_eq!(Piece::new(PieceKind::King, Color::White).glyph(), 'K');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).glyph(), 'p');
    }

    #[test]
    fn test_unknown_type_degrades() {
        let odd = Piece::from_codes(0b111, 1).unwrap();
        assert_eq!(odd.kind(), None);
        assert_eq!(odd.name(), "unknownT(7):white");
        assert_eq!(odd.glyph(), '?');
    }

    #[test]
    fn test_from_bits_rejects_reserved_and_wide_values() {
        assert_eq!(
            Piece::from_bits(0b101_1001),
            Err(PieceError::ReservedBits { bits: 0b101_1001 })
        );
        assert_eq!(
            Piece::from_bits(0x80),
            Err(PieceError::OutOfRange { bits: 0x80 })
        );
        assert_eq!(
            Piece::from_bits(0b101_1000),
            Ok(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn test_from_codes_rejects_wide_codes() {
        assert_eq!(
            Piece::from_codes(8, 0),
            Err(PieceError::TypeCodeOutOfRange { code: 8 })
        );
        assert_eq!(
            Piece::from_codes(1, 2),
            Err(PieceError::ColorCodeOutOfRange { code: 2 })
        );
    }

    #[test]
    fn test_with_color_keeps_type() {
        let piece = Piece::new(PieceKind::Rook, Color::Black).with_color(Color::White);
        assert_eq!(piece, Piece::new(PieceKind::Rook, Color::White));
    }
}
