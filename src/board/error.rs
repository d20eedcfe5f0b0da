//! Error types for board construction.

use std::fmt;

/// Error type for out-of-range or malformed squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for raw piece values that do not fit the packed layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Value uses bit 7 (pieces are 7 bits wide)
    OutOfRange { bits: u8 },
    /// One of the three reserved low bits is set
    ReservedBits { bits: u8 },
    /// Type code wider than 3 bits
    TypeCodeOutOfRange { code: u8 },
    /// Color code wider than 1 bit
    ColorCodeOutOfRange { code: u8 },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::OutOfRange { bits } => {
                write!(f, "Piece value {bits:#010b} exceeds 7 bits")
            }
            PieceError::ReservedBits { bits } => {
                write!(f, "Piece value {bits:#010b} sets reserved bits")
            }
            PieceError::TypeCodeOutOfRange { code } => {
                write!(f, "Piece type code {code} out of range (must be 0-7)")
            }
            PieceError::ColorCodeOutOfRange { code } => {
                write!(f, "Color code {code} out of range (must be 0 or 1)")
            }
        }
    }
}

impl std::error::Error for PieceError {}
