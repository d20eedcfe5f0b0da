/// Forwards to `log::trace!` when the `logging` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
    };
}

pub mod board;
mod zobrist;

pub use board::{Board, Color, Piece, PieceKind, Square, WideMove};
