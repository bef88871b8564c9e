//! Precomputed move and attack bitboards for pawns, knights and kings.
//!
//! Squares are indexed `file + rank * 8`, so bit 0 is a1 and bit 63 is h8.

pub mod attacks;
pub mod error;
pub mod table;
pub mod utils;

pub use error::{Error, Result};
pub use table::{build_all, AttackTable, TableKind};
pub use utils::{Bitboard, Color, LeaperType, PieceType, Square};
