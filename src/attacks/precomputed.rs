//! Precomputed attack tables for non-sliding pieces.

use static_init::dynamic;
use tracing::trace;
use crate::table::TableKind;
use crate::utils::{Bitboard, Color, LeaperType, Square};

fn dense_table(kind: TableKind) -> [Bitboard; 64] {
    trace!(table = %kind, "initializing lookup table");
    kind.build().to_dense()
}

/// Precomputed attacks table for knights.
#[dynamic]
static SINGLE_KNIGHT_ATTACKS: [Bitboard; 64] = dense_table(TableKind::Leaper(LeaperType::Knight));

/// Precomputed attacks table for kings.
#[dynamic]
static SINGLE_KING_ATTACKS: [Bitboard; 64] = dense_table(TableKind::Leaper(LeaperType::King));

/// Precomputed pawn attack tables, indexed by color.
#[dynamic]
static SINGLE_PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    dense_table(TableKind::PawnAttacks(Color::White)),
    dense_table(TableKind::PawnAttacks(Color::Black)),
];

/// Precomputed pawn move tables, indexed by color.
#[dynamic]
static SINGLE_PAWN_MOVES: [[Bitboard; 64]; 2] = [
    dense_table(TableKind::PawnMoves(Color::White)),
    dense_table(TableKind::PawnMoves(Color::Black)),
];

/// Returns a precomputed bitboard with all squares attacked by a knight on `src_square`
pub fn precomputed_single_knight_attacks(src_square: Square) -> Bitboard {
    SINGLE_KNIGHT_ATTACKS[src_square as usize]
}

/// Returns a precomputed bitboard with all squares attacked by a king on `src_square`
pub fn precomputed_single_king_attacks(src_square: Square) -> Bitboard {
    SINGLE_KING_ATTACKS[src_square as usize]
}

pub fn precomputed_single_pawn_attacks(src_square: Square, by_color: Color) -> Bitboard {
    SINGLE_PAWN_ATTACKS[by_color as usize][src_square as usize]
}

pub fn precomputed_single_pawn_moves(src_square: Square, by_color: Color) -> Bitboard {
    SINGLE_PAWN_MOVES[by_color as usize][src_square as usize]
}
