pub mod offset;
mod manual;
mod precomputed;

use crate::utils::{Bitboard, Color, Square};

pub use offset::{generate_king_attacks, generate_knight_attacks, generate_pawn_attacks, generate_pawn_moves};

pub fn single_knight_attacks(src_square: Square) -> Bitboard {
    precomputed::precomputed_single_knight_attacks(src_square)
}

pub fn single_king_attacks(src_square: Square) -> Bitboard {
    precomputed::precomputed_single_king_attacks(src_square)
}

pub fn single_pawn_attacks(src_square: Square, by_color: Color) -> Bitboard {
    precomputed::precomputed_single_pawn_attacks(src_square, by_color)
}

pub fn single_pawn_moves(src_square: Square, by_color: Color) -> Bitboard {
    precomputed::precomputed_single_pawn_moves(src_square, by_color)
}

pub fn multi_knight_attacks(knights_mask: Bitboard) -> Bitboard {
    manual::multi_knight_attacks(knights_mask)
}

pub fn multi_king_attacks(kings_mask: Bitboard) -> Bitboard {
    manual::multi_king_attacks(kings_mask)
}

pub fn multi_pawn_attacks(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    manual::multi_pawn_attacks(pawns_mask, by_color)
}

pub fn multi_pawn_moves(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    manual::multi_pawn_moves(pawns_mask, by_color)
}
