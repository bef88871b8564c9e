//! Per-square generators built from offset sets.
//!
//! Every target is reached through [`Square::offset`], so a step that would leave the board
//! contributes nothing. Pawns on the first or last rank have empty masks.

use crate::utils::{Bitboard, Color, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (-1, 2), (2, -1), (1, -2), (-2, 1), (-1, -2), (-2, -1)
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1), (1, 0), (1, -1), (0, 1), (0, -1), (-1, 1), (-1, 0), (-1, -1)
];

const WHITE_PAWN_ATTACK_OFFSETS: [(i8, i8); 2] = [(1, 1), (-1, 1)];
const BLACK_PAWN_ATTACK_OFFSETS: [(i8, i8); 2] = [(1, -1), (-1, -1)];

fn is_back_rank(square: Square) -> bool {
    matches!(square.get_rank(), 0 | 7)
}

fn offsets_mask(square: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(d_file, d_rank)| square.offset(d_file, d_rank))
        .fold(0, |mask, target| mask | target.to_mask())
}

/// Squares a pawn of `color` on `square` can advance to, ignoring blockers.
pub fn generate_pawn_moves(square: Square, color: Color) -> Bitboard {
    if is_back_rank(square) {
        return 0;
    }
    let single = color.push(square.to_mask());
    if square.get_rank() == color.pawn_start_rank() {
        single | color.push(single)
    } else {
        single
    }
}

/// Squares a pawn of `color` on `square` captures on.
pub fn generate_pawn_attacks(square: Square, color: Color) -> Bitboard {
    if is_back_rank(square) {
        return 0;
    }
    match color {
        Color::White => offsets_mask(square, &WHITE_PAWN_ATTACK_OFFSETS),
        Color::Black => offsets_mask(square, &BLACK_PAWN_ATTACK_OFFSETS),
    }
}

pub fn generate_knight_attacks(square: Square) -> Bitboard {
    offsets_mask(square, &KNIGHT_OFFSETS)
}

pub fn generate_king_attacks(square: Square) -> Bitboard {
    offsets_mask(square, &KING_OFFSETS)
}
