//! Set-wise attacks computed with shifts and file masks, for any number of pieces at once.

use crate::utils::{Bitboard, Color};
use crate::utils::masks::*;

/// Returns a bitboard with all squares attacked by knights indicated by the bits in `knights_mask`
pub fn multi_knight_attacks(knights_mask: Bitboard) -> Bitboard {
    (knights_mask << 17 & !FILE_A) | (knights_mask << 15 & !FILE_H) | (knights_mask << 10 & !FILES_AB) | (knights_mask << 6 & !FILES_GH) |
        (knights_mask >> 17 & !FILE_H) | (knights_mask >> 15 & !FILE_A) | (knights_mask >> 10 & !FILES_GH) | (knights_mask >> 6 & !FILES_AB)
}

/// Returns a bitboard with all squares attacked by kings indicated by the bits in `kings_mask`
pub fn multi_king_attacks(kings_mask: Bitboard) -> Bitboard {
    (kings_mask << 9 & !FILE_A) | (kings_mask << 8) | (kings_mask << 7 & !FILE_H) |
        (kings_mask >> 9 & !FILE_H) | (kings_mask >> 8) | (kings_mask >> 7 & !FILE_A) |
        (kings_mask << 1 & !FILE_A) | (kings_mask >> 1 & !FILE_H)
}

/// Returns a bitboard with all squares attacked by pawns indicated by the bits in `pawns_mask`.
/// Pawns on the first or last rank attack nothing.
pub fn multi_pawn_attacks(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    let pawns_mask = pawns_mask & !BACK_RANKS;
    match by_color {
        Color::White => (pawns_mask << 9 & !FILE_A) | (pawns_mask << 7 & !FILE_H),
        Color::Black => (pawns_mask >> 7 & !FILE_A) | (pawns_mask >> 9 & !FILE_H)
    }
}

/// Returns a bitboard with all squares that pawns indicated by the bits in `pawns_mask` can move to,
/// including double steps from the starting rank. Blockers are not considered.
pub fn multi_pawn_moves(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    let pawns_mask = pawns_mask & !BACK_RANKS;
    let single = by_color.push(pawns_mask);
    let double = by_color.push(by_color.push(pawns_mask & RANKS[by_color.pawn_start_rank() as usize]));
    single | double
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::offset;
    use crate::utils::{squares_to_bitboard, Square};

    #[test]
    fn test_single_squares_match_offsets() {
        for square in Square::iter_all() {
            let mask = square.to_mask();
            assert_eq!(multi_knight_attacks(mask), offset::generate_knight_attacks(square), "{square}");
            assert_eq!(multi_king_attacks(mask), offset::generate_king_attacks(square), "{square}");
            for color in Color::iter() {
                assert_eq!(multi_pawn_attacks(mask, color), offset::generate_pawn_attacks(square, color), "{square}");
                assert_eq!(multi_pawn_moves(mask, color), offset::generate_pawn_moves(square, color), "{square}");
            }
        }
    }

    #[test]
    fn test_union_of_pieces() {
        let knights = squares_to_bitboard(&["b1", "g1"]).unwrap();
        let expected = offset::generate_knight_attacks(Square::B1) | offset::generate_knight_attacks(Square::G1);
        assert_eq!(multi_knight_attacks(knights), expected);

        assert_eq!(multi_pawn_moves(RANK_2, Color::White), RANK_3 | RANK_4);
        assert_eq!(multi_pawn_moves(RANK_7, Color::Black), RANK_6 | RANK_5);
        assert_eq!(multi_pawn_attacks(RANK_2, Color::White), RANK_3);
    }

    #[test]
    fn test_no_wraparound() {
        assert_eq!(multi_king_attacks(FILE_H) & FILE_A, 0);
        assert_eq!(multi_knight_attacks(FILES_GH) & FILES_AB, 0);
        assert_eq!(multi_pawn_attacks(FILE_A, Color::Black) & FILE_H, 0);
    }
}
