//! Cross-checks every generated mask against the `chess` crate's move generator.

use attack_tables::attacks;
use attack_tables::{Color, Square, TableKind};

fn reference_square(square: Square) -> chess::Square {
    chess::ALL_SQUARES[square.index() as usize]
}

fn reference_color(color: Color) -> chess::Color {
    match color {
        Color::White => chess::Color::White,
        Color::Black => chess::Color::Black,
    }
}

#[test]
fn knight_attacks_match_reference() {
    for square in Square::iter_all() {
        let expected = chess::get_knight_moves(reference_square(square)).0;
        assert_eq!(attacks::generate_knight_attacks(square), expected, "{square}");
        assert_eq!(attacks::single_knight_attacks(square), expected, "{square}");
    }
}

#[test]
fn king_attacks_match_reference() {
    for square in Square::iter_all() {
        let expected = chess::get_king_moves(reference_square(square)).0;
        assert_eq!(attacks::generate_king_attacks(square), expected, "{square}");
        assert_eq!(attacks::single_king_attacks(square), expected, "{square}");
    }
}

#[test]
fn pawn_tables_match_reference() {
    let everything = !chess::EMPTY;
    for color in Color::iter() {
        let attack_table = TableKind::PawnAttacks(color).build();
        let move_table = TableKind::PawnMoves(color).build();
        for square in Square::iter_between(Square::A2, Square::H7) {
            let reference = reference_square(square);
            let expected_attacks = chess::get_pawn_attacks(reference, reference_color(color), everything).0;
            let expected_moves = chess::get_pawn_quiets(reference, reference_color(color), chess::EMPTY).0;

            assert_eq!(attack_table.get(square), Some(expected_attacks), "{color:?} {square}");
            assert_eq!(move_table.get(square), Some(expected_moves), "{color:?} {square}");
            assert_eq!(attacks::single_pawn_attacks(square, color), expected_attacks, "{color:?} {square}");
            assert_eq!(attacks::single_pawn_moves(square, color), expected_moves, "{color:?} {square}");
        }
    }
}
