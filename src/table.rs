//! Square to bitboard tables, built by running a generator over a range of squares.

use std::fmt::Display;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::attacks::offset;
use crate::error::Result;
use crate::utils::{squares_between, Bitboard, Color, LeaperType, Square};

/// Every square a knight or king can stand on.
pub const BOARD_DOMAIN: (Square, Square) = (Square::A1, Square::H8);

/// Squares a pawn can stand on. Pawns never occupy the first or last rank.
pub const PAWN_DOMAIN: (Square, Square) = (Square::A2, Square::H7);

/// Immutable mapping from square to target mask, in the order the squares were enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttackTable {
    entries: IndexMap<Square, Bitboard>,
}

impl AttackTable {
    /// Calls `generator` once for every square from `first` to `last` inclusive.
    ///
    /// # Panics
    /// If a square comes up twice, which means the enumeration itself is broken.
    pub fn build<G>(generator: G, first: Square, last: Square) -> AttackTable
    where
        G: Fn(Square) -> Bitboard,
    {
        AttackTable::collect(generator, Square::iter_between(first, last))
    }

    /// Like [`AttackTable::build`], with the bounds given in algebraic notation.
    pub fn build_between<G>(generator: G, first: &str, last: &str) -> Result<AttackTable>
    where
        G: Fn(Square) -> Bitboard,
    {
        Ok(AttackTable::collect(generator, squares_between(first, last)?))
    }

    fn collect<G>(generator: G, squares: impl Iterator<Item = Square>) -> AttackTable
    where
        G: Fn(Square) -> Bitboard,
    {
        let mut entries = IndexMap::with_capacity(Square::LIMIT as usize);
        for square in squares {
            if entries.insert(square, generator(square)).is_some() {
                unreachable!("square {square} enumerated twice");
            }
        }
        AttackTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, square: Square) -> Option<Bitboard> {
        self.entries.get(&square).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Bitboard)> + '_ {
        self.entries.iter().map(|(square, mask)| (*square, *mask))
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.entries.keys().copied()
    }

    /// Flattens the table into an array indexed by square. Squares outside the table map to `0`.
    pub fn to_dense(&self) -> [Bitboard; 64] {
        let mut dense = [0; 64];
        for (square, mask) in self.iter() {
            dense[square as usize] = mask;
        }
        dense
    }

    pub fn into_inner(self) -> IndexMap<Square, Bitboard> {
        self.entries
    }
}

/// The tables a move generator needs for non-sliding pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TableKind {
    PawnMoves(Color),
    PawnAttacks(Color),
    Leaper(LeaperType),
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::PawnMoves(Color::White),
        TableKind::PawnMoves(Color::Black),
        TableKind::PawnAttacks(Color::White),
        TableKind::PawnAttacks(Color::Black),
        TableKind::Leaper(LeaperType::Knight),
        TableKind::Leaper(LeaperType::King),
    ];

    pub const fn domain(&self) -> (Square, Square) {
        match self {
            TableKind::PawnMoves(_) | TableKind::PawnAttacks(_) => PAWN_DOMAIN,
            TableKind::Leaper(_) => BOARD_DOMAIN,
        }
    }

    pub fn generate(&self, square: Square) -> Bitboard {
        match *self {
            TableKind::PawnMoves(color) => offset::generate_pawn_moves(square, color),
            TableKind::PawnAttacks(color) => offset::generate_pawn_attacks(square, color),
            TableKind::Leaper(LeaperType::Knight) => offset::generate_knight_attacks(square),
            TableKind::Leaper(LeaperType::King) => offset::generate_king_attacks(square),
        }
    }

    /// File stem used by exporters, e.g. `white_pawn_move` or `knight_attacks`.
    pub fn name(&self) -> String {
        match self {
            TableKind::PawnMoves(color) => format!("{}_pawn_move", color.name()),
            TableKind::PawnAttacks(color) => format!("{}_pawn_attacks", color.name()),
            TableKind::Leaper(leaper) => format!("{leaper}_attacks"),
        }
    }

    pub fn build(&self) -> AttackTable {
        let (first, last) = self.domain();
        let table = AttackTable::build(|square| self.generate(square), first, last);
        debug!(table = %self, entries = table.len(), first = %first, last = %last, "built attack table");
        table
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Builds every table in [`TableKind::ALL`] order.
pub fn build_all() -> Vec<(TableKind, AttackTable)> {
    TableKind::ALL.iter().map(|kind| (*kind, kind.build())).collect()
}
