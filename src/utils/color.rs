use serde::{Deserialize, Serialize};
use crate::utils::Bitboard;

/// Side to move. White pawns advance toward rank 8, black pawns toward rank 1.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    White=0, Black=1
}

const ALL: [Color; 2] = [Color::White, Color::Black];

impl Color {
    pub const fn flip(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Zero based rank from which this side's pawns may double step.
    pub const fn pawn_start_rank(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank delta of one pawn step.
    pub const fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Shifts every bit of `mask` one rank forward for this side.
    pub const fn push(&self, mask: Bitboard) -> Bitboard {
        match self {
            Color::White => mask << 8,
            Color::Black => mask >> 8,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    pub fn iter() -> impl Iterator<Item = Color> {
        ALL.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color() {
        assert_eq!(Color::White as u8, 0);
        assert_eq!(Color::Black as u8, 1);
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::iter().collect::<Vec<_>>(), vec![Color::White, Color::Black]);
    }

    #[test]
    fn test_push() {
        assert_eq!(Color::White.push(1 << 12), 1 << 20);
        assert_eq!(Color::Black.push(1 << 52), 1 << 44);
        assert_eq!(Color::White.push(1 << 60), 0);
        assert_eq!(Color::Black.push(1 << 3), 0);
    }
}
