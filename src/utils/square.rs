use std::fmt::Display;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::utils::Bitboard;
use crate::utils::masks::{FILES, RANKS};

/// One cell of the board. The discriminant is the bit index, `file + rank * 8`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Square {
    A1=0, B1=1, C1=2, D1=3, E1=4, F1=5, G1=6, H1=7,
    A2=8, B2=9, C2=10, D2=11, E2=12, F2=13, G2=14, H2=15,
    A3=16, B3=17, C3=18, D3=19, E3=20, F3=21, G3=22, H3=23,
    A4=24, B4=25, C4=26, D4=27, E4=28, F4=29, G4=30, H4=31,
    A5=32, B5=33, C5=34, D5=35, E5=36, F5=37, G5=38, H5=39,
    A6=40, B6=41, C6=42, D6=43, E6=44, F6=45, G6=46, H6=47,
    A7=48, B7=49, C7=50, D7=51, E7=52, F7=53, G7=54, H7=55,
    A8=56, B8=57, C8=58, D8=59, E8=60, F8=61, G8=62, H8=63
}

const ALL: [Square; 64] = [
    Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
    Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
];

impl Square {
    pub const LIMIT: u8 = 64;

    pub const fn from_index(index: u8) -> Option<Square> {
        if index < Square::LIMIT {
            Some(ALL[index as usize])
        } else {
            None
        }
    }

    /// `file` and `rank` are zero based. Returns `None` when either leaves the board.
    pub const fn from_file_rank(file: i8, rank: i8) -> Option<Square> {
        if file < 0 || file >= 8 || rank < 0 || rank >= 8 {
            return None;
        }
        Square::from_index((file + rank * 8) as u8)
    }

    /// Returns the square of the only bit set in `mask`, or `None` if `mask` is not a single bit.
    pub const fn from_mask(mask: Bitboard) -> Option<Square> {
        if mask.count_ones() != 1 {
            return None;
        }
        Square::from_index(mask.trailing_zeros() as u8)
    }

    pub const fn index(&self) -> u8 {
        *self as u8
    }

    pub const fn to_mask(&self) -> Bitboard {
        1 << *self as u8
    }

    pub const fn get_file(&self) -> u8 {
        *self as u8 % 8
    }

    pub const fn get_file_mask(&self) -> Bitboard {
        FILES[self.get_file() as usize]
    }

    pub const fn get_rank(&self) -> u8 {
        *self as u8 / 8
    }

    pub const fn get_rank_mask(&self) -> Bitboard {
        RANKS[self.get_rank() as usize]
    }

    pub const fn get_file_char(&self) -> char {
        (b'a' + self.get_file()) as char
    }

    pub const fn get_rank_char(&self) -> char {
        (b'1' + self.get_rank()) as char
    }

    /// The square `d_file` files and `d_rank` ranks away, or `None` if that is off the board.
    /// Never wraps around an edge.
    pub const fn offset(&self, d_file: i8, d_rank: i8) -> Option<Square> {
        Square::from_file_rank(self.get_file() as i8 + d_file, self.get_rank() as i8 + d_rank)
    }

    pub fn iter_all() -> impl Iterator<Item = Square> {
        Square::iter_between(Square::A1, Square::H8)
    }

    /// Squares from `first` to `last` inclusive, in increasing index order.
    /// Empty when `first` comes after `last`.
    pub fn iter_between(first: Square, last: Square) -> impl Iterator<Item = Square> {
        (first as u8..=last as u8).filter_map(Square::from_index)
    }
}

/// Parses both bounds and enumerates the squares between them, as [`Square::iter_between`].
pub fn squares_between(first: &str, last: &str) -> Result<impl Iterator<Item = Square>> {
    let first = Square::from_str(first)?;
    let last = Square::from_str(last)?;
    Ok(Square::iter_between(first, last))
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Square> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Square::from_file_rank((file - b'a') as i8, (rank - b'1') as i8)
                    .ok_or_else(|| Error::InvalidCoordinate(s.to_string()))
            }
            _ => Err(Error::InvalidCoordinate(s.to_string())),
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.get_file_char(), self.get_rank_char())
    }
}
