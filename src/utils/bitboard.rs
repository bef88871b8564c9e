use std::str::FromStr;
use crate::error::Result;
use crate::utils::Square;

pub type Bitboard = u64;

/// Yields each set bit of a mask as its own single-bit mask, lowest square first.
#[derive(Debug, Clone)]
pub struct SetBitMaskIterator {
    mask: Bitboard,
}

impl From<Bitboard> for SetBitMaskIterator {
    fn from(mask: Bitboard) -> Self {
        SetBitMaskIterator {
            mask,
        }
    }
}

impl Iterator for SetBitMaskIterator {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == 0 {
            return None;
        }

        let ls1b = self.mask & self.mask.wrapping_neg();  // Isolate the least significant set bit
        self.mask &= !ls1b;

        Some(ls1b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBitMaskIterator {}

pub fn get_set_bit_mask_iter(mask: Bitboard) -> SetBitMaskIterator {
    mask.into()
}

/// Yields the squares of a mask in increasing index order.
#[derive(Debug, Clone)]
pub struct SquaresFromMaskIterator {
    inner: SetBitMaskIterator,
}

impl From<Bitboard> for SquaresFromMaskIterator {
    fn from(mask: Bitboard) -> Self {
        SquaresFromMaskIterator {
            inner: mask.into(),
        }
    }
}

impl Iterator for SquaresFromMaskIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Square::from_mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub fn get_squares_from_mask_iter(mask: Bitboard) -> SquaresFromMaskIterator {
    mask.into()
}

/// ORs together the bits of every square named in `squares`.
/// Duplicates are harmless. Fails on the first name that is not a square.
pub fn squares_to_bitboard(squares: &[&str]) -> Result<Bitboard> {
    squares.iter().try_fold(0, |mask, name| Ok(mask | Square::from_str(name)?.to_mask()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_set_bit_mask_iter() {
        let masks: Vec<Bitboard> = get_set_bit_mask_iter(0b1010_0001).collect();
        assert_eq!(masks, vec![0b1, 0b10_0000, 0b1000_0000]);
        assert_eq!(get_set_bit_mask_iter(0).count(), 0);
        assert_eq!(get_set_bit_mask_iter(Bitboard::MAX).len(), 64);
    }

    #[test]
    fn test_squares_from_mask_iter() {
        let mask = Square::H8.to_mask() | Square::A1.to_mask() | Square::E4.to_mask();
        let squares: Vec<Square> = get_squares_from_mask_iter(mask).collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);
    }

    #[test]
    fn test_squares_to_bitboard() {
        let mask = squares_to_bitboard(&["a1", "d4", "h8"]).unwrap();
        assert_eq!(mask, Square::A1.to_mask() | Square::D4.to_mask() | Square::H8.to_mask());

        assert_eq!(squares_to_bitboard(&["a1", "a1"]), Ok(Square::A1.to_mask()));
        assert_eq!(squares_to_bitboard(&[]), Ok(0));
        assert_eq!(squares_to_bitboard(&["a1", "z9"]), Err(Error::InvalidCoordinate("z9".to_string())));
    }
}
