use std::fmt::Display;
use subenum::subenum;

/// Pieces that have precomputed tables. Sliders are not covered.
///
/// [`LeaperType`] holds the pieces whose reach does not depend on the side to move.
#[subenum(LeaperType)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    Pawn,
    #[subenum(LeaperType)]
    Knight,
    #[subenum(LeaperType)]
    King,
}

const ALL: [PieceType; 3] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::King,
];

const ALL_LEAPERS: [LeaperType; 2] = [
    LeaperType::Knight,
    LeaperType::King,
];

impl PieceType {
    pub const fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::King => "king",
        }
    }

    pub fn iter_all() -> impl Iterator<Item = PieceType> {
        ALL.into_iter()
    }
}

impl LeaperType {
    pub fn iter_all() -> impl Iterator<Item = LeaperType> {
        ALL_LEAPERS.into_iter()
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for LeaperType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", PieceType::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaper_conversion() {
        assert_eq!(PieceType::from(LeaperType::Knight), PieceType::Knight);
        assert!(matches!(LeaperType::try_from(PieceType::King), Ok(LeaperType::King)));
        assert!(LeaperType::try_from(PieceType::Pawn).is_err());
        assert_eq!(LeaperType::iter_all().count(), 2);
    }

    #[test]
    fn test_names() {
        assert_eq!(PieceType::Pawn.to_string(), "pawn");
        assert_eq!(LeaperType::Knight.to_string(), "knight");
        assert_eq!(PieceType::iter_all().count(), 3);
    }
}
