use thiserror::Error;

/// Errors reported by coordinate parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input did not match `[a-h][1-8]`.
    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = Error::InvalidCoordinate("z9".to_string());
        assert_eq!(err.to_string(), "invalid coordinate: 'z9'");
    }
}
