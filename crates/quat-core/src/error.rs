use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuatError {
    /// Inverse, division or normalisation of the zero quaternion.
    DivisionByZero,
    /// A format name that does not match any `QFormat` variant.
    UnknownFormat(String),
}

impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::DivisionByZero => {
                write!(f, "cannot invert zero quaternion: division by zero")
            }
            QuatError::UnknownFormat(name) => write!(f, "unknown quaternion format: {name}"),
        }
    }
}

impl std::error::Error for QuatError {}

pub type Result<T> = std::result::Result<T, QuatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(
            QuatError::DivisionByZero.to_string(),
            "cannot invert zero quaternion: division by zero"
        );
    }

    #[test]
    fn test_unknown_format_message() {
        let err = QuatError::UnknownFormat("polar".to_string());
        assert_eq!(err.to_string(), "unknown quaternion format: polar");
    }
}
