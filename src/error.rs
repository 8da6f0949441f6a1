//! Errors reported by fallible operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Attempted to divide by a length that is nearly zero")]
    DivisionByZero,

    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to parse {what}: {reason}")]
    Parse { what: &'static str, reason: String },
}

impl MathError {
    pub(crate) fn parse(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            what,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            MathError::IndexOutOfRange { index: 4, len: 3 }.to_string(),
            "Index 4 is out of range for length 3"
        );
        assert_eq!(
            MathError::parse("vector", "expected 3 components, got 2").to_string(),
            "Failed to parse vector: expected 3 components, got 2"
        );
    }
}
