//! Error type shared by every generation strategy.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Pronounceable passwords need uppercase or lowercase letters enabled")]
    NoLetterClasses,
    #[error("Cannot pick characters from an empty alphabet")]
    EmptyAlphabet,
    #[error("Gave up after {0} rejected draws")]
    RetryLimitExceeded(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeneratorError::RetryLimitExceeded(50).to_string(),
            "Gave up after 50 rejected draws"
        );
        assert!(GeneratorError::NoLetterClasses.to_string().contains("letters"));
    }
}
