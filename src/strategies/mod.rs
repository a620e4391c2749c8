//! Generation strategies
//!
//! Each strategy builds one complete password from the options and a random source.

mod mask;
mod pronounceable;
mod random;

pub(crate) use mask::mask_strategy;
pub(crate) use pronounceable::pronounceable_strategy;
pub(crate) use random::random_strategy;

use crate::error::GeneratorError;

/// Result type for strategy functions.
pub(crate) type StrategyResult = Result<String, GeneratorError>;
