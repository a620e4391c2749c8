//! Password generation library
//!
//! This library generates passwords in three ways: uniformly random from the enabled
//! character classes, structured by a mask, or "pronounceable" from a walk over
//! English letter trigrams with occasional digit, symbol and uppercase substitutions.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATOR_MAX_RETRIES`: Default limit on rejected draws before giving up
//!   (default: unlimited)
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{GeneratorOptions, PasswordGenerator};
//! use secrecy::ExposeSecret;
//!
//! let mut generator = PasswordGenerator::new(GeneratorOptions {
//!     mask: Some("[aA]{3}[1]{2}[@]{1}".to_string()),
//!     ..Default::default()
//! });
//!
//! let password = generator.generate().expect("valid options");
//! assert_eq!(password.expose_secret().chars().count(), 9);
//! ```

// Internal modules
mod alphabet;
mod error;
mod generator;
mod mask;
mod options;
mod picker;
mod random;
mod shuffle;
mod strategies;
mod trigram;

// Public API
pub use alphabet::{
    CharClasses, LOWER_ALPHABET, NUMBERS_ALPHABET, SIMILAR_ALPHABET, SPECIAL_ALPHABET,
    UPPER_ALPHABET,
};
pub use error::GeneratorError;
pub use generator::{PasswordGenerator, generate_password};
pub use mask::{MaskSegment, parse_mask};
pub use options::{GeneratorOptions, MAX_RETRIES_ENV, Strategy, max_retries_from_env};
pub use random::RandomSource;
pub use shuffle::{shuffle, shuffle_chars};
pub use trigram::{Seconds, Thirds, TrigramTable};
