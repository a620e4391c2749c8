//! Generator configuration.

use crate::alphabet::{self, CharClasses};
use crate::error::GeneratorError;

/// Environment variable holding the default retry limit.
pub const MAX_RETRIES_ENV: &str = "PWD_GENERATOR_MAX_RETRIES";

/// Strategy selected by the options, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy<'a> {
    /// Structure taken from a mask; `password_length` is ignored.
    Mask(&'a str),
    /// Trigram walk with random substitutions.
    Pronounceable,
    /// Uniform draw from all enabled alphabets.
    Random,
}

/// Options controlling password generation.
///
/// Build with struct-update syntax over [`Default`]:
///
/// ```rust
/// use pwd_generator::GeneratorOptions;
///
/// let options = GeneratorOptions {
///     password_length: 16,
///     special: false,
///     ..Default::default()
/// };
/// assert!(options.upper);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub password_length: usize,
    pub upper: bool,
    pub lower: bool,
    pub numbers: bool,
    pub special: bool,
    /// When `false`, characters from `similar_alphabet` are left out.
    pub similar: bool,
    pub pronounceable: bool,
    /// Mask such as `[a]{1,4}[@]{2}[1A]{1}`. Takes precedence over `pronounceable`.
    pub mask: Option<String>,
    /// Shuffle the whole mask result once all segments are assembled.
    pub shuffle_mask: bool,
    pub similar_alphabet: String,
    pub lower_alphabet: String,
    pub upper_alphabet: String,
    pub numbers_alphabet: String,
    pub special_alphabet: String,
    /// Upper bound on rejected draws (or abandoned trigram walks) per operation.
    ///
    /// `None` retries forever, so an alphabet made only of similar characters will
    /// hang. Defaults to the value of [`MAX_RETRIES_ENV`] when set.
    pub max_retries: Option<usize>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            password_length: 12,
            upper: true,
            lower: true,
            numbers: true,
            special: true,
            similar: false,
            pronounceable: false,
            mask: None,
            shuffle_mask: true,
            similar_alphabet: alphabet::SIMILAR_ALPHABET.to_string(),
            lower_alphabet: alphabet::LOWER_ALPHABET.to_string(),
            upper_alphabet: alphabet::UPPER_ALPHABET.to_string(),
            numbers_alphabet: alphabet::NUMBERS_ALPHABET.to_string(),
            special_alphabet: alphabet::SPECIAL_ALPHABET.to_string(),
            max_retries: max_retries_from_env(),
        }
    }
}

impl GeneratorOptions {
    /// Resolves which strategy `generate` will run.
    pub fn strategy(&self) -> Strategy<'_> {
        match (&self.mask, self.pronounceable) {
            (Some(mask), _) => Strategy::Mask(mask),
            (None, true) => Strategy::Pronounceable,
            (None, false) => Strategy::Random,
        }
    }

    /// Checks the options for the strategy they select.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NoLetterClasses`] when pronounceable mode is
    /// selected with both letter classes disabled.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.strategy() == Strategy::Pronounceable && !self.upper && !self.lower {
            #[cfg(feature = "tracing")]
            tracing::error!("Pronounceable mode requested without letter classes");
            return Err(GeneratorError::NoLetterClasses);
        }
        Ok(())
    }

    /// Alphabet for a single class. Multi-class sets resolve to the first class.
    pub fn alphabet(&self, class: CharClasses) -> &str {
        if class.contains(CharClasses::LOWER) {
            &self.lower_alphabet
        } else if class.contains(CharClasses::UPPER) {
            &self.upper_alphabet
        } else if class.contains(CharClasses::DIGIT) {
            &self.numbers_alphabet
        } else if class.contains(CharClasses::SPECIAL) {
            &self.special_alphabet
        } else {
            ""
        }
    }

    /// Classes switched on by the inclusion flags.
    pub fn enabled_classes(&self) -> CharClasses {
        let mut classes = CharClasses::empty();
        classes.set(CharClasses::LOWER, self.lower);
        classes.set(CharClasses::UPPER, self.upper);
        classes.set(CharClasses::DIGIT, self.numbers);
        classes.set(CharClasses::SPECIAL, self.special);
        classes
    }

    /// Whether similar characters are currently excluded.
    #[inline]
    pub fn excludes_similar(&self) -> bool {
        !self.similar
    }

    /// Returns `true` if `c` belongs to the similar set.
    #[inline]
    pub fn is_similar(&self, c: char) -> bool {
        alphabet::contains(&self.similar_alphabet, c)
    }
}

/// Reads the default retry limit from [`MAX_RETRIES_ENV`].
///
/// Unset or unparsable values mean "no limit".
pub fn max_retries_from_env() -> Option<usize> {
    let raw = std::env::var(MAX_RETRIES_ENV).ok()?;
    match raw.trim().parse() {
        Ok(limit) => Some(limit),
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring {}: not an unsigned integer: {:?}", MAX_RETRIES_ENV, raw);
            None
        }
    }
}
