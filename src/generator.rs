//! Password generator - strategy selection and the incremental accumulator.

use std::fmt;

use rand::rngs::ThreadRng;
use secrecy::SecretString;
use secrecy::zeroize::Zeroize;

use crate::alphabet::CharClasses;
use crate::error::GeneratorError;
use crate::options::{GeneratorOptions, Strategy};
use crate::picker::Picker;
use crate::random::RandomSource;
use crate::shuffle::shuffle;
use crate::strategies::{mask_strategy, pronounceable_strategy, random_strategy};

/// Generates passwords and keeps an incrementally built one.
///
/// [`generate`](Self::generate) builds a complete password from the options. The
/// `add_*`, [`shuffle`](Self::shuffle) and [`clear`](Self::clear) methods work on a
/// separate accumulator that `generate` never touches.
///
/// ```rust
/// use pwd_generator::{GeneratorOptions, PasswordGenerator};
/// use secrecy::ExposeSecret;
///
/// let mut generator = PasswordGenerator::new(GeneratorOptions::default());
/// generator.clear().add_lower(3, None)?.add_number(2, 2)?;
/// assert_eq!(generator.password().expose_secret().len(), 5);
/// # Ok::<(), pwd_generator::GeneratorError>(())
/// ```
pub struct PasswordGenerator<R = ThreadRng> {
    options: GeneratorOptions,
    rng: R,
    password: String,
}

impl PasswordGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local `rand` generator.
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_source(options, rand::rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn with_source(options: GeneratorOptions, rng: R) -> Self {
        Self {
            options,
            rng,
            password: String::new(),
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Changes apply from the next call on.
    pub fn options_mut(&mut self) -> &mut GeneratorOptions {
        &mut self.options
    }

    /// Generates one password using the strategy selected by the options.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::NoLetterClasses`] for pronounceable mode without letters,
    ///   before any random number is drawn
    /// - [`GeneratorError::EmptyAlphabet`] when a needed alphabet is empty
    /// - [`GeneratorError::RetryLimitExceeded`] when `max_retries` is set and reached
    pub fn generate(&mut self) -> Result<SecretString, GeneratorError> {
        self.options.validate()?;

        let strategy = self.options.strategy();
        #[cfg(feature = "tracing")]
        tracing::debug!("Generating password with {:?} strategy", strategy);

        let result = match strategy {
            Strategy::Mask(mask) => mask_strategy(&self.options, &mut self.rng, mask),
            Strategy::Pronounceable => pronounceable_strategy(&self.options, &mut self.rng),
            Strategy::Random => random_strategy(&self.options, &mut self.rng),
        };

        match result {
            Ok(password) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Generated password of {} characters", password.chars().count());
                Ok(SecretString::new(password.into_boxed_str()))
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password generation failed: {}", e);
                Err(e)
            }
        }
    }

    /// Appends `min..=max` uppercase letters. `None` for `max` means exactly `min`.
    pub fn add_upper(
        &mut self,
        min: usize,
        max: impl Into<Option<usize>>,
    ) -> Result<&mut Self, GeneratorError> {
        self.append(CharClasses::UPPER, min, max.into())
    }

    /// Appends `min..=max` lowercase letters. `None` for `max` means exactly `min`.
    pub fn add_lower(
        &mut self,
        min: usize,
        max: impl Into<Option<usize>>,
    ) -> Result<&mut Self, GeneratorError> {
        self.append(CharClasses::LOWER, min, max.into())
    }

    /// Appends `min..=max` digits. `None` for `max` means exactly `min`.
    pub fn add_number(
        &mut self,
        min: usize,
        max: impl Into<Option<usize>>,
    ) -> Result<&mut Self, GeneratorError> {
        self.append(CharClasses::DIGIT, min, max.into())
    }

    /// Appends `min..=max` special characters. `None` for `max` means exactly `min`.
    pub fn add_special(
        &mut self,
        min: usize,
        max: impl Into<Option<usize>>,
    ) -> Result<&mut Self, GeneratorError> {
        self.append(CharClasses::SPECIAL, min, max.into())
    }

    /// Shuffles the accumulated password `times` times (once for `None`).
    pub fn shuffle(&mut self, times: impl Into<Option<usize>>) -> &mut Self {
        let times: Option<usize> = times.into();
        for _ in 0..times.unwrap_or(1) {
            let shuffled = shuffle(&mut self.rng, &self.password);
            self.password.zeroize();
            self.password = shuffled;
        }
        self
    }

    /// Empties the accumulated password.
    pub fn clear(&mut self) -> &mut Self {
        self.password.zeroize();
        self
    }

    /// Current value of the accumulated password.
    pub fn password(&self) -> SecretString {
        SecretString::new(self.password.clone().into_boxed_str())
    }

    fn append(
        &mut self,
        class: CharClasses,
        min: usize,
        max: Option<usize>,
    ) -> Result<&mut Self, GeneratorError> {
        let max = max.unwrap_or(min);
        let alphabet = self.options.alphabet(class);
        let picked = Picker::new(&self.options, &mut self.rng).pick(min, max, alphabet)?;
        self.password.push_str(&picked);
        Ok(self)
    }
}

impl<R> fmt::Debug for PasswordGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGenerator")
            .field("options", &self.options)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl<R> Drop for PasswordGenerator<R> {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Generates a single password with the thread-local random generator.
///
/// # Errors
///
/// Same as [`PasswordGenerator::generate`].
pub fn generate_password(options: &GeneratorOptions) -> Result<SecretString, GeneratorError> {
    PasswordGenerator::new(options.clone()).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::CountingSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    fn seeded(options: GeneratorOptions, seed: u64) -> PasswordGenerator<StdRng> {
        PasswordGenerator::with_source(
            GeneratorOptions {
                max_retries: None,
                ..options
            },
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_generate_default_random() {
        let mut generator = seeded(GeneratorOptions::default(), 61);
        let password = generator.generate().unwrap();
        assert_eq!(password.expose_secret().chars().count(), 12);
        assert!(!password.expose_secret().chars().any(|c| "O01lI".contains(c)));
    }

    #[test]
    fn test_generate_mask() {
        let mut generator = seeded(
            GeneratorOptions {
                mask: Some("[a]{4}[1]{2,2}".to_string()),
                shuffle_mask: false,
                ..Default::default()
            },
            62,
        );
        let password = generator.generate().unwrap();
        let chars: Vec<char> = password.expose_secret().chars().collect();
        assert_eq!(chars.len(), 6);
        assert!(chars[..4].iter().all(|c| c.is_ascii_lowercase()));
        assert!(chars[4..].iter().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_mask_overrides_pronounceable() {
        let mut generator = seeded(
            GeneratorOptions {
                mask: Some("[1]{3}".to_string()),
                pronounceable: true,
                upper: false,
                lower: false,
                ..Default::default()
            },
            63,
        );
        let password = generator.generate().unwrap();
        assert_eq!(password.expose_secret().len(), 3);
    }

    #[test]
    fn test_generate_empty_mask() {
        let mut generator = seeded(
            GeneratorOptions {
                mask: Some(String::new()),
                ..Default::default()
            },
            64,
        );
        assert_eq!(generator.generate().unwrap().expose_secret(), "");
    }

    #[test]
    fn test_generate_pronounceable() {
        let mut generator = seeded(
            GeneratorOptions {
                pronounceable: true,
                password_length: 10,
                upper: false,
                ..Default::default()
            },
            65,
        );
        let password = generator.generate().unwrap();
        assert_eq!(password.expose_secret().chars().count(), 10);
    }

    #[test]
    fn test_generate_pronounceable_without_letters() {
        let options = GeneratorOptions {
            pronounceable: true,
            upper: false,
            lower: false,
            ..Default::default()
        };
        let mut generator =
            PasswordGenerator::with_source(options, CountingSource::new(StdRng::seed_from_u64(66)));
        assert_eq!(
            generator.generate().unwrap_err(),
            GeneratorError::NoLetterClasses
        );
        assert_eq!(generator.rng.calls, 0);
    }

    #[test]
    fn test_generate_leaves_accumulator_alone() {
        let mut generator = seeded(GeneratorOptions::default(), 67);
        generator.add_lower(3, None).unwrap();
        let before = generator.password().expose_secret().to_string();
        generator.generate().unwrap();
        assert_eq!(generator.password().expose_secret(), before);
    }

    #[test]
    fn test_options_changes_apply_to_next_call() {
        let mut generator = seeded(GeneratorOptions::default(), 68);
        generator.options_mut().password_length = 30;
        assert_eq!(generator.generate().unwrap().expose_secret().len(), 30);
        assert_eq!(generator.options().password_length, 30);
    }

    #[test]
    fn test_chained_appends_keep_order() {
        let mut generator = seeded(GeneratorOptions::default(), 69);
        generator
            .clear()
            .add_lower(3, 3)
            .unwrap()
            .add_number(2, 2)
            .unwrap();
        let password = generator.password();
        let chars: Vec<char> = password.expose_secret().chars().collect();
        assert_eq!(chars.len(), 5);
        assert!(chars[..3].iter().all(|c| c.is_ascii_lowercase()));
        assert!(chars[3..].iter().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_add_upper_and_special() {
        let mut generator = seeded(GeneratorOptions::default(), 70);
        generator.add_upper(2, None).unwrap().add_special(1, 4).unwrap();
        let password = generator.password();
        let chars: Vec<char> = password.expose_secret().chars().collect();
        assert!((3..=6).contains(&chars.len()));
        assert!(chars[..2].iter().all(|c| c.is_ascii_uppercase()));
        assert!(chars[2..].iter().all(|c| crate::alphabet::SPECIAL_ALPHABET.contains(*c)));
    }

    #[test]
    fn test_appends_accumulate_until_cleared() {
        let mut generator = seeded(GeneratorOptions::default(), 71);
        generator.add_lower(2, None).unwrap();
        generator.add_lower(2, None).unwrap();
        assert_eq!(generator.password().expose_secret().len(), 4);
        generator.clear();
        assert_eq!(generator.password().expose_secret(), "");
    }

    #[test]
    fn test_shuffle_accumulator() {
        let mut generator = seeded(GeneratorOptions::default(), 72);
        generator.add_lower(6, None).unwrap().add_number(6, None).unwrap();
        let mut before: Vec<char> = generator.password().expose_secret().chars().collect();
        generator.shuffle(None).shuffle(3);
        let mut after: Vec<char> = generator.password().expose_secret().chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_zero_times_is_noop() {
        let mut generator = seeded(GeneratorOptions::default(), 73);
        generator.add_lower(8, None).unwrap();
        let before = generator.password().expose_secret().to_string();
        generator.shuffle(0);
        assert_eq!(generator.password().expose_secret(), before);
    }

    #[test]
    fn test_append_empty_alphabet() {
        let mut generator = seeded(
            GeneratorOptions {
                special_alphabet: String::new(),
                ..Default::default()
            },
            74,
        );
        assert!(matches!(
            generator.add_special(1, None),
            Err(GeneratorError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut generator = seeded(GeneratorOptions::default(), 75);
        generator.add_lower(5, None).unwrap();
        let secret = generator.password().expose_secret().to_string();
        let debug = format!("{:?}", generator);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&secret));
    }

    #[test]
    fn test_generate_password_helper() {
        let options = GeneratorOptions {
            password_length: 20,
            max_retries: None,
            ..Default::default()
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.expose_secret().len(), 20);
    }
}
