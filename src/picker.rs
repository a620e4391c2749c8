//! Character picker with similar-character exclusion.

use crate::error::GeneratorError;
use crate::options::GeneratorOptions;
use crate::random::{RandomSource, scaled_index};

/// Draws runs of characters from an alphabet.
///
/// While exclusion is active, a drawn character from the similar set is thrown away
/// and drawn again without counting toward the run length. Without a retry limit an
/// alphabet made only of similar characters never returns; that is left to the caller.
pub(crate) struct Picker<'a, R> {
    rng: &'a mut R,
    similar: &'a str,
    exclude_similar: bool,
    max_retries: Option<usize>,
}

impl<'a, R: RandomSource> Picker<'a, R> {
    pub(crate) fn new(options: &'a GeneratorOptions, rng: &'a mut R) -> Self {
        Self {
            rng,
            similar: &options.similar_alphabet,
            exclude_similar: options.excludes_similar(),
            max_retries: options.max_retries,
        }
    }

    /// Borrows a picker that accepts every draw regardless of the similar set.
    pub(crate) fn unfiltered(&mut self) -> Picker<'_, R> {
        Picker {
            rng: &mut *self.rng,
            similar: self.similar,
            exclude_similar: false,
            max_retries: self.max_retries,
        }
    }

    pub(crate) fn rng(&mut self) -> &mut R {
        self.rng
    }

    /// Whether `c` would be rejected under the configured exclusion policy.
    pub(crate) fn is_excluded(&self, c: char) -> bool {
        self.exclude_similar && self.similar.contains(c)
    }

    pub(crate) fn max_retries(&self) -> Option<usize> {
        self.max_retries
    }

    /// Picks between `min` and `max` characters from `alphabet`.
    pub(crate) fn pick(
        &mut self,
        min: usize,
        max: usize,
        alphabet: &str,
    ) -> Result<String, GeneratorError> {
        let target = self.rng.next_int(min, max);
        if target == 0 {
            return Ok(String::new());
        }

        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        let mut picked = String::new();
        let mut accepted = 0;
        let mut rejected = 0;
        while accepted < target {
            let c = chars[scaled_index(self.rng.next_float(), chars.len())];
            if self.is_excluded(c) {
                rejected += 1;
                check_retries(rejected, self.max_retries)?;
                continue;
            }
            picked.push(c);
            accepted += 1;
        }
        Ok(picked)
    }

    /// Picks exactly one character.
    pub(crate) fn pick_one(&mut self, alphabet: &str) -> Result<char, GeneratorError> {
        self.pick(1, 1, alphabet)?
            .chars()
            .next()
            .ok_or(GeneratorError::EmptyAlphabet)
    }
}

/// Fails once `attempts` goes past `limit`.
pub(crate) fn check_retries(attempts: usize, limit: Option<usize>) -> Result<(), GeneratorError> {
    match limit {
        Some(limit) if attempts > limit => {
            #[cfg(feature = "tracing")]
            tracing::error!("Retry limit of {} exceeded", limit);
            Err(GeneratorError::RetryLimitExceeded(limit))
        }
        _ => Ok(()),
    }
}
