//! Pronounceable strategy - trigram walk with random substitutions.

use super::StrategyResult;
use crate::alphabet;
use crate::error::GeneratorError;
use crate::options::GeneratorOptions;
use crate::picker::{Picker, check_retries};
use crate::random::RandomSource;
use crate::trigram::TrigramTable;

/// Substitution codes drawn from `0..=25` for every accepted letter.
const TO_DIGIT: usize = 7;
const TO_SPECIAL: usize = 11;
const TO_UPPER: [usize; 3] = [4, 17, 21];
const MAX_OPERATION: usize = 25;

/// Builds a password from trigram walks until `password_length` is reached.
///
/// A walk is kept only if all three letters pass validation; otherwise it is thrown
/// away whole and a new walk starts. The last walk may overshoot, so the result is
/// truncated to exactly `password_length` characters.
///
/// Lowercase letters from the similar set (such as `l`) are not filtered, and in
/// uppercase-only mode neither are `O` and `I`.
pub(crate) fn pronounceable_strategy<R: RandomSource>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> StrategyResult {
    if !options.upper && !options.lower {
        #[cfg(feature = "tracing")]
        tracing::error!("Pronounceable mode requested without letter classes");
        return Err(GeneratorError::NoLetterClasses);
    }

    let table = TrigramTable::builtin();
    let mut picker = Picker::new(options, rng);
    let mut password: Vec<char> = Vec::new();
    let mut abandoned = 0;

    while password.len() < options.password_length {
        let trigram = table.walk(picker.rng());
        match mutate_trigram(options, &mut picker, trigram)? {
            Some(letters) => password.extend(letters),
            None => {
                abandoned += 1;
                check_retries(abandoned, picker.max_retries())?;
            }
        }
    }

    password.truncate(options.password_length);
    Ok(password.into_iter().collect())
}

/// Runs all three letters through [`validate_and_mutate`], stopping at the first
/// rejection.
fn mutate_trigram<R: RandomSource>(
    options: &GeneratorOptions,
    picker: &mut Picker<'_, R>,
    trigram: [char; 3],
) -> Result<Option<[char; 3]>, GeneratorError> {
    let mut out = trigram;
    for slot in &mut out {
        match validate_and_mutate(options, picker, *slot)? {
            Some(c) => *slot = c,
            None => return Ok(None),
        }
    }
    Ok(Some(out))
}

/// Validates one letter for the configured case and maybe replaces it.
///
/// Returns `Ok(None)` when the letter is rejected.
fn validate_and_mutate<R: RandomSource>(
    options: &GeneratorOptions,
    picker: &mut Picker<'_, R>,
    letter: char,
) -> Result<Option<char>, GeneratorError> {
    let letter = if options.upper && !options.lower {
        let upper = letter.to_ascii_uppercase();
        if !alphabet::contains(&options.upper_alphabet, upper) {
            return Ok(None);
        }
        upper
    } else {
        if !alphabet::contains(&options.lower_alphabet, letter) {
            return Ok(None);
        }
        letter
    };

    let operation = picker.rng().next_int(0, MAX_OPERATION);
    let mutated = match operation {
        TO_DIGIT if options.numbers => substitute(picker, &options.numbers_alphabet)?,
        TO_SPECIAL if options.special => substitute(picker, &options.special_alphabet)?,
        op if TO_UPPER.contains(&op) && options.upper => {
            let upper = letter.to_ascii_uppercase();
            if picker.is_excluded(upper) {
                return Ok(None);
            }
            upper
        }
        _ => letter,
    };
    Ok(Some(mutated))
}

/// Draws one replacement character, redrawing while it falls in the similar set.
fn substitute<R: RandomSource>(
    picker: &mut Picker<'_, R>,
    alphabet: &str,
) -> Result<char, GeneratorError> {
    let mut redraws = 0;
    let mut replacement = draw_unfiltered(picker, alphabet)?;
    while picker.is_excluded(replacement) {
        redraws += 1;
        check_retries(redraws, picker.max_retries())?;
        replacement = draw_unfiltered(picker, alphabet)?;
    }
    Ok(replacement)
}

fn draw_unfiltered<R: RandomSource>(
    picker: &mut Picker<'_, R>,
    alphabet: &str,
) -> Result<char, GeneratorError> {
    picker.unfiltered().pick_one(alphabet)
}
