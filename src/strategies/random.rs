//! Random strategy - uniform draw over every enabled alphabet.

use super::StrategyResult;
use crate::alphabet::CharClasses;
use crate::options::GeneratorOptions;
use crate::picker::Picker;
use crate::random::RandomSource;

const ALPHABET_ORDER: [CharClasses; 4] = [
    CharClasses::UPPER,
    CharClasses::LOWER,
    CharClasses::DIGIT,
    CharClasses::SPECIAL,
];

/// Draws `password_length` characters from the enabled alphabets, concatenated in the
/// order upper, lower, numbers, special.
///
/// No class is guaranteed to appear in the result.
pub(crate) fn random_strategy<R: RandomSource>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> StrategyResult {
    let enabled = options.enabled_classes();
    let alphabet: String = ALPHABET_ORDER
        .into_iter()
        .filter(|class| enabled.contains(*class))
        .map(|class| options.alphabet(class))
        .collect();

    let length = options.password_length;
    Picker::new(options, rng).pick(length, length, &alphabet)
}
