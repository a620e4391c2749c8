use proptest::prelude::*;
use pwd_generator::{
    GeneratorError, GeneratorOptions, LOWER_ALPHABET, NUMBERS_ALPHABET, PasswordGenerator,
    SIMILAR_ALPHABET, SPECIAL_ALPHABET, UPPER_ALPHABET, shuffle,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use secrecy::ExposeSecret;

fn generator(options: GeneratorOptions, seed: u64) -> PasswordGenerator<StdRng> {
    PasswordGenerator::with_source(
        GeneratorOptions {
            max_retries: None,
            ..options
        },
        StdRng::seed_from_u64(seed),
    )
}

fn sorted(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

proptest! {
    #[test]
    fn random_password_has_requested_length(
        seed in any::<u64>(),
        length in 0usize..128,
        upper in any::<bool>(),
        lower in any::<bool>(),
        numbers in any::<bool>(),
        special in any::<bool>(),
        similar in any::<bool>(),
    ) {
        prop_assume!(upper || lower || numbers || special);
        let options = GeneratorOptions {
            password_length: length,
            upper,
            lower,
            numbers,
            special,
            similar,
            ..Default::default()
        };
        let password = generator(options, seed).generate().unwrap();
        prop_assert_eq!(password.expose_secret().chars().count(), length);
    }

    #[test]
    fn random_and_mask_skip_similar_characters(seed in any::<u64>(), use_mask in any::<bool>()) {
        let options = GeneratorOptions {
            password_length: 64,
            mask: use_mask.then(|| "[aA1@]{4,12}[1]{3}".to_string()),
            ..Default::default()
        };
        let password = generator(options, seed).generate().unwrap();
        prop_assert!(!password.expose_secret().chars().any(|c| SIMILAR_ALPHABET.contains(c)));
    }

    #[test]
    fn unshuffled_mask_keeps_segment_layout(seed in any::<u64>()) {
        let options = GeneratorOptions {
            mask: Some("[a]{4}[1]{2,2}".to_string()),
            shuffle_mask: false,
            ..Default::default()
        };
        let password = generator(options, seed).generate().unwrap();
        let chars: Vec<char> = password.expose_secret().chars().collect();
        prop_assert_eq!(chars.len(), 6);
        prop_assert!(chars[..4].iter().all(|c| LOWER_ALPHABET.contains(*c)));
        prop_assert!(chars[4..].iter().all(|c| NUMBERS_ALPHABET.contains(*c)));
    }

    #[test]
    fn mask_without_tokens_is_empty(seed in any::<u64>(), text in "[^\\[]*") {
        let options = GeneratorOptions {
            mask: Some(text),
            ..Default::default()
        };
        let password = generator(options, seed).generate().unwrap();
        prop_assert_eq!(password.expose_secret(), "");
    }

    #[test]
    fn pronounceable_lowercase_stays_in_alphabets(seed in any::<u64>()) {
        let options = GeneratorOptions {
            pronounceable: true,
            password_length: 10,
            upper: false,
            lower: true,
            ..Default::default()
        };
        let password = generator(options, seed).generate().unwrap();
        let password = password.expose_secret();
        prop_assert_eq!(password.chars().count(), 10);
        let all_known = password.chars().all(|c| {
            [LOWER_ALPHABET, UPPER_ALPHABET, NUMBERS_ALPHABET, SPECIAL_ALPHABET]
                .iter()
                .any(|a| a.contains(c))
        });
        prop_assert!(all_known, "unexpected character in {:?}", password);
    }

    #[test]
    fn pronounceable_length_is_exact(seed in any::<u64>(), length in 0usize..64, upper in any::<bool>()) {
        let options = GeneratorOptions {
            pronounceable: true,
            password_length: length,
            upper,
            ..Default::default()
        };
        let password = generator(options, seed).generate().unwrap();
        prop_assert_eq!(password.expose_secret().chars().count(), length);
    }

    #[test]
    fn shuffle_is_an_anagram(seed in any::<u64>(), input in ".{0,64}") {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle(&mut rng, &input);
        prop_assert_eq!(sorted(&shuffled), sorted(&input));
    }

    #[test]
    fn chained_appends_preserve_order(seed in any::<u64>(), lower in 0usize..8, digits in 0usize..8) {
        let mut generator = generator(GeneratorOptions::default(), seed);
        generator
            .clear()
            .add_lower(lower, lower)
            .unwrap()
            .add_number(digits, digits)
            .unwrap();
        let password = generator.password();
        let chars: Vec<char> = password.expose_secret().chars().collect();
        prop_assert_eq!(chars.len(), lower + digits);
        prop_assert!(chars[..lower].iter().all(|c| LOWER_ALPHABET.contains(*c)));
        prop_assert!(chars[lower..].iter().all(|c| NUMBERS_ALPHABET.contains(*c)));
    }
}

#[test]
fn shuffle_trivial_inputs() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(shuffle(&mut rng, ""), "");
    assert_eq!(shuffle(&mut rng, "a"), "a");
}

#[test]
fn pronounceable_without_letters_is_rejected() {
    let options = GeneratorOptions {
        pronounceable: true,
        upper: false,
        lower: false,
        ..Default::default()
    };
    let result = generator(options, 1).generate();
    assert_eq!(result.unwrap_err(), GeneratorError::NoLetterClasses);
}
