//! Mask strategy - builds the password segment by segment.

use super::StrategyResult;
use crate::mask::parse_mask;
use crate::options::GeneratorOptions;
use crate::picker::Picker;
use crate::random::RandomSource;
use crate::shuffle::shuffle;

/// Expands `mask` into a password.
///
/// Every class of a segment contributes its own `min..=max` run; the runs are shuffled
/// together before the segment is appended. With `shuffle_mask` the assembled password
/// is shuffled once more. Class flags and `password_length` are ignored here.
pub(crate) fn mask_strategy<R: RandomSource>(
    options: &GeneratorOptions,
    rng: &mut R,
    mask: &str,
) -> StrategyResult {
    let segments = parse_mask(mask);
    if segments.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Mask contains no valid tokens, generating an empty password");
        return Ok(String::new());
    }

    let mut picker = Picker::new(options, rng);
    let mut password = String::new();
    for segment in &segments {
        let mut part = String::new();
        for class in segment.classes.iter() {
            part.push_str(&picker.pick(segment.min, segment.max, options.alphabet(class))?);
        }
        password.push_str(&shuffle(picker.rng(), &part));
    }

    if options.shuffle_mask {
        password = shuffle(picker.rng(), &password);
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn options(shuffle_mask: bool) -> GeneratorOptions {
        GeneratorOptions {
            shuffle_mask,
            max_retries: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_mask_segments_keep_their_place() {
        let options = options(false);
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..100 {
            let password = mask_strategy(&options, &mut rng, "[a]{4}[1]{2,2}").unwrap();
            let chars: Vec<char> = password.chars().collect();
            assert_eq!(chars.len(), 6);
            assert!(chars[..4].iter().all(|c| c.is_ascii_lowercase()));
            assert!(chars[4..].iter().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_mask_multi_class_segment_length() {
        // each class contributes its own run
        let options = options(false);
        let mut rng = StdRng::seed_from_u64(42);
        let password = mask_strategy(&options, &mut rng, "[aA1@]{2}").unwrap();
        assert_eq!(password.chars().count(), 8);
        assert_eq!(password.chars().filter(|c| c.is_ascii_lowercase()).count(), 2);
        assert_eq!(password.chars().filter(|c| c.is_ascii_uppercase()).count(), 2);
        assert_eq!(password.chars().filter(|c| c.is_ascii_digit()).count(), 2);
    }

    #[test]
    fn test_mask_range_lengths() {
        let options = options(true);
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..100 {
            let len = mask_strategy(&options, &mut rng, "[a]{1,3}[@]{2}")
                .unwrap()
                .chars()
                .count();
            assert!((3..=5).contains(&len));
        }
    }

    #[test]
    fn test_mask_shuffle_keeps_characters() {
        let options = options(true);
        let mut rng = StdRng::seed_from_u64(44);
        let password = mask_strategy(&options, &mut rng, "[a]{5}[1]{5}").unwrap();
        assert_eq!(password.chars().count(), 10);
        assert_eq!(password.chars().filter(|c| c.is_ascii_digit()).count(), 5);
    }

    #[test]
    fn test_mask_ignores_class_flags() {
        let options = GeneratorOptions {
            numbers: false,
            ..options(false)
        };
        let mut rng = StdRng::seed_from_u64(45);
        let password = mask_strategy(&options, &mut rng, "[1]{3}").unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_mask_excludes_similar() {
        let options = options(true);
        let mut rng = StdRng::seed_from_u64(46);
        let password = mask_strategy(&options, &mut rng, "[aA1]{100}").unwrap();
        assert!(!password.chars().any(|c| options.is_similar(c)));
    }

    #[test]
    fn test_mask_without_tokens_is_empty() {
        let options = options(true);
        let mut rng = StdRng::seed_from_u64(47);
        assert_eq!(mask_strategy(&options, &mut rng, "").unwrap(), "");
        assert_eq!(mask_strategy(&options, &mut rng, "no tokens here").unwrap(), "");
    }
}
