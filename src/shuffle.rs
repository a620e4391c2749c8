//! Fisher-Yates shuffling.

use crate::random::{RandomSource, scaled_index};

/// Returns a random permutation of the characters of `input`.
pub fn shuffle<R: RandomSource>(rng: &mut R, input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    shuffle_chars(rng, &mut chars);
    chars.into_iter().collect()
}

/// Shuffles `chars` in place.
pub fn shuffle_chars<R: RandomSource>(rng: &mut R, chars: &mut [char]) {
    for i in (1..chars.len()).rev() {
        let j = scaled_index(rng.next_float(), i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(shuffle(&mut rng, ""), "");
        assert_eq!(shuffle(&mut rng, "a"), "a");
    }

    #[test]
    fn test_shuffle_preserves_characters() {
        let mut rng = StdRng::seed_from_u64(22);
        let input = "aabbcc123!@#";
        for _ in 0..50 {
            let out = shuffle(&mut rng, input);
            assert_eq!(sorted(&out), sorted(input));
        }
    }

    #[test]
    fn test_shuffle_scripted_swaps() {
        // i=2: j=0 -> "cba"; i=1: j=1 -> unchanged
        let mut rng = ScriptedSource::new(&[], &[0.0, 0.99]);
        assert_eq!(shuffle(&mut rng, "abc"), "cba");
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let mut rng = StdRng::seed_from_u64(23);
        let seen: std::collections::HashSet<String> =
            (0..600).map(|_| shuffle(&mut rng, "abc")).collect();
        assert_eq!(seen.len(), 6);
    }
}
