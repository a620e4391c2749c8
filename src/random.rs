//! Random number source used by every generation step.

use rand::Rng;

/// Source of uniformly distributed numbers.
///
/// Implemented for every [`rand::Rng`], so `rand::rng()` or a seeded `StdRng` can be
/// handed to a generator directly. No entropy quality is implied.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`. A `max` below `min` is treated as `min`.
    fn next_int(&mut self, min: usize, max: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, min: usize, max: usize) -> usize {
        self.random_range(min..=max.max(min))
    }

    fn next_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// `floor(sample * len)`, clamped so float rounding never yields `len`.
#[inline]
pub(crate) fn scaled_index(sample: f64, len: usize) -> usize {
    ((sample * len as f64) as usize).min(len.saturating_sub(1))
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_next_int_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let n = rng.next_int(3, 9);
            assert!((3..=9).contains(&n));
        }
    }

    #[test]
    fn test_next_int_inverted_bounds_collapse_to_min() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert_eq!(rng.next_int(5, 2), 5);
        }
    }

    #[test]
    fn test_next_float_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_scaled_index() {
        assert_eq!(scaled_index(0.0, 10), 0);
        assert_eq!(scaled_index(0.55, 10), 5);
        assert_eq!(scaled_index(0.999_999_999_999, 10), 9);
        assert_eq!(scaled_index(1.0, 10), 9);
    }
}
