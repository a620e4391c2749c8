//! Mask grammar.
//!
//! A mask is a sequence of tokens `[<classes>]{min}` or `[<classes>]{min,max}`, where
//! `<classes>` combines `a` (lowercase), `A` (uppercase), `1` (digits) and `@`
//! (special characters). Anything else in the mask is skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::alphabet::CharClasses;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([aA1@]+)\]\{([0-9]+),*([0-9]*)\}").expect("mask token pattern is valid")
});

/// One token of a parsed mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSegment {
    pub classes: CharClasses,
    pub min: usize,
    /// Never below `min`.
    pub max: usize,
}

/// Parses `mask` into segments, in the order they appear.
///
/// Malformed tokens are dropped silently, so a mask without any valid token yields an
/// empty list.
pub fn parse_mask(mask: &str) -> Vec<MaskSegment> {
    TOKEN
        .captures_iter(mask)
        .filter_map(|caps| {
            let min: usize = caps[2].parse().ok()?;
            let max = match &caps[3] {
                "" => min,
                raw => raw.parse::<usize>().ok()?.max(min),
            };
            Some(MaskSegment {
                classes: CharClasses::from_markers(&caps[1]),
                min,
                max,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_count() {
        let segments = parse_mask("[a]{4}");
        assert_eq!(
            segments,
            vec![MaskSegment {
                classes: CharClasses::LOWER,
                min: 4,
                max: 4
            }]
        );
    }

    #[test]
    fn test_parse_range_and_order() {
        let segments = parse_mask("[a]{1,4}[@]{2}[1A]{1}");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].classes, CharClasses::LOWER);
        assert_eq!((segments[0].min, segments[0].max), (1, 4));
        assert_eq!(segments[1].classes, CharClasses::SPECIAL);
        assert_eq!((segments[1].min, segments[1].max), (2, 2));
        assert_eq!(segments[2].classes, CharClasses::DIGIT | CharClasses::UPPER);
        assert_eq!((segments[2].min, segments[2].max), (1, 1));
    }

    #[test]
    fn test_parse_empty_max_defaults_to_min() {
        let segments = parse_mask("[1]{3,}");
        assert_eq!((segments[0].min, segments[0].max), (3, 3));
    }

    #[test]
    fn test_parse_repeated_commas() {
        let segments = parse_mask("[A]{2,,,5}");
        assert_eq!((segments[0].min, segments[0].max), (2, 5));
    }

    #[test]
    fn test_parse_inverted_bounds_collapse_to_min() {
        let segments = parse_mask("[a]{5,2}");
        assert_eq!((segments[0].min, segments[0].max), (5, 5));
    }

    #[test]
    fn test_parse_skips_noise() {
        let segments = parse_mask("pre[a]{2}-mid-[x]{3}[1]{}[@]{1}post");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].classes, CharClasses::LOWER);
        assert_eq!(segments[1].classes, CharClasses::SPECIAL);
    }

    #[test]
    fn test_parse_no_tokens() {
        assert!(parse_mask("").is_empty());
        assert!(parse_mask("just text").is_empty());
        assert!(parse_mask("[b]{2}").is_empty());
    }

    #[test]
    fn test_parse_overflowing_count_is_dropped() {
        let segments = parse_mask("[a]{99999999999999999999999}[1]{2}");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].classes, CharClasses::DIGIT);
    }
}
