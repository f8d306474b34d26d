//! Effort estimate: fixed bucket policy evaluated top-down, first match wins.

use serde::{Deserialize, Serialize};

use super::keywords::{COMPLEX_INDICATORS, MEDIUM_INDICATORS, QUICK_INDICATORS};

/// Effort bucket.
///
/// Ordering of evaluation:
/// - Quick (< 1 hour)
/// - Medium (1-3 hours)
/// - Complex (3-8 hours)
/// - Default when nothing matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Quick,
    Medium,
    Complex,
    Default,
}

impl Effort {
    /// Buckets with indicators, in evaluation order.
    const POLICY: [(Effort, &'static [&'static str]); 3] = [
        (Effort::Quick, QUICK_INDICATORS),
        (Effort::Medium, MEDIUM_INDICATORS),
        (Effort::Complex, COMPLEX_INDICATORS),
    ];

    /// Classify lower-cased task text. Total: every text lands in exactly one bucket.
    pub fn classify(text: &str) -> Self {
        Self::POLICY
            .iter()
            .find(|(_, indicators)| indicators.iter().any(|word| text.contains(word)))
            .map(|(effort, _)| *effort)
            .unwrap_or(Effort::Default)
    }

    pub fn hours(self) -> f64 {
        match self {
            Effort::Quick => 0.5,
            Effort::Medium => 2.0,
            Effort::Complex => 6.0,
            Effort::Default => 3.0,
        }
    }
}

/// Estimated hours for lower-cased task text.
pub fn estimated_hours(text: &str) -> f64 {
    Effort::classify(text).hours()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::quick_post("post on forum", Effort::Quick)]
    #[case::quick_beats_medium("write a quick note", Effort::Quick)]
    #[case::quick_beats_complex("simple bot", Effort::Quick)]
    #[case::medium_write("write an essay", Effort::Medium)]
    #[case::medium_beats_complex("create a system", Effort::Medium)]
    #[case::complex_build("build pipeline", Effort::Complex)]
    #[case::complex_substring("robotics", Effort::Complex)]
    #[case::nothing("translate a page", Effort::Default)]
    #[case::empty("", Effort::Default)]
    fn buckets_are_first_match(#[case] text: &str, #[case] expected: Effort) {
        assert_eq!(Effort::classify(text), expected);
    }

    #[test]
    fn hours_come_from_fixed_set() {
        let allowed = [0.5, 2.0, 6.0, 3.0];
        for text in ["", "quick", "analyze", "comprehensive", "paint a wall", "xyz"] {
            assert!(allowed.contains(&estimated_hours(text)));
        }
    }

    #[test]
    fn bucket_hours() {
        assert_eq!(Effort::Quick.hours(), 0.5);
        assert_eq!(Effort::Medium.hours(), 2.0);
        assert_eq!(Effort::Complex.hours(), 6.0);
        assert_eq!(Effort::Default.hours(), 3.0);
    }
}
