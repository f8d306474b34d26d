//! Keyword tables for suitability scoring and effort estimation.
//!
//! Policy lives here as data so it can be tested and extended without
//! touching control flow in `suitability` / `estimate`.

/// Weight added per matching high-value keyword.
pub const HIGH_WEIGHT: f64 = 2.0;
/// Weight added per matching medium-value keyword.
pub const MEDIUM_WEIGHT: f64 = 1.0;
/// Weight added (negative) per matching low-value keyword.
pub const LOW_WEIGHT: f64 = -2.0;
/// Flat bonus for favoured task types, applied once.
pub const FAVORED_TYPE_BONUS: f64 = 2.0;

/// Work an agent does well.
pub const HIGH_VALUE: &[&str] = &[
    "write",
    "research",
    "analyze",
    "code",
    "develop",
    "create content",
    "data analysis",
    "summarize",
    "translate",
    "documentation",
];

pub const MEDIUM_VALUE: &[&str] = &["post", "comment", "review", "feedback", "test", "report"];

/// Work that needs hands, eyes or ears.
pub const LOW_VALUE: &[&str] = &["design", "art", "video", "audio", "manual", "physical"];

/// Every `(keyword, weight)` pair, in evaluation order.
pub fn weighted_keywords() -> impl Iterator<Item = (&'static str, f64)> {
    let high = HIGH_VALUE.iter().map(|k| (*k, HIGH_WEIGHT));
    let medium = MEDIUM_VALUE.iter().map(|k| (*k, MEDIUM_WEIGHT));
    let low = LOW_VALUE.iter().map(|k| (*k, LOW_WEIGHT));
    high.chain(medium).chain(low)
}

pub const QUICK_INDICATORS: &[&str] = &["post", "comment", "simple", "quick"];
pub const MEDIUM_INDICATORS: &[&str] = &["write", "create", "analyze"];
pub const COMPLEX_INDICATORS: &[&str] = &["build", "develop", "bot", "system", "comprehensive"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_keywords_cover_every_tier() {
        let all: Vec<_> = weighted_keywords().collect();
        assert_eq!(
            all.len(),
            HIGH_VALUE.len() + MEDIUM_VALUE.len() + LOW_VALUE.len()
        );
        assert_eq!(all[0], ("write", 2.0));
        assert!(all.contains(&("report", 1.0)));
        assert!(all.contains(&("physical", -2.0)));
    }

    #[test]
    fn keywords_are_lowercase() {
        for (keyword, _) in weighted_keywords() {
            assert_eq!(keyword, keyword.to_lowercase());
        }
    }
}
