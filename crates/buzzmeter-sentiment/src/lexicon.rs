//! Default lexicon-based polarity engine.

use std::collections::HashMap;

use crate::error::SentimentError;
use crate::scorer::PolarityEngine;

/// Normalization constant for mapping a raw valence sum into `[-1.0, 1.0]`.
const ALPHA: f64 = 15.0;

/// Word valences on a `[-4.0, 4.0]` scale.
///
/// Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("classic", 1.2),
    ("cool", 1.3),
    ("deserves", 0.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("genius", 2.1),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("iconic", 1.9),
    ("incredible", 2.5),
    ("legend", 2.0),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("proud", 2.1),
    ("queen", 1.2),
    ("stunning", 2.5),
    ("talented", 2.3),
    ("underrated", 1.2),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("yes", 1.2),
    // Negative
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("cringe", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("embarrassing", -1.6),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("lame", -1.8),
    ("mess", -1.5),
    ("no", -1.2),
    ("overrated", -1.4),
    ("pathetic", -2.7),
    ("sad", -2.1),
    ("scandal", -1.9),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("trash", -1.9),
    ("ugly", -2.3),
    ("worse", -2.1),
    ("worst", -3.1),
];

/// Sums per-word valences and squashes the sum into `[-1.0, 1.0]`.
///
/// Tokens are split on whitespace, trimmed of non-alphabetic edges and
/// lowercased. The compound is `sum / sqrt(sum^2 + 15)`. Text with no
/// known words scores `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconEngine {
    valences: HashMap<String, f64>,
}

impl LexiconEngine {
    /// Build an engine over custom `(word, valence)` entries.
    ///
    /// Words are lowercased. Later entries override earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let valences = entries
            .into_iter()
            .map(|(word, valence)| (word.as_ref().to_lowercase(), valence))
            .collect();
        Self { valences }
    }

    /// Raw valence sum for `text`, before normalization.
    #[must_use]
    pub fn valence_sum(&self, text: &str) -> f64 {
        text.split_whitespace()
            .filter_map(|word| {
                let w = word
                    .trim_matches(|c: char| !c.is_alphabetic())
                    .to_lowercase();
                self.valences.get(&w).copied()
            })
            .sum()
    }
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::from_entries(LEXICON.iter().copied())
    }
}

impl PolarityEngine for LexiconEngine {
    fn compound(&self, text: &str) -> Result<f64, SentimentError> {
        let sum = self.valence_sum(text);
        Ok((sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        LexiconEngine::default().compound(text).unwrap()
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(compound(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(compound("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(compound("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = compound("this album is great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = compound("that interview was awful");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn single_word_compound_matches_normalization() {
        // great = 3.1 -> 3.1 / sqrt(3.1^2 + 15)
        let expected = 3.1 / (3.1_f64 * 3.1 + 15.0).sqrt();
        assert!((compound("great") - expected).abs() < 1e-12);
    }

    #[test]
    fn mixed_text_returns_intermediate() {
        // love (+3.2) + boring (-1.3) = 1.9
        let score = compound("love her but the show was boring");
        assert!(score > 0.0 && score < compound("love"), "got {score}");
    }

    #[test]
    fn stacked_words_stay_within_bounds() {
        let high = compound("great amazing best love awesome perfect wonderful fantastic");
        let low = compound("worst hate awful terrible horrible pathetic trash disgusting");
        assert!(high > 0.9 && high <= 1.0, "got {high}");
        assert!(low < -0.9 && low >= -1.0, "got {low}");
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert_eq!(compound("GREAT!!!"), compound("great"));
        assert_eq!(compound("\"terrible,\""), compound("terrible"));
    }

    #[test]
    fn custom_entries_override_lexicon() {
        let engine = LexiconEngine::from_entries([("Slay", 2.0)]);
        assert!(engine.compound("she did slay").unwrap() > 0.0);
        assert_eq!(engine.compound("she was great").unwrap(), 0.0);
    }

    #[test]
    fn valence_sum_adds_known_words() {
        let engine = LexiconEngine::default();
        assert!((engine.valence_sum("good bad") - (1.9 - 2.5)).abs() < 1e-12);
    }
}
