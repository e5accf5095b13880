//! Lexicon-based sentiment polarity.
//!
//! Every word found in the bundled lexicon contributes its polarity, scaled
//! by the modifiers that precede it:
//!
//! - intensifiers (`very`, `really`, `extremely`, ...) multiply it
//! - negators (`not`, `never`, `don't`, ...) flip and halve it
//!
//! Modifiers apply to the next scored word and are dropped after
//! [`MODIFIER_WINDOW`] unscored words. The text's polarity is the mean of
//! the scored words, or `0.0` when none is found.

use crate::tokenize;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Unscored words a pending modifier survives
pub const MODIFIER_WINDOW: usize = 3;

/// Factor applied to a negated word's polarity
const NEGATION_FACTOR: f32 = -0.5;

static LEXICON: Lazy<HashMap<String, f32>> = Lazy::new(|| {
    let raw = include_str!("../data/sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, f32>>(raw).unwrap_or_else(|e| {
        tracing::error!("Bundled sentiment lexicon is invalid, scoring everything neutral: {}", e);
        HashMap::new()
    })
});

/// Coarse sentiment of a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Whether two polarities fall on the same side of zero.
///
/// Zero counts as non-negative, so neutral text matches positive text.
pub fn same_sign_class(a: f32, b: f32) -> bool {
    (a >= 0.0) == (b >= 0.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Polarity of `text` in `[-1, 1]`
    pub fn polarity(&self, text: &str) -> f32 {
        let mut scores: Vec<f32> = Vec::new();
        let mut intensity = 1.0_f32;
        let mut negated = false;
        let mut since_modifier = 0usize;

        for word in tokenize::words(text) {
            if let Some(factor) = intensifier(&word) {
                intensity *= factor;
                since_modifier = 0;
                continue;
            }
            if is_negator(&word) {
                negated = true;
                since_modifier = 0;
                continue;
            }

            match LEXICON.get(word.as_str()) {
                Some(&base) => {
                    let mut score = (base * intensity).clamp(-1.0, 1.0);
                    if negated {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score);
                    intensity = 1.0;
                    negated = false;
                    since_modifier = 0;
                }
                None => {
                    since_modifier += 1;
                    if since_modifier >= MODIFIER_WINDOW {
                        intensity = 1.0;
                        negated = false;
                    }
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        mean.clamp(-1.0, 1.0)
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

fn intensifier(word: &str) -> Option<f32> {
    let factor = match word {
        "very" | "really" | "truly" | "so" | "too" | "most" => 1.3,
        "extremely" | "incredibly" | "absolutely" | "utterly" => 1.5,
        "super" | "totally" | "deeply" | "highly" => 1.4,
        "quite" | "pretty" => 1.1,
        "somewhat" | "fairly" => 0.7,
        "slightly" | "barely" => 0.5,
        _ => return None,
    };
    Some(factor)
}

fn is_negator(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "none" | "nobody" | "nothing" | "neither" | "nor" | "cannot"
            | "without" | "hardly"
    ) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(text: &str) -> f32 {
        SentimentAnalyzer::new().polarity(text)
    }

    #[test]
    fn lexicon_is_loaded() {
        assert!(LEXICON.len() > 100);
        assert!(LEXICON.values().all(|p| (-1.0..=1.0).contains(p)));
    }

    #[test]
    fn positive_and_negative_text() {
        assert!(polarity("I feel great") > 0.0);
        assert!(polarity("A joyful romp") > 0.0);
        assert!(polarity("A sad and brutal story of loss") < 0.0);
    }

    #[test]
    fn text_without_sentiment_words_is_neutral() {
        assert_eq!(polarity("A man walks to the store"), 0.0);
        assert_eq!(polarity(""), 0.0);
        assert_eq!(SentimentAnalyzer::new().sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let plain = polarity("happy");
        let negated = polarity("not happy");

        assert!(negated < 0.0);
        assert!((negated - plain * NEGATION_FACTOR).abs() < 1e-6);
        assert!(polarity("I don't feel good") < 0.0);
    }

    #[test]
    fn intensifiers_strengthen_up_to_the_bound() {
        assert!(polarity("very good") > polarity("good"));
        assert_eq!(polarity("extremely excellent"), 1.0);
        assert!(polarity("slightly sad") > polarity("sad"));
    }

    #[test]
    fn modifiers_expire_after_window() {
        assert_eq!(polarity("not at all happy"), polarity("happy") * NEGATION_FACTOR);
        assert_eq!(polarity("not one two three happy"), polarity("happy"));
    }

    #[test]
    fn polarity_is_mean_of_scored_words() {
        let expected = (LEXICON["great"] + LEXICON["sad"]) / 2.0;
        assert!((polarity("great but sad") - expected).abs() < 1e-6);
    }

    #[test]
    fn sign_classes() {
        assert!(same_sign_class(0.0, 0.5));
        assert!(same_sign_class(-0.1, -0.9));
        assert!(!same_sign_class(0.0, -0.1));
        assert_eq!(Sentiment::from_polarity(0.2), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-0.2), Sentiment::Negative);
    }
}
