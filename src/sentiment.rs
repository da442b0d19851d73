use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: Polarity,
    /// Positive hits minus negative hits.
    pub score: i64,
    /// |p - n| / (p + n); 0 when no polarity word matched at all.
    pub confidence: f64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

pub fn score_tokens(tokens: &[String], lexicon: &Lexicon) -> SentimentScore {
    let positive = tokens
        .iter()
        .filter(|t| lexicon.positive_words.contains(t.as_str()))
        .count();
    let negative = tokens
        .iter()
        .filter(|t| lexicon.negative_words.contains(t.as_str()))
        .count();
    let score = positive as i64 - negative as i64;
    let total = positive + negative;
    let polarity = match score {
        s if s > 0 => Polarity::Positive,
        s if s < 0 => Polarity::Negative,
        _ => Polarity::Neutral,
    };
    let confidence = if total == 0 {
        0.0
    } else {
        score.unsigned_abs() as f64 / total as f64
    };
    SentimentScore {
        polarity,
        score,
        confidence,
        positive_hits: positive,
        negative_hits: negative,
    }
}
