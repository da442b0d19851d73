use crate::features::FeatureRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub id: String,
    pub probability: f64,
    /// Fraction of the key input fields that were actually present.
    pub confidence: f64,
    pub factors: Vec<Factor>,
}

/// Transparent additive scorer. Every fired rule is reported as a signed
/// factor; the contract is determinism and explainability, not calibration.
/// Weights are carried in tenths so the additive score stays exact in floats.
pub fn predict(feature: &FeatureRecord) -> PredictionResult {
    let rules: [(&str, i32, bool); 7] = [
        ("positive sentiment", 3, feature.sentiment_score > 0),
        ("three or more methodologies", 2, feature.methodology_count >= 3),
        ("institutional backing", 1, feature.has_institution),
        ("published within the last year", 1, feature.is_recent),
        ("two or more dimensions", 2, feature.dimensions.len() >= 2),
        ("thin description (under 50 words)", -2, feature.word_count < 50),
        ("no keyword tags", -1, feature.keyword_count == 0),
    ];

    let mut tenths = 0i32;
    let mut factors = Vec::new();
    for (name, weight, fired) in rules {
        if fired {
            tenths += weight;
            factors.push(Factor {
                name: name.to_string(),
                weight: weight as f64 / 10.0,
            });
        }
    }
    let probability = tenths.clamp(0, 10) as f64 / 10.0;

    let present = [
        feature.has_description,
        !feature.dimensions.is_empty(),
        feature.keyword_count > 0,
        feature.has_institution,
    ];
    let confidence = present.iter().filter(|p| **p).count() as f64 / present.len() as f64;

    PredictionResult {
        id: feature.id.clone(),
        probability,
        confidence,
        factors,
    }
}
