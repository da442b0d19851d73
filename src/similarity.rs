use crate::features::FeatureRecord;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("unknown record id: {0}")]
    UnknownRecord(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarMatch {
    pub id: String,
    pub score: f64,
    pub shared_dimensions: Vec<String>,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub target_id: String,
    pub matches: Vec<SimilarMatch>,
}

/// Rank the `top_k` records most similar to `target_id`. The target itself is
/// never a candidate; an id absent from the corpus is a caller error, distinct
/// from an empty result.
pub fn find_similar(
    features: &[FeatureRecord],
    target_id: &str,
    top_k: usize,
) -> Result<SimilarityResult, SimilarityError> {
    let target = features
        .iter()
        .find(|f| f.id == target_id)
        .ok_or_else(|| SimilarityError::UnknownRecord(target_id.to_string()))?;

    let mut matches: Vec<SimilarMatch> = features
        .iter()
        .filter(|f| f.id != target_id)
        .map(|f| score_pair(target, f))
        .collect();
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    matches.truncate(top_k);

    Ok(SimilarityResult {
        target_id: target_id.to_string(),
        matches,
    })
}

/// Unweighted mean of the sub-scores whose inputs are defined. Each sub-score
/// lives in [0, 1]; sentiment closeness is always defined, so the mean never
/// divides by zero.
fn score_pair(a: &FeatureRecord, b: &FeatureRecord) -> SimilarMatch {
    let mut parts: Vec<f64> = Vec::with_capacity(3);
    let mut reasons: Vec<String> = Vec::new();
    let mut shared: Vec<String> = Vec::new();

    if !a.dimensions.is_empty() && !b.dimensions.is_empty() {
        let b_set: AHashSet<&str> = b.dimensions.iter().map(String::as_str).collect();
        shared = a
            .dimensions
            .iter()
            .filter(|d| b_set.contains(d.as_str()))
            .cloned()
            .collect();
        shared.sort();
        shared.dedup();
        let overlap = shared.len() as f64 / a.dimensions.len().max(b.dimensions.len()) as f64;
        parts.push(overlap);
        if !shared.is_empty() {
            reasons.push(format!("share {} research dimension(s)", shared.len()));
        }
    }

    let closeness = 1.0 - ((a.sentiment_score - b.sentiment_score).abs() as f64 / 10.0).min(1.0);
    parts.push(closeness);
    if closeness >= 0.8 {
        reasons.push("similar sentiment profile".to_string());
    }

    if !a.study_type.is_empty() && !b.study_type.is_empty() {
        let same = a.study_type == b.study_type;
        parts.push(if same { 1.0 } else { 0.0 });
        if same {
            reasons.push(format!("same study type ({})", a.study_type));
        }
    }

    let score = parts.iter().sum::<f64>() / parts.len() as f64;
    SimilarMatch {
        id: b.id.clone(),
        score,
        shared_dimensions: shared,
        reasons,
    }
}
