use crate::features::FeatureRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const Z_THRESHOLD: f64 = 2.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDeviation {
    pub feature: String,
    pub value: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub z_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub id: String,
    pub deviations: Vec<FeatureDeviation>,
    /// Sum of the anomalous |z|-scores; reports are ordered by it.
    pub anomaly_score: f64,
    pub explanation: String,
}

const FEATURE_COUNT: usize = 7;

fn numeric_features(f: &FeatureRecord) -> [(&'static str, f64); FEATURE_COUNT] {
    [
        ("sentiment_score", f.sentiment_score as f64),
        ("word_count", f.word_count as f64),
        ("avg_word_length", f.avg_word_length),
        ("dimension_count", f.dimensions.len() as f64),
        ("keyword_count", f.keyword_count as f64),
        ("organization_count", f.organization_count as f64),
        ("methodology_count", f.methodology_count as f64),
    ]
}

/// Flag records whose numeric features sit more than `Z_THRESHOLD` population
/// standard deviations from the corpus mean. A zero-variance feature carries
/// no signal and is excluded for every record.
pub fn detect(features: &[FeatureRecord]) -> Vec<AnomalyReport> {
    if features.is_empty() {
        return Vec::new();
    }
    let n = features.len() as f64;
    let table: Vec<[(&'static str, f64); FEATURE_COUNT]> =
        features.iter().map(numeric_features).collect();

    let mut stats = [(0.0f64, 0.0f64); FEATURE_COUNT];
    for (col, slot) in stats.iter_mut().enumerate() {
        let mean = table.iter().map(|row| row[col].1).sum::<f64>() / n;
        let var = table
            .iter()
            .map(|row| {
                let d = row[col].1 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        *slot = (mean, var.sqrt());
    }

    let mut reports = Vec::new();
    for (f, row) in features.iter().zip(&table) {
        let mut deviations = Vec::new();
        for (col, (name, value)) in row.iter().enumerate() {
            let (mean, std_dev) = stats[col];
            if std_dev == 0.0 {
                continue;
            }
            let z = (value - mean) / std_dev;
            if z.abs() > Z_THRESHOLD {
                deviations.push(FeatureDeviation {
                    feature: name.to_string(),
                    value: *value,
                    mean,
                    std_dev,
                    z_score: z,
                });
            }
        }
        if deviations.is_empty() {
            continue;
        }
        let anomaly_score: f64 = deviations.iter().map(|d| d.z_score.abs()).sum();
        let explanation = deviations
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join("; ");
        reports.push(AnomalyReport {
            id: f.id.clone(),
            deviations,
            anomaly_score,
            explanation,
        });
    }
    reports.sort_by(|a, b| {
        b.anomaly_score
            .partial_cmp(&a.anomaly_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    reports
}

fn describe(d: &FeatureDeviation) -> String {
    let direction = if d.z_score > 0.0 { "above" } else { "below" };
    format!(
        "{} is {:.1} standard deviations {} the corpus mean",
        d.feature,
        d.z_score.abs(),
        direction
    )
}
