use crate::anomaly::{self, AnomalyReport};
use crate::cluster::{self, Cluster, ClusterParams};
use crate::entities::RegexEntityExtractor;
use crate::features::{self, FeatureRecord};
use crate::insights::{self, Insight};
use crate::lexicon::Lexicon;
use crate::predict::{self, PredictionResult};
use crate::record::CaseRecord;
use crate::text::TextAnalyzer;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AnalyzeOpts {
    pub cluster_count: usize,
    pub max_iterations: usize,
    pub seed: Option<u64>,
    /// Analysis time; injected so recency and day counts are reproducible.
    pub now: DateTime<Utc>,
}

impl Default for AnalyzeOpts {
    fn default() -> Self {
        Self {
            cluster_count: 5,
            max_iterations: 100,
            seed: None,
            now: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_records: usize,
    pub dated_records: usize,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub mean_sentiment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedBranch {
    pub branch: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub clusters: Vec<Cluster>,
    pub anomalies: Vec<AnomalyReport>,
    pub predictions: Vec<PredictionResult>,
    pub patterns: Vec<Insight>,
    pub trends: Vec<Insight>,
    pub recommendations: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedBranch>,
}

/// Build features for a corpus with the default lexicon and extractor.
pub fn build_features(records: &[CaseRecord], now: DateTime<Utc>) -> Vec<FeatureRecord> {
    let lexicon = Lexicon::default();
    let analyzer = TextAnalyzer::new(lexicon.clone());
    let extractor = RegexEntityExtractor::new(lexicon);
    features::build_corpus(records, &analyzer, &extractor, now)
}

/// Run the whole pipeline over an immutable snapshot of the corpus. Each
/// analysis branch is independent; one failing (e.g. an invalid cluster
/// count) degrades to an empty section recorded in `skipped` and never takes
/// the rest of the report down with it.
pub fn analyze(records: &[CaseRecord], opts: &AnalyzeOpts) -> AnalysisReport {
    let features = build_features(records, opts.now);
    analyze_features(records, &features, opts)
}

pub fn analyze_features(
    records: &[CaseRecord],
    features: &[FeatureRecord],
    opts: &AnalyzeOpts,
) -> AnalysisReport {
    let mut skipped = Vec::new();

    let params = ClusterParams {
        k: opts.cluster_count,
        max_iterations: opts.max_iterations,
        seed: opts.seed,
    };
    let clusters = match cluster::fit(features, &params) {
        Ok(clusters) => clusters,
        Err(e) => {
            skipped.push(SkippedBranch {
                branch: "clusters".to_string(),
                reason: e.to_string(),
            });
            Vec::new()
        }
    };

    let anomalies = anomaly::detect(features);
    let predictions: Vec<PredictionResult> = features.iter().map(predict::predict).collect();

    let mut patterns = Vec::new();
    let mut trends = Vec::new();
    let mut recommendations = Vec::new();
    for insight in insights::synthesize(features) {
        match insight {
            i @ (Insight::DimensionPattern { .. }
            | Insight::TemporalTrend { .. }
            | Insight::MethodologyPattern { .. }) => patterns.push(i),
            i @ Insight::GrowingTopic { .. } => trends.push(i),
            i @ (Insight::ResearchGap { .. } | Insight::CollaborationOpportunity { .. }) => {
                recommendations.push(i)
            }
        }
    }

    AnalysisReport {
        summary: summarize_corpus(records, features),
        clusters,
        anomalies,
        predictions,
        patterns,
        trends,
        recommendations,
        skipped,
    }
}

fn summarize_corpus(records: &[CaseRecord], features: &[FeatureRecord]) -> Summary {
    let dates: Vec<NaiveDate> = records.iter().filter_map(|r| r.date).collect();
    let mean_sentiment = if features.is_empty() {
        0.0
    } else {
        features.iter().map(|f| f.sentiment_score as f64).sum::<f64>() / features.len() as f64
    };
    Summary {
        total_records: records.len(),
        dated_records: dates.len(),
        start_date: dates.iter().min().map(|d| d.to_string()),
        end_date: dates.iter().max().map(|d| d.to_string()),
        mean_sentiment,
    }
}
