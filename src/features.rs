use crate::entities::EntityExtractor;
use crate::record::CaseRecord;
use crate::sentiment;
use crate::text::{self, TextAnalyzer};
use chrono::{DateTime, Datelike, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const RECENT_DAYS: i64 = 365;

/// Flat per-record feature vector, one per CaseRecord, keyed by the same id.
/// Every field is a pure function of the record and the injected analysis
/// time; corpus-level normalization happens downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: String,

    // text-derived
    pub sentiment_score: i64,
    pub sentiment_confidence: f64,
    pub text_length: usize,
    pub word_count: usize,
    pub avg_word_length: f64,
    pub key_phrases: Vec<String>,
    pub organization_count: usize,
    pub person_count: usize,
    pub methodology_count: usize,
    pub methodologies: Vec<String>,

    // categorical
    pub study_type: String,
    pub dimensions: Vec<String>,
    pub keywords: Vec<String>,
    pub keyword_count: usize,
    pub has_institution: bool,
    pub has_description: bool,

    // temporal
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub days_since_now: Option<i64>,
    pub is_recent: bool,

    // relational; stays zero unless an external graph supplies it
    pub collaborator_count: usize,
    pub centrality: f64,
}

pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

pub fn build_features(
    record: &CaseRecord,
    analyzer: &TextAnalyzer,
    extractor: &dyn EntityExtractor,
    now: DateTime<Utc>,
) -> FeatureRecord {
    let text_blob = record.combined_text();
    let tokens = text::tokenize(&text_blob);
    let word_count = tokens.len();
    let letter_total: usize = tokens.iter().map(|t| t.len()).sum();
    let avg_word_length = if word_count == 0 {
        0.0
    } else {
        letter_total as f64 / word_count as f64
    };
    let senti = sentiment::score_tokens(&tokens, analyzer.lexicon());
    let ents = extractor.extract(&text_blob);
    let dimensions = split_tags(&record.dimensions);
    let keywords = split_tags(&record.keywords);
    let days_since_now = record.date.map(|d| (now.date_naive() - d).num_days());

    FeatureRecord {
        id: record.id.clone(),
        sentiment_score: senti.score,
        sentiment_confidence: senti.confidence,
        text_length: text_blob.chars().count(),
        word_count,
        avg_word_length,
        key_phrases: analyzer.key_phrases(&text_blob, 5),
        organization_count: ents.organizations.len(),
        person_count: ents.people.len(),
        methodology_count: ents.methodologies.len(),
        methodologies: ents.methodologies,
        study_type: record.study_type.trim().to_string(),
        keyword_count: keywords.len(),
        dimensions,
        keywords,
        has_institution: !record.institution.trim().is_empty(),
        has_description: !record.description.trim().is_empty(),
        year: record.date.map(|d| d.year()),
        month: record.date.map(|d| d.month()),
        days_since_now,
        is_recent: days_since_now.map(|d| d < RECENT_DAYS).unwrap_or(false),
        collaborator_count: 0,
        centrality: 0.0,
    }
}

/// Feature-building is per-record, so the corpus pass fans out across the
/// thread pool; the collected order mirrors input order.
pub fn build_corpus(
    records: &[CaseRecord],
    analyzer: &TextAnalyzer,
    extractor: &dyn EntityExtractor,
    now: DateTime<Utc>,
) -> Vec<FeatureRecord> {
    records
        .par_iter()
        .map(|r| build_features(r, analyzer, extractor, now))
        .collect()
}
