use crate::features::FeatureRecord;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Relative-frequency growth a keyword must show to count as a rising topic.
pub const GROWTH_THRESHOLD: f64 = 0.5;
/// Dimensions holding less than this share of all tag occurrences are gaps.
pub const GAP_SHARE: f64 = 0.10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionPair {
    pub first: String,
    pub second: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub count: usize,
    pub mean_sentiment: f64,
    pub top_dimensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountItem {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTrend {
    pub keyword: String,
    pub recent_count: usize,
    pub older_count: usize,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageItem {
    pub dimension: String,
    pub count: usize,
    pub share: f64,
}

/// Tagged so a renderer can dispatch on `type` without inspecting payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Insight {
    DimensionPattern {
        title: String,
        description: String,
        pairs: Vec<DimensionPair>,
    },
    TemporalTrend {
        title: String,
        description: String,
        years: Vec<YearSummary>,
    },
    MethodologyPattern {
        title: String,
        description: String,
        methods: Vec<CountItem>,
    },
    GrowingTopic {
        title: String,
        description: String,
        keywords: Vec<KeywordTrend>,
    },
    ResearchGap {
        title: String,
        description: String,
        gaps: Vec<CoverageItem>,
    },
    CollaborationOpportunity {
        title: String,
        description: String,
        record_ids: Vec<String>,
    },
}

/// Pairwise dimension co-occurrence across the corpus. Pairs are keyed in
/// canonical order, so "A + B" and "B + A" land on the same counter.
pub fn dimension_cooccurrence(features: &[FeatureRecord]) -> Vec<DimensionPair> {
    let mut counts: AHashMap<(String, String), usize> = AHashMap::new();
    for f in features {
        let dims: Vec<&String> = f.dimensions.iter().unique().collect();
        for i in 0..dims.len() {
            for j in (i + 1)..dims.len() {
                let (a, b) = if dims[i] <= dims[j] {
                    (dims[i], dims[j])
                } else {
                    (dims[j], dims[i])
                };
                *counts.entry((a.clone(), b.clone())).or_insert(0) += 1;
            }
        }
    }
    counts
        .into_iter()
        .map(|((first, second), count)| DimensionPair {
            first,
            second,
            count,
        })
        .sorted_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first.cmp(&b.first))
                .then_with(|| a.second.cmp(&b.second))
        })
        .collect()
}

/// Per-year aggregation over records with a resolvable date.
pub fn temporal_trends(features: &[FeatureRecord]) -> Vec<YearSummary> {
    let mut by_year: BTreeMap<i32, Vec<&FeatureRecord>> = BTreeMap::new();
    for f in features {
        if let Some(year) = f.year {
            by_year.entry(year).or_default().push(f);
        }
    }
    by_year
        .into_iter()
        .map(|(year, members)| {
            let mean_sentiment = members.iter().map(|f| f.sentiment_score as f64).sum::<f64>()
                / members.len() as f64;
            let mut tags: AHashMap<&str, usize> = AHashMap::new();
            for f in &members {
                for d in &f.dimensions {
                    *tags.entry(d.as_str()).or_insert(0) += 1;
                }
            }
            let top_dimensions = tags
                .into_iter()
                .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
                .take(3)
                .map(|(t, _)| t.to_string())
                .collect();
            YearSummary {
                year,
                count: members.len(),
                mean_sentiment,
                top_dimensions,
            }
        })
        .collect()
}

pub fn methodology_patterns(features: &[FeatureRecord]) -> Vec<CountItem> {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for f in features {
        for m in &f.methodologies {
            *counts.entry(m.as_str()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(name, count)| CountItem {
            name: name.to_string(),
            count,
        })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)))
        .collect()
}

/// Keywords whose relative frequency in the recent subset grew by more than
/// `GROWTH_THRESHOLD` over the older subset. A keyword unseen in the older
/// subset is measured against a one-occurrence baseline and must appear at
/// least twice recently, which keeps one-off tags out.
pub fn growing_keywords(features: &[FeatureRecord]) -> Vec<KeywordTrend> {
    let (recent, older): (Vec<&FeatureRecord>, Vec<&FeatureRecord>) =
        features.iter().partition(|f| f.is_recent);
    if recent.is_empty() || older.is_empty() {
        return Vec::new();
    }
    let count_tags = |subset: &[&FeatureRecord]| -> AHashMap<String, usize> {
        let mut m = AHashMap::new();
        for f in subset {
            for k in &f.keywords {
                *m.entry(k.to_lowercase()).or_insert(0) += 1;
            }
        }
        m
    };
    let recent_counts = count_tags(&recent);
    let older_counts = count_tags(&older);
    let recent_total: usize = recent_counts.values().sum();
    let older_total: usize = older_counts.values().sum();
    if recent_total == 0 || older_total == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (keyword, &recent_count) in &recent_counts {
        let older_count = older_counts.get(keyword).copied().unwrap_or(0);
        if older_count == 0 && recent_count < 2 {
            continue;
        }
        let recent_rel = recent_count as f64 / recent_total as f64;
        let older_rel = if older_count > 0 {
            older_count as f64 / older_total as f64
        } else {
            1.0 / older_total as f64
        };
        let growth = (recent_rel - older_rel) / older_rel;
        if growth > GROWTH_THRESHOLD {
            out.push(KeywordTrend {
                keyword: keyword.clone(),
                recent_count,
                older_count,
                growth,
            });
        }
    }
    out.sort_by(|a, b| {
        b.growth
            .partial_cmp(&a.growth)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    out
}

/// Share of total dimension-tag occurrences per dimension, least-covered first.
pub fn dimension_coverage(features: &[FeatureRecord]) -> Vec<CoverageItem> {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    let mut total = 0usize;
    for f in features {
        for d in &f.dimensions {
            *counts.entry(d.as_str()).or_insert(0) += 1;
            total += 1;
        }
    }
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|(d, c)| CoverageItem {
            dimension: d.to_string(),
            count: c,
            share: c as f64 / total as f64,
        })
        .sorted_by(|a, b| {
            a.share
                .partial_cmp(&b.share)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.dimension.cmp(&b.dimension))
        })
        .collect()
}

pub fn coverage_gaps(features: &[FeatureRecord]) -> Vec<CoverageItem> {
    dimension_coverage(features)
        .into_iter()
        .filter(|c| c.share < GAP_SHARE)
        .collect()
}

/// Records sharing no dimension or keyword tag with any other record.
pub fn collaboration_candidates(features: &[FeatureRecord]) -> Vec<String> {
    if features.len() < 2 {
        return Vec::new();
    }
    let profiles: Vec<AHashSet<String>> = features
        .iter()
        .map(|f| {
            f.dimensions
                .iter()
                .chain(f.keywords.iter())
                .map(|t| t.to_lowercase())
                .collect()
        })
        .collect();
    let mut out = Vec::new();
    for (i, f) in features.iter().enumerate() {
        let isolated = profiles
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .all(|(_, other)| profiles[i].is_disjoint(other));
        if isolated {
            out.push(f.id.clone());
        }
    }
    out
}

pub fn synthesize(features: &[FeatureRecord]) -> Vec<Insight> {
    let mut out = Vec::new();

    let pairs = dimension_cooccurrence(features);
    if !pairs.is_empty() {
        let lead = &pairs[0];
        out.push(Insight::DimensionPattern {
            title: "Frequently combined dimensions".to_string(),
            description: format!(
                "\"{}\" and \"{}\" co-occur in {} record(s)",
                lead.first, lead.second, lead.count
            ),
            pairs: pairs.into_iter().take(10).collect(),
        });
    }

    let years = temporal_trends(features);
    if !years.is_empty() {
        let total: usize = years.iter().map(|y| y.count).sum();
        let span = format!("{} to {}", years[0].year, years[years.len() - 1].year);
        out.push(Insight::TemporalTrend {
            title: "Activity by year".to_string(),
            description: format!("{} dated record(s) spanning {}", total, span),
            years,
        });
    }

    let methods = methodology_patterns(features);
    if !methods.is_empty() {
        out.push(Insight::MethodologyPattern {
            title: "Dominant methodologies".to_string(),
            description: format!(
                "\"{}\" appears {} time(s) across the corpus",
                methods[0].name, methods[0].count
            ),
            methods: methods.into_iter().take(10).collect(),
        });
    }

    let keywords = growing_keywords(features);
    if !keywords.is_empty() {
        out.push(Insight::GrowingTopic {
            title: "Growing keywords".to_string(),
            description: format!(
                "{} keyword(s) rose by more than {}% relative to older records",
                keywords.len(),
                (GROWTH_THRESHOLD * 100.0) as i64
            ),
            keywords,
        });
    }

    let gaps = coverage_gaps(features);
    if !gaps.is_empty() {
        out.push(Insight::ResearchGap {
            title: "Under-covered dimensions".to_string(),
            description: format!(
                "{} dimension(s) hold less than {}% of all tag occurrences",
                gaps.len(),
                (GAP_SHARE * 100.0) as i64
            ),
            gaps,
        });
    }

    let isolated = collaboration_candidates(features);
    if !isolated.is_empty() {
        out.push(Insight::CollaborationOpportunity {
            title: "Isolated records".to_string(),
            description: format!(
                "{} record(s) share no tags with the rest of the corpus",
                isolated.len()
            ),
            record_ids: isolated,
        });
    }

    out
}
