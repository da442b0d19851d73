use crate::features::FeatureRecord;
use ahash::AHashMap;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("cluster count must be at least 1")]
    InvalidClusterCount,
}

#[derive(Debug, Clone, Copy)]
pub struct ClusterParams {
    pub k: usize,
    pub max_iterations: usize,
    /// Fixed seed gives reproducible memberships; None draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            k: 5,
            max_iterations: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    pub member_ids: Vec<String>,
    pub size: usize,
    pub top_dimensions: Vec<String>,
    pub mean_sentiment: f64,
}

// Fixed numeric projection fed to k-means.
fn project(f: &FeatureRecord) -> [f64; 5] {
    [
        f.sentiment_score as f64,
        f.dimensions.len() as f64,
        f.keyword_count as f64,
        f.word_count as f64,
        f.organization_count as f64,
    ]
}

fn distance_sq(a: &[f64; 5], b: &[f64; 5]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest(point: &[f64; 5], centroids: &[[f64; 5]]) -> usize {
    let mut best = 0;
    let mut best_d = f64::MAX;
    for (i, c) in centroids.iter().enumerate() {
        let d = distance_sq(point, c);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

/// Lloyd's algorithm over the fixed projection. Stops when memberships are
/// stable or after `max_iterations` rounds; the cap guarantees termination on
/// degenerate inputs. Empty clusters are dropped from the output.
pub fn fit(features: &[FeatureRecord], params: &ClusterParams) -> Result<Vec<Cluster>, ClusterError> {
    if params.k == 0 {
        return Err(ClusterError::InvalidClusterCount);
    }
    if features.is_empty() {
        return Ok(Vec::new());
    }
    let k = params.k.min(features.len());
    let points: Vec<[f64; 5]> = features.iter().map(project).collect();

    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut centroids: Vec<[f64; 5]> = rand::seq::index::sample(&mut rng, points.len(), k)
        .iter()
        .map(|i| points[i])
        .collect();

    let mut assignment: Vec<usize> = points.par_iter().map(|p| nearest(p, &centroids)).collect();
    for _ in 0..params.max_iterations {
        // coordinate-wise means; a centroid with no members keeps its position
        let mut sums = vec![[0.0f64; 5]; k];
        let mut counts = vec![0usize; k];
        for (p, &c) in points.iter().zip(&assignment) {
            for d in 0..5 {
                sums[c][d] += p[d];
            }
            counts[c] += 1;
        }
        for c in 0..k {
            if counts[c] > 0 {
                for d in 0..5 {
                    centroids[c][d] = sums[c][d] / counts[c] as f64;
                }
            }
        }

        let next: Vec<usize> = points.par_iter().map(|p| nearest(p, &centroids)).collect();
        if next == assignment {
            break;
        }
        assignment = next;
    }

    let mut clusters = Vec::new();
    for c in 0..k {
        let members: Vec<&FeatureRecord> = features
            .iter()
            .zip(&assignment)
            .filter(|(_, &a)| a == c)
            .map(|(f, _)| f)
            .collect();
        if members.is_empty() {
            continue;
        }
        let mean_sentiment = members.iter().map(|f| f.sentiment_score as f64).sum::<f64>()
            / members.len() as f64;
        let mut tag_counts: AHashMap<&str, usize> = AHashMap::new();
        for f in &members {
            for d in &f.dimensions {
                *tag_counts.entry(d.as_str()).or_insert(0) += 1;
            }
        }
        let top_dimensions = tag_counts
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .take(3)
            .map(|(t, _)| t.to_string())
            .collect();
        clusters.push(Cluster {
            id: c,
            member_ids: members.iter().map(|f| f.id.clone()).collect(),
            size: members.len(),
            top_dimensions,
            mean_sentiment,
        });
    }
    Ok(clusters)
}
