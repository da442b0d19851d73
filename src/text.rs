use crate::lexicon::Lexicon;
use crate::sentiment::{self, SentimentScore};
use ahash::AHashMap;
use itertools::Itertools;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: usize,
    pub words: Vec<String>,
    pub document_indices: Vec<usize>,
}

/// Lowercase, strip non-word characters, drop empties. Non-ASCII letters
/// survive tokenization; they simply never match the ASCII lexicons.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?' | ';' | ':'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub struct TextAnalyzer {
    lexicon: Lexicon,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl TextAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Contiguous word n-grams for each n in [min_n, max_n]. A unigram must be
    /// a content word; a longer gram needs at least one content word so phrases
    /// anchored by a single meaningful term still pass.
    pub fn ngrams(&self, text: &str, min_n: usize, max_n: usize) -> Vec<String> {
        let tokens = tokenize(text);
        let min_n = min_n.max(1);
        let mut out = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let valid = if n == 1 {
                    self.lexicon.is_content_word(&window[0])
                } else {
                    window.iter().any(|w| self.lexicon.is_content_word(w))
                };
                if valid {
                    out.push(window.join(" "));
                }
            }
        }
        out
    }

    /// Corpus-mean tf-idf per n-gram, top `max_features` descending.
    /// idf is taken against the share of documents carrying the gram, so a
    /// size-1 corpus collapses every idf to ln(1) = 0 and all scores vanish.
    pub fn tf_idf(
        &self,
        documents: &[&str],
        min_n: usize,
        max_n: usize,
        max_features: usize,
        min_doc_frequency: usize,
    ) -> Vec<TermScore> {
        if documents.is_empty() || max_features == 0 {
            return Vec::new();
        }
        let n_docs = documents.len() as f64;

        let mut doc_counts: Vec<AHashMap<String, usize>> = Vec::with_capacity(documents.len());
        let mut doc_lens: Vec<usize> = Vec::with_capacity(documents.len());
        for doc in documents {
            doc_lens.push(tokenize(doc).len());
            let mut counts = AHashMap::new();
            for gram in self.ngrams(doc, min_n, max_n) {
                *counts.entry(gram).or_insert(0usize) += 1;
            }
            doc_counts.push(counts);
        }

        let mut df: AHashMap<&str, usize> = AHashMap::new();
        for counts in &doc_counts {
            for term in counts.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut sums: AHashMap<&str, f64> = AHashMap::new();
        for (counts, len) in doc_counts.iter().zip(&doc_lens) {
            if *len == 0 {
                continue;
            }
            for (term, count) in counts {
                let dfreq = df[term.as_str()];
                if dfreq < min_doc_frequency {
                    continue;
                }
                let tf = *count as f64 / *len as f64;
                let df_share = dfreq as f64 / n_docs;
                let idf = (n_docs / df_share).ln();
                *sums.entry(term.as_str()).or_insert(0.0) += tf * idf;
            }
        }

        let mut ranked: Vec<TermScore> = sums
            .into_iter()
            .map(|(term, sum)| TermScore {
                term: term.to_string(),
                score: sum / n_docs,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        ranked.truncate(max_features);
        ranked
    }

    /// RAKE-style phrase extraction: runs of content words between stop words,
    /// capped at 3 words, scored by word count times summed word length.
    pub fn key_phrases(&self, text: &str, max_phrases: usize) -> Vec<String> {
        if max_phrases == 0 {
            return Vec::new();
        }
        let mut best: AHashMap<String, f64> = AHashMap::new();
        for sentence in split_sentences(text) {
            let words = tokenize(sentence);
            let mut run: Vec<&str> = Vec::new();
            for word in &words {
                if self.lexicon.is_stop_word(word) {
                    record_run(&mut run, &mut best);
                } else {
                    run.push(word.as_str());
                    if run.len() == 3 {
                        record_run(&mut run, &mut best);
                    }
                }
            }
            record_run(&mut run, &mut best);
        }
        best.into_iter()
            .sorted_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            })
            .take(max_phrases)
            .map(|(phrase, _)| phrase)
            .collect()
    }

    pub fn sentiment(&self, text: &str) -> SentimentScore {
        sentiment::score_tokens(&tokenize(text), &self.lexicon)
    }

    /// Extractive summary: sentences scored by corpus-relative frequency of
    /// their content words (length > 3), first and last sentence boosted 1.2x,
    /// winners re-ordered by original position.
    pub fn summarize(&self, text: &str, num_sentences: usize) -> String {
        let sentences = split_sentences(text);
        if sentences.is_empty() || num_sentences == 0 {
            return String::new();
        }
        if sentences.len() <= num_sentences {
            return sentences.join(". ");
        }

        let all_tokens = tokenize(text);
        let total = all_tokens.len() as f64;
        if total == 0.0 {
            return String::new();
        }
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for token in &all_tokens {
            if token.len() > 3 && !self.lexicon.is_stop_word(token) {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let base: f64 = tokenize(sentence)
                    .iter()
                    .filter_map(|t| counts.get(t.as_str()))
                    .map(|c| *c as f64 / total)
                    .sum();
                let boost = if i == 0 || i + 1 == sentences.len() { 1.2 } else { 1.0 };
                (i, base * boost)
            })
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        let mut selected: Vec<usize> = scored
            .into_iter()
            .take(num_sentences)
            .map(|(i, _)| i)
            .collect();
        selected.sort_unstable();
        selected
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join(". ")
    }

    /// Documents land in a bucket by index, not by content; the interface is
    /// the contract here and a content-based model can replace this without
    /// touching callers.
    pub fn topics(&self, documents: &[&str], num_topics: usize, num_words: usize) -> Vec<Topic> {
        if documents.is_empty() || num_topics == 0 {
            return Vec::new();
        }
        let buckets = num_topics.min(documents.len());
        let mut slots: Vec<(Vec<usize>, AHashMap<String, usize>)> =
            (0..buckets).map(|_| (Vec::new(), AHashMap::new())).collect();
        for (i, doc) in documents.iter().enumerate() {
            let slot = &mut slots[i % buckets];
            slot.0.push(i);
            for phrase in self.key_phrases(doc, 10) {
                *slot.1.entry(phrase).or_insert(0) += 1;
            }
        }
        slots
            .into_iter()
            .enumerate()
            .map(|(id, (document_indices, counts))| {
                let words = counts
                    .into_iter()
                    .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
                    .take(num_words)
                    .map(|(phrase, _)| phrase)
                    .collect();
                Topic {
                    id,
                    words,
                    document_indices,
                }
            })
            .collect()
    }
}

fn record_run(run: &mut Vec<&str>, best: &mut AHashMap<String, f64>) {
    if run.is_empty() {
        return;
    }
    let length_sum: usize = run.iter().map(|w| w.len()).sum();
    let score = (run.len() * length_sum) as f64;
    let phrase = run.join(" ");
    let entry = best.entry(phrase).or_insert(0.0);
    if score > *entry {
        *entry = score;
    }
    run.clear();
}
