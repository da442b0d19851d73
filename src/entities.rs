use crate::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entities {
    pub organizations: Vec<String>,
    pub people: Vec<String>,
    pub methodologies: Vec<String>,
    pub outcomes: Vec<String>,
}

/// Swappable extraction strategy. The shipped implementation is a cheap
/// low-recall regex pass; a stronger model can stand in without touching
/// callers.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Entities;
}

// Title-cased 2-4 word run. Deliberately loose; filtered below.
static PERSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+){1,3}\b").unwrap());

pub struct RegexEntityExtractor {
    lexicon: Lexicon,
    org: Regex,
}

impl Default for RegexEntityExtractor {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl RegexEntityExtractor {
    pub fn new(lexicon: Lexicon) -> Self {
        // The suffix list comes from the lexicon, so the pattern is built per
        // instance rather than as a static.
        let suffixes = lexicon
            .org_suffixes
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let org = Regex::new(&format!(r"\b(?:[A-Z][A-Za-z]+ )+(?:{suffixes})\b")).unwrap();
        Self { lexicon, org }
    }
}

impl EntityExtractor for RegexEntityExtractor {
    fn extract(&self, text: &str) -> Entities {
        if text.is_empty() {
            return Entities::default();
        }

        let organizations: Vec<String> = self
            .org
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut people = Vec::new();
        for m in PERSON.find_iter(text) {
            let candidate = m.as_str();
            if self.lexicon.non_person_phrases.contains(candidate) {
                continue;
            }
            // anything overlapping an organization hit is not a person
            if organizations
                .iter()
                .any(|o| o.contains(candidate) || candidate.contains(o.as_str()))
            {
                continue;
            }
            if let Some(last) = candidate.rsplit(' ').next() {
                if self.lexicon.org_suffixes.iter().any(|s| s == last) {
                    continue;
                }
            }
            people.push(candidate.to_string());
        }

        let lowered = text.to_lowercase();
        let methodologies = vocabulary_hits(&lowered, &self.lexicon.methodology_terms);
        let outcomes = vocabulary_hits(&lowered, &self.lexicon.outcome_terms);

        Entities {
            organizations,
            people,
            methodologies,
            outcomes,
        }
    }
}

fn vocabulary_hits(lowered: &str, terms: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for term in terms {
        for _ in lowered.matches(term.as_str()) {
            out.push(term.clone());
        }
    }
    out
}
