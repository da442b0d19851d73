use ahash::AHashSet;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "may", "me", "might", "more", "most",
    "must", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "out", "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

const POSITIVE_WORDS: &[&str] = &[
    "achieved", "advance", "advantage", "beneficial", "benefit", "breakthrough", "effective",
    "efficient", "empowered", "enabled", "encouraging", "enhanced", "expanded", "gain",
    "improved", "improvement", "innovative", "opportunity", "positive", "progress", "promising",
    "resilient", "robust", "significant", "strengthened", "success", "successful", "sustainable",
    "thriving", "transformative", "valuable",
];

const NEGATIVE_WORDS: &[&str] = &[
    "barrier", "challenge", "concern", "constraint", "costly", "decline", "deficient",
    "degraded", "difficult", "failed", "failure", "gap", "harm", "inadequate", "ineffective",
    "insufficient", "lack", "limitation", "limited", "loss", "negative", "obstacle", "poor",
    "problem", "risk", "setback", "shortage", "struggle", "unsustainable", "vulnerable", "weak",
];

const METHODOLOGY_TERMS: &[&str] = &[
    "case study", "content analysis", "cross-sectional", "ethnography", "experiment",
    "field study", "focus group", "gis mapping", "interview", "longitudinal study",
    "machine learning", "meta-analysis", "mixed methods", "participatory research",
    "pilot study", "qualitative analysis", "quantitative analysis",
    "randomized controlled trial", "regression analysis", "remote sensing", "simulation",
    "survey", "systematic review",
];

const OUTCOME_TERMS: &[&str] = &[
    "adoption", "capacity building", "cost reduction", "efficiency gain", "emission reduction",
    "engagement", "improved access", "improved health", "increased yield", "job creation",
    "policy change", "poverty reduction", "resilience", "scaled up", "uptake",
];

const ORG_SUFFIXES: &[&str] = &[
    "Agency", "Association", "Authority", "Bank", "Center", "Centre", "College", "Commission",
    "Corporation", "Council", "Department", "Foundation", "Institute", "Institution", "Lab",
    "Laboratory", "Ministry", "Network", "Observatory", "Organisation", "Organization",
    "Partnership", "Programme", "Society", "Trust", "University",
];

// Title-cased sequences that the person pattern hits but never name a person.
const NON_PERSON_PHRASES: &[&str] = &[
    "Artificial Intelligence", "Case Study", "Climate Change", "Data Science", "East Africa",
    "European Union", "Food Security", "Global North", "Global South", "Latin America",
    "Machine Learning", "Middle East", "New York", "New Zealand", "North America",
    "Public Health", "South Asia", "Sub Saharan", "Supply Chain", "United Kingdom",
    "United Nations", "United States", "West Africa", "World Bank", "World Health",
];

/// Immutable word tables consumed by the text analyzer and entity extractor.
/// Built once and injected at construction; tests substitute their own copies.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stop_words: AHashSet<String>,
    pub positive_words: AHashSet<String>,
    pub negative_words: AHashSet<String>,
    pub methodology_terms: Vec<String>,
    pub outcome_terms: Vec<String>,
    pub org_suffixes: Vec<String>,
    pub non_person_phrases: AHashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: to_set(STOP_WORDS),
            positive_words: to_set(POSITIVE_WORDS),
            negative_words: to_set(NEGATIVE_WORDS),
            methodology_terms: to_vec(METHODOLOGY_TERMS),
            outcome_terms: to_vec(OUTCOME_TERMS),
            org_suffixes: to_vec(ORG_SUFFIXES),
            non_person_phrases: to_set(NON_PERSON_PHRASES),
        }
    }
}

impl Lexicon {
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Content word: long enough to carry meaning and not a function word.
    pub fn is_content_word(&self, word: &str) -> bool {
        word.len() > 2 && !self.is_stop_word(word)
    }
}

fn to_set(words: &[&str]) -> AHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
