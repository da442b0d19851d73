use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One research case study as delivered by the content-access layer.
/// Everything except `id` is optional; absent fields deserialize to empty
/// values so downstream analysis degrades instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub relevance: String,
    #[serde(default)]
    pub study_type: String,
    #[serde(default)]
    pub institution: String,
    /// Delimiter-separated dimension tags (`,` or `;`).
    #[serde(default)]
    pub dimensions: String,
    /// Delimiter-separated keyword tags (`,` or `;`).
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl CaseRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            focus: String::new(),
            relevance: String::new(),
            study_type: String::new(),
            institution: String::new(),
            dimensions: String::new(),
            keywords: String::new(),
            date: None,
        }
    }

    /// All free-text fields concatenated, in document order, skipping empties.
    pub fn combined_text(&self) -> String {
        let parts = [
            self.title.as_str(),
            self.description.as_str(),
            self.focus.as_str(),
            self.relevance.as_str(),
        ];
        parts
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse records from either a JSON array or newline-delimited JSON objects.
pub fn parse_records(input: &str) -> Result<Vec<CaseRecord>, serde_json::Error> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input);
    }
    input
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(serde_json::from_str)
        .collect()
}
