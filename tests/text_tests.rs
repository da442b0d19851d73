use casescope::lexicon::Lexicon;
use casescope::sentiment::Polarity;
use casescope::text::{tokenize, TextAnalyzer};

#[test]
fn tokenize_lowercases_and_strips_punctuation() {
    let tokens = tokenize("Hello, World! data-driven 42");
    assert_eq!(tokens, vec!["hello", "world", "data", "driven", "42"]);
}

#[test]
fn tokenize_handles_empty_and_unicode_input() {
    assert!(tokenize("").is_empty());
    let tokens = tokenize("café Über");
    assert_eq!(tokens, vec!["café", "über"]);
}

#[test]
fn unigrams_drop_stop_words_and_short_words() {
    let analyzer = TextAnalyzer::default();
    let grams = analyzer.ngrams("the cat sat on the mat", 1, 1);
    assert_eq!(grams, vec!["cat", "sat", "mat"]);
}

#[test]
fn longer_ngrams_need_one_content_word() {
    let analyzer = TextAnalyzer::default();
    let grams = analyzer.ngrams("of the cat", 2, 2);
    assert_eq!(grams, vec!["the cat"]);
}

#[test]
fn ngrams_of_empty_text_are_empty() {
    let analyzer = TextAnalyzer::default();
    assert!(analyzer.ngrams("", 1, 3).is_empty());
}

#[test]
fn tf_idf_is_positive_for_shared_terms_in_a_multi_document_corpus() {
    let analyzer = TextAnalyzer::default();
    let docs = ["water quality sensors", "water rights policy"];
    let scores = analyzer.tf_idf(&docs, 1, 1, 10, 1);
    let water = scores.iter().find(|t| t.term == "water").unwrap();
    assert!(water.score > 0.0);
}

#[test]
fn tf_idf_collapses_to_zero_on_a_single_document() {
    let analyzer = TextAnalyzer::default();
    let scores = analyzer.tf_idf(&["solar power adoption"], 1, 2, 10, 1);
    assert!(!scores.is_empty());
    assert!(scores.iter().all(|t| t.score == 0.0));
}

#[test]
fn tf_idf_discards_terms_below_min_document_frequency() {
    let analyzer = TextAnalyzer::default();
    let docs = [
        "shared topic alpha",
        "shared topic beta",
        "shared topic gamma",
    ];
    let scores = analyzer.tf_idf(&docs, 1, 1, 10, 2);
    assert!(scores.iter().all(|t| t.term != "alpha"));
    assert!(scores.iter().any(|t| t.term == "shared"));
}

#[test]
fn tf_idf_respects_the_feature_cap() {
    let analyzer = TextAnalyzer::default();
    let docs = ["alpha beta gamma delta", "epsilon zeta eta theta"];
    let scores = analyzer.tf_idf(&docs, 1, 1, 3, 1);
    assert!(scores.len() <= 3);
}

#[test]
fn key_phrases_break_runs_at_stop_words() {
    let analyzer = TextAnalyzer::default();
    let phrases = analyzer.key_phrases("community resilience planning in coastal regions", 5);
    assert!(phrases.contains(&"community resilience planning".to_string()));
    assert!(phrases.contains(&"coastal regions".to_string()));
    // longer run scores higher
    assert_eq!(phrases[0], "community resilience planning");
}

#[test]
fn key_phrases_of_empty_text_are_empty() {
    assert!(TextAnalyzer::default().key_phrases("", 5).is_empty());
}

#[test]
fn sentiment_of_empty_text_is_neutral_with_zero_confidence() {
    let s = TextAnalyzer::default().sentiment("");
    assert_eq!(s.polarity, Polarity::Neutral);
    assert_eq!(s.confidence, 0.0);
    assert_eq!(s.score, 0);
}

#[test]
fn sentiment_counts_lexicon_hits() {
    let s = TextAnalyzer::default()
        .sentiment("improved outcomes despite a failed pilot and another failed attempt");
    assert_eq!(s.positive_hits, 1);
    assert_eq!(s.negative_hits, 2);
    assert_eq!(s.polarity, Polarity::Negative);
    assert!((s.confidence - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn custom_lexicon_changes_what_counts_as_sentiment() {
    let mut lexicon = Lexicon::default();
    lexicon.positive_words.insert("stellar".to_string());
    let s = TextAnalyzer::new(lexicon).sentiment("a stellar result");
    assert_eq!(s.polarity, Polarity::Positive);
}

#[test]
fn summarize_selects_and_reorders_by_position() {
    let analyzer = TextAnalyzer::default();
    let text = "Solar adoption grew quickly. Unrelated filler sentence here. \
                Solar programs expanded solar access.";
    let summary = analyzer.summarize(text, 2);
    assert_eq!(
        summary,
        "Solar adoption grew quickly. Solar programs expanded solar access"
    );
}

#[test]
fn summarize_returns_whole_text_when_already_short() {
    let analyzer = TextAnalyzer::default();
    assert_eq!(analyzer.summarize("One sentence only", 3), "One sentence only");
}

#[test]
fn summarize_of_empty_text_is_empty() {
    assert_eq!(TextAnalyzer::default().summarize("", 2), "");
}

#[test]
fn topics_bucket_documents_by_index() {
    let analyzer = TextAnalyzer::default();
    let docs = [
        "renewable energy storage",
        "coastal flood defenses",
        "renewable energy markets",
        "urban flood mapping",
    ];
    let topics = analyzer.topics(&docs, 2, 5);
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].document_indices, vec![0, 2]);
    assert_eq!(topics[1].document_indices, vec![1, 3]);
    assert!(topics[0].words.iter().any(|w| w.contains("renewable")));
}

#[test]
fn topics_of_empty_corpus_are_empty() {
    let analyzer = TextAnalyzer::default();
    assert!(analyzer.topics(&[], 3, 5).is_empty());
}
