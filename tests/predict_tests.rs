use casescope::features::FeatureRecord;
use casescope::predict::predict;

#[test]
fn fully_favorable_record_scores_exactly_nine_tenths() {
    let feature = FeatureRecord {
        id: "good".to_string(),
        sentiment_score: 2,
        methodology_count: 3,
        has_institution: true,
        is_recent: true,
        dimensions: vec!["Health".to_string(), "Water".to_string()],
        word_count: 120,
        keyword_count: 4,
        has_description: true,
        ..FeatureRecord::default()
    };
    let p = predict(&feature);
    assert_eq!(p.probability, 0.9);
    assert_eq!(p.factors.len(), 5);
    assert!(p.factors.iter().all(|f| f.weight > 0.0));
    assert_eq!(p.confidence, 1.0);
}

#[test]
fn penalties_push_the_score_down_and_clamp_at_zero() {
    let feature = FeatureRecord {
        id: "thin".to_string(),
        word_count: 10,
        ..FeatureRecord::default()
    };
    let p = predict(&feature);
    assert_eq!(p.probability, 0.0);
    assert_eq!(p.factors.len(), 2);
    assert!(p.factors.iter().all(|f| f.weight < 0.0));
}

#[test]
fn confidence_is_the_fraction_of_present_key_fields() {
    let half = FeatureRecord {
        id: "half".to_string(),
        has_description: true,
        has_institution: true,
        word_count: 60,
        ..FeatureRecord::default()
    };
    assert_eq!(predict(&half).confidence, 0.5);

    let none = FeatureRecord {
        id: "none".to_string(),
        word_count: 60,
        ..FeatureRecord::default()
    };
    assert_eq!(predict(&none).confidence, 0.0);
}

#[test]
fn every_fired_rule_is_reported() {
    let feature = FeatureRecord {
        id: "mixed".to_string(),
        sentiment_score: 1,
        word_count: 20,
        ..FeatureRecord::default()
    };
    let p = predict(&feature);
    // +0.3 positive, -0.2 thin, -0.1 no keywords
    assert_eq!(p.probability, 0.0);
    let names: Vec<&str> = p.factors.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"positive sentiment"));
    assert!(names.contains(&"no keyword tags"));
    assert_eq!(p.factors.len(), 3);
}

#[test]
fn prediction_is_deterministic() {
    let feature = FeatureRecord {
        id: "same".to_string(),
        sentiment_score: 1,
        word_count: 80,
        keyword_count: 2,
        ..FeatureRecord::default()
    };
    let a = predict(&feature);
    let b = predict(&feature);
    assert_eq!(a.probability, b.probability);
    assert_eq!(a.factors.len(), b.factors.len());
}
