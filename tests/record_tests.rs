use casescope::record::{parse_records, CaseRecord};

#[test]
fn parses_a_json_array() {
    let input = r#"[{"id": "a", "title": "Solar"}, {"id": "b"}]"#;
    let records = parse_records(input).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Solar");
    assert_eq!(records[1].description, "");
    assert!(records[1].date.is_none());
}

#[test]
fn parses_newline_delimited_objects() {
    let input = "{\"id\": \"a\", \"date\": \"2023-04-01\"}\n\n{\"id\": \"b\", \"dimensions\": \"Health, Water\"}\n";
    let records = parse_records(input).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].date.is_some());
    assert_eq!(records[1].dimensions, "Health, Water");
}

#[test]
fn combined_text_skips_empty_fields() {
    let mut r = CaseRecord::new("x");
    r.title = "Title".into();
    r.relevance = "Relevant".into();
    assert_eq!(r.combined_text(), "Title Relevant");
}

#[test]
fn malformed_input_is_an_error() {
    assert!(parse_records("{not json").is_err());
}
