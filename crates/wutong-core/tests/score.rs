use wutong_core::models::score::PainScore;

#[test]
fn blank_and_garbage_are_unmeasured() {
    for text in ["", "   ", "None", "nan", "abc", "5mg", "inf"] {
        assert_eq!(PainScore::parse(text), PainScore::Unmeasured, "input {text:?}");
    }
}

#[test]
fn sleep_markers_parse_as_asleep() {
    assert_eq!(PainScore::parse("asleep"), PainScore::Asleep);
    assert_eq!(PainScore::parse("Sleep"), PainScore::Asleep);
    assert_eq!(PainScore::parse("睡觉"), PainScore::Asleep);
}

#[test]
fn zero_is_not_collapsed_into_unmeasured() {
    let zero = PainScore::parse("0");
    assert_eq!(zero, PainScore::Score(0));
    assert!(zero.is_explicit_zero());
    assert!(zero.is_recorded());
    assert!(!PainScore::Unmeasured.is_recorded());
}

#[test]
fn numeric_scores_floor_and_stay_in_range() {
    assert_eq!(PainScore::parse("7"), PainScore::Score(7));
    assert_eq!(PainScore::parse(" 10 "), PainScore::Score(10));
    assert_eq!(PainScore::parse("7.9"), PainScore::Score(7));
    assert_eq!(PainScore::parse("0.5"), PainScore::Score(0));
    assert_eq!(PainScore::parse("11"), PainScore::Unmeasured);
    assert_eq!(PainScore::parse("-1"), PainScore::Unmeasured);
}

#[test]
fn pain_means_score_of_one_or_more() {
    assert!(!PainScore::Score(0).indicates_pain());
    assert!(PainScore::Score(1).indicates_pain());
    assert!(!PainScore::Asleep.indicates_pain());
    assert!(!PainScore::Unmeasured.indicates_pain());
}

#[test]
fn new_rejects_scores_above_ten() {
    assert!(PainScore::new(10).is_ok());
    assert!(PainScore::new(11).is_err());
}

#[test]
fn display_matches_entry_text() {
    assert_eq!(PainScore::Unmeasured.to_string(), "");
    assert_eq!(PainScore::Asleep.to_string(), "asleep");
    assert_eq!(PainScore::Score(4).to_string(), "4");
    assert_eq!("4".parse::<PainScore>(), Ok(PainScore::Score(4)));
}

#[test]
fn serde_shape_is_tagged() {
    assert_eq!(serde_json::to_string(&PainScore::Asleep).unwrap(), "\"asleep\"");
    assert_eq!(serde_json::to_string(&PainScore::Score(3)).unwrap(), "{\"score\":3}");
    let parsed: PainScore = serde_json::from_str("\"unmeasured\"").unwrap();
    assert_eq!(parsed, PainScore::Unmeasured);
}

#[test]
fn deserializes_caregiver_text_and_numbers() {
    let cases = [
        (r#""睡觉""#, PainScore::Asleep),
        (r#""7""#, PainScore::Score(7)),
        (r#""""#, PainScore::Unmeasured),
        ("7", PainScore::Score(7)),
        ("7.9", PainScore::Score(7)),
        (r#"{"score": "3"}"#, PainScore::Score(3)),
        ("null", PainScore::Unmeasured),
        ("[1, 2]", PainScore::Unmeasured),
    ];
    for (json, expected) in cases {
        let parsed: PainScore = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected, "input {json}");
    }
}

#[test]
fn out_of_range_scores_are_unmeasured() {
    let parsed: PainScore = serde_json::from_str(r#"{"score": 200}"#).unwrap();
    assert_eq!(parsed, PainScore::Unmeasured);
    let parsed: PainScore = serde_json::from_str("-3").unwrap();
    assert_eq!(parsed, PainScore::Unmeasured);

    let raw = PainScore::Score(200);
    assert_eq!(raw.value(), None);
    assert!(!raw.indicates_pain());
    assert!(!raw.is_recorded());
}
