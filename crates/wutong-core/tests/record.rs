use wutong_core::error::CoreError;
use wutong_core::models::day::DayState;
use wutong_core::models::record::{self, HourlyRecord};
use wutong_core::models::score::PainScore;
use wutong_core::slot::{self, HalfDay, SLOTS_PER_DAY};

#[test]
fn slot_labels_start_at_eight() {
    assert_eq!(slot::slot_label(0), "08:00-09:00");
    assert_eq!(slot::slot_label(12), "20:00-21:00");
    assert_eq!(slot::slot_label(15), "23:00-00:00");
    assert_eq!(slot::slot_label(23), "07:00-08:00");
}

#[test]
fn halves_split_the_day_at_twenty_hundred() {
    assert_eq!(HalfDay::Day.slots(), 0..12);
    assert_eq!(HalfDay::Night.slots(), 12..24);
    assert_eq!(HalfDay::Day.anchor_slot(), 0);
    assert_eq!(HalfDay::Night.anchor_slot(), 12);
    assert_eq!(HalfDay::of(11), Some(HalfDay::Day));
    assert_eq!(HalfDay::of(12), Some(HalfDay::Night));
    assert_eq!(HalfDay::of(24), None);
}

#[test]
fn empty_day_has_24_unmeasured_slots() {
    let records = record::empty_day();
    assert_eq!(records.len(), SLOTS_PER_DAY);
    assert!(records.iter().all(|r| r.score == PainScore::Unmeasured));
}

#[test]
fn lenient_dose_parse() {
    assert_eq!(record::parse_dose("10"), 10.0);
    assert_eq!(record::parse_dose(" 2.5 "), 2.5);
    assert_eq!(record::parse_dose(""), 0.0);
    assert_eq!(record::parse_dose("ten"), 0.0);
    assert_eq!(record::parse_dose("-5"), 0.0);
    assert_eq!(record::dose_or_zero(f64::NAN), 0.0);
}

#[test]
fn maintenance_dose_only_at_anchor_slots() {
    let record = HourlyRecord {
        maintenance_dose: Some(30.0),
        ..Default::default()
    };
    assert!(record.validate(0).is_ok());
    assert!(record.validate(12).is_ok());
    assert!(matches!(
        record.validate(5),
        Err(CoreError::MaintenanceOffAnchor(5))
    ));
}

#[test]
fn validate_rejects_bad_slot_and_negative_rescue() {
    assert!(matches!(
        HourlyRecord::default().validate(24),
        Err(CoreError::InvalidSlot(24))
    ));

    let record = HourlyRecord {
        rescue_dose: -10.0,
        ..Default::default()
    };
    assert!(matches!(record.validate(3), Err(CoreError::InvalidDose(_))));
}

#[test]
fn new_day_state_is_unset() {
    let day = DayState::new(jiff::civil::date(2026, 3, 1));
    assert_eq!(day.records.len(), SLOTS_PER_DAY);
    assert_eq!(day.manual_base(HalfDay::Day), None);
    assert_eq!(day.manual_base(HalfDay::Night), None);
    assert!(!day.has_recorded_score());
}

#[test]
fn asleep_counts_as_a_recorded_score() {
    let mut day = DayState::new(jiff::civil::date(2026, 3, 1));
    day.records[20].score = PainScore::Asleep;
    assert!(day.has_recorded_score());
}

#[test]
fn record_doses_deserialize_leniently() {
    let record: HourlyRecord = serde_json::from_str(
        r#"{"score": "asleep", "rescue_dose": "abc", "maintenance_dose": "30"}"#,
    )
    .unwrap();
    assert_eq!(record.score, PainScore::Asleep);
    assert_eq!(record.rescue_dose, 0.0);
    assert_eq!(record.maintenance_dose, Some(30.0));

    let record: HourlyRecord =
        serde_json::from_str(r#"{"rescue_dose": "5", "maintenance_dose": ""}"#).unwrap();
    assert_eq!(record.rescue_dose, 5.0);
    assert_eq!(record.maintenance_dose, None);

    let record: HourlyRecord =
        serde_json::from_str(r#"{"rescue_dose": -10, "maintenance_dose": null}"#).unwrap();
    assert_eq!(record.rescue_dose, 0.0);
    assert_eq!(record.maintenance_dose, None);
}

#[test]
fn anchor_records_hold_the_manual_bases() {
    let mut day = DayState::new(jiff::civil::date(2026, 3, 1));
    day.set_manual_base(HalfDay::Night, Some(40.0));
    assert_eq!(day.records[12].maintenance_dose, Some(40.0));
    assert_eq!(day.manual_base(HalfDay::Night), Some(40.0));

    day.records[0].maintenance_dose = Some(20.0);
    assert_eq!(day.manual_base(HalfDay::Day), Some(20.0));
}
