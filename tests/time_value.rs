// Behaviour of the time-of-day record as seen by track consumers.
use test_case::test_case;
use visugps::prelude::*;

#[test_case(0, 0, 0 => 0 ; "midnight")]
#[test_case(1, 0, 0 => 3_600 ; "one o'clock")]
#[test_case(23, 59, 59 => 86_399 ; "end of day")]
fn timestamp_matches_formula(hour: u8, minute: u8, second: u8) -> u32 {
    let mut time = TimeValue::default();
    time.hour = hour;
    time.minute = minute;
    time.second = second;
    time.timestamp()
}

#[test]
fn every_valid_triple_follows_formula() {
    for hour in 0..=23u8 {
        for minute in 0..=59u8 {
            for second in [0u8, 1, 30, 59] {
                let time = TimeValue::new(hour, minute, second);
                let expected =
                    u32::from(hour) * 3_600 + u32::from(minute) * 60 + u32::from(second);
                assert_eq!(time.timestamp(), expected, "{time}");
                assert!(time.is_valid());
            }
        }
    }
}

#[test]
fn fresh_value_is_zero() {
    assert_eq!(TimeValue::default().timestamp(), 0);
}

#[test]
fn duplicate_has_equal_fields() {
    let original = TimeValue::new(12, 30, 45);
    let copy = original.clone();

    assert_eq!(copy.hour, 12);
    assert_eq!(copy.minute, 30);
    assert_eq!(copy.second, 45);
    assert_eq!(copy, original);
    assert!(!std::ptr::eq(&copy, &original));
}

#[test]
fn duplicate_is_independent() {
    let original = TimeValue::new(5, 10, 15);
    let mut copy = original;
    copy.hour = 6;

    assert_eq!(original.hour, 5);
    assert_eq!(copy.hour, 6);
    assert_eq!(original.timestamp(), 5 * 3_600 + 10 * 60 + 15);
}

#[test]
fn out_of_domain_minute_is_not_rejected() {
    // Lenient pass-through is the default; switching to validation must be explicit.
    let time = TimeValue::new(0, 90, 0);
    assert_eq!(time.timestamp(), 5_400);
}

#[test]
fn checked_construction_is_opt_in() {
    let err = TimeValue::try_new(0, 90, 0).unwrap_err();
    assert_eq!(err.field(), Some(TimeField::Minute));
    assert_eq!(err.to_string(), "minute out of range: 90 (max 59)");
}

#[test]
fn label_text_round_trips() -> anyhow::Result<()> {
    let time: TimeValue = "14:05:09".parse()?;
    assert_eq!(time, TimeValue::new(14, 5, 9));
    assert_eq!(time.to_string(), "14:05:09");
    assert_eq!(TimeValue::from_seconds_of_day(time.timestamp())?, time);
    Ok(())
}

#[test]
fn track_json_shape() -> anyhow::Result<()> {
    let points: Vec<TimeValue> = serde_json::from_str(
        r#"[{"hour": 11, "min": 2, "sec": 0}, {"hour": 11, "min": 3, "sec": 30}]"#,
    )?;
    assert_eq!(points[0].seconds_until(&points[1]), 90);
    Ok(())
}

#[test]
fn converts_from_chrono() -> anyhow::Result<()> {
    let naive = chrono::NaiveTime::from_hms_opt(7, 45, 12)
        .ok_or_else(|| anyhow::anyhow!("invalid chrono time"))?;
    let time = TimeValue::from(naive);
    assert_eq!(time.to_naive_time()?, naive);
    Ok(())
}
