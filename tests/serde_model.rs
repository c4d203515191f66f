use pretty_assertions::assert_eq;

use osu_rs::osu::{
    model::{
        Beatmap,
        events::BreakPeriod,
        timing::{TimingPoint, TimingPointFields},
    },
    parse_osu,
};

#[test]
fn test_beatmap_json_roundtrip() {
    let beatmap = parse_osu(include_str!("files/v14_full.osu")).expect("must be parsed");
    let json = serde_json::to_string(&beatmap).expect("must be serialized");
    let restored: Beatmap = serde_json::from_str(&json).expect("must be deserialized");
    assert_eq!(restored, beatmap);
}

#[test]
fn test_error_serializes() {
    let err = parse_osu("osu file format v14\n\n[General]\nFoo: bar\n").expect_err("must fail");
    let json = serde_json::to_value(&err).expect("must be serialized");
    assert_eq!(json["range"]["start"], 31);
    assert_eq!(json["content"]["UnsupportedField"]["section"], "General");
}

#[test]
fn test_break_period_is_checked() {
    let period: BreakPeriod =
        serde_json::from_str(r#"{"start_time":1000,"end_time":5000}"#).expect("must be ordered");
    assert_eq!(period, BreakPeriod::new(1000, 5000));

    let err = serde_json::from_str::<BreakPeriod>(r#"{"start_time":5000,"end_time":100}"#)
        .expect_err("must be rejected");
    assert!(err.to_string().contains("break period ends at 100"));
}

#[test]
fn test_timing_point_is_checked() {
    let inherited = TimingPoint::new(TimingPointFields {
        timing_change: false,
        ..TimingPointFields::new(1000, -50.0)
    });
    let mut json = serde_json::to_value(inherited).expect("must be serialized");
    let restored: TimingPoint = serde_json::from_value(json.clone()).expect("must be consistent");
    assert_eq!(restored, inherited);

    json["bpm"] = serde_json::json!(999.0);
    let err = serde_json::from_value::<TimingPoint>(json.clone()).expect_err("must be rejected");
    assert!(err.to_string().contains("timing point at 1000"));

    json["bpm"] = serde_json::Value::Null;
    json["speed_multiplier"] = serde_json::json!(7.0);
    assert!(serde_json::from_value::<TimingPoint>(json).is_err());
}

#[test]
fn test_content_hash_is_checked() {
    let beatmap = parse_osu(include_str!("files/v14_full.osu")).expect("must be parsed");
    let mut json = serde_json::to_value(&beatmap).expect("must be serialized");
    assert_eq!(json["content_hash"], beatmap.content_hash().as_str());

    json["content_hash"] = serde_json::json!("not-a-hash");
    let err = serde_json::from_value::<Beatmap>(json).expect_err("must be rejected");
    assert!(err.to_string().contains("not-a-hash"));
}
