use pretty_assertions::assert_eq;

use osu_rs::osu::{
    command::time::LEGACY_TIMING_OFFSET_MS,
    model::events::BreakPeriod,
    parse::{LegacyOffset, default_config},
    parse_osu, parse_osu_with_config,
};

fn beatmap_source(version: u32, preview_time: &str) -> String {
    format!(
        "osu file format v{version}

[General]
AudioFilename: a.mp3
AudioLeadIn: 0
PreviewTime: {preview_time}
Countdown: 0
SampleSet: Normal
StackLeniency: 0.7
Mode: 0
LetterboxInBreaks: 0

[Editor]
DistanceSpacing: 1
BeatDivisor: 4
GridSize: 32
TimelineZoom: 1

[Metadata]
Title: t
Artist: a
Creator: c
Version: v

[Difficulty]
HPDrainRate: 5
CircleSize: 5
OverallDifficulty: 5
ApproachRate: 5
SliderMultiplier: 1.4
SliderTickRate: 1

[Events]
Video,100,\"v.avi\"
2,5000,6000

[TimingPoints]
500,333.33,4,2,1,60,1,0
"
    )
}

#[test]
fn test_modern_versions_keep_raw_times() {
    for version in [5, 6, 14, 128] {
        let beatmap = parse_osu(&beatmap_source(version, "1000")).expect("must be parsed");
        assert_eq!(beatmap.general().preview_time, Some(1000));
        let events = beatmap.events().expect("has events");
        assert_eq!(events.breaks, vec![BreakPeriod::new(5000, 6000)]);
        assert_eq!(beatmap.timing_points()[0].time, 500);
    }
}

#[test]
fn test_legacy_versions_add_offset() {
    for version in [1, 3, 4] {
        let beatmap = parse_osu(&beatmap_source(version, "1000")).expect("must be parsed");
        assert_eq!(beatmap.general().preview_time, Some(1000 + LEGACY_TIMING_OFFSET_MS));
        let events = beatmap.events().expect("has events");
        assert_eq!(events.breaks, vec![BreakPeriod::new(5024, 6024)]);
        assert_eq!(beatmap.timing_points()[0].time, 524);
        // Video start times are relative to the audio and stay raw.
        assert_eq!(events.videos[0].start_time, 100);
    }
}

#[test]
fn test_no_preview_is_never_offset() {
    let beatmap = parse_osu(&beatmap_source(4, "-1")).expect("must be parsed");
    assert_eq!(beatmap.general().preview_time, Some(-1));
    assert_eq!(beatmap.general().preview(), None);

    let beatmap = parse_osu(&beatmap_source(14, "-1")).expect("must be parsed");
    assert_eq!(beatmap.general().preview_time, Some(-1));
}

#[test]
fn test_absent_preview() {
    let source = beatmap_source(4, "0").replace("PreviewTime: 0\n", "");
    let beatmap = parse_osu(&source).expect("must be parsed");
    assert_eq!(beatmap.general().preview_time, None);
    assert_eq!(beatmap.general().preview(), None);
}

#[test]
fn test_already_corrected_source() {
    let config = default_config().legacy_offset(LegacyOffset::AlreadyCorrected);
    let beatmap =
        parse_osu_with_config(&beatmap_source(3, "1000"), config).expect("must be parsed");
    assert_eq!(beatmap.general().preview_time, Some(1000));
    assert_eq!(beatmap.timing_points()[0].time, 500);
    assert_eq!(
        beatmap.events().expect("has events").breaks,
        vec![BreakPeriod::new(5000, 6000)]
    );
}
