use std::cell::RefCell;

use pretty_assertions::assert_eq;

use osu_rs::osu::{
    command::Section,
    error::ParseError,
    parse::{
        default_config,
        prompt::{
            AlwaysHalt, AlwaysUseNewer, AlwaysUseOlder, DuplicateField, DuplicationWorkaround,
            Prompter,
        },
    },
    parse_osu, parse_osu_with_config,
};

const SOURCE: &str = "osu file format v14

[General]
AudioFilename: first.mp3
AudioLeadIn: 0
Countdown: 0
SampleSet: Normal
StackLeniency: 0.7
Mode: 0
LetterboxInBreaks: 0
AudioFilename: second.mp3

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
0,0,\"first.jpg\"
0,0,\"second.jpg\"
";

fn background(beatmap: &osu_rs::osu::model::Beatmap) -> &str {
    &beatmap
        .events()
        .and_then(|events| events.background.as_ref())
        .expect("has background")
        .filename
}

#[test]
fn test_default_uses_newer() {
    let beatmap = parse_osu(SOURCE).expect("must be parsed");
    assert_eq!(beatmap.general().audio_filename, "second.mp3");
    assert_eq!(background(&beatmap), "second.jpg");

    let beatmap = parse_osu_with_config(SOURCE, default_config().prompter(AlwaysUseNewer))
        .expect("must be parsed");
    assert_eq!(beatmap.general().audio_filename, "second.mp3");
}

#[test]
fn test_always_use_older() {
    let beatmap = parse_osu_with_config(SOURCE, default_config().prompter(AlwaysUseOlder))
        .expect("must be parsed");
    assert_eq!(beatmap.general().audio_filename, "first.mp3");
    assert_eq!(background(&beatmap), "first.jpg");
}

#[test]
fn test_always_halt() {
    let err = parse_osu_with_config(SOURCE, default_config().prompter(AlwaysHalt))
        .expect_err("must halt");
    assert_eq!(
        err.content(),
        &ParseError::DuplicateField {
            section: Section::General,
            line: "AudioFilename: second.mp3".into()
        }
    );
    assert_eq!(&SOURCE[err.range()], "AudioFilename: second.mp3");
}

#[derive(Default)]
struct Recorder(RefCell<Vec<(Section, String)>>);

impl Prompter for Recorder {
    fn handle_duplication(&self, duplication: DuplicateField<'_>) -> DuplicationWorkaround {
        self.0
            .borrow_mut()
            .push((duplication.section, duplication.key.to_string()));
        DuplicationWorkaround::UseOlder
    }
}

#[test]
fn test_custom_prompter_sees_every_duplication() {
    let recorder = Recorder::default();
    let beatmap = parse_osu_with_config(SOURCE, default_config().prompter(&recorder))
        .expect("must be parsed");
    assert_eq!(beatmap.general().audio_filename, "first.mp3");
    assert_eq!(
        recorder.0.into_inner(),
        vec![
            (Section::General, "AudioFilename".to_string()),
            (Section::Events, "Background".to_string()),
        ]
    );
}
