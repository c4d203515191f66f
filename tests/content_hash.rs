use pretty_assertions::assert_eq;

use osu_rs::osu::{
    OsuError, model::ContentHash, parse_osu, parse_osu_bytes, parse_osu_reader, parse_path,
};

const SOURCE: &str = include_str!("files/v14_full.osu");

#[test]
fn test_hash_of_raw_bytes() {
    let beatmap = parse_osu(SOURCE).expect("must be parsed");
    assert_eq!(beatmap.content_hash(), &ContentHash::of(SOURCE.as_bytes()));
    assert_eq!(beatmap.content_hash().as_str().len(), 32);

    let again = parse_osu_bytes(SOURCE.as_bytes()).expect("must be parsed");
    assert_eq!(again.content_hash(), beatmap.content_hash());
    assert_eq!(again, beatmap);
}

#[test]
fn test_hash_differs_for_equal_content() {
    let beatmap = parse_osu(SOURCE).expect("must be parsed");
    let with_comment = format!("{SOURCE}\n[Colours]\nCombo1 : 1,2,3\n");
    let other = parse_osu(&with_comment).expect("must be parsed");
    assert!(beatmap.eq_ignoring_hash(&other));
    assert_ne!(beatmap.content_hash(), other.content_hash());
    assert_ne!(beatmap, other);
}

#[test]
fn test_reader_and_path() {
    let from_reader = parse_osu_reader(SOURCE.as_bytes()).expect("must be parsed");
    let from_path = parse_path(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/files/v14_full.osu"))
        .expect("must be parsed");
    assert_eq!(from_reader, from_path);
}

#[test]
fn test_io_and_parse_errors() {
    let err = parse_path(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/files/missing.osu"))
        .expect_err("must fail");
    assert!(matches!(err, OsuError::Io(_)));

    let err = parse_osu_reader(&b"not a beatmap"[..]).expect_err("must fail");
    assert!(matches!(err, OsuError::Parse(_)));
}
