use rayon::prelude::*;

use osu_rs::osu::{model::Beatmap, parse_osu};

#[test]
fn test_parse_in_parallel() {
    let sources = [
        include_str!("files/v14_full.osu"),
        include_str!("files/v4_legacy.osu"),
    ];
    let sequential: Vec<Beatmap> = sources
        .iter()
        .map(|source| parse_osu(source).expect("must be parsed"))
        .collect();

    let parallel: Vec<Beatmap> = (0..64)
        .into_par_iter()
        .map(|i| parse_osu(sources[i % sources.len()]).expect("must be parsed"))
        .collect();

    for (i, beatmap) in parallel.iter().enumerate() {
        assert_eq!(beatmap, &sequential[i % sources.len()]);
    }
}
