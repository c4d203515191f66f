//! This module introduces struct [`Metadata`], the `[Metadata]` section.

/// The information to identify the beatmap, from `[Metadata]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Romanised song title. `Title`
    pub title: String,
    /// Song title. `TitleUnicode`
    pub title_unicode: Option<String>,
    /// Romanised song artist. `Artist`
    pub artist: String,
    /// Song artist. `ArtistUnicode`
    pub artist_unicode: Option<String>,
    /// Who made the beatmap. `Creator`
    pub creator: String,
    /// The difficulty name. `Version`
    pub version: String,
    /// The original media the song came from. `Source`
    pub source: Option<String>,
    /// Search terms. `Tags`
    pub tags: Option<Vec<String>>,
    /// The difficulty ID. Early beatmaps are identified by their hash instead. `BeatmapID`
    pub beatmap_id: Option<i64>,
    /// The beatmap set ID. `BeatmapSetID`
    pub beatmap_set_id: Option<i64>,
}
