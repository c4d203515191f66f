//! This module introduces struct [`Editor`], the `[Editor]` section.

/// The editor states saved with the beatmap, from `[Editor]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// Bookmarked times in milliseconds. `Bookmarks`
    pub bookmarks: Option<Vec<i32>>,
    /// The distance snap multiplier. `DistanceSpacing`
    pub distance_spacing: f64,
    /// The beat snap divisor. `BeatDivisor`
    pub beat_divisor: i32,
    /// The grid size. `GridSize`
    pub grid_size: i32,
    /// The scale of the timeline. `TimelineZoom`
    pub timeline_zoom: f64,
}
