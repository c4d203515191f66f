//! This module introduces struct [`Difficulty`], the `[Difficulty]` section.

/// The difficulty settings, from `[Difficulty]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// `HPDrainRate`
    pub hp_drain_rate: f64,
    /// `CircleSize`
    pub circle_size: f64,
    /// `OverallDifficulty`
    pub overall_difficulty: f64,
    /// `ApproachRate`
    pub approach_rate: f64,
    /// Base slider velocity in hundreds of pixels per beat. `SliderMultiplier`
    pub slider_multiplier: f64,
    /// Slider ticks per beat. `SliderTickRate`
    pub slider_tick_rate: f64,
}
