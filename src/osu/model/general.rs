//! This module introduces struct [`General`], the `[General]` section.

use crate::osu::command::{Countdown, GameMode, OverlayPosition, SampleSet};

/// The preview time which means the song select screen has no preview point.
pub const NO_PREVIEW: i32 = -1;

/// The overall settings of the beatmap, from `[General]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// The audio file relative to the beatmap folder. `AudioFilename`
    pub audio_filename: String,
    /// Milliseconds of silence before the audio starts. `AudioLeadIn`
    pub audio_lead_in: i32,
    /// Deprecated hash of the audio file. `AudioHash`
    pub audio_hash: Option<String>,
    /// Where the song select screen starts playing, in milliseconds. `PreviewTime`
    ///
    /// It is `Some(-1)` when the file states explicitly that there is no preview point.
    pub preview_time: Option<i32>,
    /// The countdown speed. `Countdown`
    pub countdown: Countdown,
    /// The default hit sound set. `SampleSet`
    pub sample_set: SampleSet,
    /// How often closely placed objects stack. `StackLeniency`
    pub stack_leniency: f64,
    /// The play mode. `Mode`
    pub mode: GameMode,
    /// Whether breaks have a letterboxing effect. `LetterboxInBreaks`
    pub letterbox_in_breaks: bool,
    /// Deprecated. `StoryFireInFront`
    pub story_fire_in_front: Option<bool>,
    /// Whether the storyboard can use the skin images. `UseSkinSprites`
    pub use_skin_sprites: Option<bool>,
    /// Deprecated. `AlwaysShowPlayfield`
    pub always_show_playfield: Option<bool>,
    /// Draw order of hit circle overlays. `OverlayPosition`
    pub overlay_position: Option<OverlayPosition>,
    /// The preferred skin name. `SkinPreference`
    pub skin_preference: Option<String>,
    /// Whether to show a warning about flashing colours. `EpilepsyWarning`
    pub epilepsy_warning: Option<bool>,
    /// How many beats the countdown is shifted. `CountdownOffset`
    pub countdown_offset: Option<i32>,
    /// Whether the mania "N+1" key layout is used. `SpecialStyle`
    pub special_style: Option<bool>,
    /// Whether the storyboard allows widescreen viewing. `WidescreenStoryboard`
    pub widescreen_storyboard: Option<bool>,
    /// Whether samples change rate with speed mods. `SamplesMatchPlaybackRate`
    pub samples_match_playback_rate: Option<bool>,
}

impl General {
    /// The preview point, or `None` if absent or [`NO_PREVIEW`].
    #[must_use]
    pub fn preview(&self) -> Option<i32> {
        self.preview_time.filter(|&time| time != NO_PREVIEW)
    }
}
