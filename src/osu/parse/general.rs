//! Processor of `[General]`.

use crate::osu::{
    command::{Countdown, GameMode, OverlayPosition, SampleSet, Section},
    error::{Result, ValidationError},
    model::general::{General, NO_PREVIEW},
    parse::prompt::Prompter,
};

use super::{ProcessContext, SectionProcessor};

#[derive(Debug, Default)]
pub(crate) struct GeneralProcessor {
    audio_filename: Option<String>,
    audio_lead_in: Option<i32>,
    audio_hash: Option<String>,
    preview_time: Option<i32>,
    countdown: Option<Countdown>,
    sample_set: Option<SampleSet>,
    stack_leniency: Option<f64>,
    mode: Option<GameMode>,
    letterbox_in_breaks: Option<bool>,
    story_fire_in_front: Option<bool>,
    use_skin_sprites: Option<bool>,
    always_show_playfield: Option<bool>,
    overlay_position: Option<OverlayPosition>,
    skin_preference: Option<String>,
    epilepsy_warning: Option<bool>,
    countdown_offset: Option<i32>,
    special_style: Option<bool>,
    widescreen_storyboard: Option<bool>,
    samples_match_playback_rate: Option<bool>,
}

impl SectionProcessor for GeneralProcessor {
    type Output = General;
    const SECTION: Section = Section::General;

    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        let (key, value) = ctx.key_value()?;
        match key {
            "AudioFilename" => ctx.assign(key, &mut self.audio_filename, value.to_string()),
            "AudioLeadIn" => ctx.assign(key, &mut self.audio_lead_in, ctx.integer(value)?),
            "AudioHash" => ctx.assign(key, &mut self.audio_hash, value.to_string()),
            "PreviewTime" => {
                let raw = ctx.integer(value)?;
                let time = if raw == NO_PREVIEW {
                    raw
                } else {
                    ctx.corrected(raw)
                };
                ctx.assign(key, &mut self.preview_time, time)
            }
            "Countdown" => ctx.assign(key, &mut self.countdown, ctx.enumeration(value)?),
            "SampleSet" => ctx.assign(key, &mut self.sample_set, ctx.enumeration(value)?),
            "StackLeniency" => ctx.assign(key, &mut self.stack_leniency, ctx.float(value)?),
            "Mode" => ctx.assign(key, &mut self.mode, ctx.enumeration(value)?),
            "LetterboxInBreaks" => {
                ctx.assign(key, &mut self.letterbox_in_breaks, ctx.flag(value)?)
            }
            "StoryFireInFront" => {
                ctx.assign(key, &mut self.story_fire_in_front, ctx.flag(value)?)
            }
            "UseSkinSprites" => ctx.assign(key, &mut self.use_skin_sprites, ctx.flag(value)?),
            "AlwaysShowPlayfield" => {
                ctx.assign(key, &mut self.always_show_playfield, ctx.flag(value)?)
            }
            "OverlayPosition" => {
                ctx.assign(key, &mut self.overlay_position, ctx.enumeration(value)?)
            }
            "SkinPreference" => ctx.assign(key, &mut self.skin_preference, value.to_string()),
            "EpilepsyWarning" => ctx.assign(key, &mut self.epilepsy_warning, ctx.flag(value)?),
            "CountdownOffset" => {
                ctx.assign(key, &mut self.countdown_offset, ctx.integer(value)?)
            }
            "SpecialStyle" => ctx.assign(key, &mut self.special_style, ctx.flag(value)?),
            "WidescreenStoryboard" => {
                ctx.assign(key, &mut self.widescreen_storyboard, ctx.flag(value)?)
            }
            "SamplesMatchPlaybackRate" => {
                ctx.assign(key, &mut self.samples_match_playback_rate, ctx.flag(value)?)
            }
            _ => Err(ctx.unsupported_field()),
        }
    }

    fn finish(self) -> core::result::Result<General, ValidationError> {
        let missing = |field| ValidationError::MissingField {
            section: Self::SECTION,
            field,
        };
        Ok(General {
            audio_filename: self.audio_filename.ok_or_else(|| missing("AudioFilename"))?,
            audio_lead_in: self.audio_lead_in.ok_or_else(|| missing("AudioLeadIn"))?,
            audio_hash: self.audio_hash,
            preview_time: self.preview_time,
            countdown: self.countdown.ok_or_else(|| missing("Countdown"))?,
            sample_set: self.sample_set.ok_or_else(|| missing("SampleSet"))?,
            stack_leniency: self.stack_leniency.ok_or_else(|| missing("StackLeniency"))?,
            mode: self.mode.ok_or_else(|| missing("Mode"))?,
            letterbox_in_breaks: self
                .letterbox_in_breaks
                .ok_or_else(|| missing("LetterboxInBreaks"))?,
            story_fire_in_front: self.story_fire_in_front,
            use_skin_sprites: self.use_skin_sprites,
            always_show_playfield: self.always_show_playfield,
            overlay_position: self.overlay_position,
            skin_preference: self.skin_preference,
            epilepsy_warning: self.epilepsy_warning,
            countdown_offset: self.countdown_offset,
            special_style: self.special_style,
            widescreen_storyboard: self.widescreen_storyboard,
            samples_match_playback_rate: self.samples_match_playback_rate,
        })
    }
}
