//! Unparsing [`Beatmap`] into the text format.
//!
//! [`Beatmap`] == [unparse](self) ==> Raw [String]
//!
//! The output is read back by [`parse_osu`](super::parse_osu) into an equal beatmap except for
//! the content hash. Fields are written in the order of the parser's tables and absent optional
//! fields are omitted. Timestamps are written raw, that is, with the correction for legacy
//! format versions subtracted.

use std::fmt::{self, Write};

use itertools::Itertools;

use super::{
    command::{EnumMember, Section},
    lex::token::Token,
    model::{
        Beatmap,
        difficulty::Difficulty,
        editor::Editor,
        events::Events,
        general::{General, NO_PREVIEW},
        metadata::Metadata,
        timing::TimingPoint,
    },
};

impl Beatmap {
    /// Writes the beatmap in the text format.
    #[must_use]
    pub fn unparse(&self) -> String {
        Unparsed(self).to_string()
    }

    /// Writes the beatmap in the text format into `w`.
    ///
    /// # Errors
    ///
    /// Returns the error of `w`.
    pub fn write_to(&self, w: &mut impl Write) -> fmt::Result {
        let offset = self.format_version().timing_offset();
        writeln!(w, "{}", Token::Header(self.format_version()))?;

        section(w, Section::General)?;
        write_general(w, self.general(), offset)?;
        section(w, Section::Editor)?;
        write_editor(w, self.editor())?;
        section(w, Section::Metadata)?;
        write_metadata(w, self.metadata())?;
        section(w, Section::Difficulty)?;
        write_difficulty(w, self.difficulty())?;
        if let Some(events) = self.events() {
            section(w, Section::Events)?;
            write_events(w, events, offset)?;
        }
        if !self.timing_points().is_empty() {
            section(w, Section::TimingPoints)?;
            for point in self.timing_points() {
                write_timing_point(w, point, offset)?;
            }
        }
        Ok(())
    }
}

struct Unparsed<'a>(&'a Beatmap);

impl fmt::Display for Unparsed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_to(f)
    }
}

fn section(w: &mut impl Write, section: Section) -> fmt::Result {
    writeln!(w)?;
    writeln!(w, "{}", Token::Section(section.name()))
}

fn field(w: &mut impl Write, key: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(w, "{key}: {value}")
}

fn optional(w: &mut impl Write, key: &str, value: Option<impl fmt::Display>) -> fmt::Result {
    value.map_or(Ok(()), |value| field(w, key, value))
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

fn write_general(w: &mut impl Write, general: &General, offset: i32) -> fmt::Result {
    field(w, "AudioFilename", &general.audio_filename)?;
    field(w, "AudioLeadIn", general.audio_lead_in)?;
    optional(w, "AudioHash", general.audio_hash.as_ref())?;
    let preview_time = general.preview_time.map(|time| {
        if time == NO_PREVIEW {
            time
        } else {
            time.saturating_sub(offset)
        }
    });
    optional(w, "PreviewTime", preview_time)?;
    field(w, "Countdown", general.countdown.ordinal())?;
    field(w, "SampleSet", general.sample_set)?;
    field(w, "StackLeniency", general.stack_leniency)?;
    field(w, "Mode", general.mode.ordinal())?;
    field(w, "LetterboxInBreaks", flag(general.letterbox_in_breaks))?;
    optional(w, "StoryFireInFront", general.story_fire_in_front.map(flag))?;
    optional(w, "UseSkinSprites", general.use_skin_sprites.map(flag))?;
    optional(w, "AlwaysShowPlayfield", general.always_show_playfield.map(flag))?;
    optional(w, "OverlayPosition", general.overlay_position)?;
    optional(w, "SkinPreference", general.skin_preference.as_ref())?;
    optional(w, "EpilepsyWarning", general.epilepsy_warning.map(flag))?;
    optional(w, "CountdownOffset", general.countdown_offset)?;
    optional(w, "SpecialStyle", general.special_style.map(flag))?;
    optional(w, "WidescreenStoryboard", general.widescreen_storyboard.map(flag))?;
    optional(
        w,
        "SamplesMatchPlaybackRate",
        general.samples_match_playback_rate.map(flag),
    )
}

fn write_editor(w: &mut impl Write, editor: &Editor) -> fmt::Result {
    optional(
        w,
        "Bookmarks",
        editor.bookmarks.as_ref().map(|marks| marks.iter().join(",")),
    )?;
    field(w, "DistanceSpacing", editor.distance_spacing)?;
    field(w, "BeatDivisor", editor.beat_divisor)?;
    field(w, "GridSize", editor.grid_size)?;
    field(w, "TimelineZoom", editor.timeline_zoom)
}

fn write_metadata(w: &mut impl Write, metadata: &Metadata) -> fmt::Result {
    field(w, "Title", &metadata.title)?;
    optional(w, "TitleUnicode", metadata.title_unicode.as_ref())?;
    field(w, "Artist", &metadata.artist)?;
    optional(w, "ArtistUnicode", metadata.artist_unicode.as_ref())?;
    field(w, "Creator", &metadata.creator)?;
    field(w, "Version", &metadata.version)?;
    optional(w, "Source", metadata.source.as_ref())?;
    optional(w, "Tags", metadata.tags.as_ref().map(|tags| tags.iter().join(",")))?;
    optional(w, "BeatmapID", metadata.beatmap_id)?;
    optional(w, "BeatmapSetID", metadata.beatmap_set_id)
}

fn write_difficulty(w: &mut impl Write, difficulty: &Difficulty) -> fmt::Result {
    field(w, "HPDrainRate", difficulty.hp_drain_rate)?;
    field(w, "CircleSize", difficulty.circle_size)?;
    field(w, "OverallDifficulty", difficulty.overall_difficulty)?;
    field(w, "ApproachRate", difficulty.approach_rate)?;
    field(w, "SliderMultiplier", difficulty.slider_multiplier)?;
    field(w, "SliderTickRate", difficulty.slider_tick_rate)
}

/// `,x,y` of the offsets present. A missing x before a present y is written as `0`.
fn offsets(x: Option<i32>, y: Option<i32>) -> String {
    match (x, y) {
        (Some(x), Some(y)) => format!(",{x},{y}"),
        (Some(x), None) => format!(",{x}"),
        (None, Some(y)) => format!(",0,{y}"),
        (None, None) => String::new(),
    }
}

fn write_events(w: &mut impl Write, events: &Events, offset: i32) -> fmt::Result {
    if let Some(background) = &events.background {
        writeln!(
            w,
            "0,0,\"{}\"{}",
            background.filename,
            offsets(background.x_offset, background.y_offset)
        )?;
    }
    for video in &events.videos {
        writeln!(
            w,
            "Video,{},\"{}\"{}",
            video.start_time,
            video.filename,
            offsets(video.x_offset, video.y_offset)
        )?;
    }
    for period in &events.breaks {
        writeln!(
            w,
            "2,{},{}",
            period.start_time().saturating_sub(offset),
            period.end_time().saturating_sub(offset)
        )?;
    }
    for line in &events.storyboard {
        writeln!(w, "{line}")?;
    }
    Ok(())
}

/// Writes the fields up to the last one which differs from the legacy default.
fn write_timing_point(w: &mut impl Write, point: &TimingPoint, offset: i32) -> fmt::Result {
    let len = [
        (point.effects.is_some(), 8),
        (!point.timing_change, 7),
        (point.volume.is_some(), 6),
        (point.sample_index != 0, 5),
        (point.sample_set.is_some(), 4),
    ]
    .into_iter()
    .find_map(|(needed, len)| needed.then_some(len))
    .unwrap_or(3);
    let values = [
        point.time.saturating_sub(offset).to_string(),
        point.beat_length.to_string(),
        point.time_signature.to_string(),
        point.sample_set.map_or(0, EnumMember::ordinal).to_string(),
        point.sample_index.to_string(),
        point.volume.unwrap_or(100).to_string(),
        flag(point.timing_change).to_string(),
        point.effects.unwrap_or_default().bits().to_string(),
    ];
    writeln!(w, "{}", values.iter().take(len).join(","))
}
