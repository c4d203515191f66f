//! Processor of `[Metadata]`.

use crate::osu::{
    command::Section,
    error::{Result, ValidationError},
    model::metadata::Metadata,
    parse::prompt::Prompter,
};

use super::{ProcessContext, SectionProcessor, value};

#[derive(Debug, Default)]
pub(crate) struct MetadataProcessor {
    title: Option<String>,
    title_unicode: Option<String>,
    artist: Option<String>,
    artist_unicode: Option<String>,
    creator: Option<String>,
    version: Option<String>,
    source: Option<String>,
    tags: Option<Vec<String>>,
    beatmap_id: Option<i64>,
    beatmap_set_id: Option<i64>,
}

impl SectionProcessor for MetadataProcessor {
    type Output = Metadata;
    const SECTION: Section = Section::Metadata;

    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        let (key, value) = ctx.key_value()?;
        let text = || value.to_string();
        match key {
            "Title" => ctx.assign(key, &mut self.title, text()),
            "TitleUnicode" => ctx.assign(key, &mut self.title_unicode, text()),
            "Artist" => ctx.assign(key, &mut self.artist, text()),
            "ArtistUnicode" => ctx.assign(key, &mut self.artist_unicode, text()),
            "Creator" => ctx.assign(key, &mut self.creator, text()),
            "Version" => ctx.assign(key, &mut self.version, text()),
            "Source" => ctx.assign(key, &mut self.source, text()),
            "Tags" => ctx.assign(key, &mut self.tags, value::string_list(value)),
            "BeatmapID" => ctx.assign(key, &mut self.beatmap_id, ctx.integer(value)?),
            "BeatmapSetID" => ctx.assign(key, &mut self.beatmap_set_id, ctx.integer(value)?),
            _ => Err(ctx.unsupported_field()),
        }
    }

    fn finish(self) -> core::result::Result<Metadata, ValidationError> {
        let missing = |field| ValidationError::MissingField {
            section: Self::SECTION,
            field,
        };
        Ok(Metadata {
            title: self.title.ok_or_else(|| missing("Title"))?,
            title_unicode: self.title_unicode,
            artist: self.artist.ok_or_else(|| missing("Artist"))?,
            artist_unicode: self.artist_unicode,
            creator: self.creator.ok_or_else(|| missing("Creator"))?,
            version: self.version.ok_or_else(|| missing("Version"))?,
            source: self.source,
            tags: self.tags,
            beatmap_id: self.beatmap_id,
            beatmap_set_id: self.beatmap_set_id,
        })
    }
}
