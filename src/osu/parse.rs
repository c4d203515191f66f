//! Parsing [`Beatmap`] from [`TokenStream`].
//!
//! Raw [String] == [lex](super::lex) ==> [`TokenStream`] == [parse](self) ==> [`Beatmap`]
//!
//! Lines are dispatched to a processor of the current section. Lines before any section and
//! lines under an unknown section are ignored, so files with sections from newer formats still
//! parse. Inside a known section, every line must be understood.

mod difficulty;
mod editor;
mod events;
mod general;
mod metadata;
pub mod prompt;
mod timing_points;
mod value;

use std::{collections::HashMap, ops::Range};

use super::{
    command::{
        EnumMember, RawEnumValue, Section,
        mixin::SourceRangeMixinExt,
    },
    error::{ParseError, ParseErrorWithRange, Result, ValidationError, ValueKind},
    lex::{TokenStream, token::Token},
    model::{Beatmap, ContentHash, Sections},
};
use crate::util::StrExtension;

use self::{
    difficulty::DifficultyProcessor,
    editor::EditorProcessor,
    events::EventsProcessor,
    general::GeneralProcessor,
    metadata::MetadataProcessor,
    prompt::{AlwaysUseNewer, DuplicateField, Prompter},
    timing_points::TimingPointsProcessor,
};

/// Whether to correct timestamps of files older than format version 5.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyOffset {
    /// Add 24ms to every absolute timestamp of legacy files.
    #[default]
    Apply,
    /// The source timestamps are already corrected, so leave them untouched.
    AlreadyCorrected,
}

/// Settings of the parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseConfig<P> {
    prompter: P,
    legacy_offset: LegacyOffset,
}

/// The configuration used by [`parse_osu`](super::parse_osu): later duplicated fields win, and
/// legacy timestamps are corrected.
#[must_use]
pub const fn default_config() -> ParseConfig<AlwaysUseNewer> {
    ParseConfig {
        prompter: AlwaysUseNewer,
        legacy_offset: LegacyOffset::Apply,
    }
}

impl<P> ParseConfig<P> {
    /// Replaces the handler of duplicated fields.
    pub fn prompter<P2: Prompter>(self, prompter: P2) -> ParseConfig<P2> {
        ParseConfig {
            prompter,
            legacy_offset: self.legacy_offset,
        }
    }

    /// Replaces the policy of the legacy timestamp correction.
    #[must_use]
    pub const fn legacy_offset(mut self, legacy_offset: LegacyOffset) -> Self {
        self.legacy_offset = legacy_offset;
        self
    }
}

/// What a processor knows about the line it handles.
pub(crate) struct ProcessContext<'a, P> {
    section: Section,
    line: &'a str,
    timing_offset: i32,
    prompter: &'a P,
}

impl<'a, P: Prompter> ProcessContext<'a, P> {
    /// The raw line.
    pub(crate) const fn line(&self) -> &'a str {
        self.line
    }

    /// Corrects an absolute timestamp for the format version.
    pub(crate) const fn corrected(&self, time: i32) -> i32 {
        time.saturating_add(self.timing_offset)
    }

    pub(crate) fn unsupported_field(&self) -> ParseError {
        ParseError::UnsupportedField {
            section: self.section,
            line: self.line.to_string(),
        }
    }

    pub(crate) fn malformed(&self, expected: ValueKind, value: &str) -> ParseError {
        ParseError::MalformedValue {
            section: self.section,
            expected,
            value: value.to_string(),
            line: self.line.to_string(),
        }
    }

    /// Splits a `Key: value` line.
    pub(crate) fn key_value(&self) -> Result<(&'a str, &'a str)> {
        self.line
            .split_key_value()
            .ok_or_else(|| self.unsupported_field())
    }

    /// Coerces `value` by `coercion`, or reports it as malformed `expected`.
    pub(crate) fn coerce<'v, T>(
        &self,
        expected: ValueKind,
        value: &'v str,
        coercion: impl FnOnce(&'v str) -> Option<T>,
    ) -> Result<T> {
        coercion(value).ok_or_else(|| self.malformed(expected, value))
    }

    pub(crate) fn integer<T: std::str::FromStr>(&self, value: &str) -> Result<T> {
        self.coerce(ValueKind::Integer, value, value::integer)
    }

    pub(crate) fn float(&self, value: &str) -> Result<f64> {
        self.coerce(ValueKind::Float, value, value::float)
    }

    pub(crate) fn flag(&self, value: &str) -> Result<bool> {
        self.coerce(ValueKind::Flag, value, value::flag)
    }

    pub(crate) fn enumeration<T: EnumMember>(&self, value: &str) -> Result<T> {
        Ok(T::from_raw(RawEnumValue::Str(value.trim()))?)
    }

    /// Sets the field, consulting the prompter if it is already set.
    pub(crate) fn assign<T>(&self, key: &str, slot: &mut Option<T>, value: T) -> Result<()> {
        match slot {
            Some(older) => {
                let duplication = DuplicateField {
                    section: self.section,
                    key,
                    line: self.line,
                };
                self.prompter
                    .handle_duplication(duplication)
                    .apply(older, value, duplication)
            }
            None => {
                *slot = Some(value);
                Ok(())
            }
        }
    }
}

/// A processor of the lines in a section. An implementation builds the record of only one
/// section.
pub(crate) trait SectionProcessor: Default {
    /// The record of the section.
    type Output;
    /// The section handled.
    const SECTION: Section;

    /// Processes a non-blank line in the section.
    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()>;

    /// Builds the record, checking the required fields.
    fn finish(self) -> core::result::Result<Self::Output, ValidationError>;
}

#[derive(Default)]
struct Processors {
    general: GeneralProcessor,
    editor: EditorProcessor,
    metadata: MetadataProcessor,
    difficulty: DifficultyProcessor,
    events: EventsProcessor,
    timing_points: TimingPointsProcessor,
}

impl Processors {
    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        match ctx.section {
            Section::General => self.general.on_line(ctx),
            Section::Editor => self.editor.on_line(ctx),
            Section::Metadata => self.metadata.on_line(ctx),
            Section::Difficulty => self.difficulty.on_line(ctx),
            Section::Events => self.events.on_line(ctx),
            Section::TimingPoints => self.timing_points.on_line(ctx),
        }
    }

    fn finish(
        self,
        section_ranges: &HashMap<Section, Range<usize>>,
    ) -> core::result::Result<Sections, ParseErrorWithRange> {
        Ok(Sections {
            general: finish_required(self.general, section_ranges)?,
            editor: finish_required(self.editor, section_ranges)?,
            metadata: finish_required(self.metadata, section_ranges)?,
            difficulty: finish_required(self.difficulty, section_ranges)?,
            events: finish_optional(self.events, section_ranges)?,
            timing_points: finish_optional(self.timing_points, section_ranges)?
                .unwrap_or_default(),
        })
    }
}

fn finish_required<S: SectionProcessor>(
    processor: S,
    section_ranges: &HashMap<Section, Range<usize>>,
) -> core::result::Result<S::Output, ParseErrorWithRange> {
    let Some(range) = section_ranges.get(&S::SECTION) else {
        return Err(
            ParseError::from(ValidationError::MissingSection(S::SECTION)).into_wrapper_range(0..0),
        );
    };
    processor
        .finish()
        .map_err(|err| ParseError::from(err).into_wrapper_range(range.clone()))
}

fn finish_optional<S: SectionProcessor>(
    processor: S,
    section_ranges: &HashMap<Section, Range<usize>>,
) -> core::result::Result<Option<S::Output>, ParseErrorWithRange> {
    section_ranges
        .get(&S::SECTION)
        .map(|range| {
            processor
                .finish()
                .map_err(|err| ParseError::from(err).into_wrapper_range(range.clone()))
        })
        .transpose()
}

impl Beatmap {
    /// Parses a token stream into [`Beatmap`]. `content_hash` must be the hash of the source
    /// bytes the tokens came from.
    ///
    /// # Errors
    ///
    /// Returns the first malformed line as a [`ParseErrorWithRange`] with its range, or a
    /// [`ValidationError`] if the assembled sections are incomplete.
    pub fn from_token_stream<P: Prompter>(
        stream: &TokenStream<'_>,
        content_hash: ContentHash,
        config: ParseConfig<P>,
    ) -> core::result::Result<Self, ParseErrorWithRange> {
        let ParseConfig {
            prompter,
            legacy_offset,
        } = config;
        let timing_offset = match legacy_offset {
            LegacyOffset::Apply => stream.version().timing_offset(),
            LegacyOffset::AlreadyCorrected => 0,
        };

        let mut processors = Processors::default();
        let mut section_ranges = HashMap::new();
        let mut current = None;
        for token in stream.body() {
            match *token.content() {
                Token::Header(_) => {}
                Token::Section(name) => {
                    current = Section::from_name(name);
                    if let Some(section) = current {
                        section_ranges.entry(section).or_insert_with(|| token.range());
                    }
                }
                Token::Line(line) => {
                    let Some(section) = current else {
                        continue;
                    };
                    let ctx = ProcessContext {
                        section,
                        line,
                        timing_offset,
                        prompter: &prompter,
                    };
                    processors
                        .on_line(&ctx)
                        .map_err(|err| err.into_wrapper(token))?;
                }
            }
        }

        let sections = processors.finish(&section_ranges)?;
        Ok(Self::new(stream.version(), content_hash, sections))
    }
}

