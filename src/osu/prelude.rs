//! Prelude module for the osu! beatmap parser.
//!
//! This module re-exports all public types from the osu module for convenient access.
//! You can use `use osu_rs::osu::prelude::*;` to import all of them at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_osu_error};

pub use super::{
    OsuError, UTF8_BOM,
    command::{
        Countdown, EnumMember, GameMode, OverlayPosition, RawEnumValue, SampleSet, Section,
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
        time::{FormatVersion, LEGACY_TIMING_OFFSET_MS},
    },
    error::{ParseError, ParseErrorWithRange, ValidationError, ValueKind},
    lex::{
        TokenStream,
        token::{HEADER_PREFIX, Token, TokenWithRange},
    },
    model::{
        Beatmap, ContentHash, Sections,
        difficulty::Difficulty,
        editor::Editor,
        events::{Background, BreakPeriod, Events, Video},
        general::{General, NO_PREVIEW},
        metadata::Metadata,
        timing::{DEFAULT_TIME_SIGNATURE, Effects, TimingPoint, TimingPointFields},
    },
    parse::{
        LegacyOffset, ParseConfig, default_config,
        prompt::{
            AlwaysHalt, AlwaysUseNewer, AlwaysUseOlder, DuplicateField, DuplicationWorkaround,
            Prompter,
        },
    },
    parse_osu, parse_osu_bytes, parse_osu_bytes_with_config, parse_osu_reader,
    parse_osu_with_config, parse_path, write_beatmap, write_path,
};
