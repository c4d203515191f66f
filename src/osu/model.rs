//! The beatmap document model.
//!
//! [`Beatmap`] exclusively owns one record per section. Every timestamp in it is already
//! corrected for the format version, so a constructed `Beatmap` is never mutated afterwards.

pub mod difficulty;
pub mod editor;
pub mod events;
pub mod general;
pub mod metadata;
pub mod timing;

use md5::{Digest, Md5};

use super::{command::time::FormatVersion, error::ValidationError};

use self::{
    difficulty::Difficulty, editor::Editor, events::Events, general::General, metadata::Metadata,
    timing::TimingPoint,
};

/// Hex digest of MD5 over the raw bytes of a beatmap file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct ContentHash(String);

impl ContentHash {
    /// Hashes the bytes.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        Self(hex::encode(Md5::digest(bytes)))
    }

    /// Takes a digest in 32 lowercase hex digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidContentHash`] on any other string.
    pub fn from_hex(digest: &str) -> Result<Self, ValidationError> {
        let is_digest = digest.len() == 32
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        is_digest
            .then(|| Self(digest.to_string()))
            .ok_or_else(|| ValidationError::InvalidContentHash(digest.to_string()))
    }

    /// The digest in lowercase hex digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContentHash {
    type Error = ValidationError;

    fn try_from(digest: String) -> Result<Self, Self::Error> {
        Self::from_hex(&digest)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed beatmap file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    format_version: FormatVersion,
    content_hash: ContentHash,
    general: General,
    editor: Editor,
    metadata: Metadata,
    difficulty: Difficulty,
    events: Option<Events>,
    timing_points: Vec<TimingPoint>,
}

/// The records of every section of a beatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    /// `[General]`
    pub general: General,
    /// `[Editor]`
    pub editor: Editor,
    /// `[Metadata]`
    pub metadata: Metadata,
    /// `[Difficulty]`
    pub difficulty: Difficulty,
    /// `[Events]`, if the file has the section.
    pub events: Option<Events>,
    /// `[TimingPoints]` in the order of the file.
    pub timing_points: Vec<TimingPoint>,
}

impl Beatmap {
    /// Assembles a beatmap from section records whose timestamps are already corrected for
    /// `format_version`.
    ///
    /// The records check their own invariants when built, so assembling them cannot fail.
    #[must_use]
    pub fn new(
        format_version: FormatVersion,
        content_hash: ContentHash,
        sections: Sections,
    ) -> Self {
        let Sections {
            general,
            editor,
            metadata,
            difficulty,
            events,
            timing_points,
        } = sections;
        Self {
            format_version,
            content_hash,
            general,
            editor,
            metadata,
            difficulty,
            events,
            timing_points,
        }
    }

    /// The format version from the file header.
    #[must_use]
    pub const fn format_version(&self) -> FormatVersion {
        self.format_version
    }

    /// The hash of the source bytes.
    #[must_use]
    pub const fn content_hash(&self) -> &ContentHash {
        &self.content_hash
    }

    /// `[General]`
    #[must_use]
    pub const fn general(&self) -> &General {
        &self.general
    }

    /// `[Editor]`
    #[must_use]
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// `[Metadata]`
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// `[Difficulty]`
    #[must_use]
    pub const fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// `[Events]`, if the file has the section.
    #[must_use]
    pub const fn events(&self) -> Option<&Events> {
        self.events.as_ref()
    }

    /// `[TimingPoints]` in the order of the file.
    #[must_use]
    pub fn timing_points(&self) -> &[TimingPoint] {
        &self.timing_points
    }

    /// `Artist - Title [Version]`.
    #[must_use]
    pub fn full_title(&self) -> String {
        format!(
            "{} - {} [{}]",
            self.metadata.artist, self.metadata.title, self.metadata.version
        )
    }

    /// Compares every field except the content hash.
    #[must_use]
    pub fn eq_ignoring_hash(&self, other: &Self) -> bool {
        self.format_version == other.format_version
            && self.general == other.general
            && self.editor == other.editor
            && self.metadata == other.metadata
            && self.difficulty == other.difficulty
            && self.events == other.events
            && self.timing_points == other.timing_points
    }

    /// Takes out the section records.
    #[must_use]
    pub fn into_sections(self) -> Sections {
        Sections {
            general: self.general,
            editor: self.editor,
            metadata: self.metadata,
            difficulty: self.difficulty,
            events: self.events,
            timing_points: self.timing_points,
        }
    }
}

impl std::fmt::Display for Beatmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_title())
    }
}
