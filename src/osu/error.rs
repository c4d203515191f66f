//! Errors occurred when parsing or validating a beatmap file.
//!
//! Every error is fatal: a malformed file always fails the whole parse.

use thiserror::Error;

use super::command::{Section, mixin::SourceRangeMixin};

/// The primitive kind a value was expected to be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// A signed integer.
    Integer,
    /// A finite floating point number.
    Float,
    /// `0` or `1`.
    Flag,
    /// A comma-separated list of integers.
    IntegerList,
    /// A double-quoted or bare filename.
    Filename,
    /// A count of comma-separated fields.
    FieldCount,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Flag => "flag (0 or 1)",
            Self::IntegerList => "list of integers",
            Self::Filename => "filename",
            Self::FieldCount => "field count",
        })
    }
}

/// A structural violation found when constructing the beatmap model.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// A required section never appeared in the file.
    #[error("missing required section [{0}]")]
    MissingSection(Section),
    /// A required field of a section was not set.
    #[error("missing required field `{field}` in [{section}]")]
    MissingField {
        /// The section which requires the field.
        section: Section,
        /// The key of the field.
        field: &'static str,
    },
    /// The value matched no member of an enumeration.
    #[error("{enumeration} {value} does not exist")]
    UnknownEnumMember {
        /// The name of the enumeration.
        enumeration: &'static str,
        /// The offending value.
        value: String,
    },
    /// A deserialized break period ends before it starts.
    #[error("break period ends at {end_time} before its start {start_time}")]
    UnorderedBreak {
        /// The start time in milliseconds.
        start_time: i32,
        /// The end time in milliseconds.
        end_time: i32,
    },
    /// A deserialized timing point carries derived values which disagree with its own fields.
    #[error("timing point at {time} has inconsistent derived values")]
    InconsistentTimingPoint {
        /// The time of the timing point in milliseconds.
        time: i32,
    },
    /// The content hash is not a hex digest of MD5.
    #[error("content hash {0:?} is not a 32 digit lowercase hex string")]
    InvalidContentHash(String),
}

/// An error occurred when parsing the beatmap file.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseError {
    /// The first line is not a `osu file format vN` header.
    #[error("expected `osu file format vN` header but found {line:?}")]
    HeaderParse {
        /// The raw first line.
        line: String,
    },
    /// The key is not known in the section.
    #[error("unsupported field in [{section}]: {line:?}")]
    UnsupportedField {
        /// The section where the line is.
        section: Section,
        /// The raw line.
        line: String,
    },
    /// The leading token of the event is not known.
    #[error("unsupported event: {line:?}")]
    UnsupportedEvent {
        /// The raw line.
        line: String,
    },
    /// A value could not be coerced into its primitive kind.
    #[error("expected {expected} in [{section}] but found {value:?}: {line:?}")]
    MalformedValue {
        /// The section where the line is.
        section: Section,
        /// The expected kind of the value.
        expected: ValueKind,
        /// The raw value.
        value: String,
        /// The raw line.
        line: String,
    },
    /// The field was set twice, and the prompter chose to halt.
    #[error("duplicated field in [{section}]: {line:?}")]
    DuplicateField {
        /// The section where the line is.
        section: Section,
        /// The raw line of the later definition.
        line: String,
    },
    /// Violation of the model structure.
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// A parse error with the byte range of the offending source.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;
