//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts errors carrying `SourceRangeMixin` (such as `ParseErrorWithRange`) to
//! `ariadne::Report`. Ariadne calculates the rows and columns from the byte ranges.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_rs::{diagnostics::emit_osu_error, osu::parse_osu};
//!
//! let source = "osu file format v14\n\n[General]\nAudioFilename: a.mp3\nFoo: bar\n";
//! let err = parse_osu(source).unwrap_err();
//!
//! emit_osu_error("broken.osu", source, &err);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::osu::error::{ParseError, ParseErrorWithRange};

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source_text = "osu file format v14\n";
/// let source = SimpleSource::new("test.osu", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.osu");
/// ```
pub struct SimpleSource<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for ParseErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let (start, end) = self.as_span();
        let filename = src.name().to_string();
        let (message, color) = match self.content() {
            ParseError::Validation(err) => (format!("validation: {err}"), Color::Yellow),
            other => (format!("parse: {other}"), Color::Red),
        };
        Report::build(ReportKind::Error, (filename.clone(), start..end))
            .with_message(message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(label_of(self.content()))
                    .with_color(color),
            )
            .finish()
    }
}

fn label_of(error: &ParseError) -> String {
    match error {
        ParseError::HeaderParse { .. } => "expected `osu file format vN`".to_string(),
        ParseError::UnsupportedField { section, .. } => format!("unknown key in [{section}]"),
        ParseError::UnsupportedEvent { .. } => "unknown event type".to_string(),
        ParseError::MalformedValue {
            expected, value, ..
        } => format!("expected {expected}, found {value:?}"),
        ParseError::DuplicateField { .. } => "already defined above".to_string(),
        ParseError::Validation(err) => err.to_string(),
    }
}

/// Render the parse error onto stderr, pointing at the offending line.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete source text which was parsed
/// * `error` - The error returned from parsing `source`
pub fn emit_osu_error(name: &str, source: &str, error: &ParseErrorWithRange) {
    let simple = SimpleSource::new(name, source);
    let report = error.to_report(&simple);
    let _ = report.eprint((name.to_string(), Source::from(source)));
}
