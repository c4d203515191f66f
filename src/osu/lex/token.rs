//! Definitions of the line tokens.

use crate::{
    osu::command::{mixin::SourceRangeMixin, time::FormatVersion},
    util::StrExtension,
};

/// The prefix of the first line, followed by the version number.
pub const HEADER_PREFIX: &str = "osu file format v";

/// A token classifying a line of the beatmap file.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// `osu file format vN`. Appears only as the first token.
    Header(FormatVersion),
    /// `[Name]` switches the current section. It contains the trimmed name between brackets.
    Section(&'a str),
    /// Any other non-blank line, without the line terminator. The leading whitespaces are
    /// significant for storyboard commands, so it is not trimmed.
    Line(&'a str),
}

/// A token with the byte range of its line.
pub type TokenWithRange<'a> = SourceRangeMixin<Token<'a>>;

impl<'a> Token<'a> {
    /// Parses the header line, ignoring a leading byte order mark.
    #[must_use]
    pub fn parse_header(line: &str) -> Option<Self> {
        let digits = line
            .trim_start_matches('\u{feff}')
            .trim()
            .strip_prefix_ignore_case(HEADER_PREFIX)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().and_then(FormatVersion::new).map(Self::Header)
    }

    /// Classifies a line following the header. Blank lines have no token.
    #[must_use]
    pub fn parse_line(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            match trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                Some(name) => Self::Section(name.trim()),
                None => Self::Line(line),
            },
        )
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header(version) => write!(f, "{HEADER_PREFIX}{version}"),
            Self::Section(name) => write!(f, "[{name}]"),
            Self::Line(line) => f.write_str(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let version = |v| FormatVersion::new(v).map(Token::Header);
        assert_eq!(Token::parse_header("osu file format v14"), version(14));
        assert_eq!(Token::parse_header("\u{feff}osu file format v3  "), version(3));
        assert_eq!(Token::parse_header("OSU FILE FORMAT V7"), version(7));
        assert_eq!(Token::parse_header("osu file format v0"), None);
        assert_eq!(Token::parse_header("osu file format v"), None);
        assert_eq!(Token::parse_header("osu file format v1x"), None);
        assert_eq!(Token::parse_header("osu file format v-3"), None);
        assert_eq!(Token::parse_header("[General]"), None);
        assert_eq!(Token::parse_header(""), None);
    }

    #[test]
    fn test_line_classification() {
        assert_eq!(Token::parse_line("   "), None);
        assert_eq!(Token::parse_line("[General]"), Some(Token::Section("General")));
        assert_eq!(Token::parse_line(" [ Events ] "), Some(Token::Section("Events")));
        assert_eq!(
            Token::parse_line(" F,0,100,200,0,1"),
            Some(Token::Line(" F,0,100,200,0,1"))
        );
        assert_eq!(Token::parse_line("Mode: 1"), Some(Token::Line("Mode: 1")));
    }

    #[test]
    fn test_display() {
        let header = FormatVersion::new(14).map(Token::Header);
        assert_eq!(header.map(|h| h.to_string()).as_deref(), Some("osu file format v14"));
        assert_eq!(Token::Section("Editor").to_string(), "[Editor]");
    }
}
