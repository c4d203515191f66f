//! Lexical analyzer of the beatmap file format.
//!
//! Raw [String] == [lex](TokenStream::parse_lex) ==> [`TokenStream`] ==
//! [parse](crate::osu::parse) ==> [`Beatmap`](crate::osu::model::Beatmap)
//!
//! The analysis works per line: the first line must be the version header, blank lines are
//! dropped, and every other line becomes either a section switch or a raw content line.

mod cursor;
pub mod token;

use super::{
    command::{mixin::SourceRangeMixinExt, time::FormatVersion},
    error::{ParseError, ParseErrorWithRange},
};

use self::{
    cursor::Cursor,
    token::{Token, TokenWithRange},
};

/// Tokens of a whole beatmap file, starting with its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'a> {
    version: FormatVersion,
    tokens: Vec<TokenWithRange<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Analyzes and converts the beatmap text into [`TokenStream`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::HeaderParse`] if the first line is not `osu file format vN`.
    pub fn parse_lex(source: &'a str) -> Result<Self, ParseErrorWithRange> {
        let mut cursor = Cursor::new(source);
        let (header_range, header) = cursor.next_line().unwrap_or((0..0, ""));
        let Some(Token::Header(version)) = Token::parse_header(header) else {
            return Err(ParseError::HeaderParse {
                line: header.to_string(),
            }
            .into_wrapper_range(header_range));
        };

        let mut tokens = vec![Token::Header(version).into_wrapper_range(header_range)];
        while let Some((range, line)) = cursor.next_line() {
            if let Some(token) = Token::parse_line(line) {
                tokens.push(token.into_wrapper_range(range));
            }
        }
        Ok(Self { version, tokens })
    }

    /// The format version from the header.
    #[must_use]
    pub const fn version(&self) -> FormatVersion {
        self.version
    }

    /// The tokens including the header token.
    #[must_use]
    pub fn tokens(&self) -> &[TokenWithRange<'a>] {
        &self.tokens
    }

    /// Iterates the tokens after the header token.
    pub fn body(&self) -> impl Iterator<Item = &TokenWithRange<'a>> {
        self.tokens.iter().skip(1)
    }
}
