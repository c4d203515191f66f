//! The parser module of osu! beatmap (.osu) files.
//!
//! This module consists of two phases: lexical analyzing and token parsing.
//!
//! `lex` module splits the source into lines, recognizes the `osu file format vN` header, and
//! classifies the rest as section headers or raw lines. Every token carries its byte range.
//!
//! `parse` module dispatches the lines to a processor per known section and builds the records
//! of [`model::Beatmap`]. Timestamps of files older than format version 5 are corrected by 24ms
//! there, so the returned model never changes afterwards.
//!
//! `unparse` module writes a [`model::Beatmap`] back into the text format.
//!
//! In detail, our policies are:
//!
//! - Unknown sections are skipped, for the forward compatibility with newer formats.
//! - Unknown fields and events in known sections are errors.
//! - Any error fails the whole parse. There is no partial result.
//! - Hit objects, colours and storyboard scripts are not interpreted. Storyboard lines are kept
//!   verbatim.

pub mod command;
pub mod error;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod unparse;

use std::{
    io::{Read, Write},
    path::Path,
};

use thiserror::Error;

use self::{
    error::ParseErrorWithRange,
    lex::TokenStream,
    model::{Beatmap, ContentHash},
    parse::{ParseConfig, default_config, prompt::Prompter},
};

/// The byte order mark of UTF-8, written at the start of the output files.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// An error occurred when reading or writing a beatmap file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OsuError {
    /// Failed to read or write the file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// The file content is not a valid beatmap.
    #[error("parse: {0}")]
    Parse(#[from] ParseErrorWithRange),
}

/// Parse an osu! beatmap file from source text.
///
/// This function provides a convenient way to parse a beatmap in one step, with the
/// [`default_config`]. The content hash is taken over the UTF-8 bytes of `source`.
///
/// # Example
///
/// ```
/// use osu_rs::osu::parse_osu;
///
/// let source = "osu file format v14
///
/// [General]
/// AudioFilename: audio.mp3
/// AudioLeadIn: 0
/// PreviewTime: 1000
/// Countdown: 0
/// SampleSet: Soft
/// StackLeniency: 0.7
/// Mode: 0
/// LetterboxInBreaks: 0
///
/// [Editor]
/// DistanceSpacing: 1
/// BeatDivisor: 4
/// GridSize: 32
/// TimelineZoom: 1
///
/// [Metadata]
/// Title: Song
/// Artist: Someone
/// Creator: mapper
/// Version: Hard
///
/// [Difficulty]
/// HPDrainRate: 5
/// CircleSize: 4
/// OverallDifficulty: 7
/// ApproachRate: 8
/// SliderMultiplier: 1.4
/// SliderTickRate: 1
/// ";
/// let beatmap = parse_osu(source).unwrap();
/// assert_eq!(beatmap.full_title(), "Someone - Song [Hard]");
/// assert_eq!(beatmap.general().preview_time, Some(1000));
/// ```
///
/// # Errors
///
/// Returns the first malformed line, or a missing section or field.
pub fn parse_osu(source: &str) -> Result<Beatmap, ParseErrorWithRange> {
    parse_osu_with_config(source, default_config())
}

/// Parse an osu! beatmap file from source text with the configuration.
///
/// A step of [`parse_osu`]
///
/// # Errors
///
/// Returns the first malformed line, or a missing section or field.
pub fn parse_osu_with_config<P: Prompter>(
    source: &str,
    config: ParseConfig<P>,
) -> Result<Beatmap, ParseErrorWithRange> {
    let content_hash = ContentHash::of(source.as_bytes());
    let stream = TokenStream::parse_lex(source)?;
    Beatmap::from_token_stream(&stream, content_hash, config)
}

/// Parse an osu! beatmap file from raw bytes.
///
/// The bytes are decoded as UTF-8, or UTF-16 if the byte order mark says so. A leading byte
/// order mark is dropped, and so are invalid sequences. The content hash is taken over the raw
/// bytes, including any byte order mark.
///
/// # Errors
///
/// Returns the first malformed line, or a missing section or field.
pub fn parse_osu_bytes(bytes: &[u8]) -> Result<Beatmap, ParseErrorWithRange> {
    parse_osu_bytes_with_config(bytes, default_config())
}

/// Parse an osu! beatmap file from raw bytes with the configuration.
///
/// A step of [`parse_osu_bytes`]
///
/// # Errors
///
/// Returns the first malformed line, or a missing section or field.
pub fn parse_osu_bytes_with_config<P: Prompter>(
    bytes: &[u8],
    config: ParseConfig<P>,
) -> Result<Beatmap, ParseErrorWithRange> {
    let content_hash = ContentHash::of(bytes);
    let source = decode(bytes);
    let stream = TokenStream::parse_lex(&source)?;
    Beatmap::from_token_stream(&stream, content_hash, config)
}

/// Parse an osu! beatmap file from the reader, reading it to the end.
///
/// # Errors
///
/// Returns [`OsuError::Io`] if reading fails, or [`OsuError::Parse`] if the content is not a
/// valid beatmap.
pub fn parse_osu_reader(mut reader: impl Read) -> Result<Beatmap, OsuError> {
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes)?;
    Ok(parse_osu_bytes(&bytes)?)
}

/// Parse an osu! beatmap file at the path.
///
/// # Errors
///
/// Returns [`OsuError::Io`] if the file cannot be read, or [`OsuError::Parse`] if the content
/// is not a valid beatmap.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Beatmap, OsuError> {
    let bytes = std::fs::read(path)?;
    Ok(parse_osu_bytes(&bytes)?)
}

/// Write the beatmap in the text format into the writer, with a leading UTF-8 byte order mark.
///
/// # Errors
///
/// Returns the error of the writer.
pub fn write_beatmap(mut writer: impl Write, beatmap: &Beatmap) -> std::io::Result<()> {
    writer.write_all(UTF8_BOM)?;
    writer.write_all(beatmap.unparse().as_bytes())?;
    writer.flush()
}

/// Write the beatmap into the file at the path, replacing its content.
///
/// # Errors
///
/// Returns the error of creating or writing the file.
pub fn write_path(path: impl AsRef<Path>, beatmap: &Beatmap) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_beatmap(std::io::BufWriter::new(file), beatmap)
}

fn decode(bytes: &[u8]) -> String {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding != encoding_rs::UTF_8 => {
            let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            text.into_owned()
        }
        Some((_, bom_len)) => lossy_utf8(&bytes[bom_len..]),
        None => lossy_utf8(bytes),
    }
}

/// Decodes UTF-8, dropping invalid sequences instead of replacing them.
fn lossy_utf8(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(decode(b"\xEF\xBB\xBFosu"), "osu");
        assert_eq!(decode(b"o\xFFsu"), "osu");
        assert_eq!(decode(b"\xFF\xFEo\0s\0u\0"), "osu");
        assert_eq!(decode("曲".as_bytes()), "曲");
    }
}
