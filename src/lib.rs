//! The osu! beatmap file format parser.
//!
//! This crate reads the sectioned text format of `.osu` beatmap files into a validated,
//! strongly-typed [`osu::model::Beatmap`], and writes it back into the text format.
//!
//! ```
//! use osu_rs::osu::parse_osu;
//!
//! let source = "osu file format v14\n\n[General]\nAudioFilename: song.mp3\n";
//! // Required fields of the other sections are missing, so this fails with a validation error.
//! assert!(parse_osu(source).is_err());
//! ```
//!
//! See the [`osu`] module for the parsing phases and the accepted grammar.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "diagnostics")]
#[cfg_attr(docsrs, doc(cfg(feature = "diagnostics")))]
pub mod diagnostics;
pub mod osu;

pub(crate) mod util;

pub use osu::{parse_osu, parse_osu_bytes};
