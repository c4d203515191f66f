//! This module introduces struct [`Events`], the `[Events]` section.
//!
//! Storyboard commands are kept as raw lines, in the order of the file.

#[cfg(feature = "serde")]
use crate::osu::error::ValidationError;

/// The background image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    /// The image file relative to the beatmap folder.
    pub filename: String,
    /// Horizontal offset in pixels from the centre of the screen.
    pub x_offset: Option<i32>,
    /// Vertical offset in pixels from the centre of the screen.
    pub y_offset: Option<i32>,
}

/// A background video.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    /// When the video starts in milliseconds.
    pub start_time: i32,
    /// The video file relative to the beatmap folder.
    pub filename: String,
    /// Horizontal offset in pixels from the centre of the screen.
    pub x_offset: Option<i32>,
    /// Vertical offset in pixels from the centre of the screen.
    pub y_offset: Option<i32>,
}

/// An interval of the play without objects.
///
/// The end never precedes the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BreakPeriodParts"))]
pub struct BreakPeriod {
    start_time: i32,
    end_time: i32,
}

impl BreakPeriod {
    /// Creates a break period. An `end_time` before `start_time` is raised to `start_time`.
    #[must_use]
    pub fn new(start_time: i32, end_time: i32) -> Self {
        Self {
            start_time,
            end_time: end_time.max(start_time),
        }
    }

    /// When the break starts in milliseconds.
    #[must_use]
    pub const fn start_time(&self) -> i32 {
        self.start_time
    }

    /// When the break ends in milliseconds.
    #[must_use]
    pub const fn end_time(&self) -> i32 {
        self.end_time
    }

    /// The length of the break in milliseconds.
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.end_time.abs_diff(self.start_time)
    }
}

/// Deserialized break period, not yet checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BreakPeriodParts {
    start_time: i32,
    end_time: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<BreakPeriodParts> for BreakPeriod {
    type Error = ValidationError;

    fn try_from(parts: BreakPeriodParts) -> Result<Self, Self::Error> {
        let BreakPeriodParts {
            start_time,
            end_time,
        } = parts;
        if end_time < start_time {
            return Err(ValidationError::UnorderedBreak {
                start_time,
                end_time,
            });
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }
}

/// The visual events, from `[Events]`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Events {
    /// The background image.
    pub background: Option<Background>,
    /// The background videos in the order of the file.
    pub videos: Vec<Video>,
    /// The break periods in the order of the file.
    pub breaks: Vec<BreakPeriod>,
    /// Raw storyboard lines in the order of the file.
    pub storyboard: Vec<String>,
}
