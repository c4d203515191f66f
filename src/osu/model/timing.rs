//! This module introduces struct [`TimingPoint`], a line of `[TimingPoints]`.
//!
//! A timing point either sets a new tempo (`timing_change`), or changes only the effects of the
//! tempo it inherits. Inherited points encode a speed multiplier as a negative beat length.

use std::ops::Deref;

use crate::osu::command::SampleSet;
#[cfg(feature = "serde")]
use crate::osu::error::ValidationError;

/// The time signature numerator of legacy files omitting the field.
pub const DEFAULT_TIME_SIGNATURE: i32 = 4;

/// A bitmask of timing point effects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effects(u8);

impl Effects {
    /// Kiai time is enabled.
    pub const KIAI: Self = Self(1);
    /// The first bar line of a taiko or mania section is hidden.
    pub const OMIT_FIRST_BAR_LINE: Self = Self(1 << 3);

    /// Creates from raw bits. Unknown bits are preserved.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// The fields of a timing point as written in the file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPointFields {
    /// The start time in milliseconds.
    pub time: i32,
    /// Milliseconds per beat, or a negative inverse speed multiplier in percent.
    pub beat_length: f64,
    /// Beats in a measure.
    pub time_signature: i32,
    /// The hit sound set, where [`SampleSet::None`] falls back to the beatmap's set.
    pub sample_set: Option<SampleSet>,
    /// Custom sample index, where `0` means the skin's samples.
    pub sample_index: i32,
    /// Hit sound volume in percent.
    pub volume: Option<i32>,
    /// Whether this point sets a new tempo.
    pub timing_change: bool,
    /// Extra effects.
    pub effects: Option<Effects>,
}

impl TimingPointFields {
    /// Creates the fields with the defaults of legacy files which omit trailing fields.
    #[must_use]
    pub const fn new(time: i32, beat_length: f64) -> Self {
        Self {
            time,
            beat_length,
            time_signature: DEFAULT_TIME_SIGNATURE,
            sample_set: None,
            sample_index: 0,
            volume: None,
            timing_change: true,
            effects: None,
        }
    }
}

/// A timing point with its derived tempo values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TimingPointParts"))]
pub struct TimingPoint {
    fields: TimingPointFields,
    speed_multiplier: f64,
    bpm: Option<f64>,
}

impl TimingPoint {
    /// Creates a timing point and derives the speed multiplier and the BPM.
    #[must_use]
    pub fn new(fields: TimingPointFields) -> Self {
        Self {
            fields,
            speed_multiplier: speed_multiplier_of(&fields),
            bpm: bpm_of(&fields),
        }
    }

    /// The fields as written in the file.
    #[must_use]
    pub const fn fields(&self) -> &TimingPointFields {
        &self.fields
    }

    /// The slider velocity multiplier: `100 / -beat_length` for a negative beat length, or `1.0`.
    #[must_use]
    pub const fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Beats per minute, present only on a point with `timing_change` and a positive beat length.
    #[must_use]
    pub const fn bpm(&self) -> Option<f64> {
        self.bpm
    }
}

impl Deref for TimingPoint {
    type Target = TimingPointFields;
    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

/// Deserialized timing point, whose derived values are not yet checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TimingPointParts {
    fields: TimingPointFields,
    speed_multiplier: f64,
    bpm: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<TimingPointParts> for TimingPoint {
    type Error = ValidationError;

    fn try_from(parts: TimingPointParts) -> Result<Self, Self::Error> {
        let point = Self::new(parts.fields);
        let same = |a: f64, b: f64| a.to_bits() == b.to_bits();
        let bpm_agrees = match (parts.bpm, point.bpm) {
            (Some(a), Some(b)) => same(a, b),
            (None, None) => true,
            _ => false,
        };
        if !bpm_agrees || !same(parts.speed_multiplier, point.speed_multiplier) {
            return Err(ValidationError::InconsistentTimingPoint { time: point.time });
        }
        Ok(point)
    }
}

fn speed_multiplier_of(fields: &TimingPointFields) -> f64 {
    if fields.beat_length < 0.0 {
        100.0 / -fields.beat_length
    } else {
        1.0
    }
}

fn bpm_of(fields: &TimingPointFields) -> Option<f64> {
    (fields.timing_change && fields.beat_length > 0.0).then(|| 60000.0 / fields.beat_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninherited_point() {
        let point = TimingPoint::new(TimingPointFields::new(500, 500.0));
        assert_eq!(point.bpm(), Some(120.0));
        assert_eq!(point.speed_multiplier(), 1.0);
        assert_eq!(point.time_signature, DEFAULT_TIME_SIGNATURE);
        assert!(point.timing_change);
    }

    #[test]
    fn test_inherited_point_has_no_bpm() {
        let point = TimingPoint::new(TimingPointFields {
            timing_change: false,
            ..TimingPointFields::new(1000, -50.0)
        });
        assert_eq!(point.bpm(), None);
        assert_eq!(point.speed_multiplier(), 2.0);

        let point = TimingPoint::new(TimingPointFields {
            timing_change: false,
            ..TimingPointFields::new(1000, 300.0)
        });
        assert_eq!(point.bpm(), None);
        assert_eq!(point.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_negative_beat_length_with_timing_change() {
        let point = TimingPoint::new(TimingPointFields::new(0, -100.0));
        assert_eq!(point.bpm(), None);
        assert_eq!(point.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_effects() {
        let effects = Effects::from_bits(9);
        assert!(effects.contains(Effects::KIAI));
        assert!(effects.contains(Effects::OMIT_FIRST_BAR_LINE));
        assert!(!Effects::from_bits(8).contains(Effects::KIAI));
        assert_eq!(Effects::default().bits(), 0);
    }
}
