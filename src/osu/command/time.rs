//! Definitions of the file format version and timestamp correction.

use std::num::NonZeroU32;

/// How many milliseconds earlier files of format versions below 5 store their absolute timestamps.
pub const LEGACY_TIMING_OFFSET_MS: i32 = 24;

/// The first format version which stores timestamps without the legacy offset.
const FIRST_CORRECTED_VERSION: u32 = 5;

/// The revision of the file grammar, taken from the `osu file format vN` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatVersion(NonZeroU32);

impl FormatVersion {
    /// Creates a format version, or `None` if `version` is zero.
    #[must_use]
    pub const fn new(version: u32) -> Option<Self> {
        match NonZeroU32::new(version) {
            Some(version) => Some(Self(version)),
            None => None,
        }
    }

    /// Gets the version number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether files of this version store timestamps 24ms early.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        self.get() < FIRST_CORRECTED_VERSION
    }

    /// The offset to add to every absolute timestamp read from a file of this version.
    #[must_use]
    pub const fn timing_offset(self) -> i32 {
        if self.is_legacy() {
            LEGACY_TIMING_OFFSET_MS
        } else {
            0
        }
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = u32;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_a_version() {
        assert_eq!(FormatVersion::new(0), None);
        assert_eq!(FormatVersion::try_from(0), Err(0));
    }

    #[test]
    fn test_timing_offset_boundary() {
        let offsets: Vec<_> = (1..=6)
            .filter_map(FormatVersion::new)
            .map(FormatVersion::timing_offset)
            .collect();
        assert_eq!(offsets, vec![24, 24, 24, 24, 0, 0]);
        assert!(FormatVersion::new(4).is_some_and(FormatVersion::is_legacy));
        assert!(!FormatVersion::new(14).is_some_and(FormatVersion::is_legacy));
    }
}
