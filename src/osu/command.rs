//! Definitions of field value data.
//!
//! Structures in this module are used by the [lex](super::lex) part, the [parse](super::parse)
//! part, and the output [model](super::model).

pub mod mixin;
pub mod time;

use super::error::ValidationError;

/// A raw representation which may name a member of an enumeration.
///
/// Enumerated fields accept the member itself, its ordinal, or a string which is either its
/// symbolic name (case-insensitive) or its ordinal rendered in decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawEnumValue<'a, T> {
    /// Already a member.
    Member(T),
    /// The ordinal of a member.
    Int(i64),
    /// The symbolic name or the decimal ordinal of a member.
    Str(&'a str),
}

impl<T> From<i64> for RawEnumValue<'_, T> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<'a, T> From<&'a str> for RawEnumValue<'a, T> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

/// An enumeration described by a table of its members.
///
/// The coercion from [`RawEnumValue`] is implemented once here and shared by every enumeration
/// of the file format.
pub trait EnumMember: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// The name of the enumeration, used in error messages.
    const NAME: &'static str;
    /// Every member with its ordinal and accepted names. The first name is the canonical one.
    const MEMBERS: &'static [(Self, i64, &'static [&'static str])];

    /// The ordinal of the member.
    fn ordinal(self) -> i64;

    /// The canonical symbolic name of the member.
    fn name(self) -> &'static str;

    /// Finds the member which has the ordinal.
    fn from_ordinal(ordinal: i64) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|&&(_, member_ordinal, _)| member_ordinal == ordinal)
            .map(|&(member, _, _)| member)
    }

    /// Finds the member which has the name, regardless of its case.
    fn from_name(name: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|(_, _, names)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|&(member, _, _)| member)
    }

    /// Coerces a raw representation into a member.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEnumMember`] when no member matches `raw`.
    fn from_raw(raw: RawEnumValue<'_, Self>) -> Result<Self, ValidationError> {
        let found = match raw {
            RawEnumValue::Member(member) => Some(member),
            RawEnumValue::Int(ordinal) => Self::from_ordinal(ordinal),
            RawEnumValue::Str(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                text.parse().ok().and_then(Self::from_ordinal)
            }
            RawEnumValue::Str(text) => Self::from_name(text),
        };
        found.ok_or_else(|| ValidationError::UnknownEnumMember {
            enumeration: Self::NAME,
            value: match raw {
                RawEnumValue::Member(member) => format!("{member:?}"),
                RawEnumValue::Int(ordinal) => ordinal.to_string(),
                RawEnumValue::Str(text) => text.to_string(),
            },
        })
    }
}

macro_rules! enum_members {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $ordinal:literal => [$canonical:literal $(, $alias:literal)*]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl EnumMember for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [(Self, i64, &'static [&'static str])] =
                &[$((Self::$variant, $ordinal, &[$canonical $(, $alias)*])),+];

            fn ordinal(self) -> i64 {
                match self {
                    $(Self::$variant => $ordinal,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $canonical,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_raw(RawEnumValue::Str(s))
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::from_raw(RawEnumValue::Int(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

enum_members! {
    /// The countdown shown before the first object.
    pub enum Countdown {
        /// No countdown.
        None = 0 => ["None"],
        /// Countdown at the normal speed.
        Normal = 1 => ["Normal"],
        /// Countdown at half speed.
        Half = 2 => ["Half"],
        /// Countdown at double speed.
        Double = 3 => ["Double"],
    }
}

enum_members! {
    /// A set of hit sounds.
    pub enum SampleSet {
        /// No specific set, which falls back to the beatmap's set on timing points.
        None = 0 => ["None"],
        /// The normal set.
        Normal = 1 => ["Normal"],
        /// The soft set.
        Soft = 2 => ["Soft"],
        /// The drum set.
        Drum = 3 => ["Drum"],
    }
}

enum_members! {
    /// Where hit circle overlays are drawn relative to the numbers.
    pub enum OverlayPosition {
        /// Use the skin setting.
        NoChange = 0 => ["NoChange"],
        /// Draw overlays under numbers.
        Below = 1 => ["Below"],
        /// Draw overlays on top of numbers.
        Above = 2 => ["Above"],
    }
}

enum_members! {
    /// A play mode of the game.
    pub enum GameMode {
        /// The standard mode, clicking circles.
        Osu = 0 => ["Osu", "Standard"],
        /// The drum mode.
        Taiko = 1 => ["Taiko"],
        /// The fruit catching mode.
        Catch = 2 => ["Catch", "Fruits", "CTB"],
        /// The piano mode.
        Mania = 3 => ["Mania"],
    }
}

/// A known section of the file, introduced by a `[Name]` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
}

impl Section {
    /// Every known section in the order they are written.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Editor,
        Self::Metadata,
        Self::Difficulty,
        Self::Events,
        Self::TimingPoints,
    ];

    /// The name between the brackets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Editor => "Editor",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::Events => "Events",
            Self::TimingPoints => "TimingPoints",
        }
    }

    /// Finds the section by its name regardless of its case. Unknown sections are `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_representation_of_member() {
        assert_eq!(
            SampleSet::from_raw(RawEnumValue::Member(SampleSet::Soft)),
            Ok(SampleSet::Soft)
        );
        assert_eq!(SampleSet::from_raw(2.into()), Ok(SampleSet::Soft));
        assert_eq!(SampleSet::from_raw("2".into()), Ok(SampleSet::Soft));
        assert_eq!(SampleSet::from_raw("soft".into()), Ok(SampleSet::Soft));
        assert_eq!(SampleSet::from_raw("SOFT".into()), Ok(SampleSet::Soft));
        assert_eq!("Soft".parse(), Ok(SampleSet::Soft));
    }

    #[test]
    fn test_unknown_member() {
        assert_eq!(
            Countdown::try_from(7),
            Err(ValidationError::UnknownEnumMember {
                enumeration: "Countdown",
                value: "7".into(),
            })
        );
        assert_eq!(
            "-1".parse::<Countdown>(),
            Err(ValidationError::UnknownEnumMember {
                enumeration: "Countdown",
                value: "-1".into(),
            })
        );
        assert!("".parse::<OverlayPosition>().is_err());
        assert!("Nowhere".parse::<OverlayPosition>().is_err());
    }

    #[test]
    fn test_aliases_and_canonical_name() {
        assert_eq!("fruits".parse(), Ok(GameMode::Catch));
        assert_eq!("ctb".parse(), Ok(GameMode::Catch));
        assert_eq!("standard".parse(), Ok(GameMode::Osu));
        assert_eq!(GameMode::Catch.name(), "Catch");
        assert_eq!(GameMode::Mania.ordinal(), 3);
        assert_eq!(OverlayPosition::NoChange.to_string(), "NoChange");
        assert_eq!("nochange".parse(), Ok(OverlayPosition::NoChange));
    }

    #[test]
    fn test_member_table_is_consistent() {
        fn check<T: EnumMember>() {
            for &(member, ordinal, names) in T::MEMBERS {
                assert_eq!(member.ordinal(), ordinal);
                assert_eq!(member.name(), names[0]);
                assert_eq!(T::from_ordinal(ordinal), Some(member));
            }
        }
        check::<Countdown>();
        check::<SampleSet>();
        check::<OverlayPosition>();
        check::<GameMode>();
    }

    #[test]
    fn test_section_name_is_case_insensitive() {
        assert_eq!(Section::from_name("timingpoints"), Some(Section::TimingPoints));
        assert_eq!(Section::from_name("GENERAL"), Some(Section::General));
        assert_eq!(Section::from_name("Colours"), None);
        assert_eq!(Section::from_name("HitObjects"), None);
    }
}
