//! Prompting interface and utilities.
//!
//! An object implementing [`Prompter`] is given through [`ParseConfig`](super::ParseConfig). It
//! decides what to do when a field is set twice in a section.

use crate::osu::{command::Section, error::ParseError};

/// A field set more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateField<'a> {
    /// The section of the field.
    pub section: Section,
    /// The key of the field, or `Background` for the background event.
    pub key: &'a str,
    /// The raw line of the later definition.
    pub line: &'a str,
}

/// An interface to prompt about handling conflicts on the beatmap file.
pub trait Prompter {
    /// Determines a [`DuplicationWorkaround`] for a duplicated field.
    fn handle_duplication(&self, duplication: DuplicateField<'_>) -> DuplicationWorkaround;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn handle_duplication(&self, duplication: DuplicateField<'_>) -> DuplicationWorkaround {
        T::handle_duplication(self, duplication)
    }
}

/// A choice to handle the duplicated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DuplicationWorkaround {
    /// Choose to use the existing one.
    UseOlder,
    /// Choose to use the incoming one.
    UseNewer,
    /// Choose to interrupt this parsing.
    Halt,
}

impl DuplicationWorkaround {
    pub(crate) fn apply<T>(
        self,
        target: &mut T,
        newer: T,
        duplication: DuplicateField<'_>,
    ) -> Result<(), ParseError> {
        match self {
            Self::UseOlder => Ok(()),
            Self::UseNewer => {
                *target = newer;
                Ok(())
            }
            Self::Halt => Err(ParseError::DuplicateField {
                section: duplication.section,
                line: duplication.line.to_string(),
            }),
        }
    }
}

/// The strategy that always using older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseOlder;

impl Prompter for AlwaysUseOlder {
    fn handle_duplication(&self, _: DuplicateField<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseOlder
    }
}

/// The strategy that always using newer ones. The game itself behaves so.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseNewer;

impl Prompter for AlwaysUseNewer {
    fn handle_duplication(&self, _: DuplicateField<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseNewer
    }
}

/// The strategy that always halts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysHalt;

impl Prompter for AlwaysHalt {
    fn handle_duplication(&self, _: DuplicateField<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::Halt
    }
}
