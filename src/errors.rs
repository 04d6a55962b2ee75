/*!
Parse failures. These are accumulated while scanning, never returned early:
a single parse reports every problem on the command line.
*/

use core::{fmt, ops::Deref, slice};
use std::vec;

use crate::printers;

/// What went wrong with a flag token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorDetail {
    /// The token looks like a flag, but no flag with that name or alias was
    /// declared.
    Unknown,

    /// The flag needs a value, but it was the last token or was followed by a
    /// flag-shaped token.
    MissingValue,

    /// The flag's value couldn't be converted. The rejected text is included.
    InvalidValue(String),
}

/// A single parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagError {
    /// Index of the offending flag token in the list that was parsed.
    pub pos: usize,

    /// The offending flag token, as it appeared on the command line.
    pub flag: String,

    pub detail: ErrorDetail,
}

impl FlagError {
    #[must_use]
    pub fn unknown(pos: usize, flag: impl Into<String>) -> Self {
        Self {
            pos,
            flag: flag.into(),
            detail: ErrorDetail::Unknown,
        }
    }

    #[must_use]
    pub fn missing_value(pos: usize, flag: impl Into<String>) -> Self {
        Self {
            pos,
            flag: flag.into(),
            detail: ErrorDetail::MissingValue,
        }
    }

    #[must_use]
    pub fn invalid_value(pos: usize, flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            pos,
            flag: flag.into(),
            detail: ErrorDetail::InvalidValue(value.into()),
        }
    }
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printers::flag_error(self))
    }
}

impl core::error::Error for FlagError {}

/**
Every parse failure of one or more parse passes, in scan order. Errors are
never reordered or deduplicated.

Displaying [`Errors`] writes one line per error.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    errors: Vec<FlagError>,
}

impl Errors {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// True if there was at least one error.
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[inline]
    pub fn push(&mut self, error: FlagError) {
        self.errors.push(error);
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[FlagError] {
        &self.errors
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<FlagError> {
        self.errors
    }
}

impl Deref for Errors {
    type Target = [FlagError];

    #[inline]
    fn deref(&self) -> &[FlagError] {
        &self.errors
    }
}

impl From<Vec<FlagError>> for Errors {
    #[inline]
    fn from(errors: Vec<FlagError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FlagError> for Errors {
    fn from_iter<I: IntoIterator<Item = FlagError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<FlagError> for Errors {
    fn extend<I: IntoIterator<Item = FlagError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = FlagError;
    type IntoIter = vec::IntoIter<FlagError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FlagError;
    type IntoIter = slice::Iter<'a, FlagError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printers::error_lines(&self.errors))
    }
}

impl core::error::Error for Errors {}
