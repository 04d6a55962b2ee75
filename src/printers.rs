/*!
Human-readable rendering of parse failures. Pure formatting: nothing here
touches parsing state.
*/

use core::fmt::Display;

use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::errors::{ErrorDetail, FlagError};

/// Render a single error as one line, without a trailing newline.
pub fn flag_error(error: &FlagError) -> impl Display {
    lazy_format! {
        match (error) {
            FlagError { pos, flag, detail: ErrorDetail::Unknown } =>
                "Unknown flag `{flag}` at index {pos}",
            FlagError { pos, flag, detail: ErrorDetail::MissingValue } =>
                "Missing value for flag `{flag}` at index {pos}",
            FlagError { pos, flag, detail: ErrorDetail::InvalidValue(value) } =>
                "Invalid value {value:?} for flag `{flag}` at index {pos}",
        }
    }
}

/// Render every error, one newline-terminated line each.
pub fn error_lines(errors: &[FlagError]) -> impl Display {
    let lines = errors.iter().map(flag_error).join_with('\n');

    lazy_format! {
        match (errors.is_empty()) {
            true => "",
            false => "{lines}\n",
        }
    }
}
