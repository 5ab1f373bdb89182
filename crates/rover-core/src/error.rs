//! Error types raised while decoding headings and command strings.

use std::convert::Infallible;
use thiserror::Error;

/// Errors from [`parse_commands`](crate::parse_commands).
///
/// Parsing is fail-fast: the first undecodable character aborts the whole
/// string and no partial sequence is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command string was empty.
    #[error("list of commands is empty")]
    EmptyInput,
    /// A character is not one of `A`, `L`, `R`.
    #[error("{token:?} at position {position} is not a valid command")]
    InvalidCommand {
        /// The offending character.
        token: char,
        /// Zero-based character index of `token` in the input.
        position: usize,
    },
}

/// Errors from decoding a [`Heading`](crate::Heading) code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeadingError {
    /// The code is not exactly one of `N`, `E`, `S`, `W`.
    #[error("{code:?} is not a valid heading")]
    InvalidCode {
        /// The rejected input, verbatim.
        code: String,
    },
}

impl From<Infallible> for HeadingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
