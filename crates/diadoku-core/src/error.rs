//! Error types for the core crate.

use derive_more::{Display, Error};

/// An error produced while parsing an 81-character grid string.
///
/// Parsing fails fast, before any solving begins; an unsolvable but
/// well-formed puzzle is *not* an error (the solver reports it as an
/// ordinary unsatisfiable result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The input was not exactly 81 characters long.
    #[display("grid must contain exactly 81 characters, got {len}")]
    BadLength {
        /// The actual input length in characters.
        len: usize,
    },
    /// The input contained a character outside `1`-`9` and `.`.
    #[display("invalid character {found:?} at position {index}")]
    BadCharacter {
        /// Position of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}
