//! # Error Types
//!
//! Only two kinds of failure cross the parser boundary: a sentence that is not
//! shaped like NMEA 0183 at all ([`FormatError`]) and a sentence whose checksum
//! does not hold ([`ChecksumError`]). Everything else (unsupported sentence
//! types, malformed numeric fields, short field lists) degrades to documented
//! defaults instead of failing.

use thiserror::Error;

/// Result alias used by the parser.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all failures a [`Parser::parse`](crate::Parser::parse) call can report.
///
/// Both kinds are fatal to the call that produced them and leave the parser
/// state untouched. They are kept apart so a caller can, for example, retry a
/// sentence with checksum validation disabled but drop a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sentence is missing, empty, or not delimited like an NMEA sentence.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Checksum validation is enabled and the checksum does not hold.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
}

/// The sentence could not be framed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input was empty.
    #[error("invalid NMEA sentence: empty input")]
    Empty,

    /// The input does not start with `$`.
    #[error("invalid NMEA sentence: missing leading '$' in {0:?}")]
    MissingStartDelimiter(String),

    /// Fewer than five characters follow the `$`, so there is no type code.
    #[error("invalid NMEA sentence: no 5-character type code in {0:?}")]
    TruncatedType(String),
}

/// The checksum of the sentence was absent, corrupt or incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// The checksum found after `*` differs from the one calculated from the payload.
    ///
    /// `found` holds the (at most two) raw characters after `*`, which are not
    /// necessarily valid hexadecimal.
    #[error("checksum validation failed: calculated {calculated:02X}, found {found:?}")]
    Mismatch {
        /// The checksum calculated from the message content
        calculated: u8,
        /// The checksum characters found in the message
        found: String,
    },

    /// [`ChecksumMode::Required`](crate::ChecksumMode::Required) is set and the
    /// sentence carries no `*HH` suffix.
    #[error("checksum validation failed: no checksum present")]
    Missing,
}
