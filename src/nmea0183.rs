//! # NMEA 0183 Framing
//!
//! This module handles the outer shape of a sentence, `$TTTTT,D1,D2,...,Dn*CC`:
//! the leading `$`, the 5-character type code, the comma-separated payload and
//! the optional XOR checksum suffix. Content is left to the sentence records.

use nom::{
    Parser,
    branch::alt,
    bytes::complete::{take, take_till},
    character::complete::char,
    combinator::{opt, rest},
    sequence::preceded,
};

use crate::{ChecksumError, FormatError, Result, parse::Fields};

/// Defines how the parser should handle NMEA message checksums.
///
/// NMEA 0183 messages can include an optional checksum in the format `*CC` where
/// CC is a two-digit hexadecimal value representing the XOR of all bytes in the
/// message content (excluding the '$' prefix and '*' delimiter).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// A sentence without a `*CC` suffix fails with [`ChecksumError::Missing`].
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// - If no checksum is present (`*CC` missing), parsing continues normally
    /// - If a checksum is present, it must be valid or parsing will fail
    #[default]
    Optional,

    /// Checksum is never inspected.
    ///
    /// Use this mode for sources known to emit stale or wrong checksums.
    Disabled,
}

impl ChecksumMode {
    /// Maps a plain "validate the checksum" flag onto a mode.
    ///
    /// `true` validates checksums when present, `false` disables validation.
    pub const fn from_flag(validate: bool) -> Self {
        if validate { Self::Optional } else { Self::Disabled }
    }
}

/// Parser configuration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Checksum handling, [`ChecksumMode::Optional`] by default.
    pub checksum: ChecksumMode,
}

impl ParserConfig {
    /// Creates a configuration with the given checksum mode.
    pub const fn new(checksum: ChecksumMode) -> Self {
        Self { checksum }
    }

    /// A configuration that never validates checksums.
    pub const fn without_checksum() -> Self {
        Self::new(ChecksumMode::Disabled)
    }
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, both excluded.
///
/// # Examples
///
/// ```rust
/// use nmea_snapshot::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(payload: &str) -> u8 {
    payload
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea_snapshot::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Renders `$<body>*CC` with the checksum calculated from `body`.
///
/// ```rust
/// use nmea_snapshot::with_checksum;
///
/// assert_eq!(with_checksum("GPXYZ,1,2,3"), "$GPXYZ,1,2,3*50");
/// ```
pub fn with_checksum(body: &str) -> String {
    format!("${body}*{}", format_checksum(checksum(body)))
}

/// Checks the trailing checksum of a sentence.
///
/// A sentence without `*` has nothing to check and is valid. Otherwise the text
/// between the leading `$` and the first `*` is XOR-ed and compared,
/// case-insensitively, with the two characters that follow `*`. Anything after
/// those two characters (line terminators, whitespace) is ignored.
///
/// # Examples
///
/// ```rust
/// use nmea_snapshot::is_valid_checksum;
///
/// assert!(is_valid_checksum("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48"));
/// assert!(is_valid_checksum("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n"));
/// assert!(!is_valid_checksum("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*49"));
/// assert!(is_valid_checksum("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K"));
/// ```
pub fn is_valid_checksum(sentence: &str) -> bool {
    let Some(asterisk) = sentence.find('*') else {
        return true;
    };

    let payload = sentence.get(1..asterisk).unwrap_or_default();
    let found: nom::IResult<&str, &str> = take(2u8).parse(&sentence[asterisk + 1..]);

    match found {
        Ok((_, found)) => checksum_matches(payload, found),
        Err(_) => false,
    }
}

fn checksum_matches(payload: &str, found: &str) -> bool {
    found.eq_ignore_ascii_case(&format_checksum(checksum(payload)))
}

/// A sentence split into its type code and positional fields.
#[derive(Debug)]
pub(crate) struct Frame<'a> {
    pub type_code: &'a str,
    pub fields: Fields<'a>,
}

/// Splits `$payload*CC...` into the payload and the checksum characters, if any.
fn sentence_parts(i: &str) -> nom::IResult<&str, (&str, Option<&str>)> {
    let (i, _) = char('$').parse(i)?;
    let (i, payload) = take_till(|c: char| c == '*').parse(i)?;
    let (i, found) = opt(preceded(char('*'), alt((take(2u8), rest)))).parse(i)?;

    Ok((i, (payload, found)))
}

/// Frames one sentence.
///
/// Checks run in this order: format, checksum (per `mode`), type code. The
/// payload stops at the first `*`, so checksum characters never leak into the
/// final field.
pub(crate) fn frame(sentence: &str, mode: ChecksumMode) -> Result<Frame<'_>> {
    if sentence.is_empty() {
        return Err(FormatError::Empty.into());
    }

    let (_, (payload, found)) = sentence_parts(sentence)
        .map_err(|_| FormatError::MissingStartDelimiter(sentence.to_owned()))?;

    match (mode, found) {
        (ChecksumMode::Disabled, _) | (ChecksumMode::Optional, None) => {}
        (ChecksumMode::Required, None) => return Err(ChecksumError::Missing.into()),
        (_, Some(found)) => {
            if !checksum_matches(payload, found) {
                return Err(ChecksumError::Mismatch {
                    calculated: checksum(payload),
                    found: found.to_owned(),
                }
                .into());
            }
        }
    }

    let type_code: nom::IResult<&str, &str> = take(5u8).parse(&sentence[1..]);
    let (_, type_code) =
        type_code.map_err(|_| FormatError::TruncatedType(sentence.to_owned()))?;

    Ok(Frame {
        type_code,
        fields: Fields::split(payload),
    })
}
