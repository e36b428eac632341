//! # NMEA Snapshot
//!
//! This library decodes NMEA 0183 navigation sentences of the form
//! `$TTTTT,D1,D2,...,Dn*CC` into typed records and keeps a snapshot of the most
//! recently seen sentence.
//!
//! Supported types are `GPGGA`, `GPRMC`, `GPVTG`, `GPGSA`, `GPGSV`, `GPGLL`,
//! `GPZDA` and `GPGST`. Any other type code is accepted and reported as
//! [`ParsedSentence::Unsupported`].
//!
//! The parser is configurable to handle:
//! - Required, optional or disabled checksum validation
//! - Aggregation of satellite rows across the sentences of a GSV group
//!
//! Missing or malformed fields never fail a sentence; they read as empty text
//! or as the documented default of the field.
//!
//! ## Usage
//!
//! ```rust
//! use nmea_snapshot::{ChecksumMode, Parser, ParserConfig};
//!
//! let mut parser = Parser::with_config(ParserConfig::new(ChecksumMode::Optional));
//! parser.parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")?;
//!
//! let snapshot = parser.snapshot();
//! assert_eq!(snapshot.time, "123519");
//! assert_eq!(snapshot.formatted_latitude, "48.117300");
//!
//! println!("{}", parser.summary());
//! # Ok::<(), nmea_snapshot::Error>(())
//! ```

pub mod coordinate;
pub mod error;
pub mod parsing;
pub mod sentences;

mod accumulator;
mod nmea0183;
mod parse;
mod parser;
mod snapshot;
mod summary;

pub use accumulator::{GroupAccumulator, GroupState};
pub use coordinate::{Location, to_decimal, to_decimal_degrees};
pub use error::{ChecksumError, Error, FormatError, Result};
pub use nmea0183::{
    ChecksumMode, ParserConfig, checksum, format_checksum, is_valid_checksum, with_checksum,
};
pub use nmea_snapshot_derive::FromFields;
pub use parse::{FromField, FromFields, Fields};
pub use parser::Parser;
pub use sentences::{ParsedSentence, Satellite};
pub use snapshot::Snapshot;
pub use summary::Summary;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
