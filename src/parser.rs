use std::str::FromStr;

use tracing::debug;

use crate::{
    ParserConfig, Result,
    accumulator::GroupAccumulator,
    coordinate::{Location, to_decimal_degrees},
    nmea0183::frame,
    sentences::{ParsedSentence, Satellite},
    snapshot::Snapshot,
    summary::Summary,
};

/// Decodes NMEA 0183 sentences one at a time and keeps the most recent one.
///
/// Each successful [`parse`](Self::parse) replaces the current sentence. The
/// only state carried from one call to the next is the
/// [`GroupAccumulator`] fed by GSV sentences. A failed call changes nothing.
///
/// `parse` takes `&mut self`; share a parser across threads behind a
/// `std::sync::Mutex`.
///
/// # Examples
///
/// ```rust
/// use nmea_snapshot::{ParsedSentence, Parser};
///
/// let mut parser = Parser::new();
/// let sentence = parser
///     .parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
///     .unwrap();
///
/// match sentence {
///     ParsedSentence::GGA(gga) => assert_eq!(gga.altitude, "545.4"),
///     _ => unreachable!(),
/// }
/// assert_eq!(parser.sentence_type(), "GPGGA");
/// assert_eq!(parser.formatted_latitude(), "48.117300");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Parser {
    config: ParserConfig,
    sentence: Option<ParsedSentence>,
    accumulator: GroupAccumulator,
}

impl Parser {
    /// Creates an empty parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty parser with the given configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a parser holding exactly one sentence.
    ///
    /// Blank input yields an empty parser instead of an error.
    ///
    /// ```rust
    /// use nmea_snapshot::{Parser, ParserConfig};
    ///
    /// let parser = Parser::from_sentence("", ParserConfig::default()).unwrap();
    /// assert_eq!(parser.sentence_type(), "");
    ///
    /// let parser = Parser::from_sentence("$GPXYZ,1,2,3", ParserConfig::without_checksum()).unwrap();
    /// assert_eq!(parser.sentence_type(), "GPXYZ");
    /// ```
    pub fn from_sentence(sentence: &str, config: ParserConfig) -> Result<Self> {
        let mut parser = Self::with_config(config);

        if !sentence.trim().is_empty() {
            parser.parse(sentence)?;
        }

        Ok(parser)
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one sentence and makes it the current one.
    ///
    /// # Errors
    ///
    /// [`FormatError`](crate::FormatError) when the text is not framed like an
    /// NMEA sentence, [`ChecksumError`](crate::ChecksumError) when the checksum
    /// does not hold under the configured [`ChecksumMode`](crate::ChecksumMode).
    pub fn parse(&mut self, sentence: &str) -> Result<&ParsedSentence> {
        let frame = frame(sentence, self.config.checksum).inspect_err(|err| {
            debug!(%err, "rejected sentence");
        })?;

        debug!(type_code = frame.type_code, fields = frame.fields.len(), "dispatching sentence");
        let parsed = ParsedSentence::dispatch(frame.type_code, &frame.fields);

        if let ParsedSentence::GSV(gsv) = &parsed {
            self.accumulator.accept(gsv);
        }

        Ok(&*self.sentence.insert(parsed))
    }

    /// The type code of the current sentence, `""` before the first one.
    pub fn sentence_type(&self) -> &str {
        self.sentence
            .as_ref()
            .map(ParsedSentence::sentence_type)
            .unwrap_or_default()
    }

    pub fn sentence(&self) -> Option<&ParsedSentence> {
        self.sentence.as_ref()
    }

    /// The GSA list of satellites used in the fix, `""` unless the current
    /// sentence is GSA.
    pub fn connected_satellites(&self) -> &str {
        match &self.sentence {
            Some(ParsedSentence::GSA(gsa)) => &gsa.satellites_used,
            _ => "",
        }
    }

    /// Satellites accumulated from the current GSV group.
    pub fn satellites(&self) -> &[Satellite] {
        self.accumulator.satellites()
    }

    /// Number of satellites accumulated from the current GSV group.
    pub fn satellite_count(&self) -> usize {
        self.accumulator.len()
    }

    pub fn accumulator(&self) -> &GroupAccumulator {
        &self.accumulator
    }

    /// Latitude of the current GGA, RMC or GLL sentence in decimal degrees.
    ///
    /// Unconvertible text is returned as received. Other sentence types give `""`.
    pub fn formatted_latitude(&self) -> String {
        match self.raw_position() {
            Some((latitude, lat_dir, _, _)) => to_decimal_degrees(latitude, lat_dir),
            None => String::new(),
        }
    }

    /// Longitude counterpart of [`formatted_latitude`](Self::formatted_latitude).
    pub fn formatted_longitude(&self) -> String {
        match self.raw_position() {
            Some((_, _, longitude, lon_dir)) => to_decimal_degrees(longitude, lon_dir),
            None => String::new(),
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self.sentence.as_ref()? {
            ParsedSentence::GGA(gga) => gga.location(),
            ParsedSentence::RMC(rmc) => rmc.location(),
            ParsedSentence::GLL(gll) => gll.location(),
            _ => None,
        }
    }

    /// Fixed-shape view over every field of the current sentence.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.sentence.as_ref(), &self.accumulator)
    }

    /// Human-readable report of the current sentence.
    ///
    /// ```rust
    /// use nmea_snapshot::Parser;
    ///
    /// let parser: Parser = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48".parse().unwrap();
    /// let report = parser.summary().to_string();
    /// assert!(report.starts_with("Sentence Type: GPVTG\n"));
    /// assert!(report.contains("Speed: 005.5 knots / 010.2 km/h"));
    /// ```
    pub fn summary(&self) -> Summary<'_> {
        Summary::new(self.sentence.as_ref(), &self.accumulator)
    }

    fn raw_position(&self) -> Option<(&str, &str, &str, &str)> {
        match self.sentence.as_ref()? {
            ParsedSentence::GGA(gga) => {
                Some((
                    gga.latitude.as_str(),
                    gga.lat_dir.as_str(),
                    gga.longitude.as_str(),
                    gga.lon_dir.as_str(),
                ))
            }
            ParsedSentence::RMC(rmc) => {
                Some((
                    rmc.latitude.as_str(),
                    rmc.lat_dir.as_str(),
                    rmc.longitude.as_str(),
                    rmc.lon_dir.as_str(),
                ))
            }
            ParsedSentence::GLL(gll) => {
                Some((
                    gll.latitude.as_str(),
                    gll.lat_dir.as_str(),
                    gll.longitude.as_str(),
                    gll.lon_dir.as_str(),
                ))
            }
            _ => None,
        }
    }
}

impl FromStr for Parser {
    type Err = crate::Error;

    fn from_str(sentence: &str) -> Result<Self> {
        Self::from_sentence(sentence, ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChecksumMode, Error, FormatError};

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }

    #[test]
    fn test_failed_parse_keeps_state() {
        let mut parser = Parser::new();
        parser
            .parse("$GPZDA,201530.00,04,07,2002,00,00*60")
            .unwrap();

        let cases = ["", "GPZDA,1,2", "$GPZ", "$GPZDA,201530.00,04,07,2002,00,00*61"];
        for input in cases {
            assert!(parser.parse(input).is_err(), "Failed: {input:?}");
            assert_eq!(parser.sentence_type(), "GPZDA", "Failed: {input:?}");
        }
    }

    #[test]
    fn test_from_sentence() {
        let parser = Parser::from_sentence("  \r\n", ParserConfig::default()).unwrap();
        assert!(parser.sentence().is_none());
        assert_eq!(parser.snapshot().sentence_type, "");

        assert_eq!(
            "GPGGA".parse::<Parser>().unwrap_err(),
            Error::Format(FormatError::MissingStartDelimiter("GPGGA".to_owned()))
        );

        let parser =
            Parser::from_sentence("$GPXYZ,1", ParserConfig::new(ChecksumMode::Required));
        assert!(parser.is_err());
    }

    #[test]
    fn test_position_accessors_follow_sentence_type() {
        let mut parser = Parser::with_config(ParserConfig::without_checksum());

        parser.parse("$GPGLL,4916.45,N,12311.12,W,225444,A").unwrap();
        assert_eq!(parser.formatted_latitude(), "49.274167");
        assert_eq!(parser.formatted_longitude(), "-123.185333");
        assert!(parser.location().is_some());

        parser.parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").unwrap();
        assert_eq!(parser.formatted_latitude(), "");
        assert_eq!(parser.location(), None);
    }
}
