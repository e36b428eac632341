use std::fmt::{self, Display};

use crate::{accumulator::GroupAccumulator, sentences::ParsedSentence, snapshot::Snapshot};

/// Multi-line, human-readable report of the current sentence.
///
/// The first line is always `Sentence Type: <code>`; the rest follows a fixed
/// template per sentence type. GSV reports list every satellite accumulated
/// so far in the group.
///
/// ```rust
/// use nmea_snapshot::Parser;
///
/// let parser: Parser = "$GPZDA,201530.00,04,07,2002,00,00*60".parse().unwrap();
/// assert_eq!(
///     parser.summary().to_string(),
///     "Sentence Type: GPZDA\nTime: 201530.00\nDate: 04/07/2002\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    kind: Option<&'a ParsedSentence>,
    snapshot: Snapshot<'a>,
}

impl<'a> Summary<'a> {
    pub(crate) fn new(sentence: Option<&'a ParsedSentence>, group: &'a GroupAccumulator) -> Self {
        Self {
            kind: sentence,
            snapshot: Snapshot::new(sentence, group),
        }
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.snapshot;
        writeln!(f, "Sentence Type: {}", s.sentence_type)?;

        match self.kind {
            Some(ParsedSentence::GGA(_)) => {
                writeln!(f, "Time: {}", s.time)?;
                writeln!(f, "Latitude: {} ({})", s.latitude, s.lat_dir)?;
                writeln!(f, "Longitude: {} ({})", s.longitude, s.lon_dir)?;
                writeln!(f, "Fix Quality: {}", s.fix_quality)?;
                writeln!(f, "Satellites: {}", s.satellites)?;
                writeln!(f, "HDOP: {}", s.hdop)?;
                writeln!(f, "Altitude: {} {}", s.altitude, s.altitude_units)
            }
            Some(ParsedSentence::RMC(_)) => {
                writeln!(f, "Time: {}", s.time)?;
                writeln!(f, "Date: {}", s.date)?;
                writeln!(f, "Latitude: {} ({})", s.latitude, s.lat_dir)?;
                writeln!(f, "Longitude: {} ({})", s.longitude, s.lon_dir)?;
                writeln!(f, "Speed (knots): {}", s.speed_knots)?;
                writeln!(f, "Track Angle: {}", s.track_angle)?;
                writeln!(f, "Status: {}", s.status)
            }
            Some(ParsedSentence::VTG(_)) => {
                writeln!(f, "Track (True): {}", s.track_true)?;
                writeln!(f, "Track (Magnetic): {}", s.track_magnetic)?;
                writeln!(f, "Speed: {} knots / {} km/h", s.speed_knots, s.speed_kmh)
            }
            Some(ParsedSentence::GSA(_)) => {
                writeln!(f, "Mode: {}", s.mode)?;
                writeln!(f, "Fix Type: {}", s.fix_type)?;
                writeln!(f, "Connected Satellites: {}", s.gsa_satellites_used)?;
                writeln!(f, "PDOP: {}", s.pdop)?;
                writeln!(f, "HDOP: {}", s.hdop)?;
                writeln!(f, "VDOP: {}", s.vdop)
            }
            Some(ParsedSentence::GSV(_)) => {
                writeln!(f, "Total Messages: {}", s.total_messages)?;
                writeln!(f, "Message Number: {}", s.message_number)?;
                writeln!(f, "Satellites in View: {}", s.satellites_in_view)?;

                if !s.satellite_details.is_empty() {
                    writeln!(f, "Satellite Details:")?;
                    for satellite in s.satellite_details {
                        writeln!(
                            f,
                            "  ID: {}, Elevation: {}, Azimuth: {}, SNR: {}",
                            satellite.id, satellite.elevation, satellite.azimuth, satellite.snr
                        )?;
                    }
                }
                Ok(())
            }
            Some(ParsedSentence::GLL(_)) => {
                writeln!(f, "Latitude: {} ({})", s.latitude, s.lat_dir)?;
                writeln!(f, "Longitude: {} ({})", s.longitude, s.lon_dir)?;
                writeln!(f, "Time: {}", s.time)?;
                writeln!(f, "Status: {}", s.status)
            }
            Some(ParsedSentence::ZDA(_)) => {
                writeln!(f, "Time: {}", s.time)?;
                writeln!(f, "Date: {}/{}/{}", s.day, s.month, s.year)
            }
            Some(ParsedSentence::GST(_)) => {
                writeln!(f, "Time: {}", s.time)?;
                writeln!(f, "RMS: {}", s.rms)?;
                writeln!(f, "Sigma Major: {}", s.sigma_major)?;
                writeln!(f, "Sigma Minor: {}", s.sigma_minor)?;
                writeln!(f, "Orientation: {}", s.orientation)?;
                writeln!(f, "Sigma Latitude: {}", s.sigma_lat)?;
                writeln!(f, "Sigma Longitude: {}", s.sigma_lon)?;
                writeln!(f, "Sigma Altitude: {}", s.sigma_alt)
            }
            Some(ParsedSentence::Unsupported(_)) | None => {
                writeln!(f, "Unsupported sentence type.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Parser, ParserConfig};

    #[test]
    fn test_gga_summary() {
        let parser: Parser = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"
            .parse()
            .unwrap();

        let expected = "Sentence Type: GPGGA\n\
                        Time: 123519\n\
                        Latitude: 4807.038 (N)\n\
                        Longitude: 01131.000 (E)\n\
                        Fix Quality: 1\n\
                        Satellites: 08\n\
                        HDOP: 0.9\n\
                        Altitude: 545.4 M\n";
        assert_eq!(parser.summary().to_string(), expected);
    }

    #[test]
    fn test_gsv_summary_lists_group() {
        let mut parser = Parser::new();
        parser
            .parse("$GPGSV,2,1,08,01,40,083,41,02,17,063,42,03,13,053,43,04,03,013,42*7D")
            .unwrap();
        parser
            .parse("$GPGSV,2,2,08,05,20,123,44,06,05,223,45,07,11,323,43,08,32,073,42*7E")
            .unwrap();

        let report = parser.summary().to_string();
        assert!(report.contains("Message Number: 2\n"));
        assert!(report.contains("Satellite Details:\n"));
        assert!(report.contains("  ID: 01, Elevation: 40, Azimuth: 083, SNR: 41\n"));
        assert!(report.ends_with("  ID: 08, Elevation: 32, Azimuth: 073, SNR: 42\n"));
        assert_eq!(report.matches("  ID: ").count(), 8);
    }

    #[test]
    fn test_unsupported_summary() {
        let parser = Parser::from_sentence("$GPXYZ,1,2,3", ParserConfig::without_checksum())
            .unwrap();
        assert_eq!(
            parser.summary().to_string(),
            "Sentence Type: GPXYZ\nUnsupported sentence type.\n"
        );

        assert_eq!(
            Parser::new().summary().to_string(),
            "Sentence Type: \nUnsupported sentence type.\n"
        );
    }
}
