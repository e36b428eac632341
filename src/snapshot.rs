//! # Snapshot
//!
//! A flat record with a slot for every field any supported sentence can carry.
//! Slots the current sentence does not fill stay `""` (or `0`). The record
//! borrows from the parser, so it is recomputed on demand and never outlives it.

use crate::{
    accumulator::GroupAccumulator,
    coordinate::to_decimal_degrees,
    sentences::{ParsedSentence, Satellite},
};

/// A fixed-shape, read-only projection of the current sentence.
///
/// # `satellites_used`
///
/// Two different quantities go by "satellites used" in NMEA. Here
/// `satellites_used` is the number of satellites currently accumulated from
/// GSV sentences, which is the length of `satellite_details`. The list of PRNs
/// a GSA sentence reports as used in the fix is kept apart, verbatim, in
/// `gsa_satellites_used`.
///
/// ```rust
/// use nmea_snapshot::Parser;
///
/// let mut parser = Parser::new();
/// parser.parse("$GPGSV,1,1,02,10,45,120,38,11,30,200,*72").unwrap();
/// parser.parse("$GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.8,1.0,1.5*3F").unwrap();
///
/// let snapshot = parser.snapshot();
/// assert_eq!(snapshot.sentence_type, "GPGSA");
/// assert_eq!(snapshot.satellites_used, 2);
/// assert_eq!(snapshot.gsa_satellites_used, "04,05,09,12,24,25,29");
/// assert_eq!(snapshot.pdop, "1.8");
/// assert_eq!(snapshot.altitude, "");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub sentence_type: &'a str,

    pub time: &'a str,
    pub latitude: &'a str,
    pub lat_dir: &'a str,
    pub longitude: &'a str,
    pub lon_dir: &'a str,
    /// Latitude in decimal degrees, or the raw text when it does not convert
    pub formatted_latitude: String,
    /// Longitude in decimal degrees, or the raw text when it does not convert
    pub formatted_longitude: String,

    // GGA
    pub fix_quality: &'a str,
    pub satellites: &'a str,
    pub hdop: &'a str,
    pub altitude: &'a str,
    pub altitude_units: &'a str,
    pub geoid_separation: &'a str,
    pub geoid_units: &'a str,

    // RMC
    pub status: &'a str,
    pub speed_knots: &'a str,
    pub track_angle: &'a str,
    pub date: &'a str,
    pub magnetic_variation: &'a str,
    pub variation_dir: &'a str,

    // VTG
    pub track_true: &'a str,
    pub track_magnetic: &'a str,
    pub speed_kmh: &'a str,

    // GSA
    pub mode: &'a str,
    pub fix_type: &'a str,
    /// The GSA used-satellite list, comma separated
    pub gsa_satellites_used: &'a str,
    pub pdop: &'a str,
    pub vdop: &'a str,

    // GSV
    pub total_messages: u8,
    pub message_number: u8,
    pub satellites_in_view: u8,
    /// Number of satellites accumulated from GSV
    pub satellites_used: usize,
    pub satellite_details: &'a [Satellite],

    // ZDA
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub zone_hours: &'a str,
    pub zone_minutes: &'a str,

    // GST
    pub rms: &'a str,
    pub sigma_major: &'a str,
    pub sigma_minor: &'a str,
    pub orientation: &'a str,
    pub sigma_lat: &'a str,
    pub sigma_lon: &'a str,
    pub sigma_alt: &'a str,

    /// Set for unsupported sentence types only
    pub message: Option<&'a str>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(sentence: Option<&'a ParsedSentence>, group: &'a GroupAccumulator) -> Self {
        let mut snapshot = Self {
            sentence_type: sentence.map(ParsedSentence::sentence_type).unwrap_or_default(),
            satellites_used: group.len(),
            satellite_details: group.satellites(),
            ..Self::default()
        };

        let Some(sentence) = sentence else {
            return snapshot;
        };

        match sentence {
            ParsedSentence::GGA(gga) => {
                snapshot.set_position(&gga.latitude, &gga.lat_dir, &gga.longitude, &gga.lon_dir);
                snapshot.time = &gga.time;
                snapshot.fix_quality = &gga.fix_quality;
                snapshot.satellites = &gga.satellites;
                snapshot.hdop = &gga.hdop;
                snapshot.altitude = &gga.altitude;
                snapshot.altitude_units = &gga.altitude_units;
                snapshot.geoid_separation = &gga.geoid_separation;
                snapshot.geoid_units = &gga.geoid_units;
            }
            ParsedSentence::RMC(rmc) => {
                snapshot.set_position(&rmc.latitude, &rmc.lat_dir, &rmc.longitude, &rmc.lon_dir);
                snapshot.time = &rmc.time;
                snapshot.status = &rmc.status;
                snapshot.speed_knots = &rmc.speed_knots;
                snapshot.track_angle = &rmc.track_angle;
                snapshot.date = &rmc.date;
                snapshot.magnetic_variation = &rmc.magnetic_variation;
                snapshot.variation_dir = &rmc.variation_dir;
            }
            ParsedSentence::VTG(vtg) => {
                snapshot.track_true = &vtg.track_true;
                snapshot.track_magnetic = &vtg.track_magnetic;
                snapshot.speed_knots = &vtg.speed_knots;
                snapshot.speed_kmh = &vtg.speed_kmh;
            }
            ParsedSentence::GSA(gsa) => {
                snapshot.mode = &gsa.mode;
                snapshot.fix_type = &gsa.fix_type;
                snapshot.gsa_satellites_used = &gsa.satellites_used;
                snapshot.pdop = &gsa.pdop;
                snapshot.hdop = &gsa.hdop;
                snapshot.vdop = &gsa.vdop;
            }
            ParsedSentence::GSV(gsv) => {
                snapshot.total_messages = gsv.total_messages;
                snapshot.message_number = gsv.message_number;
                snapshot.satellites_in_view = gsv.satellites_in_view;
            }
            ParsedSentence::GLL(gll) => {
                snapshot.set_position(&gll.latitude, &gll.lat_dir, &gll.longitude, &gll.lon_dir);
                snapshot.time = &gll.time;
                snapshot.status = &gll.status;
            }
            ParsedSentence::ZDA(zda) => {
                snapshot.time = &zda.time;
                snapshot.day = &zda.day;
                snapshot.month = &zda.month;
                snapshot.year = &zda.year;
                snapshot.zone_hours = &zda.zone_hours;
                snapshot.zone_minutes = &zda.zone_minutes;
            }
            ParsedSentence::GST(gst) => {
                snapshot.time = &gst.time;
                snapshot.rms = &gst.rms;
                snapshot.sigma_major = &gst.sigma_major;
                snapshot.sigma_minor = &gst.sigma_minor;
                snapshot.orientation = &gst.orientation;
                snapshot.sigma_lat = &gst.sigma_lat;
                snapshot.sigma_lon = &gst.sigma_lon;
                snapshot.sigma_alt = &gst.sigma_alt;
            }
            ParsedSentence::Unsupported(unsupported) => {
                snapshot.message = Some(unsupported.message.as_str());
            }
        }

        snapshot
    }

    fn set_position(
        &mut self,
        latitude: &'a str,
        lat_dir: &'a str,
        longitude: &'a str,
        lon_dir: &'a str,
    ) {
        self.latitude = latitude;
        self.lat_dir = lat_dir;
        self.longitude = longitude;
        self.lon_dir = lon_dir;
        self.formatted_latitude = to_decimal_degrees(latitude, lat_dir);
        self.formatted_longitude = to_decimal_degrees(longitude, lon_dir);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Parser, ParserConfig};

    #[test]
    fn test_empty_parser_snapshot() {
        let parser = Parser::new();
        let snapshot = parser.snapshot();

        assert_eq!(snapshot.sentence_type, "");
        assert_eq!(snapshot.satellites_used, 0);
        assert!(snapshot.satellite_details.is_empty());
        assert_eq!(snapshot.message, None);
    }

    #[test]
    fn test_unsupported_snapshot_has_only_message() {
        let parser = Parser::from_sentence("$GPXYZ,1,2,3*50", ParserConfig::without_checksum())
            .unwrap();
        let snapshot = parser.snapshot();

        assert_eq!(snapshot.sentence_type, "GPXYZ");
        assert_eq!(snapshot.message, Some("Unsupported sentence type: GPXYZ"));
        assert_eq!(snapshot.time, "");
        assert_eq!(snapshot.latitude, "");
        assert_eq!(snapshot.formatted_latitude, "");
        assert_eq!(snapshot.total_messages, 0);
    }

    #[test]
    fn test_rmc_snapshot() {
        let parser: Parser =
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"
                .parse()
                .unwrap();
        let snapshot = parser.snapshot();

        assert_eq!(snapshot.status, "A");
        assert_eq!(snapshot.date, "230394");
        assert_eq!(snapshot.formatted_latitude, "48.117300");
        assert_eq!(snapshot.formatted_longitude, "11.516667");
        assert_eq!(snapshot.variation_dir, "W");
        assert_eq!(snapshot.message, None);
    }
}
