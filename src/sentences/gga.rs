#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea_snapshot, FromFields,
    coordinate::Location,
    parsing::utc_time,
    sentences::Quality,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct GGA {
    /// Fix time in UTC, `hhmmss.ss`
    pub time: String,
    /// Latitude, `ddmm.mm`
    pub latitude: String,
    /// `N` or `S`
    pub lat_dir: String,
    /// Longitude, `dddmm.mm`
    pub longitude: String,
    /// `E` or `W`
    pub lon_dir: String,
    /// GPS Quality Indicator
    pub fix_quality: String,
    /// Number of satellites in use
    pub satellites: String,
    /// Horizontal Dilution of Precision
    pub hdop: String,
    /// Antenna altitude above/below mean sea level
    pub altitude: String,
    /// Units of the altitude, `M`
    pub altitude_units: String,
    /// Geoidal separation, negative when the geoid is below the WGS-84 ellipsoid
    pub geoid_separation: String,
    /// Units of the geoidal separation, `M`
    pub geoid_units: String,
}

impl GGA {
    pub fn fix_time(&self) -> Option<time::Time> {
        utc_time(&self.time)
    }

    pub fn quality(&self) -> Option<Quality> {
        Quality::from_raw(&self.fix_quality)
    }

    pub fn satellite_count(&self) -> Option<u8> {
        self.satellites.parse().ok()
    }

    pub fn location(&self) -> Option<Location> {
        Location::from_raw(&self.latitude, &self.lat_dir, &self.longitude, &self.lon_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fields;

    #[test]
    fn test_gga_parsing() {
        let gga = GGA::from_fields(&Fields::split(
            "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
        ));

        assert_eq!(gga.time, "123519");
        assert_eq!(gga.latitude, "4807.038");
        assert_eq!(gga.lon_dir, "E");
        assert_eq!(gga.altitude, "545.4");
        assert_eq!(gga.altitude_units, "M");
        assert_eq!(gga.geoid_separation, "46.9");
        assert_eq!(gga.quality(), Some(Quality::GPSFix));
        assert_eq!(gga.satellite_count(), Some(8));
        assert!(gga.location().is_some());
    }

    #[test]
    fn test_gga_short_sentences() {
        let cases = ["GPGGA", "GPGGA,", "GPGGA,123519,4807.038", "GPGGA,,,,,,,,,"];

        for input in cases {
            let gga = GGA::from_fields(&Fields::split(input));
            assert_eq!(gga.altitude, "", "Failed: {input:?}");
            assert_eq!(gga.geoid_units, "", "Failed: {input:?}");
            assert!(gga.location().is_none(), "Failed: {input:?}");
        }
    }
}
