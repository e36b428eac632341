#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea_snapshot, FromFields,
    coordinate::Location,
    parsing::{ddmmyy, utc_time},
    sentences::Status,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct RMC {
    /// Fix time in UTC
    pub time: String,
    /// `A` valid, `V` warning
    pub status: String,
    pub latitude: String,
    pub lat_dir: String,
    pub longitude: String,
    pub lon_dir: String,
    /// Speed over ground in knots
    pub speed_knots: String,
    /// Track made good, degrees true
    pub track_angle: String,
    /// Date, `ddmmyy`
    pub date: String,
    /// Magnetic variation in degrees
    pub magnetic_variation: String,
    /// `E` or `W`; easterly variation subtracts from the true course
    pub variation_dir: String,
}

impl RMC {
    pub fn fix_time(&self) -> Option<time::Time> {
        utc_time(&self.time)
    }

    pub fn fix_date(&self) -> Option<time::Date> {
        ddmmyy(&self.date)
    }

    pub fn status(&self) -> Option<Status> {
        Status::from_raw(&self.status)
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
    fn test_rmc_parsing() {
        let rmc = RMC::from_fields(&Fields::split(
            "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W",
        ));

        assert_eq!(rmc.status(), Some(Status::Valid));
        assert_eq!(rmc.speed_knots, "022.4");
        assert_eq!(rmc.track_angle, "084.4");
        assert_eq!(rmc.magnetic_variation, "003.1");
        assert_eq!(rmc.variation_dir, "W");

        let date = rmc.fix_date().unwrap();
        assert_eq!((date.year(), u8::from(date.month()), date.day()), (1994, 3, 23));

        let time = rmc.fix_time().unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
    }

    #[test]
    fn test_rmc_without_variation() {
        let rmc = RMC::from_fields(&Fields::split(
            "GPRMC,225446,V,4916.45,N,12311.12,W,000.5,054.7,191194",
        ));

        assert_eq!(rmc.status(), Some(Status::Invalid));
        assert_eq!(rmc.magnetic_variation, "");
        assert_eq!(rmc.variation_dir, "");
        assert_eq!(rmc.fix_date().map(|date| date.year()), Some(1994));
    }
}
