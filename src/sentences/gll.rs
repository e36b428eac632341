#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea_snapshot, FromFields,
    coordinate::Location,
    parsing::utc_time,
    sentences::Status,
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct GLL {
    pub latitude: String,
    pub lat_dir: String,
    pub longitude: String,
    pub lon_dir: String,
    /// Fix time in UTC
    pub time: String,
    /// `A` valid, `V` invalid
    pub status: String,
}

impl GLL {
    pub fn fix_time(&self) -> Option<time::Time> {
        utc_time(&self.time)
    }

    pub fn status(&self) -> Option<Status> {
        Status::from_raw(&self.status)
    }

    pub fn location(&self) -> Option<Location> {
        Location::from_raw(&self.latitude, &self.lat_dir, &self.longitude, &self.lon_dir)
    }
}
