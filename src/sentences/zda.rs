#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea_snapshot, FromFields,
    parsing::{calendar_date, utc_time, zone_offset},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct ZDA {
    /// UTC time
    pub time: String,
    /// Day, 01 to 31
    pub day: String,
    /// Month, 01 to 12
    pub month: String,
    /// Year, four digits
    pub year: String,
    /// Local zone hours, -13 to 13
    pub zone_hours: String,
    /// Local zone minutes, 00 to 59
    pub zone_minutes: String,
}

impl ZDA {
    pub fn fix_time(&self) -> Option<time::Time> {
        utc_time(&self.time)
    }

    pub fn date(&self) -> Option<time::Date> {
        calendar_date(
            self.year.parse().ok()?,
            self.month.parse().ok()?,
            self.day.parse().ok()?,
        )
    }

    /// Offset of the local zone from UTC.
    pub fn utc_offset(&self) -> Option<time::UtcOffset> {
        zone_offset(&self.zone_hours, &self.zone_minutes)
    }
}
