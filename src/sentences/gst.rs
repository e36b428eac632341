#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea_snapshot, FromFields, parsing::utc_time};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2 3 4 5 6 7 8
///         |         | | | | | | |
///  $--GST,hhmmss.ss,x,x,x,x,x,x,x*hh<CR><LF>
/// ```
///
/// Error estimates are one standard deviation, in meters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct GST {
    /// UTC time of the associated GGA fix
    pub time: String,
    /// Total RMS standard deviation of ranges inputs to the navigation solution
    pub rms: String,
    /// Semi-major axis of the error ellipse
    pub sigma_major: String,
    /// Semi-minor axis of the error ellipse
    pub sigma_minor: String,
    /// Orientation of the semi-major axis, degrees from true north
    pub orientation: String,
    pub sigma_lat: String,
    pub sigma_lon: String,
    pub sigma_alt: String,
}

impl GST {
    pub fn fix_time(&self) -> Option<time::Time> {
        utc_time(&self.time)
    }
}
