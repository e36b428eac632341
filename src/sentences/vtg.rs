#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea_snapshot, FromFields};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// The unit letters at positions 2, 4, 6 and 8 are fixed and skipped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct VTG {
    /// Course over ground, degrees true
    pub track_true: String,
    #[nmea(index = 3)]
    /// Course over ground, degrees magnetic
    pub track_magnetic: String,
    #[nmea(index = 5)]
    /// Speed over ground in knots
    pub speed_knots: String,
    #[nmea(index = 7)]
    /// Speed over ground in kilometers per hour
    pub speed_kmh: String,
}
