#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea_snapshot, FromFields,
    parse::Fields,
    sentences::Satellite,
};

/// Fields of one satellite row.
const ROW_LEN: usize = 4;

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// A group of GSV sentences describes one view; see
/// [`GroupAccumulator`](crate::GroupAccumulator) for how rows of a group are
/// collected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, FromFields)]
pub struct GSV {
    #[nmea(default = 1)]
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    #[nmea(default = 1)]
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    #[nmea(parser(satellite_rows))]
    /// Satellite rows carried by this sentence, up to four
    pub satellites: Vec<Satellite>,
}

/// Reads rows of four fields from `index` on while a full row remains.
///
/// A row cut short by the end of the sentence is dropped. With the checksum
/// stripped during framing, a row whose SNR is empty still counts as full.
fn satellite_rows(fields: &Fields<'_>, index: usize) -> Vec<Satellite> {
    (index..)
        .step_by(ROW_LEN)
        .take_while(|&row| row + ROW_LEN - 1 < fields.len())
        .map(|row| Satellite::from_row(fields, row))
        .collect()
}
