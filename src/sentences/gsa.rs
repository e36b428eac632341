#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea_snapshot, FromFields,
    parse::Fields,
    sentences::{FixMode, SelectionMode},
};

/// Number of PRN slots in a GSA sentence.
const PRN_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         | |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, FromFields)]
pub struct GSA {
    /// Selection mode, `A` or `M`
    pub mode: String,
    /// Fix mode, `1` to `3`
    pub fix_type: String,
    #[nmea(parser(joined_prns))]
    /// Non-empty PRN slots joined with `,`, in slot order
    pub satellites_used: String,
    #[nmea(index = 15)]
    /// Position Dilution of Precision
    pub pdop: String,
    /// Horizontal Dilution of Precision
    pub hdop: String,
    /// Vertical Dilution of Precision
    pub vdop: String,
}

/// Joins the non-empty values among the twelve PRN slots starting at `index`.
fn joined_prns(fields: &Fields<'_>, index: usize) -> String {
    (index..index + PRN_SLOTS)
        .map(|slot| fields.get(slot))
        .filter(|prn| !prn.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

impl GSA {
    pub fn selection_mode(&self) -> Option<SelectionMode> {
        SelectionMode::from_raw(&self.mode)
    }

    pub fn fix_mode(&self) -> Option<FixMode> {
        FixMode::from_raw(&self.fix_type)
    }

    /// PRN numbers of the satellites used in the fix.
    ///
    /// Entries that are not numbers are skipped.
    pub fn fix_prns(&self) -> heapless::Vec<u8, PRN_SLOTS> {
        self.satellites_used
            .split(',')
            .filter_map(|prn| prn.parse().ok())
            .take(PRN_SLOTS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsa_parsing() {
        let gsa = GSA::from_fields(&Fields::split(
            "GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.8,1.0,1.5",
        ));

        assert_eq!(gsa.satellites_used, "04,05,09,12,24,25,29");
        assert_eq!(gsa.pdop, "1.8");
        assert_eq!(gsa.hdop, "1.0");
        assert_eq!(gsa.vdop, "1.5");
        assert_eq!(gsa.selection_mode(), Some(SelectionMode::Automatic));
        assert_eq!(gsa.fix_mode(), Some(FixMode::Fix3D));
        assert_eq!(gsa.fix_prns().as_slice(), &[4, 5, 9, 12, 24, 25, 29]);
    }

    #[test]
    fn test_gsa_prn_slots() {
        let cases = [
            ("GPGSA,A,1,,,,,,,,,,,,,,,", ""),
            ("GPGSA,A,3,,,07,,,,,,,,,11,2.0,1.1,1.7", "07,11"),
            (
                "GPGSA,M,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0",
                "01,02,03,04,05,06,07,08,09,10,11,12",
            ),
            ("GPGSA,A,3,04", "04"),
        ];

        for (input, expected) in cases {
            let gsa = GSA::from_fields(&Fields::split(input));
            assert_eq!(gsa.satellites_used, expected, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_gsa_prn_list_is_bounded() {
        let gsa = GSA::from_fields(&Fields::split(
            "GPGSA,M,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0",
        ));
        assert_eq!(gsa.fix_prns().len(), 12);

        let gsa = GSA {
            satellites_used: "01,xx,03".to_owned(),
            ..GSA::default()
        };
        assert_eq!(gsa.fix_prns().as_slice(), &[1, 3]);
    }
}
