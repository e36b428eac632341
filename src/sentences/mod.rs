//! # Sentence Records
//!
//! One record per supported sentence type. Records keep the raw text of every
//! field so nothing the receiver sent is lost; typed views are computed on
//! demand and return `None` when the text does not convert.

mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gst::GST;
pub use gsv::GSV;
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

use nom::{Parser, error::ErrorKind};
use tracing::debug;

use crate::{FromFields, parse::Fields, parsing::consumed};

/// A decoded sentence, tagged by type.
///
/// Dispatch is an exact match on the 5-character type code, so only the `GP`
/// talker is recognized. Any other code becomes [`ParsedSentence::Unsupported`],
/// which is not an error.
///
/// | Variant | Type code | Description |
/// |---------|-----------|-------------|
/// | GGA([`GGA`]) | `GPGGA` | Global Positioning System Fix Data |
/// | RMC([`RMC`]) | `GPRMC` | Recommended Minimum Navigation Information |
/// | VTG([`VTG`]) | `GPVTG` | Track made good and Ground speed |
/// | GSA([`GSA`]) | `GPGSA` | GPS DOP and active satellites |
/// | GSV([`GSV`]) | `GPGSV` | Satellites in View |
/// | GLL([`GLL`]) | `GPGLL` | Geographic Position - Latitude/Longitude |
/// | ZDA([`ZDA`]) | `GPZDA` | Time & Date |
/// | GST([`GST`]) | `GPGST` | Pseudorange Noise Statistics |
///
/// ```rust
/// use nmea_snapshot::{Fields, ParsedSentence};
///
/// let fields = Fields::split("GPZDA,201530.00,04,07,2002,00,00");
/// let sentence = ParsedSentence::dispatch("GPZDA", &fields);
///
/// match &sentence {
///     ParsedSentence::ZDA(zda) => assert_eq!(zda.year, "2002"),
///     _ => unreachable!(),
/// }
/// assert_eq!(sentence.sentence_type(), "GPZDA");
///
/// let unknown = ParsedSentence::dispatch("GLGSV", &Fields::split("GLGSV,1,1,00"));
/// assert!(matches!(unknown, ParsedSentence::Unsupported(_)));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track made good and Ground speed
    VTG(VTG),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Time & Date
    ZDA(ZDA),
    /// Pseudorange Noise Statistics
    GST(GST),
    /// Any other type code
    Unsupported(Unsupported),
}

impl ParsedSentence {
    /// Routes the fields of one sentence to the extractor for `type_code`.
    pub fn dispatch(type_code: &str, fields: &Fields<'_>) -> Self {
        match type_code {
            "GPGGA" => Self::GGA(GGA::from_fields(fields)),
            "GPRMC" => Self::RMC(RMC::from_fields(fields)),
            "GPVTG" => Self::VTG(VTG::from_fields(fields)),
            "GPGSA" => Self::GSA(GSA::from_fields(fields)),
            "GPGSV" => Self::GSV(GSV::from_fields(fields)),
            "GPGLL" => Self::GLL(GLL::from_fields(fields)),
            "GPZDA" => Self::ZDA(ZDA::from_fields(fields)),
            "GPGST" => Self::GST(GST::from_fields(fields)),
            _ => {
                debug!(type_code, "unsupported sentence type");
                Self::Unsupported(Unsupported::new(type_code))
            }
        }
    }

    /// The 5-character type code this sentence was dispatched on.
    pub fn sentence_type(&self) -> &str {
        match self {
            Self::GGA(_) => "GPGGA",
            Self::RMC(_) => "GPRMC",
            Self::VTG(_) => "GPVTG",
            Self::GSA(_) => "GPGSA",
            Self::GSV(_) => "GPGSV",
            Self::GLL(_) => "GPGLL",
            Self::ZDA(_) => "GPZDA",
            Self::GST(_) => "GPGST",
            Self::Unsupported(unsupported) => &unsupported.sentence_type,
        }
    }
}

/// A sentence of a type without an extractor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    /// The type code as received
    pub sentence_type: String,
    /// `Unsupported sentence type: <code>`
    pub message: String,
}

impl Unsupported {
    fn new(type_code: &str) -> Self {
        Self {
            sentence_type: type_code.to_owned(),
            message: format!("Unsupported sentence type: {type_code}"),
        }
    }
}

macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Interprets a raw single-character field, `None` for anything else.
            pub fn from_raw(raw: &str) -> Option<Self> {
                let parsed: nom::IResult<&str, Self> = consumed(
                    nom::branch::alt(($(
                        nom::character::complete::char($char).map(|_| Self::$variant),
                    )*)),
                    ErrorKind::Char,
                )
                .parse(raw);

                parsed.ok().map(|(_, value)| value)
            }
        }
    };
}

raw_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

raw_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GPSFix,
        /// 2 - Differential GPS fix
        '2' => DGPSFix,
        /// 3 - PPS fix
        '3' => PPSFix,
        /// 4 - Real Time Kinematic
        '4' => RTK,
        /// 5 - Float RTK
        '5' => FloatRTK,
        /// 6 - estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

raw_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

raw_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D Fix
        '2' => Fix2D,
        /// 3 - 3D Fix
        '3' => Fix3D,
    }
}

/// Satellite information used in [`GSV`] sentences
///
/// Values are kept as received. `snr` is empty while the receiver is not
/// tracking the satellite.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number
    pub id: String,
    /// Elevation in degrees, 90 maximum
    pub elevation: String,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: String,
    /// Signal-to-noise ratio in dB, 00 to 99
    pub snr: String,
}

impl Satellite {
    /// Reads one row of four fields starting at `index`.
    pub(crate) fn from_row(fields: &Fields<'_>, index: usize) -> Self {
        Self {
            id: fields.get(index).to_owned(),
            elevation: fields.get(index + 1).to_owned(),
            azimuth: fields.get(index + 2).to_owned(),
            snr: fields.get(index + 3).to_owned(),
        }
    }

    pub fn prn(&self) -> Option<u8> {
        self.id.parse().ok()
    }

    pub fn elevation_degrees(&self) -> Option<u8> {
        self.elevation.parse().ok()
    }

    pub fn azimuth_degrees(&self) -> Option<u16> {
        self.azimuth.parse().ok()
    }

    pub fn snr_db(&self) -> Option<u8> {
        self.snr.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(Status::from_raw("A"), Some(Status::Valid));
        assert_eq!(Status::from_raw("V"), Some(Status::Invalid));

        let cases = ["", "K", "AV", "a"];
        for input in cases {
            assert_eq!(Status::from_raw(input), None, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_quality() {
        assert_eq!(Quality::from_raw("0"), Some(Quality::NoFix));
        assert_eq!(Quality::from_raw("1"), Some(Quality::GPSFix));
        assert_eq!(Quality::from_raw("8"), Some(Quality::Simulation));
        assert_eq!(Quality::from_raw("9"), None);
        assert_eq!(Quality::from_raw("10"), None);
    }

    #[test]
    fn test_modes() {
        assert_eq!(SelectionMode::from_raw("M"), Some(SelectionMode::Manual));
        assert_eq!(FixMode::from_raw("3"), Some(FixMode::Fix3D));
        assert_eq!(FixMode::from_raw("0"), None);
    }

    #[test]
    fn test_satellite_views() {
        let fields = Fields::split("GPGSV,1,1,01,07,,070,");
        let satellite = Satellite::from_row(&fields, 4);

        assert_eq!(satellite.id, "07");
        assert_eq!(satellite.prn(), Some(7));
        assert_eq!(satellite.elevation_degrees(), None);
        assert_eq!(satellite.azimuth_degrees(), Some(70));
        assert_eq!(satellite.snr, "");
        assert_eq!(satellite.snr_db(), None);
    }

    #[test]
    fn test_dispatch_is_exact() {
        let cases = ["GPGGX", "gpgga", "GNGGA", "GPXYZ"];

        for code in cases {
            let sentence = ParsedSentence::dispatch(code, &Fields::split(code));
            match sentence {
                ParsedSentence::Unsupported(unsupported) => {
                    assert_eq!(unsupported.sentence_type, code);
                    assert_eq!(
                        unsupported.message,
                        format!("Unsupported sentence type: {code}")
                    );
                }
                other => panic!("Failed: {code:?} dispatched to {other:?}"),
            }
        }
    }
}
