//! Conversion of NMEA `DDMM.MMMM` / `DDDMM.MMMM` angles into decimal degrees.

use nom::{
    Parser, character::complete::digit1, error::ErrorKind, number::complete::recognize_float,
};

use crate::parsing::consumed;

/// A position in signed decimal degrees, north and east positive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Location {
    /// Converts raw latitude/longitude fields and their hemisphere letters.
    ///
    /// `None` unless both angles convert.
    pub fn from_raw(latitude: &str, lat_dir: &str, longitude: &str, lon_dir: &str) -> Option<Self> {
        Some(Self {
            latitude: to_decimal(latitude, lat_dir)?,
            longitude: to_decimal(longitude, lon_dir)?,
        })
    }
}

/// Converts an NMEA angle to signed decimal degrees.
///
/// The degree prefix is three digits wide when the decimal point sits past
/// index 4 (`DDDMM.MMMM`, longitudes) and two digits otherwise (`DDMM.MMMM`,
/// latitudes). Without a decimal point the length of the text decides. The
/// remainder is minutes, possibly fractional. `S` and `W` (any case) negate.
///
/// Returns `None` for empty or non-numeric text.
///
/// ```rust
/// use nmea_snapshot::to_decimal;
///
/// let latitude = to_decimal("4807.038", "N").unwrap();
/// assert!((latitude - 48.1173).abs() < 1e-9);
/// assert!(to_decimal("12311.12", "w").unwrap() < 0.0);
/// assert!(to_decimal("", "N").is_none());
/// ```
pub fn to_decimal(value: &str, hemisphere: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }

    let point = value.find('.').unwrap_or(value.len());
    let degree_len = if point > 4 { 3 } else { 2 };
    let split = degree_len.min(value.len());
    let (degrees, minutes) = (value.get(..split)?, value.get(split..)?);

    let parsed: nom::IResult<&str, &str> = consumed(digit1, ErrorKind::Digit).parse(degrees);
    let (_, degrees) = parsed.ok()?;
    let degrees: f64 = degrees.parse().ok()?;

    let minutes: f64 = if minutes.is_empty() {
        0.0
    } else if minutes.starts_with(['+', '-']) {
        return None;
    } else {
        let parsed: nom::IResult<&str, &str> =
            consumed(recognize_float, ErrorKind::Float).parse(minutes);
        let (_, minutes) = parsed.ok()?;
        minutes.parse().ok()?
    };

    let decimal = degrees + minutes / 60.0;

    if hemisphere.eq_ignore_ascii_case("S") || hemisphere.eq_ignore_ascii_case("W") {
        Some(-decimal)
    } else {
        Some(decimal)
    }
}

/// Converts an NMEA angle to decimal degrees formatted with six fractional digits.
///
/// Text that cannot be converted is returned unchanged, so the raw value is
/// never lost; empty input gives an empty string.
///
/// ```rust
/// use nmea_snapshot::to_decimal_degrees;
///
/// assert_eq!(to_decimal_degrees("4807.038", "N"), "48.117300");
/// assert_eq!(to_decimal_degrees("01131.000", "E"), "11.516667");
/// assert_eq!(to_decimal_degrees("4807.038", "S"), "-48.117300");
/// assert_eq!(to_decimal_degrees("48x7.038", "N"), "48x7.038");
/// assert_eq!(to_decimal_degrees("", "N"), "");
/// ```
pub fn to_decimal_degrees(value: &str, hemisphere: &str) -> String {
    match to_decimal(value, hemisphere) {
        Some(decimal) => format!("{decimal:.6}"),
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_degrees() {
        let cases = [
            ("4807.038", "N", "48.117300"),
            ("01131.000", "E", "11.516667"),
            ("4807.038", "s", "-48.117300"),
            ("01131.000", "W", "-11.516667"),
            ("12311.12", "W", "-123.185333"),
            ("4916.45", "N", "49.274167"),
            ("4807", "N", "48.116667"),
            ("48", "N", "48.000000"),
            ("4", "N", "4.000000"),
            ("0000.000", "N", "0.000000"),
            ("4807.038", "", "48.117300"),
        ];

        for (value, hemisphere, expected) in cases {
            assert_eq!(
                to_decimal_degrees(value, hemisphere),
                expected,
                "Failed: {value:?} {hemisphere:?}"
            );
        }
    }

    #[test]
    fn test_unconvertible_text_passes_through() {
        let cases = ["abc", "48.7.038", "N", "4807.0x8", "-4807.038", "4807.038e", "48-7.038"];

        for value in cases {
            assert_eq!(to_decimal_degrees(value, "N"), value, "Failed: {value:?}");
        }
    }

    #[test]
    fn test_location_requires_both_angles() {
        let location = Location::from_raw("4807.038", "N", "01131.000", "E").unwrap();
        assert!((location.latitude - 48.1173).abs() < 1e-9);
        assert!((location.longitude - 11.516_666_666).abs() < 1e-6);

        assert!(Location::from_raw("4807.038", "N", "", "E").is_none());
    }
}
