//! # Parsing Utilities
//!
//! Small nom parsers behind the typed accessors of the sentence records. The
//! records keep the raw field text; these helpers interpret it on demand and
//! report `None` instead of failing.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::one_of,
    combinator::{map_res, opt},
    error::{ErrorKind, ParseError},
    number::complete::recognize_float,
};

/// Ensures that the parser consumes all input.
///
/// # Examples
///
/// ```rust
/// use nmea_snapshot::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

fn two_digits(i: &str) -> nom::IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u8>(),
    )
    .parse(i)
}

/// Parses `hhmmss` or `hhmmss.sss` into a UTC time of day.
///
/// ```rust
/// use nmea_snapshot::parsing::utc_time;
///
/// let time = utc_time("123519.25").unwrap();
/// assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
/// assert_eq!(time.millisecond(), 250);
/// assert!(utc_time("").is_none());
/// assert!(utc_time("2561").is_none());
/// ```
pub fn utc_time(raw: &str) -> Option<time::Time> {
    let parsed: nom::IResult<&str, (u8, u8, &str)> =
        consumed((two_digits, two_digits, recognize_float), ErrorKind::Eof).parse(raw);
    let (_, (hour, minute, second)) = parsed.ok()?;

    let second: f32 = second.parse().ok()?;
    if second.is_sign_negative() {
        return None;
    }

    let milliseconds = (second.fract() * 1000.0).round().min(999.0);
    time::Time::from_hms_milli(hour, minute, second.trunc() as u8, milliseconds as u16).ok()
}

/// Parses a `ddmmyy` date.
///
/// Two-digit years 83 to 99 belong to the 1900s, everything else to the 2000s.
///
/// ```rust
/// use nmea_snapshot::parsing::ddmmyy;
///
/// let date = ddmmyy("230394").unwrap();
/// assert_eq!(date.year(), 1994);
/// assert_eq!(ddmmyy("010125").unwrap().year(), 2025);
/// assert!(ddmmyy("320394").is_none());
/// ```
pub fn ddmmyy(raw: &str) -> Option<time::Date> {
    let parsed: nom::IResult<&str, (u8, u8, u8)> =
        consumed((two_digits, two_digits, two_digits), ErrorKind::Eof).parse(raw);
    let (_, (day, month, year)) = parsed.ok()?;

    let year = match year {
        83..=99 => 1900 + i32::from(year),
        _ => 2000 + i32::from(year),
    };

    calendar_date(year, month, day)
}

/// Builds a date from numeric calendar parts, `None` when out of range.
pub fn calendar_date(year: i32, month: u8, day: u8) -> Option<time::Date> {
    let month = time::Month::try_from(month).ok()?;
    time::Date::from_calendar_date(year, month, day).ok()
}

/// Parses a local zone description (`hh`, `mm`) as sent in ZDA.
///
/// A leading `-` on the hours applies to the minutes too.
///
/// ```rust
/// use nmea_snapshot::parsing::zone_offset;
///
/// assert_eq!(zone_offset("-03", "30").unwrap().whole_minutes(), -210);
/// assert_eq!(zone_offset("00", "00").unwrap().whole_minutes(), 0);
/// assert!(zone_offset("", "").is_none());
/// ```
pub fn zone_offset(hours: &str, minutes: &str) -> Option<time::UtcOffset> {
    let parsed: nom::IResult<&str, (Option<char>, u8)> =
        consumed((opt(one_of("+-")), two_digits), ErrorKind::Eof).parse(hours);
    let (_, (sign, hours)) = parsed.ok()?;
    let minutes: u8 = minutes.parse().ok()?;

    let (hours, minutes) = (i8::try_from(hours).ok()?, i8::try_from(minutes).ok()?);
    let (hours, minutes) = match sign {
        Some('-') => (-hours, -minutes),
        _ => (hours, minutes),
    };

    time::UtcOffset::from_hms(hours, minutes, 0).ok()
}
