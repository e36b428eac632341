use tracing::debug;

/// Trait for sentence records built from the positional fields of one sentence.
///
/// Usually derived with `#[derive(FromFields)]`: every struct field is read from
/// consecutive positions starting at 1, and can be repositioned with
/// `#[nmea(index = N)]`, given a fallback with `#[nmea(default = V)]`, or read by a
/// custom function with `#[nmea(parser(f))]`. `#[nmea(ignore)]` leaves a field at
/// its `Default` without consuming a position.
///
/// Building a record never fails. Missing positions read as empty strings and
/// malformed values fall back to their declared default, so one corrupt token
/// cannot hide the rest of the sentence.
///
/// # Examples
///
/// ```rust
/// use nmea_snapshot::{Fields, FromFields};
///
/// #[derive(FromFields)]
/// struct Depth {
///     feet: String,
///     #[nmea(index = 3)]
///     meters: String,
///     #[nmea(ignore)]
///     note: String,
///     #[nmea(default = 7)]
///     quality: u8,
/// }
///
/// let depth = Depth::from_fields(&Fields::split("SDDBT,12.34,f,3.76,M,x"));
/// assert_eq!(depth.feet, "12.34");
/// assert_eq!(depth.meters, "3.76");
/// assert_eq!(depth.note, "");
/// assert_eq!(depth.quality, 7);
/// ```
pub trait FromFields: Sized {
    /// Builds the record from the fields of one sentence.
    fn from_fields(fields: &Fields<'_>) -> Self;
}

/// Conversion of a single raw field.
///
/// Returns `None` when the text does not hold a value of the type; callers
/// decide what to substitute.
pub trait FromField: Sized {
    /// Converts the raw field text.
    fn from_field(raw: &str) -> Option<Self>;
}

impl FromField for String {
    fn from_field(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

macro_rules! impl_numeric_field {
    ($($t:ty),*) => ($(
        impl FromField for $t {
            fn from_field(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }
        }
    )*)
}

impl_numeric_field!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

/// A bounds-checked positional view over the comma-separated payload of a sentence.
///
/// Position 0 holds the type code (e.g. `GPGGA`). NMEA receivers frequently
/// omit trailing fields, so reading past the end yields an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Splits a payload (the text between `$` and `*`) on commas.
    ///
    /// NMEA fields never contain commas; there is no quoting or escaping.
    pub fn split(payload: &'a str) -> Self {
        Self {
            fields: payload.split(',').collect(),
        }
    }

    /// Returns the field at `index`, or `""` past the end.
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// Number of fields, the type code included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the field at `index`, substituting `default` when it is empty or
    /// malformed.
    ///
    /// `name` identifies the field in the log line emitted for malformed text.
    pub fn parse_or<T: FromField>(&self, index: usize, default: T, name: &'static str) -> T {
        let raw = self.get(index);

        match T::from_field(raw) {
            Some(value) => value,
            None => {
                if !raw.is_empty() {
                    debug!(field = name, index, raw, "malformed field, substituting default");
                }
                default
            }
        }
    }
}
