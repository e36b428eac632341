//! # Positional field mapping for NMEA 0183 sentence records
//!
//! `nmea-snapshot-derive` provides `#[derive(FromFields)]`, which implements
//! `nmea_snapshot::FromFields` for a struct with named fields. Each struct field
//! is read from one position of the comma-separated sentence payload:
//!
//! - positions follow declaration order, starting at 1 (position 0 is the
//!   sentence type code);
//! - `#[nmea(index = N)]` moves the field to position `N`, later fields continue
//!   from `N + 1`;
//! - `#[nmea(default = V)]` is the value used when the field is empty or malformed
//!   (otherwise `Default::default()`);
//! - `#[nmea(parser(f))]` calls `f(&Fields, index)` instead of the field parser;
//! - `#[nmea(ignore)]` fills the field with `Default::default()` and consumes no
//!   position.
//!
//! ```ignore
//! #[derive(FromFields)]
//! pub struct VTG {
//!     pub track_true: String,
//!     #[nmea(index = 3)]
//!     pub track_magnetic: String,
//! }
//! ```

use generate::generate_from_fields_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod meta;

#[proc_macro_derive(FromFields, attributes(nmea))]
pub fn derive_from_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_from_fields_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
