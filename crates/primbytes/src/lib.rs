//! Big-endian byte codecs for fixed-width primitive values.
//!
//! Converts 8/16/32/64-bit signed integers, a 16-bit code unit, and
//! IEEE-754 single/double floats to and from their big-endian byte
//! representations. Encoding is total — every value has exactly one
//! representation of the type's width. The validating decoders fail with
//! [`InvalidArgument`] on absent or too-short input; the `*_exact`
//! decoders take fixed-length arrays and never fail. Floats travel as raw
//! bit patterns, so NaN payloads and the sign of zero round-trip
//! bit-exactly.
//!
//! # Example
//!
//! ```
//! use primbytes::{decode_i32, encode_i32};
//!
//! let bytes = encode_i32(0x7fff_ffff);
//! assert_eq!(bytes, [0x7f, 0xff, 0xff, 0xff]);
//! assert_eq!(decode_i32(Some(&bytes[..])), Ok(0x7fff_ffff));
//! ```

mod decode;
mod encode;
mod error;

pub use decode::{
    decode_f32, decode_f32_exact, decode_f64, decode_f64_exact, decode_i16, decode_i16_exact,
    decode_i32, decode_i32_exact, decode_i64, decode_i64_exact, decode_i8, decode_i8_exact,
    decode_u16, decode_u16_exact,
};
pub use encode::{
    encode_f32, encode_f64, encode_i16, encode_i32, encode_i64, encode_i8, encode_u16,
};
pub use error::InvalidArgument;
