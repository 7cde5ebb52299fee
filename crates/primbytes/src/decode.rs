//! Byte sequence → primitive conversions.
//!
//! Two variants per type. The validating form takes an optional byte slice:
//! absent input and slices shorter than the type's width fail with
//! [`InvalidArgument`], and only the first `width` bytes are read — trailing
//! bytes are ignored, not rejected. The `*_exact` form takes a fixed-length
//! array, so arity is checked at the call site and the function is total.

use crate::InvalidArgument;

/// Guards the validating decoders: rejects absent input and slices shorter
/// than `min` before any byte is read.
#[inline]
fn check_min(data: Option<&[u8]>, min: usize) -> Result<&[u8], InvalidArgument> {
    match data {
        None => Err(InvalidArgument::Absent),
        Some(data) if data.len() < min => Err(InvalidArgument::TooShort {
            min,
            len: data.len(),
        }),
        Some(data) => Ok(data),
    }
}

/// Decodes an 8-bit signed integer from the first byte of the sequence.
pub fn decode_i8(data: Option<&[u8]>) -> Result<i8, InvalidArgument> {
    let data = check_min(data, 1)?;
    Ok(decode_i8_exact([data[0]]))
}

/// Decodes a 16-bit signed integer from the first two bytes, most
/// significant byte first.
pub fn decode_i16(data: Option<&[u8]>) -> Result<i16, InvalidArgument> {
    let data = check_min(data, 2)?;
    Ok(decode_i16_exact([data[0], data[1]]))
}

/// Decodes a 16-bit code unit from the first two bytes, most significant
/// byte first.
pub fn decode_u16(data: Option<&[u8]>) -> Result<u16, InvalidArgument> {
    let data = check_min(data, 2)?;
    Ok(decode_u16_exact([data[0], data[1]]))
}

/// Decodes a 32-bit signed integer from the first four bytes, most
/// significant byte first.
pub fn decode_i32(data: Option<&[u8]>) -> Result<i32, InvalidArgument> {
    let data = check_min(data, 4)?;
    Ok(decode_i32_exact([data[0], data[1], data[2], data[3]]))
}

/// Decodes a 64-bit signed integer from the first eight bytes, most
/// significant byte first.
pub fn decode_i64(data: Option<&[u8]>) -> Result<i64, InvalidArgument> {
    let data = check_min(data, 8)?;
    Ok(decode_i64_exact([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]))
}

/// Decodes a 32-bit float from the first four bytes: the 32-bit integer
/// rule followed by a pure bit reinterpretation.
pub fn decode_f32(data: Option<&[u8]>) -> Result<f32, InvalidArgument> {
    let data = check_min(data, 4)?;
    Ok(decode_f32_exact([data[0], data[1], data[2], data[3]]))
}

/// Decodes a 64-bit float from the first eight bytes: the 64-bit integer
/// rule followed by a pure bit reinterpretation.
pub fn decode_f64(data: Option<&[u8]>) -> Result<f64, InvalidArgument> {
    let data = check_min(data, 8)?;
    Ok(decode_f64_exact([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]))
}

/// Reinterprets a single byte as an 8-bit signed integer.
#[inline]
pub fn decode_i8_exact(bytes: [u8; 1]) -> i8 {
    bytes[0] as i8
}

/// Assembles a 16-bit signed integer from two bytes, most significant
/// byte first.
#[inline]
pub fn decode_i16_exact(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// Assembles a 16-bit code unit from two bytes, most significant byte
/// first.
#[inline]
pub fn decode_u16_exact(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Assembles a 32-bit signed integer from four bytes, most significant
/// byte first.
#[inline]
pub fn decode_i32_exact(bytes: [u8; 4]) -> i32 {
    i32::from_be_bytes(bytes)
}

/// Assembles a 64-bit signed integer from eight bytes, most significant
/// byte first.
#[inline]
pub fn decode_i64_exact(bytes: [u8; 8]) -> i64 {
    i64::from_be_bytes(bytes)
}

/// Assembles a 32-bit float: the 32-bit integer rule, then a pure bit
/// reinterpretation that preserves NaN payloads and signed zero.
#[inline]
pub fn decode_f32_exact(bytes: [u8; 4]) -> f32 {
    f32::from_bits(decode_i32_exact(bytes) as u32)
}

/// Assembles a 64-bit float: the 64-bit integer rule, then a pure bit
/// reinterpretation that preserves NaN payloads and signed zero.
#[inline]
pub fn decode_f64_exact(bytes: [u8; 8]) -> f64 {
    f64::from_bits(decode_i64_exact(bytes) as u64)
}
