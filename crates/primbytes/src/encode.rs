//! Primitive → big-endian byte array conversions.
//!
//! Every function here is total: each value of a supported type has exactly
//! one big-endian representation of the type's width, returned as a
//! fixed-length array. Floating-point values are encoded through their raw
//! IEEE-754 bit pattern, so NaN payloads and the sign of zero survive
//! unchanged.

/// Encodes an 8-bit signed integer as a single byte.
#[inline]
pub fn encode_i8(value: i8) -> [u8; 1] {
    [value as u8]
}

/// Encodes a 16-bit signed integer, most significant byte first.
#[inline]
pub fn encode_i16(value: i16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Encodes a 16-bit code unit, most significant byte first.
#[inline]
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Encodes a 32-bit signed integer, most significant byte first.
#[inline]
pub fn encode_i32(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Encodes a 64-bit signed integer, most significant byte first.
#[inline]
pub fn encode_i64(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Encodes a 32-bit float through its raw bit pattern and the 32-bit
/// integer rule.
#[inline]
pub fn encode_f32(value: f32) -> [u8; 4] {
    encode_i32(value.to_bits() as i32)
}

/// Encodes a 64-bit float through its raw bit pattern and the 64-bit
/// integer rule.
#[inline]
pub fn encode_f64(value: f64) -> [u8; 8] {
    encode_i64(value.to_bits() as i64)
}
