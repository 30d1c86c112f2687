//! Helpers for explicit network byte-order conversions.
//!
//! The default length field is a 4-byte big-endian signed integer. These
//! helpers keep Clippy expectations scoped to the conversion points so the
//! framing code stays explicit about wire endianness.

/// Parse a network-order `i32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use framing::byte_order::read_network_i32;
///
/// assert_eq!(read_network_i32([0x00, 0x00, 0x01, 0x00]), 256);
/// assert_eq!(read_network_i32([0xFF, 0xFF, 0xFF, 0xFF]), -1);
/// ```
#[must_use]
pub fn read_network_i32(bytes: [u8; 4]) -> i32 {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    i32::from_be_bytes(bytes)
}

/// Serialise an `i32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use framing::byte_order::write_network_i32;
///
/// assert_eq!(write_network_i32(256), [0x00, 0x00, 0x01, 0x00]);
/// ```
#[must_use]
pub fn write_network_i32(value: i32) -> [u8; 4] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    value.to_be_bytes()
}
