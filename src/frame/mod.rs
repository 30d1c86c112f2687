//! Fixed-width integer length prefixes and their byte conversions.

pub mod conversion;
pub mod format;

pub use conversion::{bytes_to_i64, bytes_to_u64, u64_to_bytes};
pub use format::{Endianness, LengthFormat};
