//! Checksum algorithms.
// http://en.wikipedia.org/wiki/Checksum

pub mod adler;

#[cfg(feature = "gzip")]
pub mod crc32;
