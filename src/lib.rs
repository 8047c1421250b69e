//! A RFC 1951 DEFLATE decompressor, with RFC 1952 gzip and RFC 1950 zlib
//! container support.
//!
//! This crate decodes one complete compressed buffer into one complete,
//! pre-sized output buffer; there is no streaming or incremental API, and
//! there is no encoder. See [`decoder::uncompress`] for the raw DEFLATE
//! core, [`gzip::decompress`] and [`zlib::decompress`] for the container
//! formats built on top of it.
//!
//! # Example
//!
//! ```rust
//! use inflate::decoder;
//!
//! // BFINAL=1, BTYPE=01 (fixed Huffman), "Hello", EOB.
//! let compressed = [0xf3, 0x48, 0xcd, 0xc9, 0xc9, 0x07, 0x00];
//! let mut out = [0u8; 5];
//! let n = decoder::uncompress(&mut out, &compressed).unwrap();
//! assert_eq!(&out[..n], b"Hello");
//! ```

mod bitreader;
mod block;
mod dynamic;
mod fixed;
mod huffman;

pub mod decoder;
pub mod error;

pub use decoder::uncompress;
pub use error::Error;

/// Checksum algorithms.
// http://en.wikipedia.org/wiki/Checksum
#[cfg(feature = "checksum")]
pub mod checksum;

#[cfg(feature = "gzip")]
pub mod gzip;

#[cfg(feature = "zlib")]
pub mod zlib;
