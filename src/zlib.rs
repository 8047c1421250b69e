//! ZLIB decompression. Requires the `zlib` feature, enabled by default.
//!
//! This module wraps the [`crate::decoder`] DEFLATE core with the zlib
//! (RFC 1950) container: a 2-byte CMF/FLG header and a trailing big-endian
//! Adler-32 checksum of the decompressed data.
//!
//! # Example
//!
//! ```rust
//! # let compressed: &[u8] = &[];
//! use inflate::zlib;
//! let mut out = [0u8; 1024];
//! let n = zlib::decompress(&mut out, compressed);
//! ```
//!
//! # Related links
//!
//! * http://tools.ietf.org/html/rfc1950 - RFC that this implementation is
//!   based on

use byteorder::{BigEndian, ByteOrder};

use crate::checksum::adler::State32 as Adler32;
use crate::decoder;
use crate::error::{self, Result};

/// Header validation extracted from [`decompress`] so it can be unit
/// tested against header bytes alone.
fn validate_header(cmf: u8, flg: u8) -> Result<()> {
    if cmf & 0x0f != 0x8 {
        log::warn!("zlib: unsupported compression method in CMF byte {cmf:#x}");
        return error::data();
    }
    if flg & 0x20 != 0 {
        log::warn!("zlib: preset dictionary (FDICT) is not supported");
        return error::data();
    }
    if (u16::from(cmf) * 256 + u16::from(flg)) % 31 != 0 {
        log::warn!("zlib: header checksum (FCHECK) failed");
        return error::data();
    }
    Ok(())
}

/// Decompresses a complete zlib stream from `source` into `dest`,
/// returning the number of bytes written.
///
/// Like [`decoder::uncompress`], this is single-shot: `source` must
/// contain the whole stream (header, DEFLATE payload, and 4-byte Adler-32
/// trailer) and `dest` must already have the room for the decompressed
/// output.
pub fn decompress(dest: &mut [u8], source: &[u8]) -> Result<usize> {
    if source.len() < 6 {
        return error::data();
    }
    validate_header(source[0], source[1])?;

    let payload_end = source.len() - 4;
    let n = decoder::uncompress(dest, &source[2..payload_end])?;

    let trailer = &source[payload_end..];
    let expected = BigEndian::read_u32(&trailer[0..4]);

    let mut adler = Adler32::new();
    adler.feed(&dest[..n]);
    if adler.result() != expected {
        log::warn!("zlib: adler-32 checksum mismatch");
        return error::data();
    }

    Ok(n)
}

#[cfg(test)]
mod test {
    use super::{decompress, validate_header};

    #[test]
    fn rejects_non_deflate_cm() {
        assert!(validate_header(0x78 & !0x0f | 0x1, 0x9c).is_err());
    }

    #[test]
    fn rejects_preset_dictionary() {
        // CMF=0x78 (deflate, 32k window), FLG with FDICT bit set.
        assert!(validate_header(0x78, 0b0010_0000).is_err());
    }

    #[test]
    fn accepts_canonical_header() {
        // 0x78 0x9c is zlib's default-compression header and is a
        // multiple of 31 when read as a big-endian u16.
        assert!(validate_header(0x78, 0x9c).is_ok());
    }

    #[test]
    fn round_trips_fixed_huffman_payload() {
        // "Hello" deflate-encoded with the zlib default header/trailer
        // (generated with zpipe-style tooling over RFC 1951 fixed codes).
        let source = [
            0x78, 0x9c, 0xf3, 0x48, 0xcd, 0xc9, 0xc9, 0x07, 0x00, 0x05, 0x8c, 0x01, 0xf5,
        ];
        let mut dest = [0u8; 16];
        let n = decompress(&mut dest, &source).unwrap();
        assert_eq!(&dest[..n], b"Hello");
    }
}
