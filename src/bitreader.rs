//! LSB-first bit reader over a byte slice.
//!
//! DEFLATE packs fields least-significant-bit first within each byte (RFC
//! 1951 §3.1.1), the opposite convention from the `byteorder` crate's
//! byte-oriented readers, so this is hand-rolled rather than built on
//! `ReadBytesExt` the way the rest of this crate's container adapters are.

use crate::error::{self, Result};

/// Bit-level cursor into a byte slice, shared by every block decoder.
pub(crate) struct BitReader<'a> {
    source: &'a [u8],
    pos: usize,
    tag: u32,
    bitcount: u32,
    /// Sticky: once set, the reader has run off the end of `source`.
    overflow: bool,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(source: &'a [u8]) -> BitReader<'a> {
        BitReader {
            source,
            pos: 0,
            tag: 0,
            bitcount: 0,
            overflow: false,
        }
    }

    pub(crate) fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Ensures at least `n` bits are buffered in `tag`. `n` must be in
    /// `0..=32`.
    fn refill(&mut self, n: u32) {
        while self.bitcount < n {
            let byte = if self.pos < self.source.len() {
                let b = self.source[self.pos];
                self.pos += 1;
                b
            } else {
                self.overflow = true;
                0
            };
            self.tag |= (byte as u32) << self.bitcount;
            self.bitcount += 8;
        }
    }

    /// Takes the low `n` bits out of `tag`. Caller must have already
    /// `refill`ed to at least `n` bits.
    fn consume(&mut self, n: u32) -> u32 {
        let val = self.tag & ((1u32.checked_shl(n).unwrap_or(0)).wrapping_sub(1));
        self.tag = if n == 32 { 0 } else { self.tag >> n };
        self.bitcount -= n;
        val
    }

    /// Reads an `n`-bit (`0..=16`) little-endian field.
    pub(crate) fn get_bits(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.refill(n);
        self.consume(n)
    }

    /// `base` when `n == 0`, else `base + get_bits(n)`. Used for the
    /// length/distance extra-bits tables.
    pub(crate) fn get_bits_base(&mut self, n: u32, base: u32) -> u32 {
        if n == 0 {
            base
        } else {
            base + self.get_bits(n)
        }
    }

    /// Realigns to the next byte boundary, discarding any partially
    /// buffered bits. Only valid right after a block header, where RFC
    /// 1951 guarantees fewer than 8 bits are buffered.
    pub(crate) fn align_to_byte(&mut self) {
        debug_assert!(self.bitcount < 8, "uncompressed block not byte-aligned");
        self.tag = 0;
        self.bitcount = 0;
    }

    /// Reads `n` raw bytes directly from the source, bypassing the bit
    /// buffer. Only valid immediately after `align_to_byte`.
    pub(crate) fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        debug_assert_eq!(self.bitcount, 0);
        if self.pos + n > self.source.len() {
            self.overflow = true;
            return error::data();
        }
        let bytes = &self.source[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn reads_lsb_first() {
        // 0b1011_0010 -> low 3 bits = 0b010 = 2, next 5 bits = 0b10110 = 22
        let mut r = BitReader::new(&[0b1011_0010]);
        assert_eq!(r.get_bits(3), 0b010);
        assert_eq!(r.get_bits(5), 0b10110);
    }

    #[test]
    fn spans_byte_boundaries() {
        let mut r = BitReader::new(&[0xff, 0x01]);
        assert_eq!(r.get_bits(9), 0x1ff);
    }

    #[test]
    fn overflow_is_sticky() {
        let mut r = BitReader::new(&[0x00]);
        let _ = r.get_bits(16);
        assert!(r.overflowed());
        let _ = r.get_bits(1);
        assert!(r.overflowed());
    }

    #[test]
    fn get_bits_base_zero_extra_bits() {
        let mut r = BitReader::new(&[0x00]);
        assert_eq!(r.get_bits_base(0, 258), 258);
    }
}
