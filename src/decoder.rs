//! Top-level DEFLATE block dispatcher (RFC 1951 §3.2.3): reads BFINAL/BTYPE
//! and drives the uncompressed/fixed/dynamic block decoders until the
//! final block, writing straight into the caller's output buffer.

use byteorder::{ByteOrder, LittleEndian};

use crate::bitreader::BitReader;
use crate::block;
use crate::dynamic;
use crate::error::{self, Result};
use crate::fixed;

/// Decompresses one complete DEFLATE stream from `source` into `dest`,
/// returning the number of bytes written.
///
/// `dest`'s length is the caller's reserved output capacity: if the
/// stream would need more room than that, this returns [`crate::Error::Buf`]
/// rather than growing or truncating anything. There is no streaming or
/// incremental variant — give this one complete input buffer and one
/// pre-sized output buffer.
pub fn uncompress(dest: &mut [u8], source: &[u8]) -> Result<usize> {
    let mut bits = BitReader::new(source);
    let mut pos = 0usize;

    loop {
        let bfinal = bits.get_bits(1);
        let btype = bits.get_bits(2);

        log::trace!("deflate: block type {btype}, final={bfinal}");

        match btype {
            0 => uncompressed_block(&mut bits, dest, &mut pos)?,
            1 => {
                let ltree = fixed::length_tree();
                let dtree = fixed::distance_tree();
                block::decode(&mut bits, &ltree, &dtree, dest, &mut pos)?;
            }
            2 => {
                let (ltree, dtree) = dynamic::read_trees(&mut bits)?;
                block::decode(&mut bits, &ltree, &dtree, dest, &mut pos)?;
            }
            _ => {
                log::warn!("deflate: reserved block type 3");
                return error::data();
            }
        }

        if bfinal == 1 {
            break;
        }
    }

    if bits.overflowed() {
        log::warn!("deflate: input exhausted before final block");
        return error::data();
    }

    log::debug!("deflate: wrote {pos} bytes");
    Ok(pos)
}

fn uncompressed_block(bits: &mut BitReader<'_>, dest: &mut [u8], pos: &mut usize) -> Result<()> {
    bits.align_to_byte();

    let header = bits.read_bytes(4)?;
    let len = LittleEndian::read_u16(&header[0..2]);
    let nlen = LittleEndian::read_u16(&header[2..4]);
    if len != !nlen {
        return error::data();
    }
    let len = len as usize;

    let data = bits.read_bytes(len)?;
    if dest.len() - *pos < len {
        return error::buf();
    }
    dest[*pos..*pos + len].copy_from_slice(data);
    *pos += len;

    bits.align_to_byte();
    Ok(())
}

#[cfg(test)]
mod test {
    use super::uncompress;

    #[test]
    fn empty_fixed_block() {
        let source = [0x03, 0x00];
        let mut dest = [0u8; 16];
        let n = uncompress(&mut dest, &source).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn uncompressed_hello() {
        let source = [0x01, 0x05, 0x00, 0xfa, 0xff, b'H', b'e', b'l', b'l', b'o'];
        let mut dest = [0u8; 16];
        let n = uncompress(&mut dest, &source).unwrap();
        assert_eq!(&dest[..n], b"Hello");
    }

    #[test]
    fn fixed_huffman_hello() {
        let source = [0xf3, 0x48, 0xcd, 0xc9, 0xc9, 0x07, 0x00];
        let mut dest = [0u8; 16];
        let n = uncompress(&mut dest, &source).unwrap();
        assert_eq!(&dest[..n], b"Hello");
    }

    #[test]
    fn rejects_bad_uncompressed_length() {
        let source = [0x01, 0x05, 0x00, 0x05, 0x00, b'H', b'e', b'l', b'l', b'o'];
        let mut dest = [0u8; 16];
        assert!(uncompress(&mut dest, &source).is_err());
    }

    #[test]
    fn buf_error_on_undersized_output() {
        let source = [0xf3, 0x48, 0xcd, 0xc9, 0xc9, 0x07, 0x00];
        let mut dest = [0u8; 3];
        assert!(uncompress(&mut dest, &source).is_err());
    }

    #[test]
    fn rejects_reserved_block_type() {
        // BFINAL=1, BTYPE=0b11 (reserved): bits LSB-first -> byte 0b0000_0111.
        let source = [0b0000_0111];
        let mut dest = [0u8; 4];
        assert!(uncompress(&mut dest, &source).is_err());
    }
}
