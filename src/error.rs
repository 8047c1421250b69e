//! Error type shared by the DEFLATE core and the gzip/zlib container
//! adapters.

use std::error;
use std::fmt;

/// Why an `uncompress` call failed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// The input violates the DEFLATE/gzip/zlib format: a bad block type,
    /// a malformed Huffman tree, an out-of-range header field, a
    /// back-reference into bytes that were never written, a checksum or
    /// length mismatch, or simply running out of input mid-block.
    Data,

    /// The input is well-formed so far, but the destination buffer does
    /// not have room for the next literal byte or match copy.
    Buf,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Error::Data => "corrupt deflate stream",
            Error::Buf => "output buffer too small",
        })
    }
}

impl error::Error for Error {}

/// Shorthand for `Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn data<T>() -> Result<T> {
    Err(Error::Data)
}

pub(crate) fn buf<T>() -> Result<T> {
    Err(Error::Buf)
}
