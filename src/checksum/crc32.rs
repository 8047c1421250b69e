/*!

CRC-32/IEEE checksum, used by the gzip trailer.

Unlike [`crate::checksum::adler`], which is hand-rolled from the textbook
recurrence, this wraps the `crc32fast` crate: a correct, well-tested
CRC-32 implementation is a commodity the wider Rust ecosystem already
provides, and reimplementing the reflected polynomial and table
generation by hand here would just be a second, worse copy of it.
Exposes the same small `feed`/`result`/`reset` shape as `adler::State32`
so the gzip and zlib container adapters share one checksum interface.

*/

/// CRC-32/IEEE state, fed the decompressed bytes incrementally.
pub struct State32 {
    hasher: crc32fast::Hasher,
}

impl Default for State32 {
    fn default() -> State32 {
        State32::new()
    }
}

impl State32 {
    /// Create a new state
    pub fn new() -> State32 {
        State32 {
            hasher: crc32fast::Hasher::new(),
        }
    }

    /// Mutate the state for given data
    pub fn feed(&mut self, buf: &[u8]) {
        self.hasher.update(buf);
    }

    /// Get checksum
    pub fn result(&self) -> u32 {
        self.hasher.clone().finalize()
    }

    /// Reset the state
    pub fn reset(&mut self) {
        self.hasher = crc32fast::Hasher::new();
    }
}

#[cfg(test)]
mod test {
    use super::State32;

    #[test]
    fn matches_known_vector() {
        let mut state = State32::new();
        state.feed(b"123456789");
        assert_eq!(state.result(), 0xCBF43926);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut state = State32::new();
        state.feed(b"anything");
        state.reset();
        assert_eq!(state.result(), 0);
    }
}
