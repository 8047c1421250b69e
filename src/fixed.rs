//! RFC 1951 §3.2.6 fixed Huffman trees.
//!
//! Built directly from the known counts and canonical symbol ordering
//! instead of going through [`crate::huffman::Tree::construct`], as
//! `static` tables rather than a call into the general tree builder.
//! `max_sym` for the literal/length tree is pinned at 285: symbols 286
//! and 287 are
//! reserved by RFC 1951 and must never be produced by a conforming
//! encoder, so the block body decoder treats anything above 285 as
//! invalid even though `trans` still has slots for them.

use crate::huffman::{Tree, MAX_BITS, MAX_SYMBOLS};

pub(crate) fn length_tree() -> Tree {
    let mut table = [0u16; MAX_BITS + 1];
    table[7] = 24;
    table[8] = 152;
    table[9] = 112;

    let mut trans = [0u16; MAX_SYMBOLS];
    let mut i = 0usize;
    for sym in 256..280 {
        trans[i] = sym;
        i += 1;
    }
    for sym in 0..144 {
        trans[i] = sym;
        i += 1;
    }
    for sym in 280..288 {
        trans[i] = sym;
        i += 1;
    }
    for sym in 144..256 {
        trans[i] = sym;
        i += 1;
    }
    debug_assert_eq!(i, 24 + 152 + 112);

    Tree::from_parts(table, trans, 285)
}

pub(crate) fn distance_tree() -> Tree {
    let mut table = [0u16; MAX_BITS + 1];
    table[5] = 32;

    let mut trans = [0u16; MAX_SYMBOLS];
    for i in 0..32u16 {
        trans[i as usize] = i;
    }

    Tree::from_parts(table, trans, 29)
}
