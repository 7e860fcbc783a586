//! Token layout shared by the encoder and decoder

pub(crate) const NBBY: usize = 8;

/// Number of bits used for the match length in the first token byte
pub const MATCH_BITS: usize = 6;
/// Shortest back-reference that will be encoded
pub const MATCH_MIN: usize = 3;
/// Longest back-reference that will be encoded
pub const MATCH_MAX: usize = (1 << MATCH_BITS) + (MATCH_MIN - 1);
/// Mask for the 10-bit back-reference offset
pub const OFFSET_MASK: usize = (1 << (16 - MATCH_BITS)) - 1;
/// Number of slots in the encoder's match table
pub const LEMPEL_SIZE: usize = 1024;

/// Destination size which guarantees that compression never has to fall back
/// to storing the input uncompressed
///
/// This is `s_len + ceil(s_len / 8) + 16`, i.e. one copy-map byte for every
/// eight literals plus slack for the headroom check.
pub const fn max_compressed_size(s_len: usize) -> usize {
    s_len + s_len.div_ceil(NBBY) + 2 * NBBY
}

/// Pack a back-reference into its two token bytes
pub(crate) fn encode_backref(len: usize, offset: usize) -> [u8; 2] {
    debug_assert!((MATCH_MIN..=MATCH_MAX).contains(&len));
    debug_assert!(offset >= 1 && offset <= OFFSET_MASK);

    [
        (((len - MATCH_MIN) << (NBBY - MATCH_BITS)) | (offset >> NBBY)) as u8,
        offset as u8,
    ]
}

/// Unpack two token bytes into `(len, offset)`
pub(crate) fn decode_backref(b0: u8, b1: u8) -> (usize, usize) {
    let len = (b0 as usize >> (NBBY - MATCH_BITS)) + MATCH_MIN;
    let offset = (((b0 as usize) << NBBY) | b1 as usize) & OFFSET_MASK;
    (len, offset)
}
