use core::fmt;

use crate::format::*;
use crate::util::*;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Compression errors
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompressError {
    /// The output buffer did not leave enough headroom to continue compressing.
    ///
    /// The output that has been written is *not* usable.
    /// The caller should store the input uncompressed instead.
    OutputTooSmall,
}
impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::OutputTooSmall => write!(f, "output buffer was insufficient"),
        }
    }
}
#[cfg(feature = "std")]
impl std::error::Error for CompressError {}

trait OutputHelper {
    /// Reserve a zeroed copy-map byte and return its index
    ///
    /// Fails if there is no longer room for a complete group of tokens after it.
    fn start_group(&mut self) -> Result<usize, CompressError>;
    fn putc(&mut self, c: u8) -> Result<(), CompressError>;
    fn put_buf(&mut self, buf: &[u8]) -> Result<(), CompressError>;
    /// OR `mask` into the copy-map byte at `map_pos`
    fn mark_backref(&mut self, map_pos: usize, mask: u8);
}
impl<'a> OutputHelper for BufOutput<'a> {
    fn start_group(&mut self) -> Result<usize, CompressError> {
        // one map byte plus eight two-byte tokens must still fit
        if self.pos + 1 + 2 * NBBY >= self.buf.len() {
            return Err(CompressError::OutputTooSmall);
        }
        let map_pos = self.pos;
        self.buf[map_pos] = 0;
        self.pos += 1;
        Ok(map_pos)
    }
    fn putc(&mut self, c: u8) -> Result<(), CompressError> {
        if self.pos + 1 <= self.buf.len() {
            self.buf[self.pos] = c;
            self.pos += 1;
            Ok(())
        } else {
            Err(CompressError::OutputTooSmall)
        }
    }
    fn put_buf(&mut self, buf: &[u8]) -> Result<(), CompressError> {
        if self.pos + buf.len() > self.buf.len() {
            return Err(CompressError::OutputTooSmall);
        }
        self.buf[self.pos..self.pos + buf.len()].copy_from_slice(buf);
        self.pos += buf.len();
        Ok(())
    }
    fn mark_backref(&mut self, map_pos: usize, mask: u8) {
        self.buf[map_pos] |= mask;
    }
}

#[cfg(feature = "alloc")]
impl OutputHelper for VecOutput {
    fn start_group(&mut self) -> Result<usize, CompressError> {
        self.vec.push(0);
        Ok(self.vec.len() - 1)
    }
    fn putc(&mut self, c: u8) -> Result<(), CompressError> {
        self.vec.push(c);
        Ok(())
    }
    fn put_buf(&mut self, buf: &[u8]) -> Result<(), CompressError> {
        self.vec.extend_from_slice(buf);
        Ok(())
    }
    fn mark_backref(&mut self, map_pos: usize, mask: u8) {
        self.vec[map_pos] |= mask;
    }
}

fn lempel_hash(b0: u8, b1: u8, b2: u8) -> usize {
    let mut hash = ((b0 as u32) << 16) + ((b1 as u32) << 8) + b2 as u32;
    hash += hash >> 9;
    hash += hash >> 5;
    hash as usize & (LEMPEL_SIZE - 1)
}

fn compress_impl<O: OutputHelper>(inp: &[u8], outp: &mut O) -> Result<(), CompressError> {
    // only the low 16 bits of each position are kept,
    // which is enough because offsets are masked to 10 bits anyways
    let mut lempel = [0u16; LEMPEL_SIZE];

    let mut map_pos = 0;
    let mut copymask: u8 = 1 << (NBBY - 1);
    let mut pos = 0;

    while pos < inp.len() {
        copymask = copymask.rotate_left(1);
        if copymask == 1 {
            map_pos = outp.start_group()?;
        }

        // too close to the end to safely look ahead for a full-length match
        if pos + MATCH_MAX > inp.len() {
            outp.putc(inp[pos])?;
            pos += 1;
            continue;
        }

        let cur = &inp[pos..];
        let slot = &mut lempel[lempel_hash(cur[0], cur[1], cur[2])];
        // stale or aliased entries produce garbage offsets here,
        // they get rejected by the byte comparisons below
        let offset = (pos as u16).wrapping_sub(*slot) as usize & OFFSET_MASK;
        *slot = pos as u16;

        if offset <= pos && offset != 0 {
            let ref_ = &inp[pos - offset..];
            if cur[..2] == ref_[..2] && cur[2] == ref_[2] {
                let len = MATCH_MIN
                    + cur[MATCH_MIN..MATCH_MAX]
                        .iter()
                        .zip(ref_[MATCH_MIN..MATCH_MAX].iter())
                        .take_while(|(a, b)| a == b)
                        .count();

                outp.mark_backref(map_pos, copymask);
                outp.put_buf(&encode_backref(len, offset))?;
                pos += len;
                continue;
            }
        }

        outp.putc(inp[pos])?;
        pos += 1;
    }

    Ok(())
}

/// Compress the input into a preallocated buffer
///
/// Returns the compressed size on success.
/// If `outp` is too small to compress into, `inp.len()` is returned instead,
/// and the caller is expected to store the input uncompressed.
/// A buffer of [max_compressed_size](crate::max_compressed_size) bytes
/// is always large enough.
pub fn compress_to_buf(inp: &[u8], outp: &mut [u8]) -> usize {
    try_compress_to_buf(inp, outp).unwrap_or(inp.len())
}

/// Compress the input into a preallocated buffer
///
/// Like [compress_to_buf], except that running out of space is reported as an error
/// rather than by returning the input length.
pub fn try_compress_to_buf(inp: &[u8], outp: &mut [u8]) -> Result<usize, CompressError> {
    let mut outp: BufOutput = outp.into();
    compress_impl(inp, &mut outp)?;
    Ok(outp.pos)
}

#[cfg(feature = "alloc")]
/// Compress the input into a [Vec](alloc::vec::Vec)
///
/// This never falls back to storing the input,
/// so incompressible data will produce output larger than the input.
///
/// Returns the result on success, or an error otherwise
pub fn compress_to_vec(inp: &[u8]) -> Result<alloc::vec::Vec<u8>, CompressError> {
    let mut ret: VecOutput = alloc::vec::Vec::with_capacity(max_compressed_size(inp.len())).into();
    compress_impl(inp, &mut ret)?;
    Ok(ret.vec)
}
