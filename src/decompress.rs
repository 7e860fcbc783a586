use core::fmt;

use crate::format::*;
use crate::util::*;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Decompression errors
///
/// When any of these are returned, the bytes already written to the output
/// are left in place but must not be used.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecompressError {
    /// The input is malformed
    ///
    /// Either a backreference points before the start of the output,
    /// or the input ends in the middle of a token.
    BadData,
    /// The output buffer is too small to hold all of the decompressed data
    WouldOverflow,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::BadData => write!(f, "invalid compressed data"),
            DecompressError::WouldOverflow => write!(f, "output buffer was insufficient"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecompressError {}

/// Internal abstraction for the two different types of outputs
///
/// Unlike when compressing, nothing is written for a token that does not fit.
trait OutputSink {
    /// Number of bytes which can still be written
    fn remaining(&self) -> usize;
    /// Add a single literal byte to the output
    fn put_lit(&mut self, lit: u8) -> Result<(), DecompressError>;
    /// Add a backreference to the output
    ///
    /// An `offset` of 1 means the byte just written.
    ///
    /// Copy `len` bytes, which as usual for LZ77 may exceed `offset`.
    fn put_backref(&mut self, offset: usize, len: usize) -> Result<(), DecompressError>;
}

impl<'a> OutputSink for BufOutput<'a> {
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn put_lit(&mut self, lit: u8) -> Result<(), DecompressError> {
        if self.remaining() == 0 {
            return Err(DecompressError::WouldOverflow);
        }
        self.buf[self.pos] = lit;
        self.pos += 1;
        Ok(())
    }

    fn put_backref(&mut self, offset: usize, len: usize) -> Result<(), DecompressError> {
        if offset == 0 || offset > self.pos {
            return Err(DecompressError::BadData);
        }
        if len > self.remaining() {
            return Err(DecompressError::WouldOverflow);
        }

        // must go forwards one byte at a time, the ranges can overlap
        for i in self.pos..self.pos + len {
            self.buf[i] = self.buf[i - offset];
        }
        self.pos += len;

        Ok(())
    }
}

#[cfg(feature = "alloc")]
impl OutputSink for VecOutput {
    fn remaining(&self) -> usize {
        self.limit - self.vec.len()
    }

    fn put_lit(&mut self, lit: u8) -> Result<(), DecompressError> {
        if self.remaining() == 0 {
            return Err(DecompressError::WouldOverflow);
        }
        self.vec.push(lit);
        Ok(())
    }

    fn put_backref(&mut self, offset: usize, len: usize) -> Result<(), DecompressError> {
        let pos = self.vec.len();
        if offset == 0 || offset > pos {
            return Err(DecompressError::BadData);
        }
        if len > self.remaining() {
            return Err(DecompressError::WouldOverflow);
        }

        self.vec.reserve(len);
        for i in pos..pos + len {
            let b = self.vec[i - offset];
            self.vec.push(b);
        }

        Ok(())
    }
}

fn decompress_impl(mut inp: &[u8], outp: &mut impl OutputSink) -> Result<(), DecompressError> {
    let mut copymap = 0u8;
    let mut copymask: u8 = 1 << (NBBY - 1);

    while !inp.is_empty() {
        if outp.remaining() == 0 {
            return Err(DecompressError::WouldOverflow);
        }

        copymask = copymask.rotate_left(1);
        if copymask == 1 {
            let (&map, rest) = inp.split_first().ok_or(DecompressError::BadData)?;
            copymap = map;
            inp = rest;
        }

        if copymap & copymask != 0 {
            let Some((&[b0, b1], rest)) = inp.split_first_chunk::<2>() else {
                return Err(DecompressError::BadData);
            };
            inp = rest;
            let (len, offset) = decode_backref(b0, b1);
            outp.put_backref(offset, len)?;
        } else {
            let (&lit, rest) = inp.split_first().ok_or(DecompressError::BadData)?;
            inp = rest;
            outp.put_lit(lit)?;
        }
    }

    Ok(())
}

/// Decompress the input into a preallocated buffer
///
/// The buffer must be large enough for the entire decompressed output,
/// which means the caller needs to keep track of the original size.
///
/// Returns the decompressed size on success, or an error otherwise
pub fn decompress_to_buf(inp: &[u8], outp: &mut [u8]) -> Result<usize, DecompressError> {
    let mut outp: BufOutput = outp.into();
    decompress_impl(inp, &mut outp)?;
    Ok(outp.pos)
}

#[cfg(feature = "alloc")]
/// Decompress the input into a [Vec](alloc::vec::Vec)
///
/// Output longer than `max_len` is rejected with [DecompressError::WouldOverflow].
///
/// Returns the result on success, or an error otherwise
pub fn decompress_to_vec(
    inp: &[u8],
    max_len: usize,
) -> Result<alloc::vec::Vec<u8>, DecompressError> {
    // `max_len` is only a limit, every two input bytes yield at most MATCH_MAX output bytes
    let capacity = usize::min(max_len, inp.len().saturating_mul(MATCH_MAX / 2));
    let mut ret = VecOutput {
        vec: alloc::vec::Vec::with_capacity(capacity),
        limit: max_len,
    };
    decompress_impl(inp, &mut ret)?;
    Ok(ret.vec)
}
