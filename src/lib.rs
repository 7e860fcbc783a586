#![no_std]

mod compress;
mod decompress;
mod format;
mod util;

#[cfg(feature = "alloc")]
pub use compress::compress_to_vec;
pub use compress::{compress_to_buf, try_compress_to_buf, CompressError};
#[cfg(feature = "alloc")]
pub use decompress::decompress_to_vec;
pub use decompress::{decompress_to_buf, DecompressError};
pub use format::{
    max_compressed_size, LEMPEL_SIZE, MATCH_BITS, MATCH_MAX, MATCH_MIN, OFFSET_MASK,
};
