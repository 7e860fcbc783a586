#[cfg(feature = "alloc")]
extern crate alloc;

/// Output into a caller-provided slice
pub struct BufOutput<'a> {
    pub pos: usize,
    pub buf: &'a mut [u8],
}
impl<'a> From<&'a mut [u8]> for BufOutput<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        Self { pos: 0, buf }
    }
}

/// Output into a growable [Vec](alloc::vec::Vec), which may not exceed `limit` bytes
#[cfg(feature = "alloc")]
pub struct VecOutput {
    pub vec: alloc::vec::Vec<u8>,
    pub limit: usize,
}
#[cfg(feature = "alloc")]
impl From<alloc::vec::Vec<u8>> for VecOutput {
    fn from(vec: alloc::vec::Vec<u8>) -> Self {
        Self {
            vec,
            limit: usize::MAX,
        }
    }
}
