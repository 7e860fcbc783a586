#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // A bound-sized buffer must never fall back to raw storage.
    let mut compressed = vec![0u8; lzjb_rs::max_compressed_size(data.len())];
    let n = lzjb_rs::try_compress_to_buf(data, &mut compressed)
        .expect("compression into a bound-sized buffer fell back");
    assert_eq!(lzjb_rs::compress_to_vec(data).unwrap(), compressed[..n]);

    let mut recovered = vec![0u8; data.len()];
    let m = lzjb_rs::decompress_to_buf(&compressed[..n], &mut recovered)
        .expect("decompressing valid data failed");
    assert_eq!(m, data.len());
    assert_eq!(recovered, data);

    // One byte short must be reported, never truncated silently.
    if !data.is_empty() {
        let mut short = vec![0u8; data.len() - 1];
        assert_eq!(
            lzjb_rs::decompress_to_buf(&compressed[..n], &mut short),
            Err(lzjb_rs::DecompressError::WouldOverflow)
        );
    }

    // A tight buffer may fall back, but then it says so.
    let mut tight = vec![0u8; data.len()];
    let t = lzjb_rs::compress_to_buf(data, &mut tight);
    if t != data.len() {
        assert_eq!(tight[..t], compressed[..n]);
    }
});
