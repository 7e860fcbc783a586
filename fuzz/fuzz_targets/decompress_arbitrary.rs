#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected here; what matters is no panics.

    {
        let mut dst = vec![0u8; 0];
        let _ = lzjb_rs::decompress_to_buf(data, &mut dst);
    }

    {
        let mut dst = vec![0u8; 4096];
        let _ = lzjb_rs::decompress_to_buf(data, &mut dst);
    }

    // Every 2 input bytes can expand to at most 66 output bytes.
    {
        let large = data.len().saturating_mul(33).min(1 << 20);
        let mut dst = vec![0u8; large];
        let from_buf = lzjb_rs::decompress_to_buf(data, &mut dst);
        let from_vec = lzjb_rs::decompress_to_vec(data, large);
        match (from_buf, from_vec) {
            (Ok(n), Ok(v)) => assert_eq!(dst[..n], v[..]),
            (Err(a), Err(b)) => assert_eq!(a, b),
            (a, b) => panic!("slice and vec decoders disagree: {a:?} vs {b:?}"),
        }
    }
});
