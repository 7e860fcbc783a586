use std::{
    env,
    error::Error,
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
};

use lzjb_rs::*;

#[cfg(feature = "std")]
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<OsString> = env::args_os().collect();

    if args.len() < 4 {
        println!(
            "Usage: {} c input output | d input output size",
            args[0].to_string_lossy()
        );
        return Ok(());
    }

    let mode = &args[1];
    let inp_fn = &args[2];
    let outp_fn = &args[3];

    let inp = std::fs::read(inp_fn)?;
    let outp;

    match mode.to_str() {
        Some("c") => {
            outp = compress_to_vec(&inp)?;
            // the stream does not record its own length
            eprintln!("{} -> {} bytes", inp.len(), outp.len());
        }
        Some("d") => {
            let Some(size) = args.get(4).and_then(|s| s.to_str()) else {
                println!("Decompression needs the original size");
                return Ok(());
            };
            outp = decompress_to_vec(&inp, size.parse()?)?;
        }
        _ => {
            println!("Invalid mode {}", mode.to_string_lossy());
            return Ok(());
        }
    }

    let mut outp_f = BufWriter::new(File::create(outp_fn)?);
    outp_f.write_all(&outp)?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("Demo requires std feature");
}
